//! Handlers for the `/funds` resource.

use axum::extract::State;
use axum::Json;
use projectwatch_core::views::ledger::{LedgerRecord, LedgerView};
use projectwatch_db::repositories::FundsLedgerRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireOfficer;
use crate::response::DataResponse;
use crate::section::convert_rows;
use crate::state::AppState;

/// GET /api/v1/funds/ledger
///
/// Every ledger entry, newest first, with totals per fund status.
pub async fn ledger(
    State(state): State<AppState>,
    RequireOfficer(_officer): RequireOfficer,
) -> AppResult<Json<DataResponse<LedgerView>>> {
    let rows = FundsLedgerRepo::list_with_projects(&state.pool).await?;
    let records: Vec<LedgerRecord> = convert_rows(rows)?;
    Ok(Json(DataResponse {
        data: LedgerView::build(records, state.config.currency_locale),
    }))
}
