//! Handler for the navigation bar.

use axum::extract::Query;
use axum::Json;
use projectwatch_core::navigation::{MenuEvent, MobileMenu, NavBar};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::query::NavigationParams;
use crate::response::DataResponse;

/// GET /api/v1/navigation?path=&menu=&event=
///
/// Builds the bar for `path`, applying `event` to the `menu` state first.
pub async fn navbar(
    user: MaybeAuthUser,
    Query(params): Query<NavigationParams>,
) -> AppResult<Json<DataResponse<NavBar>>> {
    let menu = match params.menu.as_deref() {
        None => MobileMenu::default(),
        Some("open") => MobileMenu::Open,
        Some("closed") => MobileMenu::Closed,
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown menu state '{other}'")));
        }
    };
    let menu = match params.event.as_deref() {
        None => menu,
        Some("toggle") => menu.apply(MenuEvent::Toggle),
        Some("select_item") => menu.apply(MenuEvent::SelectItem),
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown menu event '{other}'")));
        }
    };

    let path = params.path.as_deref().unwrap_or("/");
    Ok(Json(DataResponse {
        data: NavBar::build(path, user.session(), menu),
    }))
}
