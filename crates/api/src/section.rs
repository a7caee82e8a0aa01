//! Page sections that degrade instead of failing the page.
//!
//! Every query behind a page section passes through [`degrade`]: a failure
//! is logged and replaced by an empty value, and the section is flagged so
//! the client can show a notice. The page itself still renders with 200.

use std::fmt::Display;

use projectwatch_core::error::CoreError;
use serde::Serialize;

/// One independently-fetched part of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub data: T,
    /// Set once the section's query has completed, successfully or not.
    pub loaded: bool,
    /// The query failed and `data` is an empty placeholder.
    pub degraded: bool,
}

impl<T> Section<T> {
    pub fn ready(data: T) -> Self {
        Section {
            data,
            loaded: true,
            degraded: false,
        }
    }

    /// Transform the data, keeping the flags.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Section<U> {
        Section {
            data: f(self.data),
            loaded: self.loaded,
            degraded: self.degraded,
        }
    }
}

/// Unwrap a section query result, substituting `T::default()` on failure.
pub fn degrade<T, E>(section: &'static str, result: Result<T, E>) -> Section<T>
where
    T: Default,
    E: Display,
{
    match result {
        Ok(data) => Section::ready(data),
        Err(e) => {
            tracing::warn!(error = %e, section, "Section query failed, rendering it empty");
            Section {
                data: T::default(),
                loaded: true,
                degraded: true,
            }
        }
    }
}

/// Convert fetched rows into core records, failing on the first bad row.
pub fn convert_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, CoreError>
where
    T: TryFrom<R, Error = CoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}
