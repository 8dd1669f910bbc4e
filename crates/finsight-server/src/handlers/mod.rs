//! HTTP request handlers organized by domain

pub mod accounts;
pub mod dashboard;
pub mod insights;
pub mod transactions;

// Re-export all handlers for use in the router
pub use accounts::*;
pub use dashboard::*;
pub use insights::*;
pub use transactions::*;

use crate::AppError;
use finsight_core::Error as CoreError;

/// Map a core error onto the right HTTP status.
///
/// Data errors are client-visible validation failures (422); everything
/// else is sanitized to a generic 500.
pub(crate) fn core_error(err: CoreError) -> AppError {
    match err {
        CoreError::InvalidData(msg) => AppError::unprocessable(&msg),
        CoreError::NotFound(msg) => AppError::not_found(&msg),
        other => AppError::from(other),
    }
}
