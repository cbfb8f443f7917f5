//! Shared mapping from Diesel and pool errors to repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool failures to a repository connection error.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepositoryError::connection(message)
}

/// Map Diesel failures, preserving the violated constraint name for unique
/// violations so services can translate them into domain conflicts.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let constraint = info.constraint_name().unwrap_or("unknown").to_owned();
            debug!(constraint, "unique constraint rejected the write");
            RepositoryError::unique_violation(constraint)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            RepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "database error");
            RepositoryError::query("database error")
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        other => {
            debug!(error = %other, "diesel operation failed");
            RepositoryError::query("database error")
        }
    }
}
