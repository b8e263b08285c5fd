//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use reciclo_domain::RecicloError;
use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RecicloError);

impl From<InfraError> for RecicloError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RecicloError> for InfraError {
    fn from(value: RecicloError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRecicloError {
    fn into_reciclo(self) -> RecicloError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → RecicloError */
/* -------------------------------------------------------------------------- */

impl IntoRecicloError for SqlError {
    fn into_reciclo(self) -> RecicloError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => RecicloError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        RecicloError::Database("database is locked".into())
                    }
                    ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt => {
                        RecicloError::Database(format!("storage file is not usable: {message}"))
                    }
                    ErrorCode::ReadOnly => RecicloError::Database("database is read-only".into()),
                    _ => RecicloError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                RecicloError::MalformedPersistedState(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                RecicloError::MalformedPersistedState(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                RecicloError::MalformedPersistedState("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => RecicloError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => RecicloError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_reciclo())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → RecicloError */
/* -------------------------------------------------------------------------- */

impl IntoRecicloError for PoolError {
    fn into_reciclo(self) -> RecicloError {
        RecicloError::Database(format!("failed to acquire connection: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_reciclo())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → RecicloError */
/* -------------------------------------------------------------------------- */

impl IntoRecicloError for JsonError {
    fn into_reciclo(self) -> RecicloError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Syntax | Category::Data | Category::Eof => {
                RecicloError::MalformedPersistedState(self.to_string())
            }
            Category::Io => RecicloError::Internal(format!("json i/o failure: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_reciclo())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → RecicloError */
/* -------------------------------------------------------------------------- */

impl IntoRecicloError for JoinError {
    fn into_reciclo(self) -> RecicloError {
        if self.is_cancelled() {
            RecicloError::Internal("storage task was cancelled".into())
        } else {
            RecicloError::Internal(format!("storage task panicked: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_reciclo())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
