//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use reciclo_domain::Result as DomainResult;
use tracing::debug;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn unread_count(ctx: &AppContext) -> DomainResult<usize> {
///     execute_command("notifications::unread_count", || async {
///         Ok(ctx.ledger.unread_count())
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    log_command_execution(command_name, elapsed, result.is_ok());
    if let Err(err) = &result {
        debug!(command = command_name, error_type = error_label(err), error = %err, "command failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use reciclo_domain::RecicloError;

    use super::*;

    #[tokio::test]
    async fn passes_through_results() {
        let ok = execute_command("test::ok", || async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: DomainResult<()> = execute_command("test::err", || async {
            Err(RecicloError::InvalidInput("nope".into()))
        })
        .await;
        assert_eq!(err, Err(RecicloError::InvalidInput("nope".into())));
    }
}
