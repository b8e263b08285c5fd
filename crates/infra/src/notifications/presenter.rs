//! Toast presenter that writes high-priority notifications to the log

use reciclo_core::NotificationPresenter;
use reciclo_domain::NotificationRecord;
use tracing::info;

/// Presenter used when no UI is attached
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPresenter;

impl NotificationPresenter for TracingPresenter {
    fn present(&self, record: &NotificationRecord) {
        info!(
            target: "reciclo::toast",
            id = %record.id,
            kind = %record.kind,
            icon = %record.icon,
            title = %record.title,
            message = %record.message,
            "notification"
        );
    }
}
