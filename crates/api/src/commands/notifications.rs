//! Notification inbox and preference commands

use reciclo_domain::{
    NewNotification, NotificationPreferences, NotificationRecord, PreferencesUpdate, RecicloError,
    ReminderKind, Result as DomainResult,
};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn add_notification(
    ctx: &AppContext,
    notification: NewNotification,
) -> DomainResult<NotificationRecord> {
    execute_command("notifications::add", || async { Ok(ctx.ledger.add(notification)) }).await
}

/// Newest first
pub async fn list_notifications(ctx: &AppContext) -> DomainResult<Vec<NotificationRecord>> {
    execute_command("notifications::list", || async { Ok(ctx.ledger.list()) }).await
}

pub async fn unread_count(ctx: &AppContext) -> DomainResult<usize> {
    execute_command("notifications::unread_count", || async { Ok(ctx.ledger.unread_count()) }).await
}

/// Returns whether a notification with `id` existed
pub async fn mark_as_read(ctx: &AppContext, id: &str) -> DomainResult<bool> {
    execute_command("notifications::mark_as_read", || async { Ok(ctx.ledger.mark_as_read(id)) }).await
}

pub async fn mark_all_as_read(ctx: &AppContext) -> DomainResult<usize> {
    execute_command("notifications::mark_all_as_read", || async { Ok(ctx.ledger.mark_all_as_read()) })
        .await
}

pub async fn delete_notification(ctx: &AppContext, id: &str) -> DomainResult<bool> {
    execute_command("notifications::delete", || async { Ok(ctx.ledger.delete(id)) }).await
}

pub async fn clear_notifications(ctx: &AppContext) -> DomainResult<usize> {
    execute_command("notifications::clear_all", || async { Ok(ctx.ledger.clear_all()) }).await
}

pub async fn schedule_reminder(
    ctx: &AppContext,
    kind: &str,
    time: &str,
) -> DomainResult<NotificationRecord> {
    execute_command("notifications::schedule_reminder", || async {
        let kind: ReminderKind = kind.parse().map_err(RecicloError::InvalidInput)?;
        Ok::<_, RecicloError>(ctx.ledger.schedule_reminder(kind, time))
    })
    .await
}

pub async fn get_preferences(ctx: &AppContext) -> DomainResult<NotificationPreferences> {
    execute_command("notifications::get_preferences", || async { Ok(ctx.ledger.preferences().await) })
        .await
}

pub async fn update_preferences(
    ctx: &AppContext,
    update: PreferencesUpdate,
) -> DomainResult<NotificationPreferences> {
    execute_command("notifications::update_preferences", || ctx.ledger.update_preferences(update))
        .await
}
