//! Inbox and preference commands

mod support;

use reciclo_domain::{
    NewNotification, NotificationPriority, NotificationType, PreferencesUpdate, QuietHours,
    RecicloError,
};
use support::{registration, TestApp};

fn community_post() -> NewNotification {
    NewNotification {
        kind: NotificationType::Community,
        title: "Novo ponto de coleta".into(),
        message: "Um ponto de coleta abriu perto de você".into(),
        icon: None,
        priority: NotificationPriority::Low,
        action_url: None,
    }
}

#[tokio::test]
async fn inbox_lifecycle() {
    let app = TestApp::new().await;

    let first = reciclo_lib::add_notification(&app.ctx, community_post()).await.unwrap();
    let second = reciclo_lib::schedule_reminder(&app.ctx, "daily", "18:00").await.unwrap();

    let listed = reciclo_lib::list_notifications(&app.ctx).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id, "newest first");
    assert_eq!(reciclo_lib::unread_count(&app.ctx).await.unwrap(), 2);

    assert!(reciclo_lib::mark_as_read(&app.ctx, &first.id).await.unwrap());
    assert!(!reciclo_lib::mark_as_read(&app.ctx, "missing").await.unwrap());
    assert_eq!(reciclo_lib::unread_count(&app.ctx).await.unwrap(), 1);

    assert_eq!(reciclo_lib::mark_all_as_read(&app.ctx).await.unwrap(), 1);
    assert!(reciclo_lib::delete_notification(&app.ctx, &first.id).await.unwrap());
    assert_eq!(reciclo_lib::clear_notifications(&app.ctx).await.unwrap(), 1);
    assert!(reciclo_lib::list_notifications(&app.ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_reminder_kind_is_invalid_input() {
    let app = TestApp::new().await;

    let err = reciclo_lib::schedule_reminder(&app.ctx, "hourly", "08:00").await.unwrap_err();
    assert!(matches!(err, RecicloError::InvalidInput(_)));
}

#[tokio::test]
async fn preferences_persist_across_restart() {
    let app = TestApp::new().await;
    reciclo_lib::register(&app.ctx, registration()).await.unwrap();

    let update = PreferencesUpdate {
        sms: Some(true),
        promotions: Some(true),
        quiet_hours: Some(QuietHours { enabled: true, start: "23:00".into(), end: "06:30".into() }),
        ..PreferencesUpdate::default()
    };
    let prefs = reciclo_lib::update_preferences(&app.ctx, update).await.unwrap();
    assert!(prefs.sms);
    assert!(prefs.push, "untouched fields keep their value");

    let restarted = app.reopen().await;
    let reloaded = reciclo_lib::get_preferences(&restarted).await.unwrap();
    assert_eq!(reloaded, prefs);
}

#[tokio::test]
async fn malformed_quiet_hours_are_rejected() {
    let app = TestApp::new().await;
    let before = reciclo_lib::get_preferences(&app.ctx).await.unwrap();

    let update = PreferencesUpdate {
        quiet_hours: Some(QuietHours { enabled: true, start: "25:00".into(), end: "07:00".into() }),
        ..PreferencesUpdate::default()
    };
    let err = reciclo_lib::update_preferences(&app.ctx, update).await.unwrap_err();
    assert!(matches!(err, RecicloError::InvalidInput(_)));
    assert_eq!(reciclo_lib::get_preferences(&app.ctx).await.unwrap(), before);
}
