//! Startup, restart and session restore across contexts

mod support;

use reciclo_domain::RecicloError;
use support::{registration, TestApp};

#[tokio::test]
async fn fresh_database_starts_logged_out() {
    let app = TestApp::new().await;

    assert_eq!(app.ctx.restore_session().await.unwrap(), None);
    assert!(reciclo_lib::current_profile(&app.ctx).await.unwrap().is_none());
    app.ctx.db.health_check().expect("database should answer");
}

#[tokio::test]
async fn session_and_stats_survive_restart() {
    let app = TestApp::new().await;
    let profile = reciclo_lib::register(&app.ctx, registration()).await.unwrap();
    reciclo_lib::record_action(&app.ctx, "glass", 4).await.unwrap();

    let restarted = app.reopen().await;
    let restored = restarted.restore_session().await.unwrap().expect("session persisted");
    assert_eq!(restored.id, profile.id);

    let stats = reciclo_lib::get_current_stats(&restarted).await.unwrap();
    assert_eq!(stats.total_points, 60);
    assert_eq!(stats.total_bottles, 4);
    assert_eq!(stats.current_level, 1);
}

#[tokio::test]
async fn require_profile_without_session_fails() {
    let app = TestApp::new().await;

    let err = app.ctx.require_profile().await.unwrap_err();
    assert!(matches!(err, RecicloError::ProfileNotFound(_)));
}

#[tokio::test]
async fn logout_is_remembered_after_restart() {
    let app = TestApp::new().await;
    reciclo_lib::register(&app.ctx, registration()).await.unwrap();
    reciclo_lib::logout(&app.ctx).await.unwrap();

    let restarted = app.reopen().await;
    assert_eq!(restarted.restore_session().await.unwrap(), None);
}
