//! Stats and recycling-action commands

use reciclo_core::{RecordOutcome, StatsUpdate};
use reciclo_domain::{GamificationStats, Milestone, RecicloError, Result as DomainResult};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Record `count` items of `material` for the active profile.
pub async fn record_action(
    ctx: &AppContext,
    material: &str,
    count: i64,
) -> DomainResult<RecordOutcome> {
    execute_command("gamification::record_action", || ctx.intake.record(material, count)).await
}

/// Stats of `profile_id`, which must be the active profile.
pub async fn get_stats(ctx: &AppContext, profile_id: &str) -> DomainResult<GamificationStats> {
    execute_command("gamification::get_stats", || ctx.stats.get_stats(profile_id)).await
}

/// Stats of whoever is logged in
pub async fn get_current_stats(ctx: &AppContext) -> DomainResult<GamificationStats> {
    execute_command("gamification::get_current_stats", || async {
        let profile = ctx.require_profile().await?;
        ctx.stats.get_stats(&profile.id).await
    })
    .await
}

/// Report an externally tracked milestone (`visited_collection_points`,
/// `distinct_collection_points`, `top_ten_ranking`).
pub async fn record_milestone(ctx: &AppContext, milestone: &str) -> DomainResult<StatsUpdate> {
    execute_command("gamification::record_milestone", || async {
        let milestone: Milestone = milestone.parse().map_err(RecicloError::InvalidInput)?;
        ctx.stats.record_milestone(milestone).await
    })
    .await
}
