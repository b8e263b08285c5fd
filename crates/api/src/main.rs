//! Reciclo - recycling rewards from the command line
//!
//! Drives the application commands against a local database.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reciclo_domain::{Config, PreferencesUpdate, QuietHours, Registration};
use reciclo_lib::AppContext;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "reciclo")]
#[command(about = "Recycle, earn points, level up")]
#[command(version)]
struct Cli {
    /// Path to a TOML or JSON config file (defaults to env vars, then
    /// reciclo.toml / config.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the database path
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        objective: Option<String>,
    },

    /// Log in with an email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log out and reset the profile's stats
    Logout,

    /// Show the logged-in profile
    Whoami,

    /// Record recycled items (pet, glass, paper, metal, plastic)
    Record {
        material: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Show points, level, rank and achievements
    Stats,

    /// Report a milestone tracked elsewhere (visited_collection_points,
    /// distinct_collection_points, top_ten_ranking)
    Milestone { kind: String },

    /// Rate a password the way the sign-up form does
    Strength { password: String },

    /// Notification preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print current preferences
    Show,

    /// Change one or more preferences
    Set {
        #[arg(long)]
        push: Option<bool>,
        #[arg(long)]
        email: Option<bool>,
        #[arg(long)]
        sms: Option<bool>,
        #[arg(long)]
        collect_reminders: Option<bool>,
        #[arg(long)]
        challenge_updates: Option<bool>,
        #[arg(long)]
        community_activity: Option<bool>,
        #[arg(long)]
        promotions: Option<bool>,
        #[arg(long)]
        educational_content: Option<bool>,
        #[arg(long)]
        quiet_hours: Option<bool>,
        /// Quiet hours start, HH:MM
        #[arg(long)]
        quiet_start: Option<String>,
        /// Quiet hours end, HH:MM
        #[arg(long)]
        quiet_end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let mut config = load_config(cli.config)?;
    if let Some(db) = cli.db {
        config.storage.path = db.to_string_lossy().into_owned();
    }

    let ctx = AppContext::new(config).await.context("failed to open Reciclo storage")?;
    ctx.restore_session().await.context("failed to restore session")?;

    run(&ctx, cli.command).await
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => reciclo_infra::config::load_from_file(Some(path.clone()))
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(reciclo_infra::config::load_or_default()),
    }
}

async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Register { name, email, password, confirm_password, phone, objective } => {
            let registration =
                Registration { name, email, phone, password, confirm_password, objective };
            let profile = reciclo_lib::register(ctx, registration).await?;
            println!("Bem-vindo(a), {}! ({})", profile.name, profile.id);
        }
        Commands::Login { email, password } => {
            let profile = reciclo_lib::login(ctx, &email, &password).await?;
            println!("Login realizado: {} <{}>", profile.name, profile.email);
        }
        Commands::Logout => {
            reciclo_lib::logout(ctx).await?;
            println!("Logout realizado.");
        }
        Commands::Whoami => match reciclo_lib::current_profile(ctx).await? {
            Some(profile) => print_json(&profile)?,
            None => println!("Nenhuma sessão ativa."),
        },
        Commands::Record { material, count } => {
            let outcome = reciclo_lib::record_action(ctx, &material, count).await?;
            println!("{}", outcome.summary.message);
            for notification in reciclo_lib::list_notifications(ctx).await?.iter().rev() {
                println!("{} {} - {}", notification.icon, notification.title, notification.message);
            }
            print_json(&outcome.stats)?;
        }
        Commands::Stats => {
            let stats = reciclo_lib::get_current_stats(ctx).await?;
            print_json(&stats)?;
        }
        Commands::Milestone { kind } => {
            let update = reciclo_lib::record_milestone(ctx, &kind).await?;
            for id in &update.newly_earned {
                println!("{} {}", id.icon(), id.title());
            }
            print_json(&update.stats)?;
        }
        Commands::Strength { password } => {
            let strength = reciclo_lib::password_strength(&password);
            println!("{} ({}/5)", strength.label, strength.score);
        }
        Commands::Prefs { action: PrefsAction::Show } => {
            print_json(&reciclo_lib::get_preferences(ctx).await?)?;
        }
        Commands::Prefs {
            action:
                PrefsAction::Set {
                    push,
                    email,
                    sms,
                    collect_reminders,
                    challenge_updates,
                    community_activity,
                    promotions,
                    educational_content,
                    quiet_hours,
                    quiet_start,
                    quiet_end,
                },
        } => {
            let quiet_hours = if quiet_hours.is_some() || quiet_start.is_some() || quiet_end.is_some() {
                let current = reciclo_lib::get_preferences(ctx).await?.quiet_hours;
                Some(QuietHours {
                    enabled: quiet_hours.unwrap_or(current.enabled),
                    start: quiet_start.unwrap_or(current.start),
                    end: quiet_end.unwrap_or(current.end),
                })
            } else {
                None
            };

            let update = PreferencesUpdate {
                push,
                email,
                sms,
                collect_reminders,
                challenge_updates,
                community_activity,
                promotions,
                educational_content,
                quiet_hours,
            };
            print_json(&reciclo_lib::update_preferences(ctx, update).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_negative_count() {
        let cli = Cli::try_parse_from(["reciclo", "record", "pet", "-2"]).unwrap();
        match cli.command {
            Commands::Record { material, count } => {
                assert_eq!(material, "pet");
                assert_eq!(count, -2);
            }
            _ => panic!("expected record subcommand"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["reciclo", "stats", "--verbose", "--db", "x.db"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert!(matches!(cli.command, Commands::Stats));
    }
}
