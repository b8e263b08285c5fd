//! Login, registration and profile commands

use reciclo_core::PasswordStrength;
use reciclo_domain::{Credentials, ProfileUpdate, Registration, Result as DomainResult, UserProfile};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> DomainResult<UserProfile> {
    let credentials = Credentials { email: email.to_string(), password: password.to_string() };
    execute_command("session::login", || ctx.session.login(credentials)).await
}

pub async fn register(ctx: &AppContext, registration: Registration) -> DomainResult<UserProfile> {
    execute_command("session::register", || ctx.session.register(registration)).await
}

pub async fn logout(ctx: &AppContext) -> DomainResult<()> {
    execute_command("session::logout", || ctx.session.logout()).await
}

pub async fn update_profile(ctx: &AppContext, update: ProfileUpdate) -> DomainResult<UserProfile> {
    execute_command("session::update_profile", || ctx.session.update_profile(update)).await
}

pub async fn current_profile(ctx: &AppContext) -> DomainResult<Option<UserProfile>> {
    execute_command("session::current_profile", || async { Ok(ctx.session.current_profile().await) })
        .await
}

/// Strength meter shown while the user types a password
pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength::evaluate(password)
}
