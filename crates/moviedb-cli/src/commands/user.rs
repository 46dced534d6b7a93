use super::prompts::{password_or_prompt, value_or_prompt};
use super::Context;
use crate::output::Output;
use color_eyre::Result;
use moviedb_core::Session;

/// A rejected login. Does not say whether the username or the password was wrong.
#[derive(Debug, thiserror::Error)]
#[error("Invalid username or password")]
pub struct LoginFailed;

pub fn run_register(
    username: Option<String>,
    password: Option<String>,
    ctx: &Context,
    output: &Output,
) -> Result<()> {
    let (users, _) = ctx.account_stores();
    let username = value_or_prompt(username, "Username")?;
    let password = password_or_prompt(password)?;

    let user = users.register(Some(&username), Some(&password))?;
    output.success(format!("Registration successful: {}", user.username()));
    Ok(())
}

pub fn run_login(
    username: Option<String>,
    password: Option<String>,
    ctx: &Context,
    output: &Output,
) -> Result<()> {
    let session = login(ctx, username, password)?;
    output.success(format!("Logged in as {}", session.user().username()));
    output.info(format!(
        "Watchlist: {} movies, {} minutes",
        session.watchlist().len(),
        session.total_watch_time()
    ));
    Ok(())
}

/// Log in for a single command, prompting for whatever was not given.
pub fn login(ctx: &Context, username: Option<String>, password: Option<String>) -> Result<Session> {
    let username = value_or_prompt(username, "Username")?;
    let password = password_or_prompt(password)?;

    let (users, watchlists) = ctx.account_stores();
    Session::open(&users, &watchlists, &username, &password)?.ok_or_else(|| LoginFailed.into())
}
