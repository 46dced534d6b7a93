use super::user::login;
use super::Context;
use crate::output::{Output, OutputFormat};
use crate::WatchlistCommands;
use color_eyre::Result;
use moviedb_core::CatalogError;
use serde_json::json;

pub fn run_watchlist(
    username: Option<String>,
    password: Option<String>,
    cmd: WatchlistCommands,
    ctx: &Context,
    output: &Output,
) -> Result<()> {
    let mut session = login(ctx, username, password)?;
    let library = ctx.open_library()?;

    match cmd {
        WatchlistCommands::List => match output.format() {
            OutputFormat::Human => {
                if session.watchlist().is_empty() {
                    output.info("Watchlist is empty");
                }
                for line in session.display_watchlist() {
                    output.info(line);
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => output.movies(session.watchlist()),
        },
        WatchlistCommands::Add { title } => {
            let movie = library
                .catalog()
                .get_movie(&title)
                .cloned()
                .ok_or(CatalogError::NotFound(title))?;
            let line = movie.to_string();
            session.add_to_watchlist(movie)?;
            output.success(format!("Added to watchlist: {}", line));
        }
        WatchlistCommands::Remove { title } => {
            let movie = session
                .watchlist()
                .iter()
                .find(|m| m.title() == title)
                .cloned()
                .ok_or(CatalogError::NotFound(title))?;
            session.remove_from_watchlist(&movie)?;
            output.success(format!("Removed from watchlist: {}", movie));
        }
        WatchlistCommands::Total => {
            let minutes = session.total_watch_time();
            match output.format() {
                OutputFormat::Human => output.info(format!(
                    "{} movies, {} minutes ({}h {:02}m)",
                    session.watchlist().len(),
                    minutes,
                    minutes / 60,
                    minutes % 60
                )),
                OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!({
                    "movies": session.watchlist().len(),
                    "total_minutes": minutes,
                })),
            }
        }
    }

    Ok(())
}
