use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{catalog, config, user, watchlist};
use moviedb_core::CatalogError;
use moviedb_models::SortKey;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(about = "moviedb - browse a movie catalog and keep a personal watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Directory holding the catalog, user and watchlist stores
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also write logs to the daily-rotated log file
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit the movie catalog
    Catalog {
        #[command(subcommand)]
        cmd: CatalogCommands,
    },
    /// Register a new user (does not log in)
    Register {
        #[arg(long)]
        username: Option<String>,

        /// Password (if not provided, will prompt)
        #[arg(long)]
        password: Option<String>,
    },
    /// Check credentials and show a summary of the user's watchlist
    Login {
        #[arg(long)]
        username: Option<String>,

        /// Password (if not provided, will prompt)
        #[arg(long)]
        password: Option<String>,
    },
    /// Manage a user's watchlist (logs in first)
    Watchlist {
        #[arg(long)]
        username: Option<String>,

        /// Password (if not provided, will prompt)
        #[arg(long)]
        password: Option<String>,

        #[command(subcommand)]
        cmd: WatchlistCommands,
    },
    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List every movie
    List {
        /// Sort order (catalog order when omitted)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Show the first movie with this exact title
    Show { title: String },
    /// Add a movie
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        director: String,
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        /// Running time in minutes
        #[arg(long, allow_negative_numbers = true)]
        running_time: i32,
        /// Poster image path
        #[arg(long)]
        photo: Option<String>,
    },
    /// Remove the movie with this title, director and year
    Remove {
        #[arg(long)]
        title: String,
        #[arg(long)]
        director: String,
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },
    /// Add the starter films that are not in the catalog yet
    Seed,
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// List the watchlist in order
    List,
    /// Add the catalog movie with this title
    Add { title: String },
    /// Remove the first watchlist entry with this title
    Remove { title: String },
    /// Total running time of the watchlist
    Total,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show config file location and resolved store paths
    Show,
    /// Write a default config file if none exists
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Title,
    Director,
    Year,
    RunningTime,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Director => SortKey::Director,
            SortArg::Year => SortKey::Year,
            SortArg::RunningTime => SortKey::RunningTime,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let ctx = commands::Context::load(cli.data_dir)?;

    let log_file = cli.log_file.then(|| ctx.paths.log_file());
    logging::init_logging(cli.verbose, cli.quiet, log_file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Catalog { cmd } => catalog::run_catalog(cmd, &ctx, &output),
        Commands::Register { username, password } => {
            user::run_register(username, password, &ctx, &output)
        }
        Commands::Login { username, password } => {
            user::run_login(username, password, &ctx, &output)
        }
        Commands::Watchlist {
            username,
            password,
            cmd,
        } => watchlist::run_watchlist(username, password, cmd, &ctx, &output),
        Commands::Config { cmd } => config::run_config(cmd, &ctx, &output),
    };

    if let Err(report) = &result {
        if let Some(msg) = user_message(report) {
            output.error(msg);
            std::process::exit(1);
        }
    }
    result
}

/// Validation, duplicate, not-found and login failures are plain messages for
/// the user; anything else (persistence included) gets the full report.
fn user_message(report: &color_eyre::Report) -> Option<String> {
    if let Some(err) = report.downcast_ref::<CatalogError>() {
        return (!err.is_persistence()).then(|| err.to_string());
    }
    report
        .downcast_ref::<user::LoginFailed>()
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;

    #[test]
    fn test_login_failure_is_plain_message() {
        let report = color_eyre::Report::new(user::LoginFailed);
        assert_eq!(
            user_message(&report).as_deref(),
            Some("Invalid username or password")
        );
    }

    #[test]
    fn test_catalog_errors_are_plain_messages() {
        let report = color_eyre::Report::new(CatalogError::NotFound("Alien".to_string()));
        assert!(user_message(&report).is_some());
    }

    #[test]
    fn test_other_errors_keep_full_report() {
        assert!(user_message(&eyre!("disk on fire")).is_none());
    }
}
