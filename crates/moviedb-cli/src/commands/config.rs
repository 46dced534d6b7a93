use super::Context;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviedb_config::Config;
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, ctx: &Context, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::Init { force } => init_config(ctx, force, output),
    }
}

fn show_config(ctx: &Context, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    let storage = ctx.storage_paths();

    match output.format() {
        OutputFormat::Human => {
            let origin = if config_file.exists() { "" } else { " (not found, using defaults)" };
            output.info(format!("Config file:   {}{}", config_file.display(), origin));
            output.info(format!("Catalog:       {}", storage.catalog_file.display()));
            output.info(format!("Users:         {}", storage.users_file.display()));
            output.info(format!("Watchlists:    {}", storage.watchlist_dir.display()));
            output.info(format!(
                "Seed on first run: {}",
                ctx.config.catalog.seed_on_first_run
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!({
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "catalog_file": storage.catalog_file.display().to_string(),
            "users_file": storage.users_file.display().to_string(),
            "watchlist_dir": storage.watchlist_dir.display().to_string(),
            "seed_on_first_run": ctx.config.catalog.seed_on_first_run,
        })),
    }

    Ok(())
}

fn init_config(ctx: &Context, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create moviedb directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default config to {}", config_file.display()));
    Ok(())
}
