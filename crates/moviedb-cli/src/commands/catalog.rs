use super::Context;
use crate::output::{Output, OutputFormat};
use crate::CatalogCommands;
use color_eyre::Result;
use moviedb_core::{default_catalog, CatalogError, MovieDatabase};
use moviedb_models::Movie;
use serde_json::json;

pub fn run_catalog(cmd: CatalogCommands, ctx: &Context, output: &Output) -> Result<()> {
    let mut library = ctx.open_library()?;

    match cmd {
        CatalogCommands::List { sort } => {
            let catalog = library.catalog();
            let movies = match sort {
                Some(sort) => catalog.sorted(sort.into()),
                None => catalog.movies().to_vec(),
            };
            output.movies(&movies);
            output.info(format!(
                "{} movies, {} minutes in total",
                movies.len(),
                MovieDatabase::total_watch_time(&movies)
            ));
        }
        CatalogCommands::Show { title } => {
            let movie = library
                .catalog()
                .get_movie(&title)
                .ok_or(CatalogError::NotFound(title))?;
            output.movies(std::slice::from_ref(movie));
            if let Some(photo) = movie.photo_path() {
                output.info(format!("Poster: {}", photo));
            }
        }
        CatalogCommands::Add {
            title,
            director,
            year,
            running_time,
            photo,
        } => {
            let movie = Movie::new(title, director, year, running_time, photo)
                .map_err(CatalogError::from)?;
            let line = movie.to_string();
            library.catalog_mut().add_movie(movie)?;
            output.success(format!("Added {}", line));
        }
        CatalogCommands::Remove {
            title,
            director,
            year,
        } => {
            // Running time is not part of a movie's identity, so any valid value matches
            let target = Movie::new(title, director, year, 0, None).map_err(CatalogError::from)?;
            let removed = library.catalog_mut().remove_movie(&target)?;
            output.success(format!("Removed {}", removed));
        }
        CatalogCommands::Seed => {
            let added = library.catalog_mut().seed(default_catalog().map_err(CatalogError::from)?)?;
            if added == 0 {
                output.info("Catalog already contains every starter film");
            } else {
                output.success(format!("Added {} starter films", added));
            }
            if output.format() != OutputFormat::Human {
                output.json(&json!({ "added": added, "total": library.catalog().len() }));
            }
        }
    }

    Ok(())
}
