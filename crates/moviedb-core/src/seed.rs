use moviedb_models::{Movie, ValidationError};

// (title, director, year, running time, poster)
const DEFAULT_FILMS: &[(&str, &str, i32, i32, &str)] = &[
    ("The Godfather", "Francis Ford Coppola", 1972, 175, "posters/GodFather.jpg"),
    ("Interstellar", "Christopher Nolan", 2014, 169, "posters/InterStellar.jpg"),
    ("Titanic", "James Cameron", 1997, 195, "posters/Titanic.jpg"),
    ("The Shawshank Redemption", "Frank Darabont", 1994, 142, "posters/Shawshank.jpg"),
    ("The Dark Knight", "Christopher Nolan", 2008, 152, "posters/DarkKnight.jpg"),
    ("Jurassic Park", "Steven Spielberg", 1993, 127, "posters/JurassicPark.jpg"),
    ("The Matrix", "The Wachowskis", 1999, 136, "posters/TheMatrix.jpg"),
    ("Avatar", "James Cameron", 2009, 162, "posters/Avatar.jpg"),
    (
        "The Lord of the Rings: The Fellowship of the Ring",
        "Peter Jackson",
        2001,
        178,
        "posters/LOTRFellowship.jpg",
    ),
    ("Inception", "Christopher Nolan", 2010, 148, "posters/Inception.jpg"),
];

/// The starter catalog offered on first run.
pub fn default_catalog() -> Result<Vec<Movie>, ValidationError> {
    DEFAULT_FILMS
        .iter()
        .map(|&(title, director, year, running_time, poster)| {
            Movie::new(title, director, year, running_time, Some(poster.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_is_valid_and_unique() {
        let movies = default_catalog().unwrap();
        assert_eq!(movies.len(), 10);

        let unique: HashSet<&Movie> = movies.iter().collect();
        assert_eq!(unique.len(), movies.len());
        assert_eq!(movies[0].to_string(), "The Godfather 1972 175");
    }
}
