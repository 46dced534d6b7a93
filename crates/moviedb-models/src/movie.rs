use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Earliest accepted release year (first public film screenings).
pub const MIN_YEAR: i32 = 1895;
/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2023;

/// A catalog entry.
///
/// Year and running time are validated on construction, on every setter call and
/// when deserialized. Two movies are equal when title, director and year match;
/// running time and photo path are not part of a movie's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MovieRecord", into = "MovieRecord")]
pub struct Movie {
    title: String,
    director: Option<String>,
    year: i32,
    running_time: i32,
    photo_path: Option<String>,
}

/// On-disk shape of a [`Movie`]; converted through the validating constructor.
#[derive(Serialize, Deserialize)]
struct MovieRecord {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    director: Option<String>,
    year: i32,
    running_time: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photo_path: Option<String>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        running_time: i32,
        photo_path: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_year(year)?;
        validate_running_time(running_time)?;
        Ok(Self {
            title: title.into(),
            director: Some(director.into()),
            year,
            running_time,
            photo_path,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `None` only for movies built from [`Movie::default`] that never had a director set.
    pub fn director(&self) -> Option<&str> {
        self.director.as_deref()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Running time in minutes.
    pub fn running_time(&self) -> i32 {
        self.running_time
    }

    pub fn photo_path(&self) -> Option<&str> {
        self.photo_path.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_director(&mut self, director: impl Into<String>) {
        self.director = Some(director.into());
    }

    pub fn set_year(&mut self, year: i32) -> Result<(), ValidationError> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }

    pub fn set_running_time(&mut self, running_time: i32) -> Result<(), ValidationError> {
        validate_running_time(running_time)?;
        self.running_time = running_time;
        Ok(())
    }

    pub fn set_photo_path(&mut self, photo_path: Option<String>) {
        self.photo_path = photo_path;
    }

    /// Stable sort of a copy of `movies`; the input is left untouched.
    pub fn sorted(movies: &[Movie], key: SortKey) -> Vec<Movie> {
        let mut sorted = movies.to_vec();
        match key {
            SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Director => sorted.sort_by(|a, b| a.director.cmp(&b.director)),
            SortKey::Year => sorted.sort_by_key(|m| m.year),
            SortKey::RunningTime => sorted.sort_by_key(|m| m.running_time),
        }
        sorted
    }

    pub fn sort_by_title(movies: &[Movie]) -> Vec<Movie> {
        Self::sorted(movies, SortKey::Title)
    }

    pub fn sort_by_director(movies: &[Movie]) -> Vec<Movie> {
        Self::sorted(movies, SortKey::Director)
    }

    pub fn sort_by_year(movies: &[Movie]) -> Vec<Movie> {
        Self::sorted(movies, SortKey::Year)
    }

    pub fn sort_by_running_time(movies: &[Movie]) -> Vec<Movie> {
        Self::sorted(movies, SortKey::RunningTime)
    }
}

fn validate_year(year: i32) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(())
}

fn validate_running_time(running_time: i32) -> Result<(), ValidationError> {
    if running_time < 0 {
        return Err(ValidationError::NegativeRunningTime(running_time));
    }
    Ok(())
}

impl Default for Movie {
    fn default() -> Self {
        Self {
            title: "The Godfather".to_string(),
            director: None,
            year: 1972,
            running_time: 175,
            photo_path: None,
        }
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.director == other.director && self.year == other.year
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.director.hash(state);
        self.year.hash(state);
    }
}

// "<title> <year> <running time>" is the historical listing format.
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.title, self.year, self.running_time)
    }
}

impl TryFrom<MovieRecord> for Movie {
    type Error = ValidationError;

    fn try_from(record: MovieRecord) -> Result<Self, Self::Error> {
        validate_year(record.year)?;
        validate_running_time(record.running_time)?;
        Ok(Self {
            title: record.title,
            director: record.director,
            year: record.year,
            running_time: record.running_time,
            photo_path: record.photo_path,
        })
    }
}

impl From<Movie> for MovieRecord {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            director: movie.director,
            year: movie.year,
            running_time: movie.running_time,
            photo_path: movie.photo_path,
        }
    }
}

/// Orderings offered by the sort helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic by title
    Title,
    /// Lexicographic by director (unset directors first)
    Director,
    /// Ascending release year
    Year,
    /// Ascending running time
    RunningTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, director: &str, year: i32, running_time: i32) -> Movie {
        Movie::new(title, director, year, running_time, Some("/path/to/photo".to_string())).unwrap()
    }

    fn sample_movies() -> Vec<Movie> {
        vec![
            movie("Inception", "Christopher Nolan", 2010, 148),
            movie("Titanic", "James Cameron", 1997, 195),
            movie("The Godfather", "Francis Ford Coppola", 1972, 175),
        ]
    }

    #[test]
    fn test_valid_constructor() {
        let movie = movie("Inception", "Christopher Nolan", 2010, 148);
        assert_eq!(movie.title(), "Inception");
        assert_eq!(movie.director(), Some("Christopher Nolan"));
        assert_eq!(movie.year(), 2010);
        assert_eq!(movie.running_time(), 148);
        assert_eq!(movie.photo_path(), Some("/path/to/photo"));
    }

    #[test]
    fn test_constructor_rejects_year_out_of_range() {
        let err = Movie::new("Inception", "Christopher Nolan", 1890, 148, None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::YearOutOfRange { year: 1890, min: MIN_YEAR, max: MAX_YEAR }
        );
        assert!(Movie::new("Future", "Nobody", 2024, 100, None).is_err());
    }

    #[test]
    fn test_constructor_year_bounds_inclusive() {
        assert!(Movie::new("Early", "Lumiere", MIN_YEAR, 1, None).is_ok());
        assert!(Movie::new("Late", "Someone", MAX_YEAR, 90, None).is_ok());
    }

    #[test]
    fn test_constructor_rejects_negative_running_time() {
        let err = Movie::new("The Shawshank Redemption", "Frank Darabont", 1994, -142, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::NegativeRunningTime(-142));
    }

    #[test]
    fn test_zero_running_time_allowed() {
        let movie = Movie::new("Blank", "Nobody", 2000, 0, None).unwrap();
        assert_eq!(movie.running_time(), 0);
    }

    #[test]
    fn test_default() {
        let movie = Movie::default();
        assert_eq!(movie.title(), "The Godfather");
        assert_eq!(movie.year(), 1972);
        assert_eq!(movie.running_time(), 175);
        assert_eq!(movie.director(), None);
        assert_eq!(movie.photo_path(), None);
    }

    #[test]
    fn test_setters() {
        let mut movie = Movie::default();
        movie.set_title("Titanic");
        movie.set_director("James Cameron");
        movie.set_year(1997).unwrap();
        movie.set_running_time(195).unwrap();
        movie.set_photo_path(Some("/path/to/titanic/photo".to_string()));

        assert_eq!(movie.title(), "Titanic");
        assert_eq!(movie.director(), Some("James Cameron"));
        assert_eq!(movie.year(), 1997);
        assert_eq!(movie.running_time(), 195);
        assert_eq!(movie.photo_path(), Some("/path/to/titanic/photo"));
    }

    #[test]
    fn test_invalid_setters_keep_previous_value() {
        let mut movie = movie("Pulp Fiction", "Quentin Tarantino", 1994, 154);

        assert!(matches!(
            movie.set_year(2025),
            Err(ValidationError::YearOutOfRange { year: 2025, .. })
        ));
        assert_eq!(movie.year(), 1994);

        assert!(matches!(
            movie.set_year(1894),
            Err(ValidationError::YearOutOfRange { year: 1894, .. })
        ));
        assert_eq!(movie.year(), 1994);

        assert_eq!(
            movie.set_running_time(-10),
            Err(ValidationError::NegativeRunningTime(-10))
        );
        assert_eq!(movie.running_time(), 154);
    }

    #[test]
    fn test_display() {
        let movie = movie("Inception", "Christopher Nolan", 2010, 148);
        assert_eq!(movie.to_string(), "Inception 2010 148");
    }

    #[test]
    fn test_equality_ignores_running_time_and_photo() {
        let a = Movie::new("A", "B", 2000, 100, Some("x".to_string())).unwrap();
        let b = Movie::new("A", "B", 2000, 999, Some("y".to_string())).unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);

        let other = movie("Interstellar", "Christopher Nolan", 2014, 169);
        assert_ne!(a, other);
    }

    #[test]
    fn test_equality_considers_director_and_year() {
        let a = movie("Dune", "David Lynch", 1984, 137);
        assert_ne!(a, movie("Dune", "Denis Villeneuve", 1984, 137));
        assert_ne!(a, movie("Dune", "David Lynch", 2021, 137));
    }

    #[test]
    fn test_sort_by_title() {
        let movies = sample_movies();
        let sorted = Movie::sort_by_title(&movies);
        let titles: Vec<&str> = sorted.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Inception", "The Godfather", "Titanic"]);
        // Input untouched
        assert_eq!(movies[0].title(), "Inception");
        assert_eq!(movies[1].title(), "Titanic");
    }

    #[test]
    fn test_sort_by_director() {
        let sorted = Movie::sort_by_director(&sample_movies());
        let directors: Vec<Option<&str>> = sorted.iter().map(|m| m.director()).collect();
        assert_eq!(
            directors,
            vec![
                Some("Christopher Nolan"),
                Some("Francis Ford Coppola"),
                Some("James Cameron")
            ]
        );
    }

    #[test]
    fn test_sort_by_year() {
        let sorted = Movie::sort_by_year(&sample_movies());
        let years: Vec<i32> = sorted.iter().map(|m| m.year()).collect();
        assert_eq!(years, vec![1972, 1997, 2010]);
    }

    #[test]
    fn test_sort_by_running_time() {
        let sorted = Movie::sort_by_running_time(&sample_movies());
        let times: Vec<i32> = sorted.iter().map(|m| m.running_time()).collect();
        assert_eq!(times, vec![148, 175, 195]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let movies = vec![
            movie("Zodiac", "David Fincher", 2007, 157),
            movie("Alien", "Ridley Scott", 1979, 117),
            movie("Memento", "Christopher Nolan", 2000, 113),
            movie("Avatar", "James Cameron", 2009, 162),
            movie("Gladiator", "Ridley Scott", 2000, 155),
        ];
        let sorted = Movie::sort_by_year(&movies);
        let titles: Vec<&str> = sorted.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Alien", "Memento", "Gladiator", "Zodiac", "Avatar"]);
    }

    #[test]
    fn test_serde_round_trip_keeps_all_fields() {
        let movie = movie("Inception", "Christopher Nolan", 2010, 148);
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
        assert_eq!(back.running_time(), 148);
        assert_eq!(back.photo_path(), Some("/path/to/photo"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_year() {
        let json = r#"{"title":"Old","director":"X","year":1800,"running_time":10}"#;
        let result: Result<Movie, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
