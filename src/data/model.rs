use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CatalogRow – one catalog entry
// ---------------------------------------------------------------------------

/// Content type of a single-session item (runtime in minutes).
pub const TYPE_MOVIE: &str = "Movie";
/// Content type of a multi-session item (duration counts seasons).
pub const TYPE_TV_SHOW: &str = "TV Show";

/// Sentinel substituted for a missing director.
pub const MISSING_DIRECTOR: &str = "Not Available";
/// Sentinel substituted for a missing country.
pub const MISSING_COUNTRY: &str = "Unknown";
/// Sentinel substituted for a missing rating.
pub const MISSING_RATING: &str = "Not Rated";

/// A single cleaned catalog entry (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub show_id: String,
    /// Content type, e.g. "Movie" or "TV Show".
    pub content_type: String,
    pub title: String,
    /// Never empty after cleaning: original value or [`MISSING_DIRECTOR`].
    pub director: String,
    /// Never empty after cleaning: original value or [`MISSING_COUNTRY`].
    pub country: String,
    /// Parsed from the free-text date_added column; `None` when unparsable.
    pub date_added: Option<NaiveDate>,
    pub release_year: i32,
    /// Never empty after cleaning: original value or [`MISSING_RATING`].
    pub rating: String,
    /// Raw duration text, e.g. "90 min" or "2 Seasons".
    pub duration: String,
    /// Comma-separated genre list.
    pub listed_in: String,
    /// Calendar year of `date_added`; absent when the date is.
    pub year_added: Option<i32>,
    /// First run of digits in `duration`; minutes for movies, seasons for shows.
    pub duration_value: Option<f64>,
}

/// Split a comma-separated genre list into trimmed, non-empty tokens.
pub fn genre_tokens(listed_in: &str) -> impl Iterator<Item = &str> {
    listed_in
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// ---------------------------------------------------------------------------
// CatalogTable – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed distinct-value sets for every
/// filterable dimension.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    /// All catalog entries, in source order.
    pub rows: Vec<CatalogRow>,
    /// Distinct content types.
    pub content_types: BTreeSet<String>,
    /// Distinct countries.
    pub countries: BTreeSet<String>,
    /// Distinct ratings.
    pub ratings: BTreeSet<String>,
    /// Union of genre tokens across all rows, sorted.
    pub genres: BTreeSet<String>,
}

impl CatalogTable {
    /// Build the distinct-value indices from cleaned rows.
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        let mut content_types = BTreeSet::new();
        let mut countries = BTreeSet::new();
        let mut ratings = BTreeSet::new();
        let mut genres = BTreeSet::new();

        for row in &rows {
            content_types.insert(row.content_type.clone());
            countries.insert(row.country.clone());
            ratings.insert(row.rating.clone());
            for token in genre_tokens(&row.listed_in) {
                genres.insert(token.to_string());
            }
        }

        CatalogTable {
            rows,
            content_types,
            countries,
            ratings,
            genres,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
