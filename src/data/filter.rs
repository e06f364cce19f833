use std::collections::BTreeSet;

use super::model::CatalogTable;

// ---------------------------------------------------------------------------
// Filter selections
// ---------------------------------------------------------------------------

/// Per-dimension selection sets, each a subset of the distinct values
/// observed in the cleaned table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub content_types: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub genres: BTreeSet<String>,
}

/// Initialise a [`FilterState`] with every observed value selected
/// (i.e., show everything).
pub fn init_filter_state(table: &CatalogTable) -> FilterState {
    FilterState {
        content_types: table.content_types.clone(),
        countries: table.countries.clone(),
        ratings: table.ratings.clone(),
        genres: table.genres.clone(),
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Whether `value` passes one set-membership dimension.
///
/// * Empty selection → nothing passes.
/// * Everything selected → no effective filter, skip the membership test.
fn accepts(selected: &BTreeSet<String>, all: &BTreeSet<String>, value: &str) -> bool {
    if selected.is_empty() {
        return false;
    }
    if selected.len() == all.len() {
        return true;
    }
    selected.contains(value)
}

/// Whether at least one selected genre token occurs in the row's genre list.
///
/// Deliberately a substring test, not an exact token match: selecting
/// "Comedies" also matches "Romantic Comedies". A full selection skips the
/// test the same way the set dimensions do.
fn genre_accepts(selected: &BTreeSet<String>, all: &BTreeSet<String>, listed_in: &str) -> bool {
    if selected.is_empty() {
        return false;
    }
    if selected.len() == all.len() {
        return true;
    }
    selected.iter().any(|genre| listed_in.contains(genre.as_str()))
}

/// Return indices of rows that pass all four dimensions.
pub fn filtered_indices(table: &CatalogTable, filters: &FilterState) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            accepts(&filters.content_types, &table.content_types, &row.content_type)
                && accepts(&filters.countries, &table.countries, &row.country)
                && accepts(&filters.ratings, &table.ratings, &row.rating)
                && genre_accepts(&filters.genres, &table.genres, &row.listed_in)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CatalogRow, TYPE_MOVIE, TYPE_TV_SHOW};

    fn row(content_type: &str, country: &str, rating: &str, listed_in: &str) -> CatalogRow {
        CatalogRow {
            show_id: String::new(),
            content_type: content_type.to_string(),
            title: String::new(),
            director: "Not Available".to_string(),
            country: country.to_string(),
            date_added: None,
            release_year: 2020,
            rating: rating.to_string(),
            duration: "90 min".to_string(),
            listed_in: listed_in.to_string(),
            year_added: None,
            duration_value: Some(90.0),
        }
    }

    fn sample_table() -> CatalogTable {
        CatalogTable::from_rows(vec![
            row(TYPE_MOVIE, "Spain", "PG", "Comedies, Dramas"),
            row(TYPE_MOVIE, "India", "R", "Romantic Comedies"),
            row(TYPE_TV_SHOW, "Spain", "TV-MA", "Documentaries"),
        ])
    }

    fn selection(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn full_selection_yields_whole_table() {
        let table = sample_table();
        let filters = init_filter_state(&table);
        assert_eq!(filtered_indices(&table, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn empty_selection_in_any_dimension_yields_nothing() {
        let table = sample_table();
        for clear in 0..4 {
            let mut filters = init_filter_state(&table);
            match clear {
                0 => filters.content_types.clear(),
                1 => filters.countries.clear(),
                2 => filters.ratings.clear(),
                _ => filters.genres.clear(),
            }
            assert!(filtered_indices(&table, &filters).is_empty());
        }
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);
        filters.content_types = selection(&[TYPE_MOVIE]);
        filters.countries = selection(&["Spain"]);
        assert_eq!(filtered_indices(&table, &filters), vec![0]);
    }

    #[test]
    fn genre_match_is_substring_containment() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);

        // "Comedies" is contained in "Romantic Comedies" as well.
        filters.genres = selection(&["Comedies"]);
        assert_eq!(filtered_indices(&table, &filters), vec![0, 1]);

        filters.genres = selection(&["Dramas"]);
        assert_eq!(filtered_indices(&table, &filters), vec![0]);

        filters.genres = selection(&["Comedies", "Dramas"]);
        assert_eq!(filtered_indices(&table, &filters), vec![0, 1]);

        filters.genres = selection(&["Documentaries"]);
        assert_eq!(filtered_indices(&table, &filters), vec![2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);
        filters.ratings = selection(&["PG", "TV-MA"]);

        let once = filtered_indices(&table, &filters);
        let twice = filtered_indices(&table, &filters);
        assert_eq!(once, twice);
        assert_eq!(once, vec![0, 2]);
    }
}
