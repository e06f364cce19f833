use std::collections::{BTreeMap, HashMap, HashSet};

use super::model::{CatalogTable, TYPE_MOVIE, TYPE_TV_SHOW};

/// Bin count of the movie-duration histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Number of entries the ranked country chart keeps.
pub const TOP_COUNTRIES: usize = 10;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// The four KPI scalars over the active view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total: u64,
    pub movies: u64,
    pub tv_shows: u64,
    /// Distinct countries among the visible rows.
    pub countries: u64,
}

/// Compute the KPI scalars for the given view.
pub fn metrics(table: &CatalogTable, indices: &[usize]) -> Metrics {
    let mut movies = 0;
    let mut tv_shows = 0;
    let mut countries: HashSet<&str> = HashSet::new();

    for &i in indices {
        let row = &table.rows[i];
        match row.content_type.as_str() {
            TYPE_MOVIE => movies += 1,
            TYPE_TV_SHOW => tv_shows += 1,
            _ => {}
        }
        countries.insert(row.country.as_str());
    }

    Metrics {
        total: indices.len() as u64,
        movies,
        tv_shows,
        countries: countries.len() as u64,
    }
}

// ---------------------------------------------------------------------------
// Value counts
// ---------------------------------------------------------------------------

/// Count occurrences, returned in descending count order. The sort is
/// stable, so ties keep first-encounter order.
fn counts_desc<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counted: Vec<(String, usize)> = Vec::new();

    for value in values {
        match slots.get(value) {
            Some(&slot) => counted[slot].1 += 1,
            None => {
                slots.insert(value, counted.len());
                counted.push((value.to_string(), 1));
            }
        }
    }

    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
}

/// Rows per content type, most frequent first.
pub fn type_counts(table: &CatalogTable, indices: &[usize]) -> Vec<(String, usize)> {
    counts_desc(indices.iter().map(|&i| table.rows[i].content_type.as_str()))
}

/// Rows per country, truncated to the [`TOP_COUNTRIES`] most frequent.
pub fn top_countries(table: &CatalogTable, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts = counts_desc(indices.iter().map(|&i| table.rows[i].country.as_str()));
    counts.truncate(TOP_COUNTRIES);
    counts
}

/// Rows per rating, most frequent first.
pub fn rating_counts(table: &CatalogTable, indices: &[usize]) -> Vec<(String, usize)> {
    counts_desc(indices.iter().map(|&i| table.rows[i].rating.as_str()))
}

// ---------------------------------------------------------------------------
// Yearly trend
// ---------------------------------------------------------------------------

/// Title counts per release year for one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendSeries {
    pub content_type: String,
    /// (release year, titles), sorted by year.
    pub points: Vec<(i32, usize)>,
}

/// Release counts over the years, one series per content type.
pub fn yearly_trend(table: &CatalogTable, indices: &[usize]) -> Vec<TrendSeries> {
    let mut grouped: BTreeMap<&str, BTreeMap<i32, usize>> = BTreeMap::new();
    for &i in indices {
        let row = &table.rows[i];
        *grouped
            .entry(row.content_type.as_str())
            .or_default()
            .entry(row.release_year)
            .or_insert(0) += 1;
    }

    grouped
        .into_iter()
        .map(|(content_type, years)| TrendSeries {
            content_type: content_type.to_string(),
            points: years.into_iter().collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Duration histogram
// ---------------------------------------------------------------------------

/// Fixed-bin histogram over movie runtimes.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationHistogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

/// Histogram of `duration_value` over rows of type "Movie"; rows without a
/// numeric duration are excluded. `None` when no row qualifies.
pub fn duration_histogram(table: &CatalogTable, indices: &[usize]) -> Option<DurationHistogram> {
    let values: Vec<f64> = indices
        .iter()
        .map(|&i| &table.rows[i])
        .filter(|row| row.content_type == TYPE_MOVIE)
        .filter_map(|row| row.duration_value)
        .collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut counts = vec![0usize; HISTOGRAM_BINS];

    if max == min {
        // Degenerate range: everything lands in one unit-wide bin.
        counts[0] = values.len();
        return Some(DurationHistogram {
            start: min,
            bin_width: 1.0,
            counts,
        });
    }

    let bin_width = (max - min) / HISTOGRAM_BINS as f64;
    for value in values {
        let bin = (((value - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    Some(DurationHistogram {
        start: min,
        bin_width,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CatalogRow;

    fn row(content_type: &str, country: &str, rating: &str, duration_value: Option<f64>) -> CatalogRow {
        CatalogRow {
            show_id: String::new(),
            content_type: content_type.to_string(),
            title: String::new(),
            director: "Not Available".to_string(),
            country: country.to_string(),
            date_added: None,
            release_year: 2020,
            rating: rating.to_string(),
            duration: String::new(),
            listed_in: "Dramas".to_string(),
            year_added: None,
            duration_value,
        }
    }

    fn all(table: &CatalogTable) -> Vec<usize> {
        (0..table.len()).collect()
    }

    #[test]
    fn metrics_count_types_and_distinct_countries() {
        let table = CatalogTable::from_rows(vec![
            row(TYPE_MOVIE, "Spain", "PG", Some(90.0)),
            row(TYPE_MOVIE, "Spain", "R", Some(120.0)),
            row(TYPE_TV_SHOW, "India", "TV-MA", Some(2.0)),
        ]);
        let m = metrics(&table, &all(&table));
        assert_eq!(m.total, 3);
        assert_eq!(m.movies, 2);
        assert_eq!(m.tv_shows, 1);
        assert_eq!(m.countries, 2);

        assert_eq!(metrics(&table, &[]), Metrics::default());
    }

    #[test]
    fn counts_are_descending_with_stable_ties() {
        let table = CatalogTable::from_rows(vec![
            row(TYPE_MOVIE, "India", "PG", None),
            row(TYPE_MOVIE, "Spain", "PG", None),
            row(TYPE_MOVIE, "Japan", "PG", None),
            row(TYPE_MOVIE, "Spain", "PG", None),
        ]);
        // India and Japan tie at 1; India was seen first.
        let counts = top_countries(&table, &all(&table));
        assert_eq!(
            counts,
            vec![
                ("Spain".to_string(), 2),
                ("India".to_string(), 1),
                ("Japan".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_countries_keeps_at_most_ten() {
        let rows: Vec<CatalogRow> = (0..15)
            .map(|i| row(TYPE_MOVIE, &format!("Country {i:02}"), "PG", None))
            .collect();
        let table = CatalogTable::from_rows(rows);
        let counts = top_countries(&table, &all(&table));
        assert_eq!(counts.len(), TOP_COUNTRIES);
        assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn trend_groups_by_year_within_type() {
        let mut rows = vec![
            row(TYPE_MOVIE, "Spain", "PG", None),
            row(TYPE_MOVIE, "Spain", "PG", None),
            row(TYPE_TV_SHOW, "Spain", "TV-MA", None),
        ];
        rows[1].release_year = 2021;
        let table = CatalogTable::from_rows(rows);

        let trend = yearly_trend(&table, &all(&table));
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].content_type, TYPE_MOVIE);
        assert_eq!(trend[0].points, vec![(2020, 1), (2021, 1)]);
        assert_eq!(trend[1].points, vec![(2020, 1)]);
    }

    #[test]
    fn histogram_only_counts_movies_with_durations() {
        let table = CatalogTable::from_rows(vec![
            row(TYPE_MOVIE, "Spain", "PG", Some(80.0)),
            row(TYPE_MOVIE, "Spain", "PG", Some(100.0)),
            row(TYPE_MOVIE, "Spain", "PG", None),
            row(TYPE_TV_SHOW, "Spain", "TV-MA", Some(3.0)),
        ]);
        let hist = duration_histogram(&table, &all(&table)).unwrap();
        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.counts.iter().sum::<usize>(), 2);
        assert_eq!(hist.start, 80.0);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[HISTOGRAM_BINS - 1], 1);
    }

    #[test]
    fn histogram_handles_empty_and_degenerate_views() {
        let table = CatalogTable::from_rows(vec![
            row(TYPE_TV_SHOW, "Spain", "TV-MA", Some(3.0)),
            row(TYPE_MOVIE, "Spain", "PG", Some(95.0)),
            row(TYPE_MOVIE, "Spain", "PG", Some(95.0)),
        ]);
        assert!(duration_histogram(&table, &[0]).is_none());

        let hist = duration_histogram(&table, &[0, 1, 2]).unwrap();
        assert_eq!(hist.counts[0], 2);
        assert_eq!(hist.bin_width, 1.0);
    }
}
