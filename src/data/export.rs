use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CatalogRow, CatalogTable};

/// Fixed name of the download artifact.
pub const EXPORT_FILE_NAME: &str = "filtered_netflix_data.csv";

/// Column order of the export artifact: the cleaned columns plus the two
/// derived ones.
const COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "year_added",
    "duration_value",
];

// ---------------------------------------------------------------------------
// CSV serialization
// ---------------------------------------------------------------------------

/// Serialize the active view to UTF-8 CSV: header row included, no index
/// column, rows in view order. Absent derived fields become empty cells.
pub fn export_csv(table: &CatalogTable, indices: &[usize]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS).context("writing CSV header")?;

    for &i in indices {
        write_row(&mut writer, &table.rows[i])
            .with_context(|| format!("writing CSV row {i}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV buffer: {e}"))
}

fn write_row(writer: &mut csv::Writer<Vec<u8>>, row: &CatalogRow) -> csv::Result<()> {
    let date_added = row
        .date_added
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let release_year = row.release_year.to_string();
    let year_added = row.year_added.map(|y| y.to_string()).unwrap_or_default();
    let duration_value = row
        .duration_value
        .map(|v| v.to_string())
        .unwrap_or_default();

    writer.write_record([
        row.show_id.as_str(),
        row.content_type.as_str(),
        row.title.as_str(),
        row.director.as_str(),
        row.country.as_str(),
        date_added.as_str(),
        release_year.as_str(),
        row.rating.as_str(),
        row.duration.as_str(),
        row.listed_in.as_str(),
        year_added.as_str(),
        duration_value.as_str(),
    ])
}

/// Serialize the active view and write it to `path`.
pub fn write_export(path: &Path, table: &CatalogTable, indices: &[usize]) -> Result<()> {
    let bytes = export_csv(table, indices)?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{TYPE_MOVIE, TYPE_TV_SHOW};
    use chrono::NaiveDate;

    fn sample_table() -> CatalogTable {
        let movie = CatalogRow {
            show_id: "s1".to_string(),
            content_type: TYPE_MOVIE.to_string(),
            title: "Some, Film".to_string(),
            director: "A. Director".to_string(),
            country: "Spain".to_string(),
            date_added: NaiveDate::from_ymd_opt(2021, 9, 25),
            release_year: 2020,
            rating: "PG-13".to_string(),
            duration: "90 min".to_string(),
            listed_in: "Comedies, Dramas".to_string(),
            year_added: Some(2021),
            duration_value: Some(90.0),
        };
        let show = CatalogRow {
            show_id: "s2".to_string(),
            content_type: TYPE_TV_SHOW.to_string(),
            title: "Some Series".to_string(),
            director: "Not Available".to_string(),
            country: "India".to_string(),
            date_added: None,
            release_year: 2019,
            rating: "TV-MA".to_string(),
            duration: "2 Seasons".to_string(),
            listed_in: "TV Dramas".to_string(),
            year_added: None,
            duration_value: Some(2.0),
        };
        CatalogTable::from_rows(vec![movie, show])
    }

    #[test]
    fn export_round_trips_the_view() {
        let table = sample_table();
        let bytes = export_csv(&table, &[1, 0]).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            COLUMNS.to_vec()
        );

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        // View order preserved: s2 first.
        assert_eq!(&records[0][0], "s2");
        assert_eq!(&records[0][5], ""); // absent date_added
        assert_eq!(&records[0][10], ""); // absent year_added
        assert_eq!(&records[1][0], "s1");
        assert_eq!(&records[1][2], "Some, Film");
        assert_eq!(&records[1][5], "2021-09-25");
        assert_eq!(records[1][11].parse::<f64>().unwrap(), 90.0);
    }

    #[test]
    fn empty_view_still_has_a_header() {
        let table = sample_table();
        let bytes = export_csv(&table, &[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("show_id,type,title"));
    }
}
