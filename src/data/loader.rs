use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use super::model::{
    CatalogRow, CatalogTable, MISSING_COUNTRY, MISSING_DIRECTOR, MISSING_RATING,
};

/// Fixed relative path the dashboard reads its dataset from.
pub const DATA_PATH: &str = "data/netflix1.csv";

/// Header columns the loader refuses to run without.
const REQUIRED_COLUMNS: [&str; 10] = [
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
];

/// Schema problems that make the source file unusable.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

/// One undecoded CSV record. Optional fields arrive as `None` for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
struct RawRecord {
    show_id: String,
    #[serde(rename = "type")]
    content_type: String,
    title: String,
    director: Option<String>,
    country: Option<String>,
    date_added: Option<String>,
    release_year: i32,
    rating: Option<String>,
    duration: Option<String>,
    listed_in: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and clean the catalog from `path`.
///
/// Any I/O failure, missing required column, or undecodable record is an
/// error: the dashboard cannot render without a complete dataset.
pub fn load_catalog(path: &Path) -> Result<CatalogTable> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SchemaError::MissingColumn(column).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("decoding CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(CatalogTable::from_rows(clean_records(records)))
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Deduplicate and clean raw records into typed rows.
///
/// Steps, in order: drop exact-duplicate records (first occurrence wins),
/// substitute sentinels for missing categoricals, tolerant-parse the date,
/// derive `year_added`, extract the numeric duration. No step drops a row.
fn clean_records(records: Vec<RawRecord>) -> Vec<CatalogRow> {
    let mut seen: HashSet<RawRecord> = HashSet::with_capacity(records.len());
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.clone()) {
            continue; // exact duplicate
        }

        let date_added = record.date_added.as_deref().and_then(parse_date_added);
        let duration = record.duration.unwrap_or_default();

        rows.push(CatalogRow {
            show_id: record.show_id,
            content_type: record.content_type,
            title: record.title,
            director: record
                .director
                .unwrap_or_else(|| MISSING_DIRECTOR.to_string()),
            country: record.country.unwrap_or_else(|| MISSING_COUNTRY.to_string()),
            date_added,
            release_year: record.release_year,
            rating: record.rating.unwrap_or_else(|| MISSING_RATING.to_string()),
            year_added: date_added.map(|d| d.year()),
            duration_value: extract_duration_value(&duration),
            duration,
            listed_in: record.listed_in.unwrap_or_default(),
        });
    }

    rows
}

/// Accepted `date_added` formats, tried in order.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Tolerant date parse: `None` on failure rather than an error.
fn parse_date_added(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// First run of digits in the duration text, as a float.
fn extract_duration_value(duration: &str) -> Option<f64> {
    let start = duration.find(|c: char| c.is_ascii_digit())?;
    let digits: String = duration[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// Reload cache
// ---------------------------------------------------------------------------

/// Memoizes loads against the source file identity (path + mtime) so the
/// Reload action only re-reads the dataset when it actually changed on disk.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    mtime: Option<SystemTime>,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mtime: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unconditionally load the dataset and remember the file's mtime.
    pub fn load(&mut self) -> Result<CatalogTable> {
        let modified = self.stat()?;
        let table = load_catalog(&self.path)?;
        self.mtime = Some(modified);
        Ok(table)
    }

    /// Re-read the dataset only if the file changed since the last load.
    ///
    /// Returns `Ok(None)` when the cached copy is still current. The stored
    /// mtime is only updated after a successful load, so a failed read is
    /// retried on the next call.
    pub fn refresh(&mut self) -> Result<Option<CatalogTable>> {
        let modified = self.stat()?;
        if self.mtime == Some(modified) {
            return Ok(None);
        }
        let table = load_catalog(&self.path)?;
        self.mtime = Some(modified);
        Ok(Some(table))
    }

    fn stat(&self) -> Result<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .with_context(|| format!("stat {}", self.path.display()))
    }
}
