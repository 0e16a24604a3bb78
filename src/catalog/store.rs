//! Best-effort CSV ingestion for catalog records.
//!
//! A store file is read once. Rows that cannot be turned into a record are
//! logged and collected as [`RejectedRow`]s; the remaining rows still load.
//! A missing file selects the record type's built-in defaults, and a file
//! that cannot be read at all falls back to the same defaults.

use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};

use super::level::ClosedSet;

/// A record type that can live in a [`super::Catalog`].
pub trait CatalogRecord: Sized {
    /// Short label used in log events and load reports.
    const KIND: &'static str;

    /// Build a record from one CSV row.
    fn from_row(row: &CsvRow<'_>) -> Result<Self>;

    /// Records used when no input file exists.
    fn defaults() -> Vec<Self>;
}

/// Header-addressed view of a single CSV row.
pub struct CsvRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
    line: u64,
}

impl<'a> CsvRow<'a> {
    #[must_use]
    pub const fn new(headers: &'a StringRecord, record: &'a StringRecord, line: u64) -> Self {
        Self {
            headers,
            record,
            line,
        }
    }

    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    fn cell(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|header| header.trim() == column)
            .and_then(|idx| self.record.get(idx))
    }

    /// Raw cell contents; the column must be present.
    pub fn text(&self, column: &str) -> Result<&'a str> {
        self.cell(column)
            .ok_or_else(|| CatalogError::MissingColumn(column.to_string()))
    }

    /// Trimmed cell contents; the column must be present and non-blank.
    pub fn non_empty(&self, column: &str) -> Result<&'a str> {
        let value = self.text(column)?.trim();
        if value.is_empty() {
            return Err(CatalogError::ValidationFailed(format!(
                "{column} must be non-empty"
            )));
        }
        Ok(value)
    }

    /// Trimmed cell contents, or `None` when the column is absent or blank.
    #[must_use]
    pub fn optional(&self, column: &str) -> Option<&'a str> {
        self.cell(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Split a multi-value cell; an absent column yields an empty list.
    #[must_use]
    pub fn list(&self, column: &str, separator: char) -> Vec<String> {
        self.cell(column)
            .map(|raw| split_list(raw, separator))
            .unwrap_or_default()
    }

    pub fn parse<T: ClosedSet>(&self, column: &str) -> Result<T> {
        T::parse(self.text(column)?)
    }

    /// Parse a closed-set cell, using `default` when the cell is absent or blank.
    pub fn parse_or<T: ClosedSet>(&self, column: &str, default: T) -> Result<T> {
        self.optional(column).map_or(Ok(default), T::parse)
    }
}

/// Split on `separator`, trim each element and drop empty ones.
#[must_use]
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Where a store's records came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordSource {
    File { path: PathBuf },
    Defaults,
    Fallback { path: PathBuf, reason: String },
    Memory,
}

/// A row that was skipped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

/// Outcome of loading one store.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub kind: &'static str,
    pub source: RecordSource,
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && !matches!(self.source, RecordSource::Fallback { .. })
    }
}

/// Accepted records plus the rows that were turned away.
#[derive(Debug)]
pub struct ParsedRows<R> {
    pub records: Vec<R>,
    pub rejected: Vec<RejectedRow>,
}

pub struct RecordStore;

impl RecordStore {
    /// Load a store file, never failing: missing or unreadable files yield defaults.
    pub fn load<R: CatalogRecord>(path: &Path) -> (Vec<R>, LoadReport) {
        if !path.exists() {
            info!(kind = R::KIND, path = %path.display(), "store file absent, using built-in defaults");
            let records = R::defaults();
            let report = LoadReport {
                kind: R::KIND,
                source: RecordSource::Defaults,
                accepted: records.len(),
                rejected: Vec::new(),
            };
            return (records, report);
        }

        match Self::read_path::<R>(path) {
            Ok(parsed) => {
                debug!(
                    kind = R::KIND,
                    path = %path.display(),
                    accepted = parsed.records.len(),
                    rejected = parsed.rejected.len(),
                    "loaded store file"
                );
                let report = LoadReport {
                    kind: R::KIND,
                    source: RecordSource::File {
                        path: path.to_path_buf(),
                    },
                    accepted: parsed.records.len(),
                    rejected: parsed.rejected,
                };
                (parsed.records, report)
            }
            Err(err) => {
                warn!(
                    kind = R::KIND,
                    path = %path.display(),
                    error = %err,
                    "store file unreadable, falling back to built-in defaults"
                );
                let records = R::defaults();
                let report = LoadReport {
                    kind: R::KIND,
                    source: RecordSource::Fallback {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                    },
                    accepted: records.len(),
                    rejected: Vec::new(),
                };
                (records, report)
            }
        }
    }

    /// Read every row of a CSV file.
    pub fn read_path<R: CatalogRecord>(path: &Path) -> Result<ParsedRows<R>> {
        let reader = csv_builder().from_path(path)?;
        Self::read_all(reader, &path.display().to_string())
    }

    /// Read every row of CSV text.
    pub fn parse_str<R: CatalogRecord>(content: &str) -> Result<ParsedRows<R>> {
        let reader = csv_builder().from_reader(content.as_bytes());
        Self::read_all(reader, "<memory>")
    }

    fn read_all<R: CatalogRecord, T: io::Read>(
        mut reader: csv::Reader<T>,
        origin: &str,
    ) -> Result<ParsedRows<R>> {
        let headers = reader.headers()?.clone();
        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for result in reader.records() {
            let outcome = result
                .map_err(|err| {
                    let line = err.position().map_or(0, csv::Position::line);
                    (line, CatalogError::from(err))
                })
                .and_then(|record| {
                    let line = record.position().map_or(0, csv::Position::line);
                    R::from_row(&CsvRow::new(&headers, &record, line)).map_err(|err| (line, err))
                });

            match outcome {
                Ok(parsed) => records.push(parsed),
                Err((line, err)) => {
                    warn!(kind = R::KIND, origin, line, reason = %err, "skipping catalog row");
                    rejected.push(RejectedRow {
                        line,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(ParsedRows { records, rejected })
    }
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).trim(csv::Trim::Headers);
    builder
}
