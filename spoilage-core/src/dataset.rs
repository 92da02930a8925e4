//! Labeled reference readings loaded from CSV
//!
//! Expected header: `NH3,H2S,TMA,DMS,foodSpoiled`. Columns are matched by
//! name and surrounding whitespace is ignored. The first malformed row aborts
//! the whole load, so a caller never sees a partially loaded dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{SpoilageError, SpoilageResult};
use crate::types::{Gas, GasReading, SpoilageLabel};

/// Name of the ground-truth column
pub const LABEL_COLUMN: &str = "foodSpoiled";

/// One reading with its ground-truth label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DatasetRow {
    #[serde(flatten)]
    pub reading: GasReading,
    #[serde(rename = "foodSpoiled")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "Yes"))]
    pub label: SpoilageLabel,
}

impl DatasetRow {
    pub fn new(reading: GasReading, label: SpoilageLabel) -> Self {
        Self { reading, label }
    }

    pub fn is_spoiled(&self) -> bool {
        self.label == SpoilageLabel::Spoiled
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "NH3")]
    nh3: f64,
    #[serde(rename = "H2S")]
    h2s: f64,
    #[serde(rename = "TMA")]
    tma: f64,
    #[serde(rename = "DMS")]
    dms: f64,
    #[serde(rename = "foodSpoiled")]
    food_spoiled: String,
}

/// Reads a dataset file from disk
pub fn load_dataset(path: impl AsRef<Path>) -> SpoilageResult<Vec<DatasetRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SpoilageError::DatasetIo(format!("{}: {}", path.display(), e)))?;

    let rows = parse_dataset(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "dataset loaded");
    Ok(rows)
}

/// Parses CSV dataset content from any reader
pub fn parse_dataset<R: Read>(source: R) -> SpoilageResult<Vec<DatasetRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in Gas::ALL.iter().map(Gas::key).chain([LABEL_COLUMN]) {
        if !headers.iter().any(|h| h == column) {
            return Err(SpoilageError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(parse_row(&record, &headers, line)?);
    }

    Ok(rows)
}

fn parse_row(record: &StringRecord, headers: &StringRecord, line: u64) -> SpoilageResult<DatasetRow> {
    let raw: CsvRecord = record
        .deserialize(Some(headers))
        .map_err(|e| SpoilageError::MalformedRow {
            line,
            reason: match e.kind() {
                csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
                _ => e.to_string(),
            },
        })?;

    let reading = GasReading::checked(raw.nh3, raw.h2s, raw.tma, raw.dms).map_err(|e| {
        SpoilageError::MalformedRow {
            line,
            reason: e.to_string(),
        }
    })?;

    Ok(DatasetRow::new(reading, SpoilageLabel::parse(&raw.food_spoiled)))
}

fn csv_error(err: csv::Error) -> SpoilageError {
    match err.position() {
        Some(pos) => SpoilageError::MalformedRow {
            line: pos.line(),
            reason: err.to_string(),
        },
        None => SpoilageError::DatasetIo(err.to_string()),
    }
}

/// Label counts for a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub spoiled: usize,
    pub fresh: usize,
}

impl DatasetSummary {
    pub fn of(rows: &[DatasetRow]) -> Self {
        let spoiled = rows.iter().filter(|r| r.is_spoiled()).count();
        Self {
            total: rows.len(),
            spoiled,
            fresh: rows.len() - spoiled,
        }
    }
}
