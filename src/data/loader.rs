use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{ProjectDataset, ProjectRecord, Year};
use super::region::{resolve_region, RegionLookup};

/// Column names every registry file must provide.
pub const COL_YEAR: &str = "Year";
pub const COL_INSTITUTION: &str = "Institution";
pub const COL_TITLE: &str = "Project Title";
pub const COL_COUNTRY: &str = "Project Country";
pub const COL_LEADERS: &str = "Project Leader(s)";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_YEAR,
    COL_INSTITUTION,
    COL_TITLE,
    COL_COUNTRY,
    COL_LEADERS,
    COL_LATITUDE,
    COL_LONGITUDE,
];

// ---------------------------------------------------------------------------
// Errors and options
// ---------------------------------------------------------------------------

/// Structural problems with a registry file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        row: usize,
        column: &'static str,
        data_type: DataType,
    },
}

/// Per-load switches. Part of the cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadOptions {
    /// Attach a continent to every record from its project country.
    pub derive_regions: bool,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the registry from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the registry column names
/// * `.json`    – `[{ "Year": 2020, "Institution": "...", ... }, ...]`
/// * `.parquet` – flat columns with the registry column names
///
/// Rows without both coordinates are dropped; everything else that doesn't fit
/// the schema fails the whole load.
pub fn load_file(path: &Path, options: LoadOptions) -> Result<ProjectDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    let total = rows.len();
    let records: Vec<ProjectRecord> = rows
        .into_iter()
        .filter_map(|row| row.into_record(options))
        .collect();
    let dropped = total - records.len();
    log::info!(
        "Loaded {} projects from {} ({dropped} rows without coordinates dropped)",
        records.len(),
        path.display()
    );

    Ok(ProjectDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw rows shared by every format
// ---------------------------------------------------------------------------

/// A year cell as it appears in the wild: an integer, a float, or text such as `"2,020"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum YearCell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl YearCell {
    fn normalize(&self) -> Year {
        match self {
            YearCell::Int(i) => Year::normalize(&i.to_string()),
            YearCell::Float(f) => Year::from_number(*f),
            YearCell::Text(s) => Year::normalize(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    #[serde(rename = "Year")]
    year: Option<YearCell>,
    #[serde(rename = "Institution")]
    institution: Option<String>,
    #[serde(rename = "Project Title")]
    title: Option<String>,
    #[serde(rename = "Project Country")]
    country: Option<String>,
    #[serde(rename = "Project Leader(s)")]
    leaders: Option<String>,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

impl RawRow {
    /// `None` when either coordinate is missing.
    fn into_record(self, options: LoadOptions) -> Option<ProjectRecord> {
        let latitude = self.latitude.filter(|v| !v.is_nan())?;
        let longitude = self.longitude.filter(|v| !v.is_nan())?;
        let country = non_empty(self.country);
        let region = options.derive_regions.then(|| {
            let lookup = resolve_region(country.as_deref());
            match lookup {
                RegionLookup::Resolved { code, region } => {
                    log::trace!("{country:?} → {code} → {region}");
                }
                RegionLookup::Unresolved => {
                    log::debug!("No continent for country {country:?}, using Other");
                }
                RegionLookup::Override(_) => {}
            }
            lookup.region()
        });

        Some(ProjectRecord {
            year: self
                .year
                .map(|y| y.normalize())
                .unwrap_or_else(|| Year::normalize("")),
            institution: self.institution.unwrap_or_default(),
            title: non_empty(self.title),
            country,
            leaders: non_empty(self.leaders),
            latitude,
            longitude,
            region,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }

    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Year": 2020,
///     "Institution": "Middlebury College",
///     "Project Title": "...",
///     "Project Country": "Kenya",
///     "Project Leader(s)": "...",
///     "Latitude": -1.29,
///     "Longitude": 36.82
///   },
///   ...
/// ]
/// ```
fn read_json(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&text).context("Expected top-level JSON array of objects")?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, obj)| {
            if let Some(column) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
                return Err(anyhow::Error::from(LoadError::MissingColumn(*column)));
            }
            serde_json::from_value(serde_json::Value::Object(obj))
                .with_context(|| format!("JSON row {i}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet export of the registry.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): string columns may be `Utf8` or
/// `LargeUtf8`, the year may be integer, float or string typed.
fn read_parquet(path: &Path) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut rows)?;
    }
    Ok(rows)
}

fn read_batch(batch: &RecordBatch, rows: &mut Vec<RawRow>) -> Result<()> {
    let year = column(batch, COL_YEAR)?;
    let institution = column(batch, COL_INSTITUTION)?;
    let title = column(batch, COL_TITLE)?;
    let country = column(batch, COL_COUNTRY)?;
    let leaders = column(batch, COL_LEADERS)?;
    let latitude = column(batch, COL_LATITUDE)?;
    let longitude = column(batch, COL_LONGITUDE)?;

    for row in 0..batch.num_rows() {
        rows.push(RawRow {
            year: year_cell(year, row)?,
            institution: text_cell(institution, row, COL_INSTITUTION)?,
            title: text_cell(title, row, COL_TITLE)?,
            country: text_cell(country, row, COL_COUNTRY)?,
            leaders: text_cell(leaders, row, COL_LEADERS)?,
            latitude: float_cell(latitude, row, COL_LATITUDE)?,
            longitude: float_cell(longitude, row, COL_LONGITUDE)?,
        });
    }
    Ok(())
}

// -- Arrow cell helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

fn text_cell(col: &ArrayRef, row: usize, column: &'static str) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        other => {
            return Err(LoadError::UnsupportedType {
                row,
                column,
                data_type: other.clone(),
            }
            .into())
        }
    };
    Ok(Some(value))
}

fn float_cell(col: &ArrayRef, row: usize, column: &'static str) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => {
            return Err(LoadError::UnsupportedType {
                row,
                column,
                data_type: other.clone(),
            }
            .into())
        }
    };
    Ok(Some(value))
}

fn year_cell(col: &ArrayRef, row: usize) -> Result<Option<YearCell>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let cell = match col.data_type() {
        DataType::Int64 => YearCell::Int(col.as_primitive::<Int64Type>().value(row)),
        DataType::Int32 => YearCell::Int(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Float64 | DataType::Float32 => {
            YearCell::Float(float_cell(col, row, COL_YEAR)?.unwrap_or(f64::NAN))
        }
        _ => YearCell::Text(text_cell(col, row, COL_YEAR)?.unwrap_or_default()),
    };
    Ok(Some(cell))
}

// ---------------------------------------------------------------------------
// Dataset cache
// ---------------------------------------------------------------------------

/// Memoizes loads by source path and options.
///
/// Source files are treated as static: nothing is re-read until the entry is
/// invalidated explicitly.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<(PathBuf, LoadOptions), Arc<ProjectDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on a miss.
    /// Failed loads are not cached.
    pub fn get_or_load(&mut self, path: &Path, options: LoadOptions) -> Result<Arc<ProjectDataset>> {
        let key = (path.to_path_buf(), options);
        if let Some(ds) = self.entries.get(&key) {
            log::debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(ds));
        }
        let ds = Arc::new(load_file(path, options)?);
        self.entries.insert(key, Arc::clone(&ds));
        Ok(ds)
    }

    /// Drop every entry loaded from `path`. Returns whether anything was removed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(p, _), _| p != path);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
