use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::filter::ProjectView;
use super::model::ProjectRecord;

/// Header labels of the ledger, in display order.
pub const LEDGER_COLUMNS: [&str; 5] = [
    "Year",
    "Institution",
    "Project Title",
    "Project Country",
    "Project Leader(s)",
];

/// A record projected to the five ledger columns. Nulls become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow<'a> {
    #[serde(rename = "Year")]
    pub year: &'a str,
    #[serde(rename = "Institution")]
    pub institution: &'a str,
    #[serde(rename = "Project Title")]
    pub title: &'a str,
    #[serde(rename = "Project Country")]
    pub country: &'a str,
    #[serde(rename = "Project Leader(s)")]
    pub leaders: &'a str,
}

impl<'a> LedgerRow<'a> {
    pub fn from_record(rec: &'a ProjectRecord) -> Self {
        LedgerRow {
            year: rec.year.as_str(),
            institution: &rec.institution,
            title: rec.title.as_deref().unwrap_or(""),
            country: rec.country.as_deref().unwrap_or(""),
            leaders: rec.leaders.as_deref().unwrap_or(""),
        }
    }

    /// Cells in [`LEDGER_COLUMNS`] order.
    pub fn cells(&self) -> [&'a str; 5] {
        [
            self.year,
            self.institution,
            self.title,
            self.country,
            self.leaders,
        ]
    }
}

/// Ledger rows for every record of the view, in view order.
pub fn ledger_rows<'a>(view: &ProjectView<'a>) -> Vec<LedgerRow<'a>> {
    view.records().map(LedgerRow::from_record).collect()
}

/// Serialize the ledger as CSV with a header row.
pub fn write_ledger_csv<W: Write>(view: &ProjectView<'_>, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if view.is_empty() {
        csv_writer
            .write_record(LEDGER_COLUMNS)
            .context("writing ledger header")?;
    }
    for row in ledger_rows(view) {
        csv_writer.serialize(row).context("writing ledger row")?;
    }
    csv_writer.flush().context("flushing ledger")?;
    Ok(())
}

/// Write the ledger to `path`, replacing any existing file.
pub fn export_ledger(view: &ProjectView<'_>, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_ledger_csv(view, file)?;
    log::info!("Exported {} ledger rows to {}", view.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::FilterCriteria;
    use crate::data::model::tests::record;
    use crate::data::model::ProjectDataset;

    fn dataset() -> ProjectDataset {
        let mut rows = vec![
            record("2,019", "Bates", Some("Peru")),
            record("2020", "Colby", None),
        ];
        rows[0].leaders = Some("Ana, Ben".into());
        ProjectDataset::from_records(rows)
    }

    #[test]
    fn rows_project_five_columns() {
        let ds = dataset();
        let view = ProjectView::new(&ds, &FilterCriteria::all_years(&ds));
        let rows = ledger_rows(&view);
        assert_eq!(
            rows[0].cells(),
            ["2019", "Bates", "Bates project 2,019", "Peru", "Ana, Ben"]
        );
        assert_eq!(rows[1].country, "");
        assert_eq!(rows[1].leaders, "");
    }

    #[test]
    fn csv_export_quotes_and_headers() {
        let ds = dataset();
        let view = ProjectView::new(&ds, &FilterCriteria::all_years(&ds));
        let mut out = Vec::new();
        write_ledger_csv(&view, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Year,Institution,Project Title,Project Country,Project Leader(s)")
        );
        assert_eq!(lines.next(), Some("2019,Bates,\"Bates project 2,019\",Peru,\"Ana, Ben\""));
        assert_eq!(lines.next(), Some("2020,Colby,Colby project 2020,,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_view_still_writes_header() {
        let ds = dataset();
        let view = ProjectView::from_indices(&ds, Vec::new());
        let mut out = Vec::new();
        write_ledger_csv(&view, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Year,Institution,Project Title,Project Country,Project Leader(s)\n"
        );
    }

    #[test]
    fn export_writes_file() {
        let ds = dataset();
        let view = ProjectView::new(&ds, &FilterCriteria::all_years(&ds));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        export_ledger(&view, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
