use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export over the cutting table.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the (filtered) table.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a `range::parse_range` expression
    /// - `client`: exact-match client filter
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        client: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = store.read_all()?;
        let selected = RecordStore::filter(&entries, |e| {
            let in_range = match date_bounds {
                None => true,
                Some((start, end)) => e.date >= start && e.date <= end,
            };
            let client_ok = match client {
                None => true,
                Some(c) => &e.client == c,
            };
            in_range && client_ok
        });

        if selected.is_empty() {
            warning("No entries found for the selected filters.");
            return Ok(());
        }

        let flat: Vec<EntryExport> = selected.iter().map(EntryExport::from_entry).collect();

        match format {
            ExportFormat::Csv => export_csv(&flat, path)?,
            ExportFormat::Json => export_json(&flat, path)?,
            ExportFormat::Xlsx => export_xlsx(&flat, path)?,
        }

        Ok(())
    }
}
