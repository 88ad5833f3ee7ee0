//! File-backed record store for the cutting table.
//!
//! The whole table lives in one CSV file with a fixed header. Appending
//! is a read-modify-write of the entire file: the new content is written
//! to a sibling temp file and renamed over the table, so an interrupted
//! write cannot lose the rows already on disk. There is exactly one
//! persisted version at any time; rows are never updated or deleted.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::schema;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table file with the canonical header and zero rows.
    /// No-op when the file already exists (no schema migration).
    pub fn initialize(&self) -> AppResult<()> {
        for col in schema::CANONICAL_SCHEMA {
            schema::validate_column_name(col)?;
        }

        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(schema::CANONICAL_SCHEMA)?;
        wtr.flush()?;
        Ok(())
    }

    /// Load the full table, in insertion order.
    /// A missing file means "no data yet", not an error.
    pub fn read_all(&self) -> AppResult<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        schema::check_header(rdr.headers()?)?;

        let mut out = Vec::new();
        for record in rdr.records() {
            let record = record?;
            out.push(Entry::from_record(&record)?);
        }
        Ok(out)
    }

    /// Append one entry: read the current table, add the row, rewrite
    /// the whole file. Cost is O(total rows) per insert, which is fine
    /// for a single workshop (hundreds of rows per year).
    pub fn append(&self, entry: &Entry) -> AppResult<()> {
        let mut entries = self.read_all()?;
        entries.push(entry.clone());
        self.write_all(&entries)
    }

    /// Order-preserving subsequence of rows matching `pred`
    /// (per-client, per-date views).
    pub fn filter<F>(entries: &[Entry], pred: F) -> Vec<Entry>
    where
        F: Fn(&Entry) -> bool,
    {
        entries.iter().filter(|e| pred(e)).cloned().collect()
    }

    fn write_all(&self, entries: &[Entry]) -> AppResult<()> {
        let tmp = self.tmp_path();

        {
            let mut wtr = csv::Writer::from_path(&tmp)?;
            wtr.write_record(schema::CANONICAL_SCHEMA)?;
            for e in entries {
                wtr.write_record(e.to_record())?;
            }
            wtr.flush()?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            // Leave no stray temp file behind on failure.
            let _ = fs::remove_file(&tmp);
            AppError::from(e)
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "table".to_string());
        name.push_str(".tmp");
        self.path.with_file_name(name)
    }
}
