use super::fs_utils::ensure_writable;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Write bookmarks to `file` in the requested format, asking on stdin
    /// before replacing an existing file. Returns the resolved output path.
    pub fn export_bookmarks(
        employees: &[&Employee],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        Self::export_bookmarks_with(employees, format, file, force, &mut io::stdin().lock())
    }

    /// Same as [`ExportLogic::export_bookmarks`], with the overwrite answer
    /// read from `answers`.
    pub fn export_bookmarks_with<R: BufRead + ?Sized>(
        employees: &[&Employee],
        format: ExportFormat,
        file: &str,
        force: bool,
        answers: &mut R,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);
        ensure_writable(&path, force, answers)?;
        ensure_parent_dir(&path)?;

        match format {
            ExportFormat::Json => json::write_json(&path, employees)?,
            ExportFormat::Csv => csv::write_csv(&path, employees)?,
        }

        info!(format = format.as_str(), count = employees.len(), path = %path.display(), "bookmarks exported");
        notify_export_success("Bookmarks", employees.len(), &path);
        Ok(path)
    }
}
