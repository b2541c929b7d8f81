use super::model::BookmarkExport;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use csv::Writer;
use std::path::Path;

/// One row per bookmark, header taken from [`BookmarkExport`].
pub fn write_csv(path: &Path, employees: &[&Employee]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for e in employees {
        wtr.serialize(BookmarkExport::from(*e))?;
    }

    wtr.flush()?;
    Ok(())
}
