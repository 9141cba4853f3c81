use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::{debug, info};

use crate::domain::types::FareTable;

/// Write one fare table as a labelled grid: an empty corner cell and the province names
/// across the top, then one row per province.
pub fn save_to_csv(table: &FareTable, output_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(table.mode.file_name());

    if table.fares.len() != table.provinces.len() {
        return Err(format!(
            "{} table has {} rows for {} provinces",
            table.mode.label(),
            table.fares.len(),
            table.provinces.len()
        )
        .into());
    }

    let mut wtr = Writer::from_path(&path)?;

    let mut header = Vec::with_capacity(table.provinces.len() + 1);
    header.push("");
    header.extend(table.provinces.iter().copied());
    wtr.write_record(&header)?;

    for (name, row) in table.provinces.iter().zip(&table.fares) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(name.to_string());
        record.extend(row.iter().map(|fare| fare.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    debug!("Wrote {} rows to {}", table.fares.len(), path.display());
    info!("Exported {} fares to {}", table.mode.label(), path.display());

    Ok(path)
}

/// Export every table in order. The first failure stops the export; files already
/// written are left in place.
pub fn export_all(tables: &[FareTable], output_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    tables
        .iter()
        .map(|table| save_to_csv(table, output_dir))
        .collect()
}
