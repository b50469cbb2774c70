use std::fs::File;
use std::path::Path;

use anyhow::Context;
use csv::WriterBuilder;
use tracing::info;

use crate::listing::ListingRecord;

/// Writes the run's listings, replacing any previous file at `path`.
pub fn write_csv(path: &Path, records: &[ListingRecord]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!("Wrote {} listings to {}", records.len(), path.display());
    Ok(())
}
