use std::path::Path;

use anyhow::Result;

use crate::bench::Measurement;

/// Write measurements as CSV with a `name,thread_count,runtime_ms` header.
pub fn write_csv(path: &Path, measurements: &[Measurement]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for m in measurements {
        writer.serialize(m)?;
    }
    writer.flush()?;
    Ok(())
}
