use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// Number of post rows in a TSV file, header excluded.
pub fn count<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open posts {:?}", path))?;

    let mut posts_count = 0;
    for record in reader.byte_records() {
        record.with_context(|| format!("Failed to read posts {:?}", path))?;
        posts_count += 1;
    }
    Ok(posts_count)
}
