use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::convert::error::ConvertError;
use crate::convert::parser::EXPECTED_HEADER;

use super::wire::UploadBatch;

/// Writes a submitted batch as the delimited-row form consumed by the record
/// parser. Values are written as received; validation happens when the rows
/// are read back.
pub fn write_csv<W: Write>(writer: W, batch: &UploadBatch) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPECTED_HEADER)?;
    for record in &batch.data {
        csv.write_record([
            record.index.to_string(),
            record.date_time.clone(),
            record.latitude.to_string(),
            record.longitude.to_string(),
            record.inclination.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Transcodes an exported JSON batch into a sibling CSV file, avoiding
/// clobbering an existing export with a counter suffix.
pub fn json_to_csv_file(input: &Path) -> Result<PathBuf, ConvertError> {
    let raw = fs::read(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let batch: UploadBatch = serde_json::from_slice(&raw)?;

    let csv_path = next_free_path(&input.with_extension("csv"));
    let file = fs::File::create(&csv_path).map_err(|source| ConvertError::Io {
        path: csv_path.clone(),
        source,
    })?;
    write_csv(file, &batch)?;

    Ok(csv_path)
}

fn next_free_path(candidate: &Path) -> PathBuf {
    if !candidate.exists() {
        return candidate.to_path_buf();
    }

    let stem = candidate
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");

    for n in 0u32.. {
        let next = candidate.with_file_name(format!("{}_{:03}.csv", stem, n));
        if !next.exists() {
            return next;
        }
    }
    unreachable!()
}
