use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::render::MapDocument;

use super::error::{ConvertError, Rejection};
use super::parser;
use super::sample::SampleBatch;

/// Outcome of one successful conversion run.
#[derive(Debug)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub accepted: usize,
    pub rejections: Vec<Rejection>,
}

/// Runs one end-to-end conversion from a CSV file to a map document.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
    let file = fs::File::open(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    convert_reader(file, output)
}

/// Same as [`convert_file`], reading rows from an arbitrary byte stream.
///
/// The document is rendered in memory before anything touches the output
/// path, so an aborted run leaves no partial file behind.
pub fn convert_reader<R: Read>(input: R, output: &Path) -> Result<ConversionReport, ConvertError> {
    let (batch, rejections) = read_rows(input)?;

    if batch.is_empty() {
        return Err(ConvertError::EmptyDataset);
    }

    let html = MapDocument::build(&batch)?.render()?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(output, html).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "converted {} samples ({} rejected) to {}",
        batch.len(),
        rejections.len(),
        output.display()
    );

    Ok(ConversionReport {
        output: output.to_path_buf(),
        accepted: batch.len(),
        rejections,
    })
}

/// Consumes and validates the header, then parses every data row. Row
/// failures are recorded and skipped; only the header aborts here.
pub fn read_rows<R: Read>(input: R) -> Result<(SampleBatch, Vec<Rejection>), ConvertError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let header = reader.headers()?;
    if !parser::header_matches(header) {
        return Err(ConvertError::Schema {
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut batch = SampleBatch::new();
    let mut rejections = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;
        match parser::parse_record(&record) {
            Ok(sample) => batch.push(sample),
            Err(error) => {
                warn!("skipping row {}: {}", row, error);
                rejections.push(Rejection { row, error });
            }
        }
    }

    Ok((batch, rejections))
}
