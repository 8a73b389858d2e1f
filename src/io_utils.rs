//! I/O plumbing for the converter: buffered CSV reading, strict UTF-8
//! decoding, and output file creation.
//!
//! All file I/O in chartfeed flows through this module. Readers are
//! flexible so that rows with a field count different from the header are
//! surfaced to the caller instead of aborting the parse.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use encoding_rs::UTF_8;

pub fn open_csv_reader(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("Opening input file {path:?}"))?;
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(b',')
        .double_quote(true)
        .flexible(true);
    Ok(builder.from_reader(BufReader::new(file)))
}

pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Creating output file {path:?}"))?;
    Ok(BufWriter::new(file))
}

/// Decodes one CSV field as strict UTF-8. Malformed bytes are an error,
/// never replacement characters.
pub fn decode_field(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        Err(anyhow!(
            "Failed to decode text with encoding {}",
            UTF_8.name()
        ))
    } else {
        Ok(text.into_owned())
    }
}

pub fn decode_record(record: &csv::ByteRecord) -> Result<Vec<String>> {
    record.iter().map(decode_field).collect()
}
