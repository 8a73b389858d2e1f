//! The read-parse-write pipeline: one CSV file in, one typed JSON array
//! out.
//!
//! The whole document is materialized in memory before serialization
//! begins; there is no streaming and no partial-output recovery. Input and
//! output handles are scoped to their half of the pipeline and closed when
//! that half returns.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::{cli::ConvertArgs, data::parse_scalar, io_utils};

/// Catch-all key for trailing fields beyond the header width. The leading
/// underscore keeps it out of ordinary header namespaces.
pub const REST_KEY: &str = "_rest";

/// One output row: header columns mapped to typed values, in header order.
pub type Record = Map<String, Value>;

/// All rows of one CSV file, in file order.
pub type Document = Vec<Record>;

pub fn execute(args: &ConvertArgs) -> Result<()> {
    csv_to_json(&args.input, &args.output)
}

/// Runs the full conversion: read and type every row of `input`, then
/// serialize the document to `output` with 4-space indentation,
/// overwriting any existing file there.
pub fn csv_to_json(input: &Path, output: &Path) -> Result<()> {
    let document =
        read_document(input).with_context(|| format!("Reading CSV document from {input:?}"))?;
    write_document(&document, output)
        .with_context(|| format!("Writing JSON document to {output:?}"))
}

/// Reads the ordered document from a CSV file. The first row is the
/// header; every subsequent row is zipped positionally against it.
pub fn read_document(path: &Path) -> Result<Document> {
    let mut reader = io_utils::open_csv_reader(path)?;
    let headers = io_utils::decode_record(reader.byte_headers()?)?;
    debug!("Header columns: {headers:?}");

    let mut document = Document::new();
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let fields = io_utils::decode_record(&record)?;
        document.push(build_record(&headers, &fields));
    }
    info!(
        "Read {} row(s) across {} column(s) from {:?}",
        document.len(),
        headers.len(),
        path
    );
    Ok(document)
}

/// Zips one row against the header. Short rows leave trailing columns
/// absent, which the scalar parser turns into empty strings; long rows
/// collect their extra fields under [`REST_KEY`] so no data is dropped.
fn build_record(headers: &[String], fields: &[String]) -> Record {
    let mut row = Record::new();
    for (idx, header) in headers.iter().enumerate() {
        let scalar = parse_scalar(fields.get(idx).map(String::as_str));
        row.insert(header.clone(), Value::from(scalar));
    }
    if fields.len() > headers.len() {
        let rest = fields[headers.len()..]
            .iter()
            .map(|field| Value::from(parse_scalar(Some(field.as_str()))))
            .collect();
        row.insert(REST_KEY.to_string(), Value::Array(rest));
    }
    row
}

/// Serializes the document as a JSON array of objects with 4-space
/// indentation, creating or overwriting the file at `path`.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let mut writer = io_utils::create_output_file(path)?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document
        .serialize(&mut serializer)
        .with_context(|| format!("Serializing JSON document to {path:?}"))?;
    writer
        .flush()
        .with_context(|| format!("Flushing output file {path:?}"))?;
    info!("Wrote {} record(s) to {:?}", document.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn build_record_pads_short_rows_with_empty_strings() {
        let row = build_record(
            &headers(&["name", "population", "area"]),
            &["Paris".to_string()],
        );
        assert_eq!(row.get("name"), Some(&json!("Paris")));
        assert_eq!(row.get("population"), Some(&json!("")));
        assert_eq!(row.get("area"), Some(&json!("")));
    }

    #[test]
    fn build_record_collects_extra_fields_under_rest_key() {
        let row = build_record(
            &headers(&["name"]),
            &["Paris".to_string(), "48.85".to_string(), "x".to_string()],
        );
        assert_eq!(row.get("name"), Some(&json!("Paris")));
        assert_eq!(row.get(REST_KEY), Some(&json!([48.85, "x"])));
    }

    #[test]
    fn build_record_keeps_header_order() {
        let row = build_record(
            &headers(&["b", "a", "c"]),
            &["1".to_string(), "2".to_string(), "3".to_string()],
        );
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
