//! Parser for the CSV call trace written by instrumented binaries.
//!
//! Format: a header row naming the `source` and `target` columns, then one
//! row per observed call. Both fields are opaque tokens (symbol names or
//! addresses).
//!
//! Parsing is strict. A single bad row aborts the whole trace, since a
//! skipped row would silently change the edge weights.

use super::schema::CallRecord;
use crate::utils::config::{SOURCE_COLUMN, TARGET_COLUMN};
use crate::utils::error::TraceError;
use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    source: usize,
    target: usize,
}

/// Read every call record from a trace stream
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `TraceError::InvalidHeader` - header does not name `source` and `target`
/// * `TraceError::MalformedRecord` - a row without exactly two fields
/// * `TraceError::UnsupportedType` - an empty field, or one that is not valid UTF-8
/// * `TraceError::Csv` - the stream itself could not be decoded
pub fn parse_trace<R: Read>(reader: R) -> Result<Vec<CallRecord>, TraceError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let layout = resolve_columns(csv_reader.byte_headers()?)?;
    debug!("Trace columns: source={}, target={}", layout.source, layout.target);

    let mut records = Vec::new();
    let mut row = ByteRecord::new();

    while csv_reader.read_byte_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_row(&row, layout, line)?);
    }

    debug!("Parsed {} call records", records.len());

    Ok(records)
}

/// Read a trace CSV from disk
///
/// **Public** - used by the runner and the `graph` command
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<CallRecord>, TraceError> {
    let path = path.as_ref();

    info!("Reading call trace from: {}", path.display());

    let file = File::open(path)?;
    parse_trace(file)
}

/// Validate the header row and locate the two columns
///
/// **Private** - internal helper for parse_trace
fn resolve_columns(header: &ByteRecord) -> Result<ColumnLayout, TraceError> {
    let names: Vec<String> = header
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    let position = |column: &str| names.iter().position(|name| name == column);

    match (names.len(), position(SOURCE_COLUMN), position(TARGET_COLUMN)) {
        (2, Some(source), Some(target)) => Ok(ColumnLayout { source, target }),
        _ => Err(TraceError::InvalidHeader(names.join(","))),
    }
}

/// Convert one data row into a call record
///
/// **Private** - internal helper for parse_trace
fn parse_row(row: &ByteRecord, layout: ColumnLayout, line: u64) -> Result<CallRecord, TraceError> {
    if row.len() != 2 {
        return Err(TraceError::MalformedRecord {
            line,
            reason: format!("expected 2 fields, found {}", row.len()),
        });
    }

    let source = decode_field(&row[layout.source], SOURCE_COLUMN, line)?;
    let target = decode_field(&row[layout.target], TARGET_COLUMN, line)?;

    Ok(CallRecord::new(source, target))
}

/// Decode one field into a node identifier
///
/// **Private** - internal helper for parse_row
fn decode_field(raw: &[u8], column: &'static str, line: u64) -> Result<String, TraceError> {
    let token = std::str::from_utf8(raw).map_err(|e| TraceError::UnsupportedType {
        line,
        column,
        reason: format!("not valid UTF-8 ({})", e),
    })?;

    if token.is_empty() {
        return Err(TraceError::UnsupportedType {
            line,
            column,
            reason: "empty token cannot identify a node".to_string(),
        });
    }

    Ok(token.to_string())
}
