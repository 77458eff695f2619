//! Group raw call records into weighted edges.
//!
//! Every distinct ordered `(source, target)` pair becomes one edge whose
//! weight is the number of records carrying that pair.
//!
//! Example: `[(main, parse), (main, parse), (parse, lex)]`
//! becomes `main -> parse (2)` and `parse -> lex (1)`.

use crate::parser::schema::{CallRecord, NodeId, WeightedEdge};
use crate::utils::config::{SOURCE_COLUMN, TARGET_COLUMN};
use crate::utils::error::TraceError;
use log::debug;
use std::collections::HashMap;

/// Aggregate call records into weighted edges
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Observed calls, in any order
///
/// # Returns
/// One edge per distinct `(source, target)` pair. The result does not depend
/// on input order; edges are listed by weight (descending), then by
/// endpoints, so reports are reproducible.
pub fn aggregate<N: NodeId>(records: &[CallRecord<N>]) -> Vec<WeightedEdge<N>> {
    debug!("Aggregating {} call records", records.len());

    let mut counts: HashMap<(&N, &N), u64> = HashMap::new();

    for record in records {
        *counts.entry((&record.source, &record.target)).or_insert(0) += 1;
    }

    let mut edges: Vec<WeightedEdge<N>> = counts
        .into_iter()
        .map(|((source, target), weight)| WeightedEdge::new(source.clone(), target.clone(), weight))
        .collect();

    edges.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    debug!("Aggregated into {} distinct edges", edges.len());

    edges
}

/// Aggregate rows of untyped string fields
///
/// **Public** - entry point for callers holding raw rows rather than records
///
/// Each row must hold exactly two non-empty fields: caller then callee.
/// The first bad row aborts aggregation; nothing is skipped.
///
/// # Errors
/// * `TraceError::MalformedRecord` - a row without exactly two fields
/// * `TraceError::UnsupportedType` - an empty field, which cannot key an edge
pub fn aggregate_fields<I, R, S>(rows: I) -> Result<Vec<WeightedEdge<String>>, TraceError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| record_from_fields(row, index as u64 + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(aggregate(&records))
}

/// Build a record from one row of fields
///
/// **Private** - internal helper for aggregate_fields
fn record_from_fields<R, S>(row: R, line: u64) -> Result<CallRecord<String>, TraceError>
where
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = row.into_iter().map(Into::into).collect();

    let [source, target]: [String; 2] =
        fields
            .try_into()
            .map_err(|fields: Vec<String>| TraceError::MalformedRecord {
                line,
                reason: format!("expected 2 fields, found {}", fields.len()),
            })?;

    let source = node_token(&source, SOURCE_COLUMN, line)?;
    let target = node_token(&target, TARGET_COLUMN, line)?;

    Ok(CallRecord::new(source, target))
}

/// Trimmed node identifier, rejecting blank fields
fn node_token(value: &str, column: &'static str, line: u64) -> Result<String, TraceError> {
    let token = value.trim();
    if token.is_empty() {
        return Err(TraceError::UnsupportedType {
            line,
            column,
            reason: "empty token cannot identify a node".to_string(),
        });
    }

    Ok(token.to_string())
}
