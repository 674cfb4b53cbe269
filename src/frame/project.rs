//! Projection of flat vendor records into a string-typed `DataFrame`.

use crate::envelope::decode::Record;
use polars::prelude::*;
use serde_json::Value;

/// Converts a list of flat records into a DataFrame of string columns.
///
/// Rows keep the input order; columns appear in first-seen order across all
/// records. A field absent from a given record becomes a null in that row.
/// An empty record list yields an empty frame.
pub(crate) fn records_to_frame(records: &[Record]) -> PolarsResult<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key.as_str());
            }
        }
    }

    if names.is_empty() {
        return Ok(DataFrame::empty());
    }

    let columns: Vec<Column> = names
        .iter()
        .map(|name| {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|record| record.get(*name).and_then(value_to_string))
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();

    DataFrame::new(columns)
}

/// Renders a raw JSON value as the vendor's string form. The vendor delivers
/// strings even for numeric fields, but the occasional bare number or bool is
/// stringified rather than rejected.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
