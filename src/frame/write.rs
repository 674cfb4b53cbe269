//! Serialization of frames back to the vendor's JSON file shape.
//!
//! The output mirrors a downloaded envelope: `{"plaatsnaam":[{"plaats":...}]}`
//! followed by the data arrays, written as one compact JSON document. Typed
//! cells produced by coercion are rendered back to their string form, since
//! the target format carries strings throughout.

use crate::envelope::decode::Record;
use crate::frame::error::FrameError;
use log::info;
use polars::prelude::*;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Rendering of coerced timestamps, matching the vendor's string shape for
/// typed values.
const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes a solar ("Zon Actueel") envelope to disc. The file ends with a
/// trailing newline, like a vendor download of this kind.
pub(crate) fn write_sun_envelope(
    path: &Path,
    location: &str,
    current: &DataFrame,
    forecast: &DataFrame,
) -> Result<(), FrameError> {
    let mut envelope = Map::new();
    envelope.insert("plaatsnaam".to_string(), json!([{ "plaats": location }]));
    envelope.insert("current".to_string(), records_value(current)?);
    envelope.insert("forecast".to_string(), records_value(forecast)?);

    let mut out = serde_json::to_string(&Value::Object(envelope))?;
    out.push('\n');
    write_file(path, &out)
}

/// Writes an hourly-forecast ("Uurverwachting") envelope to disc. No trailing
/// newline here; downloads of this kind end at the closing brace.
pub(crate) fn write_forecast_envelope(
    path: &Path,
    location: &str,
    data: &DataFrame,
) -> Result<(), FrameError> {
    let mut envelope = Map::new();
    envelope.insert("plaatsnaam".to_string(), json!([{ "plaats": location }]));
    envelope.insert("data".to_string(), records_value(data)?);

    let out = serde_json::to_string(&Value::Object(envelope))?;
    write_file(path, &out)
}

fn write_file(path: &Path, contents: &str) -> Result<(), FrameError> {
    fs::write(path, contents).map_err(|e| FrameError::FileWrite(path.to_path_buf(), e))?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn records_value(df: &DataFrame) -> Result<Value, FrameError> {
    let records = frame_to_records(df)?;
    Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
}

/// Re-expands a frame into a list of flat records, one per row, columns in
/// the frame's current order. Every non-null cell becomes a JSON string.
pub(crate) fn frame_to_records(df: &DataFrame) -> Result<Vec<Record>, FrameError> {
    let mut columns: Vec<(String, Vec<Option<String>>)> = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        columns.push((col.name().to_string(), column_to_strings(col)?));
    }

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut record = Map::new();
        for (name, values) in &columns {
            let cell = match &values[row] {
                Some(s) => Value::String(s.clone()),
                None => Value::Null,
            };
            record.insert(name.clone(), cell);
        }
        records.push(record);
    }
    Ok(records)
}

fn column_to_strings(col: &Column) -> Result<Vec<Option<String>>, FrameError> {
    let values = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        DataType::Int64 => col
            .i64()?
            .into_iter()
            .map(|v| v.map(|x| x.to_string()))
            .collect(),
        DataType::Float64 => col
            .f64()?
            .into_iter()
            .map(|v| v.map(|x| x.to_string()))
            .collect(),
        DataType::Datetime(_, _) => col
            .datetime()?
            .as_datetime_iter()
            .map(|v| v.map(|ndt| ndt.format(OUTPUT_TIME_FORMAT).to_string()))
            .collect(),
        _ => col
            .as_materialized_series()
            .iter()
            .map(|av| match av {
                AnyValue::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::coerce::coerce_frame;
    use crate::types::schema::SUN_COERCIONS;

    fn string_frame(columns: &[(&str, &[Option<&str>])]) -> DataFrame {
        let cols: Vec<Column> = columns
            .iter()
            .map(|(name, values)| {
                let owned: Vec<Option<String>> =
                    values.iter().map(|v| v.map(str::to_string)).collect();
                Column::new((*name).into(), owned)
            })
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn raw_frame_round_trips_to_identical_records() {
        let df = string_frame(&[
            ("time", &[Some("1609459200"), Some("1609462800")]),
            ("temp", &[Some("4.1"), None]),
        ]);
        let records = frame_to_records(&df).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["time"], Value::from("1609459200"));
        assert_eq!(records[1]["temp"], Value::Null);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["time", "temp"]);
    }

    #[test]
    fn coerced_values_are_rendered_back_as_strings() {
        let mut df = string_frame(&[
            ("time", &[Some("1609459200")]),
            ("cet", &[Some("01-01-2021 12:30")]),
            ("temp", &[Some("4.5")]),
        ]);
        coerce_frame(&mut df, SUN_COERCIONS).unwrap();

        let records = frame_to_records(&df).unwrap();
        assert_eq!(records[0]["time"], Value::from("1609459200"));
        assert_eq!(records[0]["cet"], Value::from("2021-01-01 12:30:00"));
        assert_eq!(records[0]["temp"], Value::from("4.5"));
    }

    #[test]
    fn sun_writer_appends_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sun.json");
        let current = string_frame(&[("time", &[Some("1609459200")])]);
        let forecast = DataFrame::empty();
        write_sun_envelope(&path, "De Bilt", &current, &forecast).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("]}\n"));
        assert!(written.starts_with("{\"plaatsnaam\":[{\"plaats\":\"De Bilt\"}]"));
    }

    #[test]
    fn forecast_writer_is_compact_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.json");
        let data = string_frame(&[("tijd", &[Some("1609459200")])]);
        write_forecast_envelope(&path, "Utrecht", &data).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\"plaatsnaam\":[{\"plaats\":\"Utrecht\"}],\"data\":[{\"tijd\":\"1609459200\"}]}"
        );
    }
}
