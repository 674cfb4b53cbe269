//! Schema-driven coercion of string columns to typed columns.
//!
//! Coercion is permissive: a cell that does not parse becomes a null in that
//! row, the rest of the row is untouched and nothing is reported. Columns
//! absent from the frame are skipped, and columns that already carry a
//! non-string dtype are left alone, so coercing twice is a no-op.

use crate::types::schema::{ColumnKind, LOCAL_TIME_FORMAT};
use chrono::NaiveDateTime;
use polars::prelude::*;

pub(crate) fn coerce_frame(
    df: &mut DataFrame,
    schema: &[(&str, ColumnKind)],
) -> PolarsResult<()> {
    // Clock-time columns borrow the date from their sibling local-time
    // column, so they must be handled before that sibling is coerced away
    // from strings.
    for &(name, kind) in schema {
        if let ColumnKind::ClockTime { date_from } = kind {
            coerce_clock_time(df, name, date_from)?;
        }
    }

    for &(name, kind) in schema {
        let Ok(col) = df.column(name) else { continue };
        if !matches!(col.dtype(), DataType::String) {
            continue;
        }
        match kind {
            ColumnKind::Int => {
                let values: Vec<Option<i64>> = col
                    .str()?
                    .into_iter()
                    .map(|v| v.and_then(|s| s.trim().parse::<i64>().ok()))
                    .collect();
                df.with_column(Series::new(name.into(), values))?;
            }
            ColumnKind::Float => {
                let values: Vec<Option<f64>> = col
                    .str()?
                    .into_iter()
                    .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
                    .collect();
                df.with_column(Series::new(name.into(), values))?;
            }
            ColumnKind::LocalDateTime => {
                let values: Vec<Option<NaiveDateTime>> = col
                    .str()?
                    .into_iter()
                    .map(|v| {
                        v.and_then(|s| {
                            NaiveDateTime::parse_from_str(s.trim(), LOCAL_TIME_FORMAT).ok()
                        })
                    })
                    .collect();
                df.with_column(Series::new(name.into(), values))?;
            }
            ColumnKind::ClockTime { .. } => {} // handled above
        }
    }

    Ok(())
}

/// Coerces a time-of-day column ("08:47") to a full timestamp, taking the
/// date from the first 10 characters of the sibling column's raw string.
fn coerce_clock_time(df: &mut DataFrame, name: &str, date_from: &str) -> PolarsResult<()> {
    let Ok(col) = df.column(name) else {
        return Ok(());
    };
    if !matches!(col.dtype(), DataType::String) {
        return Ok(());
    }

    let dates = date_prefixes(df, date_from);
    let values: Vec<Option<NaiveDateTime>> = col
        .str()?
        .into_iter()
        .zip(dates.iter())
        .map(|(time, date)| match (time, date) {
            (Some(time), Some(date)) => {
                let stamp = format!("{} {}", date, time.trim());
                NaiveDateTime::parse_from_str(&stamp, LOCAL_TIME_FORMAT).ok()
            }
            _ => None,
        })
        .collect();

    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// The `%d-%m-%Y` date prefix of each raw value in the named string column,
/// or nulls when the column is missing, not a string column, or a value is
/// too short.
fn date_prefixes(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    let Ok(col) = df.column(name) else {
        return vec![None; df.height()];
    };
    let Ok(ca) = col.str() else {
        return vec![None; df.height()];
    };
    ca.into_iter()
        .map(|v| v.and_then(|s| s.get(..10)).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::schema::{HOURLY_COERCIONS, SUN_COERCIONS};
    use chrono::NaiveDate;

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

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn coerces_int_float_and_datetime() {
        let mut df = string_frame(&[
            ("tijd", &[Some("1609459200")]),
            ("tijd_nl", &[Some("01-01-2021 01:00")]),
            ("temp", &[Some("4.1")]),
            ("windrltr", &[Some("NNW")]),
        ]);
        coerce_frame(&mut df, HOURLY_COERCIONS).unwrap();

        let tijd = df.column("tijd").unwrap();
        assert_eq!(tijd.i64().unwrap().get(0), Some(1609459200));
        let temp = df.column("temp").unwrap();
        assert_eq!(temp.f64().unwrap().get(0), Some(4.1));
        let tijd_nl = df.column("tijd_nl").unwrap();
        assert_eq!(
            tijd_nl.datetime().unwrap().as_datetime_iter().next().unwrap(),
            Some(local(2021, 1, 1, 1, 0))
        );
        // Not in the schema, stays a raw string.
        let ltr = df.column("windrltr").unwrap();
        assert_eq!(ltr.str().unwrap().get(0), Some("NNW"));
    }

    #[test]
    fn unparseable_cell_becomes_null_and_row_survives() {
        let mut df = string_frame(&[
            ("tijd_nl", &[Some("01-01-2021 01:00"), Some("yesterday-ish")]),
            ("temp", &[Some("4.1"), Some("3.8")]),
        ]);
        coerce_frame(&mut df, HOURLY_COERCIONS).unwrap();

        let stamps: Vec<Option<NaiveDateTime>> = df
            .column("tijd_nl")
            .unwrap()
            .datetime()
            .unwrap()
            .as_datetime_iter()
            .collect();
        assert_eq!(stamps[0], Some(local(2021, 1, 1, 1, 0)));
        assert_eq!(stamps[1], None);
        // The other cell in the bad row is intact.
        assert_eq!(df.column("temp").unwrap().f64().unwrap().get(1), Some(3.8));
    }

    #[test]
    fn sunrise_takes_date_from_local_time_column() {
        let mut df = string_frame(&[
            ("cet", &[Some("01-01-2021 12:30")]),
            ("sr", &[Some("08:47")]),
            ("ss", &[Some("16:38")]),
        ]);
        coerce_frame(&mut df, SUN_COERCIONS).unwrap();

        let sr = df.column("sr").unwrap().datetime().unwrap();
        assert_eq!(
            sr.as_datetime_iter().next().unwrap(),
            Some(local(2021, 1, 1, 8, 47))
        );
        let ss = df.column("ss").unwrap().datetime().unwrap();
        assert_eq!(
            ss.as_datetime_iter().next().unwrap(),
            Some(local(2021, 1, 1, 16, 38))
        );
    }

    #[test]
    fn sunrise_without_local_time_sibling_is_null() {
        let mut df = string_frame(&[("sr", &[Some("08:47")])]);
        coerce_frame(&mut df, SUN_COERCIONS).unwrap();
        let sr = df.column("sr").unwrap().datetime().unwrap();
        assert_eq!(sr.as_datetime_iter().next().unwrap(), None);
    }

    #[test]
    fn missing_schema_columns_are_skipped() {
        let mut df = string_frame(&[("temp", &[Some("4.1")])]);
        coerce_frame(&mut df, SUN_COERCIONS).unwrap();
        assert_eq!(df.width(), 1);
        assert_eq!(df.column("temp").unwrap().f64().unwrap().get(0), Some(4.1));
    }

    #[test]
    fn coercion_is_idempotent() {
        let mut df = string_frame(&[("tijd", &[Some("1609459200")])]);
        coerce_frame(&mut df, HOURLY_COERCIONS).unwrap();
        coerce_frame(&mut df, HOURLY_COERCIONS).unwrap();
        assert_eq!(
            df.column("tijd").unwrap().i64().unwrap().get(0),
            Some(1609459200)
        );
    }
}
