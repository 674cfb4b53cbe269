//! Declarative per-endpoint column schemas.
//!
//! Each endpoint delivers flat records whose values are all strings. The
//! tables below say which columns get coerced to which type; anything not
//! listed stays a string. Column presence is never guaranteed across vendor
//! responses, so every entry is applied only if the column exists.

/// Target type of a coerced column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    /// Whole-number magnitude or category code.
    Int,
    /// Fractional magnitude.
    Float,
    /// Local timestamp in `%d-%m-%Y %H:%M` format.
    LocalDateTime,
    /// Time-of-day only. The vendor omits the date, so it is copied from the
    /// first 10 characters of the named sibling column before parsing.
    ClockTime { date_from: &'static str },
}

/// Timestamp format used throughout the vendor's JSON.
pub(crate) const LOCAL_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Coercions for the "Zon Actueel" (solar) endpoint, covering both the
/// `current` and `forecast` arrays.
///
/// | time      | unix timestamp                              |
/// | cet       | local time in the Netherlands (CET/CEST)    |
/// | elev, az  | solar elevation / azimuth (degrees)         |
/// | temp      | temperature (deg C)                         |
/// | gr        | global radiation intensity (W/m2)           |
/// | sd        | sunshine minutes in the current hour        |
/// | tc/lc/mc/hc | total/low/mid/high cloud cover (%)        |
/// | vis       | visibility (meters)                         |
/// | prec      | precipitation in the current hour (mm)      |
/// | sr, ss    | time of sunrise / sunset today              |
///
/// `station` (KNMI station name) stays a string.
pub(crate) const SUN_COERCIONS: &[(&str, ColumnKind)] = &[
    ("time", ColumnKind::Int),
    ("cet", ColumnKind::LocalDateTime),
    ("elev", ColumnKind::Float),
    ("az", ColumnKind::Float),
    ("temp", ColumnKind::Float),
    ("gr", ColumnKind::Int),
    ("sd", ColumnKind::Int),
    ("tc", ColumnKind::Int),
    ("lc", ColumnKind::Int),
    ("mc", ColumnKind::Int),
    ("hc", ColumnKind::Int),
    ("vis", ColumnKind::Int),
    ("prec", ColumnKind::Float),
    ("sr", ColumnKind::ClockTime { date_from: "cet" }),
    ("ss", ColumnKind::ClockTime { date_from: "cet" }),
];

/// Coercions for the "Uurverwachting" (hourly forecast) endpoint.
///
/// `windrltr` is a wind-direction abbreviation ("NNW") with no numeric
/// equivalent and is left alone.
pub(crate) const HOURLY_COERCIONS: &[(&str, ColumnKind)] = &[
    ("tijd", ColumnKind::Int),
    ("tijd_nl", ColumnKind::LocalDateTime),
    ("offset", ColumnKind::Float),
    ("loc", ColumnKind::Float),
    ("temp", ColumnKind::Float),
    ("winds", ColumnKind::Float),
    ("windb", ColumnKind::Int),
    ("windknp", ColumnKind::Float),
    ("windkmh", ColumnKind::Float),
    ("windr", ColumnKind::Int),
    ("gust", ColumnKind::Float),
    ("gustb", ColumnKind::Int),
    ("gustkt", ColumnKind::Float),
    ("gustkmh", ColumnKind::Float),
    ("vis", ColumnKind::Float),
    ("neersl", ColumnKind::Float),
    ("luchtd", ColumnKind::Float),
    ("luchtdmmhg", ColumnKind::Float),
    ("luchtdinhg", ColumnKind::Float),
    ("rv", ColumnKind::Float),
    ("gr", ColumnKind::Int),
    ("hw", ColumnKind::Int),
    ("mw", ColumnKind::Int),
    ("lw", ColumnKind::Int),
    ("tw", ColumnKind::Int),
    ("cape", ColumnKind::Int),
    ("cond", ColumnKind::Int),
    ("ico", ColumnKind::Int),
];

/// Obsolescent and duplicate (non-SI unit) hourly-forecast columns, removed
/// unless the full frame is requested:
/// - the obsolescent `loc` column;
/// - wind speed in Beaufort/knots/km/h, computable from SI `winds` (m/s);
/// - wind gusts in Beaufort/knots/km/h, computable from SI `gust` (m/s);
/// - air pressure in mmHg/inHg, computable from `luchtd` (hPa).
pub(crate) const HOURLY_PRUNED: &[&str] = &[
    "loc",
    "windb",
    "windknp",
    "windkmh",
    "gustb",
    "gustkt",
    "gustkmh",
    "luchtdmmhg",
    "luchtdinhg",
];
