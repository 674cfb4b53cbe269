use crate::error::MeteoserverError;
use std::fmt;
use std::str::FromStr;

/// Upstream weather model used by the hourly-forecast endpoint.
///
/// - `Gfs`: GFS model for the BeNeLux. Hourly predictions for 4 days, then
///   three-hourly predictions for the next 10 days. New data at 0:30, 7:30,
///   12:30 and 18:30 CE(S)T.
/// - `Harmonie`: high-resolution HARMONIE model for the BeNeLux and HiRLAM
///   for the rest of Europe. Hourly predictions up to 48 hours in advance.
///   New data at 5:30, 11:30, 17:30 and 23:30 CE(S)T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Gfs,
    Harmonie,
}

impl Model {
    /// The endpoint URL serving this model's hourly forecasts.
    pub(crate) fn endpoint(&self) -> &'static str {
        match self {
            Model::Gfs => "https://data.meteoserver.nl/api/uurverwachting_gfs.php",
            Model::Harmonie => "https://data.meteoserver.nl/api/uurverwachting.php",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Gfs => write!(f, "GFS"),
            Model::Harmonie => write!(f, "HARMONIE"),
        }
    }
}

impl FromStr for Model {
    type Err = MeteoserverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GFS") {
            Ok(Model::Gfs)
        } else if s.eq_ignore_ascii_case("HARMONIE") {
            Ok(Model::Harmonie)
        } else {
            Err(MeteoserverError::UnknownModel(s.to_string()))
        }
    }
}
