//! Decoding of the vendor's JSON envelopes.
//!
//! Every endpoint returns a top-level object with a `plaatsnaam` array (one
//! object holding the location name) and one or two data arrays of flat
//! string-valued records. Record shapes are not validated here: missing
//! fields simply become absent columns during tabular projection.

use crate::envelope::error::EnvelopeError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One flat vendor record: field name to raw JSON value.
pub(crate) type Record = Map<String, Value>;

#[derive(Debug, Deserialize)]
pub(crate) struct Place {
    pub(crate) plaats: String,
}

/// Envelope of the "Zon Actueel" (solar) endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SunEnvelope {
    #[serde(default)]
    pub(crate) plaatsnaam: Vec<Place>,
    #[serde(default)]
    pub(crate) current: Vec<Record>,
    #[serde(default)]
    pub(crate) forecast: Vec<Record>,
}

/// Envelope of the "Uurverwachting" (hourly forecast) endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEnvelope {
    #[serde(default)]
    pub(crate) plaatsnaam: Vec<Place>,
    #[serde(default)]
    pub(crate) data: Vec<Record>,
}

impl SunEnvelope {
    pub(crate) fn parse(text: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub(crate) fn location(&self) -> Result<&str, EnvelopeError> {
        first_place(&self.plaatsnaam)
    }
}

impl ForecastEnvelope {
    pub(crate) fn parse(text: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub(crate) fn location(&self) -> Result<&str, EnvelopeError> {
        first_place(&self.plaatsnaam)
    }
}

fn first_place(plaatsnaam: &[Place]) -> Result<&str, EnvelopeError> {
    plaatsnaam
        .first()
        .map(|p| p.plaats.as_str())
        .ok_or(EnvelopeError::MissingLocation)
}
