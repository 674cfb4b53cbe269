use crate::envelope::error::EnvelopeError;
use crate::frame::error::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoserverError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("unknown model: {0}; please choose between HARMONIE and GFS")]
    UnknownModel(String),
}
