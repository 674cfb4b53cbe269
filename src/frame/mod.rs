pub(crate) mod coerce;
pub mod error;
pub(crate) mod project;
pub(crate) mod prune;
pub(crate) mod write;
