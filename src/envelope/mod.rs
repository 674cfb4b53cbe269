pub(crate) mod decode;
pub mod error;
pub(crate) mod transport;
