pub mod domain;

pub use domain::{LogParseError, PlayError};
