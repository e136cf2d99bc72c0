//! RFC 3339 body-field parsing.

use jiff::Timestamp;
use salvo::prelude::StatusError;

use crate::extensions::*;

/// Parses request body timestamp strings, naming the offending field in the
/// 400 response.
pub(crate) trait TimestampFieldExt {
    fn parse_timestamp(&self, field: &str) -> Result<Timestamp, StatusError>;
}

impl TimestampFieldExt for str {
    fn parse_timestamp(&self, field: &str) -> Result<Timestamp, StatusError> {
        self.parse::<Timestamp>()
            .or_400(&format!("could not parse \"{field}\" as an RFC 3339 timestamp"))
    }
}
