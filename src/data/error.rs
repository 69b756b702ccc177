use thiserror::Error;

/// Reasons a record cannot be turned into an `(x, y)` series.
///
/// An empty series is not an error; every variant here means the input is
/// malformed.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("field '{field}' must be a base64 string, a number array or null")]
    InvalidValue {
        field: String,
        #[source]
        source: Option<serde_json::Error>,
    },
    #[error("field '{x_field}' and '{y_field}' use different encodings")]
    MixedEncoding { x_field: String, y_field: String },
    #[error("field '{field}' is not valid base64")]
    InvalidBase64 {
        field: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("field '{field}' decodes to {len} bytes, not a multiple of 8")]
    Misaligned { field: String, len: usize },
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}
