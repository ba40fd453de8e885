//! Error types for the decoder.

use std::num::ParseIntError;

use thiserror::Error;

/// An error that can occur while decoding a magnet URI.
///
/// Every variant is terminal: no partial link is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input does not contain the `magnet:?` prefix.
    #[error("uri does not contain the magnet:? prefix")]
    UnsupportedFormat,

    /// A percent-decoded parameter holds a malformed escape sequence.
    #[error("invalid percent-encoding in `{key}`: {value}")]
    InvalidEncoding { key: String, value: String },

    /// The `xl` parameter is not a base-10 integer.
    #[error("invalid exact length `{value}`: {source}")]
    InvalidLength {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
