//! # Errors
//!
//! This module generalizes errors for all the included codec functions.

/// A convenience wrapper of `Result` that relies on [`Error`] to hold errors.
pub type Result<T> = std::result::Result<T, Error>;

/// This crate's Error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The bytes could not be parsed against the target message schema
  /// (truncated varint, invalid wire type, bad length prefix...).
  #[error("Malformed binary encoding: {0}")]
  MalformedEncoding(#[from] prost::DecodeError),
  /// The output buffer could not hold the encoded message.
  #[error("Binary encoding failed: {0}")]
  Encoding(#[from] prost::EncodeError),
  /// The text is not valid JSON for the target message schema, or names a field the schema does not declare.
  #[error("Text parse error: {0}")]
  TextParse(#[source] serde_json::Error),
  /// The message could not be rendered as JSON text.
  #[error("Text rendering failed: {0}")]
  TextRender(#[source] serde_json::Error),
}
