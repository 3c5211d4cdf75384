#![deny(
  clippy::expect_used,
  clippy::explicit_deref_methods,
  clippy::cloned_instead_of_copied,
  clippy::explicit_into_iter_loop,
  clippy::implicit_clone,
  clippy::inefficient_to_string,
  clippy::manual_ok_or,
  clippy::map_flatten,
  clippy::map_unwrap_or,
  clippy::must_use_candidate,
  clippy::needless_pass_by_value,
  clippy::redundant_else,
  clippy::semicolon_if_nothing_returned,
  clippy::trivially_copy_pass_by_ref,
  clippy::str_to_string,
  clippy::try_err,
  clippy::derivable_impls,
  bad_style,
  deprecated,
  missing_copy_implementations,
  missing_debug_implementations,
  non_shorthand_field_patterns,
  overflowing_literals,
  path_statements,
  trivial_bounds,
  type_alias_bounds,
  unconditional_recursion,
  unsafe_code,
  unused_allocation,
  unused_comparisons,
  unused_parens,
  while_true,
  missing_docs
)]

//! # proto-codec
//!
//! One narrow capability, [`Codec`], for turning protobuf messages into bytes or JSON text and back. The binary
//! form is the protobuf wire format (via [prost](https://docs.rs/prost)), the text form is the canonical protobuf
//! JSON mapping (via [serde_json](https://docs.rs/serde_json)).
//!
//! The two decoders deliberately differ in strictness: binary decoding skips fields the target schema does not
//! declare, text decoding rejects them.

pub mod binary;
pub mod errors;
pub mod json;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use errors::{Error, Result};

/// Any schema-compiled message the codecs can handle: it knows its protobuf wire form, has an all-default value,
/// and carries the serde attributes of the canonical JSON mapping.
pub trait Message: prost::Message + Default + Serialize + DeserializeOwned {}

impl<T> Message for T where T: prost::Message + Default + Serialize + DeserializeOwned {}

/// Encodes and decodes messages in both the binary and the structured text representation.
///
/// Implementations must be pure: no I/O, no shared state between calls.
pub trait Codec {
  /// Encodes a message into its binary representation.
  fn encode_binary<M: Message>(&self, message: &M) -> Result<Vec<u8>>;

  /// Decodes a binary representation into a new message, failing with [`Error::MalformedEncoding`].
  fn decode_binary<M: Message>(&self, buf: &[u8]) -> Result<M>;

  /// Renders a message as structured text, listing only populated fields.
  fn encode_text<M: Message>(&self, message: &M) -> Result<String>;

  /// Parses structured text into a new message, failing with [`Error::TextParse`].
  fn decode_text<M: Message>(&self, text: &str) -> Result<M>;

  /// Replaces `target` with the message decoded from `buf`. `target` is left untouched on failure.
  fn decode_binary_into<M: Message>(&self, buf: &[u8], target: &mut M) -> Result<()> {
    *target = self.decode_binary(buf)?;
    Ok(())
  }

  /// Replaces `target` with the message parsed from `text`. `target` is left untouched on failure.
  fn decode_text_into<M: Message>(&self, text: &str, target: &mut M) -> Result<()> {
    *target = self.decode_text(text)?;
    Ok(())
  }
}

/// The [`Codec`] backed by prost for the wire format and serde_json for the JSON mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtoJsonCodec {
  pretty: bool,
}

impl ProtoJsonCodec {
  /// Creates a codec emitting compact JSON.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a codec emitting indented JSON.
  #[must_use]
  pub fn pretty() -> Self {
    Self { pretty: true }
  }

  /// Whether the text output is indented.
  #[must_use]
  pub fn is_pretty(&self) -> bool {
    self.pretty
  }
}

impl Codec for ProtoJsonCodec {
  fn encode_binary<M: Message>(&self, message: &M) -> Result<Vec<u8>> {
    binary::serialize(message)
  }

  fn decode_binary<M: Message>(&self, buf: &[u8]) -> Result<M> {
    binary::deserialize(buf)
  }

  fn encode_text<M: Message>(&self, message: &M) -> Result<String> {
    json::to_text(message, self.pretty)
  }

  fn decode_text<M: Message>(&self, text: &str) -> Result<M> {
    json::from_text(text)
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::*;

  #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
  #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
  struct Note {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    title: String,
    #[prost(string, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
  }

  fn note() -> Note {
    Note {
      title: "groceries".to_owned(),
      tags: vec!["home".to_owned(), "weekly".to_owned()],
    }
  }

  #[test_log::test]
  fn binary_round_trip() {
    let codec = ProtoJsonCodec::new();
    let bytes = codec.encode_binary(&note()).unwrap();
    let decoded: Note = codec.decode_binary(&bytes).unwrap();
    assert_eq!(decoded, note());
  }

  #[test_log::test]
  fn text_round_trip() {
    let codec = ProtoJsonCodec::new();
    let text = codec.encode_text(&note()).unwrap();
    assert_eq!(text, r#"{"title":"groceries","tags":["home","weekly"]}"#);
    let decoded: Note = codec.decode_text(&text).unwrap();
    assert_eq!(decoded, note());
  }

  #[test]
  fn failed_decode_leaves_target_untouched() {
    let codec = ProtoJsonCodec::new();
    let mut target = note();

    let err = codec.decode_binary_into(&[0x0a, 0x05, b'a'], &mut target).unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));
    assert_eq!(target, note());

    let err = codec.decode_text_into(r#"{"title":"x","author":"y"}"#, &mut target).unwrap_err();
    assert!(matches!(err, Error::TextParse(_)));
    assert_eq!(target, note());
  }

  #[test]
  fn successful_decode_replaces_target() {
    let codec = ProtoJsonCodec::new();
    let mut target = note();
    codec.decode_text_into(r#"{"title":"chores"}"#, &mut target).unwrap();
    assert_eq!(target.title, "chores");
    assert!(target.tags.is_empty());
  }

  #[test]
  fn pretty_flag() {
    assert!(ProtoJsonCodec::pretty().is_pretty());
    assert!(!ProtoJsonCodec::new().is_pretty());
  }
}
