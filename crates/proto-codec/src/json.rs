//! Canonical protobuf JSON mapping on top of `serde_json`.
//!
//! Message types opt into the mapping with serde attributes: lowerCamelCase field names, `deny_unknown_fields`,
//! defaults skipped on output, and the field helpers below for the scalar types whose JSON form differs from
//! serde's default one.
//!
//! | Proto type | JSON output | JSON input |
//! |------------|-------------|------------|
//! | `int64`    | `"12345"`   | string, number or `null` |
//! | `int32`    | `42`        | number, string or `null` |
//! | enum       | `"MONDAY"`  | known name, any number or `null` |
//!
//! Every other field that is not an `Option` reads `null` as its default through [`null_as_default`].

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use log::debug;
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, Result};

/// Renders a message as JSON text, compact or indented.
pub fn to_text<M>(message: &M, pretty: bool) -> Result<String>
where
  M: Serialize,
{
  let text = if pretty {
    serde_json::to_string_pretty(message)
  } else {
    serde_json::to_string(message)
  }
  .map_err(Error::TextRender)?;
  debug!("rendered message as {} bytes of JSON", text.len());
  Ok(text)
}

/// Parses JSON text into the target message type. Field names the schema does not declare are rejected.
pub fn from_text<M>(text: &str) -> Result<M>
where
  M: DeserializeOwned,
{
  serde_json::from_str(text).map_err(Error::TextParse)
}

/// `skip_serializing_if` predicate for scalar fields: proto3 JSON omits values equal to the field default.
pub fn is_default<T>(value: &T) -> bool
where
  T: Default + PartialEq,
{
  *value == T::default()
}

/// `deserialize_with` helper for strings, bools, repeated fields and the like: `null` reads as the default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A protobuf enumeration with its symbolic lookup table.
///
/// Enum fields are stored as raw `i32` so that numbers unknown to the schema survive decoding; this trait maps
/// between those numbers and the declared names.
pub trait ProtoEnum: Sized + Copy + Into<i32> + TryFrom<i32> {
  /// The name of the value as declared in the schema.
  fn as_str_name(&self) -> &'static str;
  /// Looks a value up by its declared name.
  fn from_str_name(name: &str) -> Option<Self>;
}

/// Field helper for enum fields, generic over the enumeration type. Use it through [`json_enum!`](crate::json_enum).
pub mod enumeration {
  use super::*;

  /// Writes the symbolic name, or the raw number when the schema does not declare it.
  pub fn serialize<E, S>(value: &i32, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    E: ProtoEnum,
    S: Serializer,
  {
    match E::try_from(*value) {
      Ok(known) => serializer.serialize_str(known.as_str_name()),
      Err(_) => serializer.serialize_i32(*value),
    }
  }

  /// Reads a declared name or any number.
  pub fn deserialize<'de, E, D>(deserializer: D) -> std::result::Result<i32, D::Error>
  where
    E: ProtoEnum,
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(EnumVisitor::<E>(PhantomData))
  }

  struct EnumVisitor<T>(PhantomData<T>);

  impl<'de, T> Visitor<'de> for EnumVisitor<T>
  where
    T: ProtoEnum,
  {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("an enum value name or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<i32, E> {
      T::from_str_name(v)
        .map(Into::into)
        .ok_or_else(|| E::custom(format!("unknown enum value name \"{}\"", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i32, E> {
      i32::try_from(v).map_err(|_| E::custom(format!("enum number {} out of range", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i32, E> {
      i32::try_from(v).map_err(|_| E::custom(format!("enum number {} out of range", v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<i32, E> {
      Ok(0)
    }
  }
}

/// Field helper for `int64`: written as a JSON string, read from a string or a number (`1e3` included).
pub mod int64 {
  use super::*;

  /// Writes the value as a decimal string.
  pub fn serialize<S>(value: &i64, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(value)
  }

  /// Reads a decimal string, a number or `null`.
  pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(IntegerVisitor::<i64>(PhantomData))
  }
}

/// Field helper for `int32`: written as a JSON number, read from a number or a string.
pub mod int32 {
  use super::*;

  /// Writes the value as a number.
  pub fn serialize<S>(value: &i32, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_i32(*value)
  }

  /// Reads a number, a decimal string or `null`.
  pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(IntegerVisitor::<i32>(PhantomData))
  }
}

struct IntegerVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IntegerVisitor<T>
where
  T: Default + FromStr + TryFrom<i64> + TryFrom<u64>,
{
  type Value = T;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("an integer or a decimal string")
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<T, E> {
    <T as TryFrom<i64>>::try_from(v).map_err(|_| E::custom(format!("integer {} out of range", v)))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<T, E> {
    <T as TryFrom<u64>>::try_from(v).map_err(|_| E::custom(format!("integer {} out of range", v)))
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<T, E> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
      return Err(E::custom(format!("{} is not an integer in range", v)));
    }
    self.visit_i64(v as i64)
  }

  fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<T, E> {
    v.parse()
      .map_err(|_| E::custom(format!("\"{}\" is not a valid integer", v)))
  }

  fn visit_unit<E: de::Error>(self) -> std::result::Result<T, E> {
    Ok(T::default())
  }
}

/// Declares a serde `with` module for one enumeration type, so enum fields can be annotated with
/// `#[serde(with = "module")]`.
///
/// Must be invoked in the module that declares the enumeration.
///
///```
/// use proto_codec::json::ProtoEnum;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
/// #[repr(i32)]
/// pub enum Suit {
///   Unspecified = 0,
///   Hearts = 1,
/// }
///
/// impl ProtoEnum for Suit {
///   fn as_str_name(&self) -> &'static str {
///     match self {
///       Suit::Unspecified => "SUIT_UNSPECIFIED",
///       Suit::Hearts => "HEARTS",
///     }
///   }
///
///   fn from_str_name(name: &str) -> Option<Self> {
///     match name {
///       "SUIT_UNSPECIFIED" => Some(Suit::Unspecified),
///       "HEARTS" => Some(Suit::Hearts),
///       _ => None,
///     }
///   }
/// }
///
/// proto_codec::json_enum!(suit_json, Suit);
///
/// #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
/// struct Card {
///   #[prost(enumeration = "Suit", tag = "1")]
///   #[serde(with = "suit_json")]
///   suit: i32,
/// }
///
/// fn main() {
///   let card = Card { suit: Suit::Hearts as i32 };
///   assert_eq!(serde_json::to_string(&card).unwrap(), r#"{"suit":"HEARTS"}"#);
/// }
///```
#[macro_export]
macro_rules! json_enum {
  ($module:ident, $enum:ident) => {
    #[doc(hidden)]
    pub mod $module {
      pub fn serialize<S>(value: &i32, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
      where
        S: ::serde::Serializer,
      {
        $crate::json::enumeration::serialize::<super::$enum, S>(value, serializer)
      }

      pub fn deserialize<'de, D>(deserializer: D) -> ::std::result::Result<i32, D::Error>
      where
        D: ::serde::Deserializer<'de>,
      {
        $crate::json::enumeration::deserialize::<super::$enum, D>(deserializer)
      }
    }
  };
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::*;

  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
  #[repr(i32)]
  pub enum Level {
    Unspecified = 0,
    High = 1,
  }

  impl ProtoEnum for Level {
    fn as_str_name(&self) -> &'static str {
      match self {
        Level::Unspecified => "LEVEL_UNSPECIFIED",
        Level::High => "HIGH",
      }
    }

    fn from_str_name(name: &str) -> Option<Self> {
      match name {
        "LEVEL_UNSPECIFIED" => Some(Level::Unspecified),
        "HIGH" => Some(Level::High),
        _ => None,
      }
    }
  }

  crate::json_enum!(level_json, Level);

  #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
  #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
  struct Sample {
    #[prost(int64, tag = "1")]
    #[serde(with = "int64", skip_serializing_if = "is_default")]
    big_id: i64,
    #[prost(int32, tag = "2")]
    #[serde(with = "int32", skip_serializing_if = "is_default")]
    small_id: i32,
    #[prost(enumeration = "Level", tag = "3")]
    #[serde(with = "level_json", skip_serializing_if = "is_default")]
    level: i32,
  }

  #[test_log::test]
  fn defaults_are_omitted() {
    assert_eq!(to_text(&Sample::default(), false).unwrap(), "{}");
  }

  #[test]
  fn int64_is_quoted_and_int32_is_not() {
    let sample = Sample {
      big_id: 12345,
      small_id: 7,
      level: Level::High as i32,
    };
    assert_eq!(
      to_text(&sample, false).unwrap(),
      r#"{"bigId":"12345","smallId":7,"level":"HIGH"}"#
    );
  }

  #[test]
  fn integers_parse_from_strings_and_numbers() {
    let sample: Sample = from_text(r#"{"bigId":12345,"smallId":"7"}"#).unwrap();
    assert_eq!(sample.big_id, 12345);
    assert_eq!(sample.small_id, 7);
  }

  #[test]
  fn null_parses_as_default() {
    let sample: Sample = from_text(r#"{"bigId":null,"level":null}"#).unwrap();
    assert_eq!(sample, Sample::default());
  }

  #[test]
  fn integral_floats_parse_as_integers() {
    let sample: Sample = from_text(r#"{"bigId":1e3,"smallId":7.0}"#).unwrap();
    assert_eq!(sample.big_id, 1000);
    assert_eq!(sample.small_id, 7);
  }

  #[test]
  fn fractional_and_huge_floats_are_rejected() {
    let result: Result<Sample> = from_text(r#"{"smallId":1.5}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
    let result: Result<Sample> = from_text(r#"{"bigId":1e19}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
    let result: Result<Sample> = from_text(r#"{"smallId":3e9}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
  }

  #[derive(Debug, Default, PartialEq, Deserialize)]
  #[serde(default)]
  struct Labels {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    active: bool,
    #[serde(deserialize_with = "null_as_default")]
    tags: Vec<String>,
  }

  #[test]
  fn null_parses_as_default_for_plain_fields() {
    let labels: Labels = from_text(r#"{"name":null,"active":null,"tags":null}"#).unwrap();
    assert_eq!(labels, Labels::default());
    let labels: Labels = from_text(r#"{"name":"a","active":true,"tags":["x"]}"#).unwrap();
    assert_eq!(labels.name, "a");
    assert!(labels.active);
    assert_eq!(labels.tags, vec!["x".to_owned()]);
  }

  #[test]
  fn unknown_enum_numbers_are_written_raw() {
    let sample = Sample {
      level: 9,
      ..Default::default()
    };
    let text = to_text(&sample, false).unwrap();
    assert_eq!(text, r#"{"level":9}"#);
    let parsed: Sample = from_text(&text).unwrap();
    assert_eq!(parsed.level, 9);
  }

  #[test]
  fn unknown_enum_names_are_rejected() {
    let result: Result<Sample> = from_text(r#"{"level":"LOW"}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
  }

  #[test]
  fn unknown_fields_are_rejected() {
    let result: Result<Sample> = from_text(r#"{"bigId":"1","extra":true}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
  }

  #[test]
  fn out_of_range_int32_is_rejected() {
    let result: Result<Sample> = from_text(r#"{"smallId":4294967296}"#);
    assert!(matches!(result, Err(Error::TextParse(_))));
  }

  #[test]
  fn pretty_output_is_indented() {
    let sample = Sample {
      small_id: 1,
      ..Default::default()
    };
    assert_eq!(to_text(&sample, true).unwrap(), "{\n  \"smallId\": 1\n}");
  }
}
