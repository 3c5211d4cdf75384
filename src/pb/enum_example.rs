//! Messages of `proto/enum_example.proto`.

use proto_codec::json::ProtoEnum;
use serde::{Deserialize, Serialize};

use crate::render::{FieldWriter, Render};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnumMessage {
  #[prost(int64, tag = "1")]
  #[serde(with = "proto_codec::json::int64", skip_serializing_if = "proto_codec::json::is_default")]
  pub id: i64,
  #[prost(enumeration = "DayOfTheWeek", tag = "2")]
  #[serde(
    alias = "day_of_the_week",
    with = "day_of_the_week_json",
    skip_serializing_if = "proto_codec::json::is_default"
  )]
  pub day_of_the_week: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DayOfTheWeek {
  UnknownDayOfTheWeek = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
  Sunday = 7,
}

impl DayOfTheWeek {
  /// String value of the enum field names used in the ProtoBuf definition.
  ///
  /// The values are not transformed in any way and thus are considered stable
  /// (if the ProtoBuf definition does not change) and safe for programmatic use.
  pub fn as_str_name(&self) -> &'static str {
    match self {
      Self::UnknownDayOfTheWeek => "UNKNOWN_DAY_OF_THE_WEEK",
      Self::Monday => "MONDAY",
      Self::Tuesday => "TUESDAY",
      Self::Wednesday => "WEDNESDAY",
      Self::Thursday => "THURSDAY",
      Self::Friday => "FRIDAY",
      Self::Saturday => "SATURDAY",
      Self::Sunday => "SUNDAY",
    }
  }

  /// Creates an enum from field names used in the ProtoBuf definition.
  pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
    match value {
      "UNKNOWN_DAY_OF_THE_WEEK" => Some(Self::UnknownDayOfTheWeek),
      "MONDAY" => Some(Self::Monday),
      "TUESDAY" => Some(Self::Tuesday),
      "WEDNESDAY" => Some(Self::Wednesday),
      "THURSDAY" => Some(Self::Thursday),
      "FRIDAY" => Some(Self::Friday),
      "SATURDAY" => Some(Self::Saturday),
      "SUNDAY" => Some(Self::Sunday),
      _ => None,
    }
  }
}

impl ProtoEnum for DayOfTheWeek {
  fn as_str_name(&self) -> &'static str {
    DayOfTheWeek::as_str_name(self)
  }

  fn from_str_name(name: &str) -> Option<Self> {
    DayOfTheWeek::from_str_name(name)
  }
}

proto_codec::json_enum!(day_of_the_week_json, DayOfTheWeek);

impl Render for EnumMessage {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.scalar("id", &self.id);
    w.enumeration::<DayOfTheWeek>("day_of_the_week", self.day_of_the_week);
  }
}
