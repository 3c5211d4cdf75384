//! Messages of `proto/addressbook.proto`.

use serde::{Deserialize, Serialize};

use crate::render::{FieldWriter, Render};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Person {
  #[prost(string, tag = "1")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "String::is_empty")]
  pub name: ::prost::alloc::string::String,
  /// Unique ID number for this person.
  #[prost(int32, tag = "2")]
  #[serde(with = "proto_codec::json::int32", skip_serializing_if = "proto_codec::json::is_default")]
  pub id: i32,
  #[prost(string, tag = "3")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "String::is_empty")]
  pub email: ::prost::alloc::string::String,
  #[prost(message, repeated, tag = "4")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "Vec::is_empty")]
  pub phones: ::prost::alloc::vec::Vec<person::PhoneNumber>,
}

/// Nested message and enum types in `Person`.
pub mod person {
  use proto_codec::json::ProtoEnum;
  use serde::{Deserialize, Serialize};

  use crate::render::{FieldWriter, Render};

  #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
  #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
  pub struct PhoneNumber {
    #[prost(string, tag = "1")]
    #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "String::is_empty")]
    pub number: ::prost::alloc::string::String,
    #[prost(enumeration = "PhoneType", tag = "2")]
    #[serde(rename = "type", with = "phone_type_json", skip_serializing_if = "proto_codec::json::is_default")]
    pub r#type: i32,
  }

  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
  #[repr(i32)]
  pub enum PhoneType {
    Unspecified = 0,
    Mobile = 1,
    Home = 2,
    Work = 3,
  }

  impl PhoneType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
      match self {
        Self::Unspecified => "PHONE_TYPE_UNSPECIFIED",
        Self::Mobile => "MOBILE",
        Self::Home => "HOME",
        Self::Work => "WORK",
      }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
      match value {
        "PHONE_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
        "MOBILE" => Some(Self::Mobile),
        "HOME" => Some(Self::Home),
        "WORK" => Some(Self::Work),
        _ => None,
      }
    }
  }

  impl ProtoEnum for PhoneType {
    fn as_str_name(&self) -> &'static str {
      PhoneType::as_str_name(self)
    }

    fn from_str_name(name: &str) -> Option<Self> {
      PhoneType::from_str_name(name)
    }
  }

  proto_codec::json_enum!(phone_type_json, PhoneType);

  impl Render for PhoneNumber {
    fn render_fields(&self, w: &mut FieldWriter<'_>) {
      w.string("number", &self.number);
      w.enumeration::<PhoneType>("type", self.r#type);
    }
  }
}

/// Our address book file is just one of these.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AddressBook {
  #[prost(message, repeated, tag = "1")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "Vec::is_empty")]
  pub people: ::prost::alloc::vec::Vec<Person>,
}

impl Render for Person {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.string("name", &self.name);
    w.scalar("id", &self.id);
    w.string("email", &self.email);
    w.messages("phones", &self.phones);
  }
}

impl Render for AddressBook {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.messages("people", &self.people);
  }
}
