//! Messages of `proto/simple.proto`.

use serde::{Deserialize, Serialize};

use crate::render::{FieldWriter, Render};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimpleMessage {
  #[prost(int64, tag = "1")]
  #[serde(with = "proto_codec::json::int64", skip_serializing_if = "proto_codec::json::is_default")]
  pub id: i64,
  #[prost(bool, tag = "2")]
  #[serde(
    alias = "is_simple",
    deserialize_with = "proto_codec::json::null_as_default",
    skip_serializing_if = "proto_codec::json::is_default"
  )]
  pub is_simple: bool,
  #[prost(string, tag = "3")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "String::is_empty")]
  pub name: ::prost::alloc::string::String,
  #[prost(int32, repeated, tag = "4")]
  #[serde(
    alias = "sample_list",
    deserialize_with = "proto_codec::json::null_as_default",
    skip_serializing_if = "Vec::is_empty"
  )]
  pub sample_list: ::prost::alloc::vec::Vec<i32>,
}

impl Render for SimpleMessage {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.scalar("id", &self.id);
    w.scalar("is_simple", &self.is_simple);
    w.string("name", &self.name);
    w.repeated("sample_list", &self.sample_list);
  }
}
