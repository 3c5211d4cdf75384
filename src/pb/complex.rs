//! Messages of `proto/complex.proto`.

use serde::{Deserialize, Serialize};

use crate::render::{FieldWriter, Render};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ComplexMessage {
  #[prost(message, optional, tag = "2")]
  #[serde(alias = "one_dummy", skip_serializing_if = "Option::is_none")]
  pub one_dummy: ::core::option::Option<DummyMessage>,
  #[prost(message, repeated, tag = "3")]
  #[serde(
    alias = "multiple_dummy",
    deserialize_with = "proto_codec::json::null_as_default",
    skip_serializing_if = "Vec::is_empty"
  )]
  pub multiple_dummy: ::prost::alloc::vec::Vec<DummyMessage>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DummyMessage {
  #[prost(int64, tag = "1")]
  #[serde(with = "proto_codec::json::int64", skip_serializing_if = "proto_codec::json::is_default")]
  pub id: i64,
  #[prost(string, tag = "2")]
  #[serde(deserialize_with = "proto_codec::json::null_as_default", skip_serializing_if = "String::is_empty")]
  pub name: ::prost::alloc::string::String,
}

impl Render for ComplexMessage {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.message("one_dummy", self.one_dummy.as_ref());
    w.messages("multiple_dummy", &self.multiple_dummy);
  }
}

impl Render for DummyMessage {
  fn render_fields(&self, w: &mut FieldWriter<'_>) {
    w.scalar("id", &self.id);
    w.string("name", &self.name);
  }
}
