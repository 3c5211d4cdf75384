use proto_codec::{Codec, ProtoJsonCodec};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct Person {
  #[prost(string, tag = "1")]
  #[serde(skip_serializing_if = "String::is_empty")]
  first_name: String,
  #[prost(string, tag = "2")]
  #[serde(skip_serializing_if = "String::is_empty")]
  last_name: String,
  #[prost(int64, tag = "3")]
  #[serde(with = "proto_codec::json::int64", skip_serializing_if = "proto_codec::json::is_default")]
  age: i64,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
  let codec = ProtoJsonCodec::pretty();
  let person = Person {
    first_name: "Samuel".to_owned(),
    last_name: "Clemens".to_owned(),
    age: 49,
  };

  println!("Original : {:?}", person);

  let bytes = codec.encode_binary(&person)?;

  println!("Serialized protobuf bytes: {:?}", bytes);

  let round_trip: Person = codec.decode_binary(&bytes)?;

  println!("Deserialized : {:?}", round_trip);

  let text = codec.encode_text(&round_trip)?;

  println!("As JSON:\n{}", text);

  let from_text: Person = codec.decode_text(&text)?;
  assert_eq!(person, from_text);

  Ok(())
}
