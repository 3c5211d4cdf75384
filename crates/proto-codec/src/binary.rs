//! Serialization/Deserialization functions for protobuf messages in their binary wire format.
//!
//!```
//! use proto_codec::binary::{deserialize, serialize};
//!
//! #[derive(Clone, PartialEq, prost::Message)]
//! struct Person {
//!   #[prost(string, tag = "1")]
//!   name: String,
//!   #[prost(int32, tag = "2")]
//!   age: i32,
//! }
//!
//! let person = Person {
//!   name: "Samuel Clemens".to_owned(),
//!   age: 49,
//! };
//!
//! let bytes = serialize(&person).unwrap();
//!
//! println!("Serialized protobuf bytes: {:?}", bytes);
//!
//! let round_trip: Person = deserialize(&bytes).unwrap();
//!
//! assert_eq!(person, round_trip);
//!```

use log::debug;

use crate::errors::Result;

/// [`serialize()`] encodes a message into protobuf bytes. Fields are written in tag order, so equal messages
/// always produce identical bytes.
pub fn serialize<M>(message: &M) -> Result<Vec<u8>>
where
  M: prost::Message,
{
  let mut buf = Vec::with_capacity(message.encoded_len());
  message.encode(&mut buf)?;
  debug!("encoded message into {} bytes", buf.len());
  Ok(buf)
}

/// [`deserialize()`] parses protobuf bytes into the target message type.
///
/// Fields the target schema does not declare are skipped. Enumeration fields keep unrecognized numbers as-is.
pub fn deserialize<M>(buf: &[u8]) -> Result<M>
where
  M: prost::Message + Default,
{
  let message = M::decode(buf)?;
  debug!("decoded message from {} bytes", buf.len());
  Ok(message)
}
