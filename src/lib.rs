//! # protobuf-example
//!
//! A guided tour of protobuf messages from Rust application code: building typed messages, changing fields,
//! encoding them into the compact binary form, persisting them to a file, reading them back, and round-tripping
//! them through the canonical JSON mapping. Enum fields and nested/repeated composition (an address book of
//! people with phone numbers) are covered too.
//!
//! Encoding and decoding go through the [`proto_codec::Codec`] capability, so the message types in [`pb`] and the
//! [`demo`] driver never depend on a concrete codec.
//!
//!```no_run
//! use protobuf_example::builder::DemoBuilder;
//!
//! let demo = DemoBuilder::new().output_path("simple.bin").build().unwrap();
//! let report = demo.run(&mut std::io::stdout()).unwrap();
//! assert_eq!(report.simple, report.simple_from_file);
//! ```

#[macro_use]
extern crate log;

pub mod builder;
pub mod demo;
pub mod errors;
pub mod pb;
pub mod persistence;
pub mod render;

pub use builder::DemoBuilder;
pub use errors::{Error, Result};
pub use proto_codec::{Codec, ProtoJsonCodec};
