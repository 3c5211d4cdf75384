use std::path::{Path, PathBuf};

use proto_codec::ProtoJsonCodec;

use crate::demo::Demo;
use crate::errors::{self, ErrorKind, Result};

/// File the demo persists its binary-encoded message to, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "simple.bin";

/// Used to build [`Demo`](crate::demo::Demo) instances.
#[derive(Debug, Clone)]
pub struct DemoBuilder {
  output_path: PathBuf,
  pretty_json: bool,
}

impl Default for DemoBuilder {
  fn default() -> Self {
    Self {
      output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
      pretty_json: false,
    }
  }
}

impl DemoBuilder {
  /// Create a builder instance
  #[must_use]
  pub fn new() -> Self {
    Default::default()
  }

  /// File the binary encoding is written to and read back from. It is overwritten on every run.
  #[must_use]
  pub fn output_path(mut self, path: impl AsRef<Path>) -> Self {
    self.output_path = path.as_ref().to_path_buf();
    self
  }

  /// Print the JSON round trip indented instead of on one line
  #[must_use]
  pub fn pretty_json(mut self, pretty: bool) -> Self {
    self.pretty_json = pretty;
    self
  }

  /// Create a [`Demo`] instance
  pub fn build(&self) -> Result<Demo<ProtoJsonCodec>> {
    if self.output_path.as_os_str().is_empty() {
      return Err(errors::new(ErrorKind::InvalidConfig(
        "`output_path` cannot be empty".to_owned(),
      )));
    }
    let codec = if self.pretty_json {
      ProtoJsonCodec::pretty()
    } else {
      ProtoJsonCodec::new()
    };
    Ok(Demo::new(codec, self.output_path.clone()))
  }
}
