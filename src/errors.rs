// Copyright 2024 Masataka Shintoku
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Errors
//!
//! This module contains types and utility functions for error handling

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A convenience wrapper of `Result` that relies on [`Error`] to hold errors.
pub type Result<T> = std::result::Result<T, Error>;

/// This crate's Error type
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

/// Create a new [Error] of the passed kind.
#[must_use]
pub fn new(kind: ErrorKind) -> Error {
  Error(Box::new(kind))
}

/// The kinds of errors this crate returns.
#[derive(Debug)]
pub enum ErrorKind {
  /// Binary or text encoding/decoding failure.
  Codec(proto_codec::Error),
  /// A file could not be written or read.
  Io {
    /// What was being attempted, e.g. "write to"
    action: &'static str,
    /// The file involved
    path: PathBuf,
    /// The underlying failure
    source: io::Error,
  },
  /// Demo output could not be written.
  Output(io::Error),
  /// The demo was configured with unusable settings.
  InvalidConfig(String),
}

impl Error {
  /// The kind of this error.
  #[must_use]
  pub fn kind(&self) -> &ErrorKind {
    &self.0
  }

  /// Consumes the error, returning its kind.
  #[must_use]
  pub fn into_kind(self) -> ErrorKind {
    *self.0
  }

  /// Whether this error comes from the file system.
  #[must_use]
  pub fn is_io(&self) -> bool {
    matches!(*self.0, ErrorKind::Io { .. })
  }

  /// Whether this error comes from bytes that do not parse against the target schema.
  #[must_use]
  pub fn is_malformed_encoding(&self) -> bool {
    matches!(*self.0, ErrorKind::Codec(proto_codec::Error::MalformedEncoding(_)))
  }

  /// Whether this error comes from text that does not parse against the target schema.
  #[must_use]
  pub fn is_text_parse(&self) -> bool {
    matches!(*self.0, ErrorKind::Codec(proto_codec::Error::TextParse(_)))
  }

  pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Error {
    new(ErrorKind::Io {
      action,
      path: path.into(),
      source,
    })
  }

  pub(crate) fn output(source: io::Error) -> Error {
    new(ErrorKind::Output(source))
  }
}

impl StdError for Error {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    match *self.0 {
      ErrorKind::Codec(ref e) => Some(e),
      ErrorKind::Io { ref source, .. } => Some(source),
      ErrorKind::Output(ref e) => Some(e),
      ErrorKind::InvalidConfig(_) => None,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self.0 {
      ErrorKind::Codec(ref e) => write!(f, "{}", e),
      ErrorKind::Io {
        action,
        ref path,
        ref source,
      } => write!(f, "Can't {} file {}: {}", action, path.display(), source),
      ErrorKind::Output(ref e) => write!(f, "Can't write demo output: {}", e),
      ErrorKind::InvalidConfig(ref msg) => write!(f, "Invalid demo configuration: {}", msg),
    }
  }
}

impl From<proto_codec::Error> for Error {
  fn from(source: proto_codec::Error) -> Error {
    Error(Box::new(ErrorKind::Codec(source)))
  }
}
