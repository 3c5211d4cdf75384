//! Compact, human-readable rendering of messages for printing and debugging.
//!
//! Only populated fields are listed, by their schema names, e.g.
//! `id:12345 is_simple:true name:"I renamed you" sample_list:1 sample_list:4`.
//! Nested messages are wrapped in braces and repeated fields repeat the field name.

use std::fmt::{Display, Write};

use proto_codec::json::ProtoEnum;

/// A message that can list its populated fields.
pub trait Render {
  /// Writes every populated field, in tag order.
  fn render_fields(&self, w: &mut FieldWriter<'_>);
}

/// Renders a message on one line. An all-default message renders as the empty string.
pub fn to_text<M: Render + ?Sized>(message: &M) -> String {
  let mut out = String::new();
  message.render_fields(&mut FieldWriter::new(&mut out));
  out
}

/// Accumulates `name:value` pairs separated by single spaces.
#[derive(Debug)]
pub struct FieldWriter<'a> {
  out: &'a mut String,
  first: bool,
}

impl<'a> FieldWriter<'a> {
  fn new(out: &'a mut String) -> Self {
    Self { out, first: true }
  }

  fn key(&mut self, name: &str) {
    if !self.first {
      self.out.push(' ');
    }
    self.first = false;
    self.out.push_str(name);
    self.out.push(':');
  }

  fn raw(&mut self, name: &str, value: impl Display) {
    self.key(name);
    // writing into a String cannot fail
    let _ = write!(self.out, "{}", value);
  }

  /// A numeric or boolean field, skipped when it holds the default.
  pub fn scalar<T>(&mut self, name: &str, value: &T)
  where
    T: Display + Default + PartialEq,
  {
    if *value != T::default() {
      self.raw(name, value);
    }
  }

  /// A string field, quoted and escaped, skipped when empty.
  pub fn string(&mut self, name: &str, value: &str) {
    if !value.is_empty() {
      self.raw(name, format_args!("{:?}", value));
    }
  }

  /// A repeated scalar field, one entry per element.
  pub fn repeated<T: Display>(&mut self, name: &str, values: &[T]) {
    for value in values {
      self.raw(name, value);
    }
  }

  /// An enum field by symbolic name; a number the schema does not declare is written as is.
  pub fn enumeration<E: ProtoEnum>(&mut self, name: &str, raw: i32) {
    if raw == 0 {
      return;
    }
    match E::try_from(raw) {
      Ok(known) => self.raw(name, known.as_str_name()),
      Err(_) => self.raw(name, raw),
    }
  }

  /// A singular message field, written when present even if all its fields are default.
  pub fn message<M: Render>(&mut self, name: &str, value: Option<&M>) {
    if let Some(value) = value {
      self.nested(name, value);
    }
  }

  /// A repeated message field, one bracketed entry per element.
  pub fn messages<M: Render>(&mut self, name: &str, values: &[M]) {
    for value in values {
      self.nested(name, value);
    }
  }

  fn nested<M: Render>(&mut self, name: &str, value: &M) {
    self.key(name);
    self.out.push('{');
    value.render_fields(&mut FieldWriter::new(&mut *self.out));
    self.out.push('}');
  }
}

/// Implements `Display` through [`to_text`] for each listed message type.
macro_rules! display_rendered {
  ($($message:ty),+ $(,)?) => {
    $(
      impl ::std::fmt::Display for $message {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
          f.write_str(&$crate::render::to_text(self))
        }
      }
    )+
  };
}

pub(crate) use display_rendered;
