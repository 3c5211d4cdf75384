//! The tutorial walk-through: build messages, mutate them, print them, persist one and round-trip it through
//! JSON. Every step runs in order and the first failure aborts the run.

use std::io::Write;
use std::path::{Path, PathBuf};

use proto_codec::Codec;

use crate::errors::{Error, Result};
use crate::pb::addressbook::person::{PhoneNumber, PhoneType};
use crate::pb::addressbook::{AddressBook, Person};
use crate::pb::complex::{ComplexMessage, DummyMessage};
use crate::pb::enum_example::{DayOfTheWeek, EnumMessage};
use crate::pb::simple::SimpleMessage;
use crate::persistence;

macro_rules! say {
  ($out:expr, $($arg:tt)*) => {
    writeln!($out, $($arg)*).map_err(Error::output)?
  };
}

/// Everything the demo built or decoded, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
  /// The simple message after renaming, as written to the output file.
  pub simple: SimpleMessage,
  /// The simple message decoded from the output file.
  pub simple_from_file: SimpleMessage,
  /// The JSON text of the simple message.
  pub simple_json: String,
  /// The simple message parsed back from its JSON text.
  pub simple_from_json: SimpleMessage,
  /// The enum message after its day was reassigned.
  pub enum_message: EnumMessage,
  /// The message with nested and repeated dummies.
  pub complex: ComplexMessage,
  /// The address book.
  pub address_book: AddressBook,
}

/// Runs the walk-through with a given codec and output file. Build one with
/// [`DemoBuilder`](crate::builder::DemoBuilder).
#[derive(Debug, Clone)]
pub struct Demo<C> {
  codec: C,
  output_path: PathBuf,
}

impl<C: Codec> Demo<C> {
  /// Creates a demo persisting to `output_path`.
  pub fn new(codec: C, output_path: PathBuf) -> Self {
    Self { codec, output_path }
  }

  /// The codec used for every encode and decode.
  pub fn codec(&self) -> &C {
    &self.codec
  }

  /// The file the binary encoding goes to.
  pub fn output_path(&self) -> &Path {
    &self.output_path
  }

  /// Runs every step, printing to `out`.
  pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoReport> {
    let simple = self.do_simple(out)?;
    let simple_from_file = self.read_and_write(out, &simple)?;
    let (simple_json, simple_from_json) = self.json_round_trip(out, &simple)?;
    let enum_message = self.do_enum(out)?;
    let complex = self.do_complex(out)?;
    let address_book = self.do_address_book(out)?;

    Ok(DemoReport {
      simple,
      simple_from_file,
      simple_json,
      simple_from_json,
      enum_message,
      complex,
      address_book,
    })
  }

  fn do_simple<W: Write>(&self, out: &mut W) -> Result<SimpleMessage> {
    info!("building a simple message");
    let mut sm = simple_message();
    say!(out, "{}", sm);

    sm.name = "I renamed you".to_owned();
    say!(out, "{}", sm);

    say!(out, "The ID is: {}", sm.id);
    Ok(sm)
  }

  fn read_and_write<W: Write>(&self, out: &mut W, sm: &SimpleMessage) -> Result<SimpleMessage> {
    info!("persisting the simple message to {}", self.output_path.display());
    persistence::write_message(&self.codec, &self.output_path, sm)?;

    let mut sm2 = SimpleMessage::default();
    let bytes = persistence::read_from_file(&self.output_path)?;
    self.codec.decode_binary_into(&bytes, &mut sm2)?;
    say!(out, "{}", sm2);
    Ok(sm2)
  }

  fn json_round_trip<W: Write>(&self, out: &mut W, sm: &SimpleMessage) -> Result<(String, SimpleMessage)> {
    info!("round-tripping the simple message through JSON");
    let text = self.codec.encode_text(sm)?;
    say!(out, "{}", text);

    let mut sm2 = SimpleMessage::default();
    self.codec.decode_text_into(&text, &mut sm2)?;
    say!(out, "Successfully created proto struct: {}", sm2);
    Ok((text, sm2))
  }

  fn do_enum<W: Write>(&self, out: &mut W) -> Result<EnumMessage> {
    info!("building an enum message");
    let mut em = enum_message();
    em.set_day_of_the_week(DayOfTheWeek::Monday);
    say!(out, "{}", em);
    Ok(em)
  }

  fn do_complex<W: Write>(&self, out: &mut W) -> Result<ComplexMessage> {
    info!("building a complex message");
    let cm = complex_message();
    say!(out, "{}", cm);
    Ok(cm)
  }

  fn do_address_book<W: Write>(&self, out: &mut W) -> Result<AddressBook> {
    info!("building an address book");
    let book = address_book();
    for person in &book.people {
      say!(out, "{}", person);
    }
    Ok(book)
  }
}

/// The simple message as first built, before it gets renamed.
#[must_use]
pub fn simple_message() -> SimpleMessage {
  SimpleMessage {
    id: 12345,
    is_simple: true,
    name: "My Simple Message".to_owned(),
    sample_list: vec![1, 4, 7, 8],
  }
}

/// The enum message as first built, on a Thursday.
#[must_use]
pub fn enum_message() -> EnumMessage {
  EnumMessage {
    id: 42,
    day_of_the_week: DayOfTheWeek::Thursday as i32,
  }
}

/// One nested dummy and two repeated ones.
#[must_use]
pub fn complex_message() -> ComplexMessage {
  ComplexMessage {
    one_dummy: Some(DummyMessage {
      id: 1,
      name: "first message".to_owned(),
    }),
    multiple_dummy: vec![
      DummyMessage {
        id: 2,
        name: "second message".to_owned(),
      },
      DummyMessage {
        id: 3,
        name: "third message".to_owned(),
      },
    ],
  }
}

/// One person reachable on two phones.
#[must_use]
pub fn address_book() -> AddressBook {
  AddressBook {
    people: vec![Person {
      name: "Masataka Shintoku".to_owned(),
      id: 1,
      email: "masataka.shintoku@gmail.com".to_owned(),
      phones: vec![
        PhoneNumber {
          number: "0120123456".to_owned(),
          r#type: PhoneType::Mobile as i32,
        },
        PhoneNumber {
          number: "0120123456".to_owned(),
          r#type: PhoneType::Home as i32,
        },
      ],
    }],
  }
}
