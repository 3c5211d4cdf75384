//! Message types compiled from the schemas under `proto/`.
//!
//! Field layout, tags and enumerations follow the `.proto` files exactly; on top of the protobuf derive every
//! type carries the serde attributes of the canonical JSON mapping and a [`Render`](crate::render::Render)
//! implementation used by `Display`.

pub mod addressbook;
pub mod complex;
pub mod enum_example;
pub mod simple;

crate::render::display_rendered!(
  simple::SimpleMessage,
  enum_example::EnumMessage,
  complex::ComplexMessage,
  complex::DummyMessage,
  addressbook::Person,
  addressbook::person::PhoneNumber,
  addressbook::AddressBook,
);
