//! Value types for extracted records.

mod field;
mod person;

pub use field::FieldValue;
pub use person::{People, Person};
