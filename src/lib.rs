#![doc = include_str!("../README.md")]

/// RFC 4287 common constructs (text, person, category, link, content)
pub mod construct;
/// Atom entry model and mutators
pub mod entry;
mod error;
/// Atom feed model, mutators and concurrent entry aggregation
pub mod feed;
/// Deterministic XML rendering
pub mod render;
/// RFC 4287 document validation
pub mod validation;

pub use construct::{Category, Content, Link, Person, Rel, Text, TextType, Timestamp};
pub use entry::Entry;
pub use error::{AtomError, Result};
pub use feed::Feed;
pub use render::{ATOM_NAMESPACE, GENERATOR_NAME, GENERATOR_URI, GENERATOR_VERSION};
