//! Tag value object for an HTML/XML document representation.
//!
//! A [`Tag`] holds a single element's name, attribute map, and self-closing
//! disposition, and can re-serialize itself to opening/closing markup. It is
//! deliberately unaware of document structure: the tokenizer that discovers
//! tags and the tree that links them into parents/children are separate
//! collaborators, and character-encoding conversion is consumed only through
//! the narrow [`Encoding`] capability.
//!
//! Contract:
//! - Attribute keys are ASCII-lowercased on write and lookup; insertion order
//!   is preserved for deterministic serialization.
//! - No operation fails. Absent keys read as `None`, removing a missing
//!   attribute is a no-op, and malformed `style` strings parse best-effort.

mod attribute;
mod encoding;
mod tag;

pub use crate::attribute::Attribute;
pub use crate::encoding::{Encoding, EntityDecoder};
pub use crate::tag::{Tag, is_void_element};
