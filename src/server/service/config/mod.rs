//! Guild configuration document handling.
//!
//! - `document` - bracket path parsing and nested path assignment
//! - `form` - decoding a submitted form into a document plus shop role rows
//! - `coerce` - typed leaf coercion applied after structural decoding
//! - `defaults` - canonical top-level keys guaranteed on every read
//!
//! Everything here is pure: no database or Discord access.

pub mod coerce;
pub mod defaults;
pub mod document;
pub mod form;
