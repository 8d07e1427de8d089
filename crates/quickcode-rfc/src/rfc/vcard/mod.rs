//! vCard reading (RFC 2425/2426/6350).
//!
//! This module provides just enough of vCard to read shared address-book
//! records: line unfolding, property groups, parameters, text unescaping,
//! quoted-printable values, and the structured `N` and `ADR` values.
//!
//! ## Usage
//!
//! ```rust
//! use quickcode_rfc::rfc::vcard::parse_single;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=cell:555-1234\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse_single(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! assert_eq!(card.telephones(), vec!["555-1234"]);
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`parse`] - Parsing functions and error types

pub mod core;
pub mod parse;

// Re-export commonly used types
pub use core::{
    Address, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
