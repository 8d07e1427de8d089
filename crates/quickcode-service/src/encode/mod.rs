//! Request normalization and payload assembly.
//!
//! ## Overview
//!
//! ```text
//! FieldRequest ─┐                                  ┌─ sanitize (trim, dedupe)
//!               ├─ normalize ─> EncodeRequest ─> Assembler
//! ShareRequest ─┘                                  └─ mecard::escape
//! ```
//!
//! The assembled payload then goes through [`hint::select_encoding`] before
//! it reaches a barcode writer.

mod assemble;
mod contact;
pub mod hint;
mod normalize;
pub mod phone;
mod request;
pub mod resource;
pub mod sanitize;


pub use assemble::Assembler;
pub use contact::ContactSource;
pub use normalize::{FieldRequest, Normalized, ShareRequest, normalize_fields, normalize_share};
pub use request::{
    ContactFields, ContactRecord, ContentType, Coordinates, EncodeRequest, EncodeResult,
};
