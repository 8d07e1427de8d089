//! MECARD contact records.
//!
//! MECARD is the compact `KEY:value;` contact format read by most barcode
//! scanners, e.g. `MECARD:N:Doe,John;TEL:555-1234;;`. Reserved characters
//! (`:` and `;`) inside a value are backslash-escaped.

mod escape;
mod parse;

pub use escape::escape;
pub use parse::{MeCard, parse};
