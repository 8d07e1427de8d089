//! Core vCard types.

mod parameter;
mod property;
mod structured;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, VCardValue};
pub use structured::{Address, StructuredName};
pub use vcard::{VCard, VCardVersion};
