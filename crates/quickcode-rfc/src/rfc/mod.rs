pub mod mecard;
pub mod vcard;
