//! Payload assembly and barcode encoding.

pub mod barcode;
pub mod encode;
pub mod encoder;
pub mod error;
