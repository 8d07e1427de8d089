//! Barcode writing collaborators.

mod format;
mod hints;
mod matrix;
mod writer;

pub use format::BarcodeFormat;
pub use hints::{CharacterSet, DEFAULT_MAX_DIMENSION, EncodeHints};
pub use matrix::{BLACK, BitMatrix, WHITE};
pub use writer::{BarcodeWriter, QrCodeWriter};
