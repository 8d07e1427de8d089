//! vCard parsing.
//!
//! ## Features
//!
//! - Supports vCard 2.1, 3.0 and 4.0
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL)
//! - Parses structured values (N, ADR)
//! - Decodes quoted-printable values (vCard 2.1)
//! - RFC 6868 caret encoding for parameters

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::{
    decode_quoted_printable, parse_address, parse_structured_name, split_component,
    split_structured, unescape_text,
};
