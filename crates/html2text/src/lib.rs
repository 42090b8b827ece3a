//! Readable plain text from HTML, for small text displays.
//!
//! The extractor is a single pass over the raw bytes. It does not build a
//! tree, decode character references or interpret attributes: markup from
//! `<` to the next `>` is removed, the remaining text is split into words on
//! spaces and tag boundaries, and the words are joined by single spaces.
//!
//! ```
//! let text = html2text::extract_text(b"<b>Hello</b> World").unwrap();
//! assert_eq!(text, b"hello World");
//! ```
#[macro_use]
mod macros;

pub mod errors;
pub mod extractor;
pub mod options;
pub mod stream;
pub mod tag_scanner;
pub mod word;

pub use errors::ExtractionError;
pub use extractor::{extract_text, extract_text_stats, extract_text_with, html2text, ExtractStats};
pub use options::{CaseFold, ExtractOptions, MAX_WORD_LENGTH};
pub use stream::StreamExtractor;
