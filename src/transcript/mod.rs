//! Chat export parsing
//!
//! The tokenizer only finds message boundaries; the parser turns each token
//! into a dated [`Message`](crate::core::models::Message).

pub mod parser;
pub mod tokenizer;

pub use parser::parse_transcript;
pub use tokenizer::{Token, tokenize};
