//! # Corpdesk Corpus
//!
//! Turns a flat company text file into labeled retrieval chunks.
//!
//! ## How it works
//! ```text
//! load_corpus("company.txt")
//!   ↓ raw UTF-8 string
//! split(&raw)
//!   ↓ heading-pattern partition → blank-line paragraphs → length filter
//! Vec<Chunk> — sequential ids, coarse section labels
//! ```

pub mod loader;
pub mod splitter;

pub use loader::load_corpus;
pub use splitter::split;
