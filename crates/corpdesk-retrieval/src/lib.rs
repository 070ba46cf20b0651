//! # Corpdesk Retrieval
//!
//! Vector-space relevance ranking without embeddings or a vector DB.
//!
//! ## Design
//! - **Unigram + bigram tokens** over a fixed English stop list
//! - **Smoothed TF-IDF weights**, one sparse vector per chunk
//! - **Cosine similarity** ranking — L2-normalized vectors, so scoring
//!   is a plain sparse dot product
//! - Built once per corpus, immutable afterwards; rebuilt in full on
//!   corpus change

pub mod index;
pub mod tokenize;

pub use index::{Index, SearchHit};
pub use tokenize::tokenize;
