//! # Corpdesk Engine
//!
//! The facade the shell talks to — wires loader → splitter → index →
//! composer and owns the cached index.
//!
//! ```text
//! Engine::load_corpus("company.txt")
//!   ↓ split + index (atomic full rebuild)
//! Engine::answer("What is the shareholding breakdown?")
//!   ↓ Index::search(question, top_k)
//!   ↓ compose(question, retrieved chunks)
//! Answer — formatted text + evidence chunks
//! ```
//!
//! The index is immutable between rebuilds; `answer` takes `&self`, so
//! concurrent questions against one built engine are safe.

use corpdesk_core::config::CorpdeskConfig;
use corpdesk_core::types::{Answer, Chunk};
use corpdesk_core::Result;
use corpdesk_retrieval::Index;
use std::path::Path;

/// Build a relevance index straight from raw corpus text.
pub fn build_index(raw_text: &str) -> Index {
    Index::build(corpdesk_corpus::split(raw_text))
}

/// Answer a question against a built index: search, then compose.
pub fn answer(index: &Index, question: &str, top_k: usize) -> Answer {
    let hits = index.search(question, top_k);
    tracing::debug!("Retrieved {} chunks for question", hits.len());
    let retrieved: Vec<Chunk> = hits.iter().map(|hit| hit.chunk.clone()).collect();
    corpdesk_answer::compose(question, &retrieved)
}

/// The Corpdesk engine — a configuration plus the current index.
pub struct Engine {
    config: CorpdeskConfig,
    index: Index,
}

impl Engine {
    /// Create an engine with an empty index. Every answer is the
    /// generic fallback until a corpus is loaded.
    pub fn new(config: CorpdeskConfig) -> Self {
        Self { config, index: Index::build(Vec::new()) }
    }

    /// Load a corpus file and rebuild the index in full. Returns the
    /// new chunk count.
    pub fn load_corpus(&mut self, path: &Path) -> Result<usize> {
        let raw = corpdesk_corpus::load_corpus(path)?;
        Ok(self.rebuild(&raw))
    }

    /// Rebuild the index from in-memory corpus text, discarding the
    /// previous chunk set entirely. Returns the new chunk count.
    pub fn rebuild(&mut self, raw_text: &str) -> usize {
        self.index = build_index(raw_text);
        tracing::info!("Corpus indexed: {} chunks", self.index.len());
        self.index.len()
    }

    /// Answer a question with the configured retrieval depth.
    pub fn answer(&self, question: &str) -> Answer {
        answer(&self.index, question, self.config.retrieval.top_k)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn config(&self) -> &CorpdeskConfig {
        &self.config
    }
}
