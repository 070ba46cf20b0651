//! The TF-IDF relevance index.

use corpdesk_core::types::Chunk;
use std::collections::HashMap;

use crate::tokenize::tokenize;

/// A single ranked search result.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub chunk: &'a Chunk,
    pub score: f32,
}

/// Read-only TF-IDF index over a chunk set.
///
/// Owns the chunks, a shared term vocabulary, and one L2-normalized
/// sparse weight vector per chunk (aligned by chunk position, which is
/// chunk-id order by construction). Rebuilt atomically and in full on
/// every corpus change — there is no incremental update path.
///
/// Search performs no mutation, so a built index can be shared across
/// threads freely.
pub struct Index {
    chunks: Vec<Chunk>,
    vocab: HashMap<String, u32>,
    /// Sparse (term_id, weight) pairs sorted by term id, unit length.
    vectors: Vec<Vec<(u32, f32)>>,
}

impl Index {
    /// Build the index over a chunk set. An empty chunk set yields an
    /// empty index whose searches all return nothing.
    pub fn build(chunks: Vec<Chunk>) -> Self {
        let doc_count = chunks.len();
        let mut vocab: HashMap<String, u32> = HashMap::new();
        let mut term_counts: Vec<HashMap<u32, f32>> = Vec::with_capacity(doc_count);
        let mut doc_freq: HashMap<u32, u32> = HashMap::new();

        for chunk in &chunks {
            let mut counts: HashMap<u32, f32> = HashMap::new();
            for term in tokenize(&chunk.text) {
                let next_id = vocab.len() as u32;
                let id = *vocab.entry(term).or_insert(next_id);
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
            for &id in counts.keys() {
                *doc_freq.entry(id).or_insert(0) += 1;
            }
            term_counts.push(counts);
        }

        let vectors = term_counts
            .into_iter()
            .map(|counts| {
                let mut vector: Vec<(u32, f32)> = counts
                    .into_iter()
                    .map(|(id, tf)| {
                        let df = doc_freq.get(&id).copied().unwrap_or(0) as f32;
                        let idf = ((1.0 + doc_count as f32) / (1.0 + df)).ln() + 1.0;
                        (id, tf * idf)
                    })
                    .collect();
                vector.sort_by_key(|&(id, _)| id);
                normalize(&mut vector);
                vector
            })
            .collect();

        tracing::debug!("Indexed {} chunks, {} terms", doc_count, vocab.len());
        Self { chunks, vocab, vectors }
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// All indexed chunks, in id order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Rank chunks against a query by cosine similarity.
    ///
    /// Returns at most `top_k` hits, every one with strictly positive
    /// similarity, ordered by descending score with ties broken by
    /// ascending chunk id. Query terms unseen at build time contribute
    /// nothing; a query with no vocabulary overlap returns the empty
    /// vector, as does an empty index.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit<'_>> {
        if self.chunks.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut query_weights: HashMap<u32, f32> = HashMap::new();
        for term in tokenize(query) {
            if let Some(&id) = self.vocab.get(&term) {
                *query_weights.entry(id).or_insert(0.0) += 1.0;
            }
        }
        if query_weights.is_empty() {
            return Vec::new();
        }
        let query_norm = query_weights.values().map(|w| w * w).sum::<f32>().sqrt();

        let mut hits: Vec<SearchHit<'_>> = self
            .vectors
            .iter()
            .zip(&self.chunks)
            .filter_map(|(vector, chunk)| {
                let dot: f32 = vector
                    .iter()
                    .filter_map(|(id, w)| query_weights.get(id).map(|qw| w * qw))
                    .sum();
                let score = dot / query_norm;
                (score > 0.0).then_some(SearchHit { chunk, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.chunk.id.cmp(&b.chunk.id))
        });
        hits.truncate(top_k);
        hits
    }
}

/// Scale a sparse vector to unit length. A zero vector is left as-is.
fn normalize(vector: &mut [(u32, f32)]) {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}
