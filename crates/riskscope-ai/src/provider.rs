//! Black-box contract for the external embedding model.

/// Maps text to unit-norm vectors of fixed dimensionality.
///
/// Implementations must return exactly one vector per input text, all of
/// length [`dim`](Self::dim), L2-normalized so a plain dot product is the
/// cosine similarity. Output must be deterministic for identical model
/// version and input — the engine relies on this for reproducible scores.
pub trait EmbeddingProvider {
    /// Embed a batch of texts, returning one normalized vector per input.
    ///
    /// Callers batch all pending texts into a single call; implementations
    /// should not assume small batches.
    fn encode(&mut self, texts: &[&str]) -> anyhow::Result<Vec<Vec<f32>>>;

    /// Embedding dimensionality, constant across calls.
    fn dim(&self) -> usize;
}
