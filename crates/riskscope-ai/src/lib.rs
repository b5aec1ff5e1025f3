//! AI layer: the black-box embedding contract, an ONNX Runtime backend,
//! and the reference taxonomies the scoring engine compares against.

mod provider;
pub mod taxonomy;

pub use provider::EmbeddingProvider;
pub use taxonomy::{
    DEFAULT_PROCESSES, HIDDEN_EXEMPLARS, LEAKAGE_EXEMPLARS, ReferenceSet, TaxonomyStore,
};

#[cfg(feature = "onnx")]
mod embedder;
#[cfg(feature = "onnx")]
pub use embedder::OnnxEmbedder;
