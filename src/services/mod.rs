// Service exports
pub mod embedding;

pub use embedding::{cosine_similarity, CohereClient, EmbeddingError, EmbeddingProvider};
