mod openai;

pub use openai::{OpenAIEmbeddingModel, DEFAULT_API_URL, DEFAULT_MODEL};
