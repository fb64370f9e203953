//! Text normalization building blocks: tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenize;

pub use stopwords::StopwordFilter;
pub use tokenize::{normalize, tokenize};
