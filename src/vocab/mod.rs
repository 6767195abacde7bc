//! Synonym vocabularies for Korean battle speech

pub mod loader;
pub mod tables;

pub use tables::{set_vocabulary, vocabulary, Vocabulary};
