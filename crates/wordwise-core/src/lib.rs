//! Wordwise Core Library
//!
//! Data model and named-entity extraction for a small, rule-based NLP toolkit.
//!
//! # Architecture
//!
//! ```text
//! Text ──► Tokenizer ──► PosTagger ──► EntityChunker (binary) ──► Tree
//!                                                                  │
//!                                              direct children labelled "NE"
//!                                                                  │
//!                                                                  ▼
//!                                                  HashSet<String> (surface forms)
//! ```
//!
//! The three collaborators are traits ([`Tokenizer`], [`PosTagger`],
//! [`EntityChunker`]). This crate ships no linguistic data of its own; the
//! `wordwise-toolkit` crate provides lexicon-backed implementations.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Token, TaggedToken, PosTag, Tree, Language)
//! - [`pipeline`]: Collaborator traits
//! - [`extractor`]: Named-entity extractor

pub mod extractor;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use extractor::{NamedEntityExtractor, ENTITY_LABEL};
pub use models::{Language, PosTag, TaggedToken, Token, Tree, ROOT_LABEL};
pub use pipeline::{EntityChunker, PosTagger, Tokenizer};

use thiserror::Error;

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NlpError {
    #[error("Unsupported language: {tag}{}", suggestion_suffix(.suggestion))]
    UnsupportedLanguage {
        tag: String,
        suggestion: Option<String>,
    },

    #[error("Resource '{resource}' unavailable: {reason}")]
    DependencyUnavailable { resource: String, reason: String },

    #[error("Invalid chunk grammar: {0}")]
    InvalidGrammar(String),

    #[error("Tagger returned {actual} tagged tokens for {expected} tokens")]
    Misaligned { expected: usize, actual: usize },
}

pub type NlpResult<T> = Result<T, NlpError>;

impl NlpError {
    /// Shorthand for a missing or broken resource.
    pub fn unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        NlpError::DependencyUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NlpError::UnsupportedLanguage {
            tag: "englsh".into(),
            suggestion: Some("english".into()),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported language: englsh (did you mean 'english'?)"
        );

        let err = NlpError::UnsupportedLanguage {
            tag: "klingon".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unsupported language: klingon");

        let err = NlpError::unavailable("punkt", "not loaded");
        assert_eq!(err.to_string(), "Resource 'punkt' unavailable: not loaded");
    }
}
