//! Word tokenization.
//!
//! Pipeline: sentence splitting (per-language abbreviations) → Treebank word
//! splitting within each sentence.

mod sentence;
mod treebank;

pub use sentence::split_sentences;
pub use treebank::split_words;

use std::sync::Arc;

use tracing::trace;
use wordwise_core::{Language, NlpError, NlpResult, Token, Tokenizer};

use crate::resources::LinguisticResources;

/// Treebank-style word tokenizer backed by the `punkt` resource.
#[derive(Debug, Clone)]
pub struct TreebankTokenizer {
    resources: Arc<LinguisticResources>,
}

impl TreebankTokenizer {
    /// Create a tokenizer; fails if the bundle has no `punkt` data.
    pub fn new(resources: Arc<LinguisticResources>) -> NlpResult<Self> {
        resources.require_punkt()?;
        Ok(Self { resources })
    }

    /// Split `text` into sentences for `language`.
    pub fn sentences<'t>(&self, text: &'t str, language: &str) -> NlpResult<Vec<&'t str>> {
        let language: Language = language.parse()?;
        let abbreviations = self
            .resources
            .require_punkt()?
            .abbreviations(language)
            .ok_or_else(|| {
                NlpError::unavailable(
                    format!("punkt/{}", language),
                    "no sentence model for this language",
                )
            })?;
        Ok(split_sentences(text, abbreviations))
    }

    /// Tokenize English text.
    pub fn tokenize_english(&self, text: &str) -> NlpResult<Vec<Token>> {
        self.tokenize(text, Language::English.name())
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str, language: &str) -> NlpResult<Vec<Token>> {
        let mut tokens = Vec::new();
        for (sentence_idx, sentence) in self.sentences(text, language)?.into_iter().enumerate() {
            for word in split_words(sentence) {
                let index = tokens.len();
                tokens.push(Token::new(word, index, sentence_idx));
            }
        }
        trace!(language, tokens = tokens.len(), "tokenized text");
        Ok(tokens)
    }
}
