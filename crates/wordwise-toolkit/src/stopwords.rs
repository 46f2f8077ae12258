//! Stopword filtering
//!
//! Stopword lists are the NLTK lists shipped by the `stop-words` crate, with
//! support for custom lists. Matching is case-folded.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use wordwise_core::{Language, Token};

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    pub fn new(language: Language) -> Self {
        let lang = match language {
            Language::Danish => LANGUAGE::Danish,
            Language::Dutch => LANGUAGE::Dutch,
            Language::English => LANGUAGE::English,
            Language::Finnish => LANGUAGE::Finnish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Greek => LANGUAGE::Greek,
            Language::Italian => LANGUAGE::Italian,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Russian => LANGUAGE::Russian,
            Language::Slovene => LANGUAGE::Slovenian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Turkish => LANGUAGE::Turkish,
            // no list shipped for these
            Language::Czech | Language::Estonian | Language::Polish => {
                return Self::from_list(&[]);
            }
        };

        Self {
            stopwords: get(lang)
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Tokens that are not stopwords, in order
    pub fn filter(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|t| !self.is_stopword(&t.text))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
