//! Suffix-stripping stemmer over Snowball algorithms.

use rust_stemmers::Algorithm;
use wordwise_core::{Language, NlpError, NlpResult, Token};

pub struct Stemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
}

impl Stemmer {
    /// English Porter2 stemmer.
    pub fn english() -> Self {
        Self {
            language: Language::English,
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    pub fn new(language: Language) -> NlpResult<Self> {
        let algorithm = match language {
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Greek => Algorithm::Greek,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Turkish => Algorithm::Turkish,
            Language::Czech | Language::Estonian | Language::Polish | Language::Slovene => {
                return Err(NlpError::UnsupportedLanguage {
                    tag: language.name().to_string(),
                    suggestion: None,
                });
            }
        };
        Ok(Self {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Stem a word (lowercased first)
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).to_string()
    }

    pub fn stem_all(&self, tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(&t.text)).collect()
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer")
            .field("language", &self.language)
            .finish()
    }
}
