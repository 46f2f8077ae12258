//! Languages understood by the tokenizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::NlpError;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// A language with sentence-splitting support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Czech,
    Danish,
    Dutch,
    English,
    Estonian,
    Finnish,
    French,
    German,
    Greek,
    Italian,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Slovene,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 18] = [
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Estonian,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Italian,
        Language::Norwegian,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Slovene,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Czech => "czech",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Estonian => "estonian",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Greek => "greek",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Polish => "polish",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Slovene => "slovene",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }

    /// Closest supported language name, if any is similar enough.
    pub fn suggest(tag: &str) -> Option<&'static str> {
        let lower = tag.to_lowercase();
        Language::ALL
            .iter()
            .map(|l| (l.name(), jaro_winkler(&lower, l.name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = NlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.name() == lower)
            .ok_or_else(|| NlpError::UnsupportedLanguage {
                tag: s.to_string(),
                suggestion: Language::suggest(s).map(str::to_string),
            })
    }
}
