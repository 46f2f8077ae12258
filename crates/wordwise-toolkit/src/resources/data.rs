//! Typed views over the JSON resource files.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use wordwise_core::{Language, PosTag};

/// Sentence-splitting data: known abbreviations per language (lowercase, no
/// trailing period).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Punkt {
    pub abbreviations: FxHashMap<Language, FxHashSet<String>>,
}

impl Punkt {
    pub fn abbreviations(&self, language: Language) -> Option<&FxHashSet<String>> {
        self.abbreviations.get(&language)
    }
}

/// Lowercase word → most likely tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggerLexicon {
    pub words: FxHashMap<String, PosTag>,
}

impl TaggerLexicon {
    pub fn lookup(&self, word: &str) -> Option<PosTag> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Cue words for typing entity spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gazetteer {
    /// Words that make a span an organization ("Observatory", "University")
    pub organization_cues: FxHashSet<String>,
    /// Words that make a span a geographic feature ("River", "Mountains")
    pub location_cues: FxHashSet<String>,
    /// Known geo-political entities
    pub places: FxHashSet<String>,
}

impl Gazetteer {
    pub fn is_organization_cue(&self, word: &str) -> bool {
        self.organization_cues.contains(word)
    }

    pub fn is_location_cue(&self, word: &str) -> bool {
        self.location_cues.contains(word)
    }

    pub fn is_place(&self, name: &str) -> bool {
        self.places.contains(name)
    }
}

/// Word classes the lemmatizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Word class for a Penn tag, if it has one.
    pub fn from_tag(tag: PosTag) -> Option<Self> {
        if tag.is_noun() {
            Some(WordClass::Noun)
        } else if tag.is_verb() || tag == PosTag::Modal {
            Some(WordClass::Verb)
        } else if tag.is_adjective() {
            Some(WordClass::Adjective)
        } else if tag.is_adverb() {
            Some(WordClass::Adverb)
        } else {
            None
        }
    }
}

/// Base forms per word class plus irregular forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wordnet {
    pub lemmas: FxHashMap<WordClass, FxHashSet<String>>,
    pub exceptions: FxHashMap<WordClass, FxHashMap<String, String>>,
}

impl Wordnet {
    pub fn contains(&self, class: WordClass, word: &str) -> bool {
        self.lemmas
            .get(&class)
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    pub fn exception(&self, class: WordClass, word: &str) -> Option<&str> {
        self.exceptions
            .get(&class)
            .and_then(|map| map.get(word))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_class_from_tag() {
        assert_eq!(WordClass::from_tag(PosTag::NounPlural), Some(WordClass::Noun));
        assert_eq!(WordClass::from_tag(PosTag::VerbPast), Some(WordClass::Verb));
        assert_eq!(
            WordClass::from_tag(PosTag::AdjectiveSuperlative),
            Some(WordClass::Adjective)
        );
        assert_eq!(WordClass::from_tag(PosTag::Adverb), Some(WordClass::Adverb));
        assert_eq!(WordClass::from_tag(PosTag::Determiner), None);
    }

    #[test]
    fn test_wordnet_json() {
        let json = r#"{
            "lemmas": {"adjective": ["bad"]},
            "exceptions": {"adjective": {"worst": "bad"}}
        }"#;
        let wordnet: Wordnet = serde_json::from_str(json).unwrap();
        assert!(wordnet.contains(WordClass::Adjective, "bad"));
        assert!(!wordnet.contains(WordClass::Noun, "bad"));
        assert_eq!(wordnet.exception(WordClass::Adjective, "worst"), Some("bad"));
    }
}
