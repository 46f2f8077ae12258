//! Dictionary lemmatizer.
//!
//! Irregular forms come from the exception table; regular forms are found by
//! detaching inflectional endings and keeping the first candidate the
//! dictionary knows. Unknown words come back unchanged.

use std::sync::Arc;

use wordwise_core::{NlpResult, TaggedToken};

use crate::resources::{LinguisticResources, WordClass, Wordnet};

/// (suffix, replacement) rules per word class, tried in order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    resources: Arc<LinguisticResources>,
}

impl Lemmatizer {
    /// Create a lemmatizer; fails if the bundle has no wordnet data.
    pub fn new(resources: Arc<LinguisticResources>) -> NlpResult<Self> {
        resources.require_wordnet()?;
        Ok(Self { resources })
    }

    /// Lemmatize as a noun.
    pub fn lemmatize(&self, word: &str) -> NlpResult<String> {
        self.lemmatize_as(word, WordClass::Noun)
    }

    pub fn lemmatize_as(&self, word: &str, class: WordClass) -> NlpResult<String> {
        let wordnet = self.resources.require_wordnet()?;
        Ok(morphy(wordnet, word, class).unwrap_or_else(|| word.to_string()))
    }

    /// Lemmatize using each token's tag; tokens without a word class pass through.
    pub fn lemmatize_tagged(&self, tagged: &[TaggedToken]) -> NlpResult<Vec<String>> {
        let wordnet = self.resources.require_wordnet()?;
        Ok(tagged
            .iter()
            .map(|t| {
                let class = WordClass::from_tag(t.tag).unwrap_or(WordClass::Noun);
                morphy(wordnet, t.text(), class).unwrap_or_else(|| t.text().to_string())
            })
            .collect())
    }
}

fn morphy(wordnet: &Wordnet, word: &str, class: WordClass) -> Option<String> {
    let lower = word.to_lowercase();

    if let Some(base) = wordnet.exception(class, &lower) {
        return Some(base.to_string());
    }
    if wordnet.contains(class, &lower) {
        return Some(lower);
    }

    let rules = match class {
        WordClass::Noun => NOUN_RULES,
        WordClass::Verb => VERB_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Adverb => &[],
    };

    rules.iter().find_map(|(suffix, replacement)| {
        let stem = lower.strip_suffix(suffix)?;
        if stem.is_empty() {
            return None;
        }
        let candidate = format!("{}{}", stem, replacement);
        wordnet.contains(class, &candidate).then_some(candidate)
    })
}
