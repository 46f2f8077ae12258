//! Golden tests for the named-entity extractor.
//!
//! These tests drive the extractor with a minimal in-test pipeline and check
//! the set semantics of its output.

use std::collections::HashSet;

use proptest::prelude::*;
use wordwise_core::{
    EntityChunker, NamedEntityExtractor, NlpResult, PosTag, PosTagger, TaggedToken, Token,
    Tokenizer, Tree, ENTITY_LABEL, ROOT_LABEL,
};

struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str, language: &str) -> NlpResult<Vec<Token>> {
        language.parse::<wordwise_core::Language>()?;
        Ok(text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| Token::new(w, i, 0))
            .collect())
    }
}

struct CapsTagger;

impl PosTagger for CapsTagger {
    fn tag(&self, tokens: &[Token]) -> NlpResult<Vec<TaggedToken>> {
        Ok(tokens
            .iter()
            .map(|t| {
                let tag = if t.is_capitalized() {
                    PosTag::ProperNoun
                } else {
                    PosTag::Noun
                };
                TaggedToken::new(t.clone(), tag)
            })
            .collect())
    }
}

struct ProperRunChunker;

impl EntityChunker for ProperRunChunker {
    fn chunk(&self, tagged: &[TaggedToken], _binary: bool) -> NlpResult<Tree> {
        let mut children = Vec::new();
        let mut i = 0;
        while i < tagged.len() {
            if tagged[i].tag.is_proper_noun() {
                let start = i;
                while i < tagged.len() && tagged[i].tag.is_proper_noun() {
                    i += 1;
                }
                let leaves = tagged[start..i].iter().cloned().map(Tree::Leaf).collect();
                children.push(Tree::subtree(ENTITY_LABEL, leaves));
            } else {
                children.push(Tree::Leaf(tagged[i].clone()));
                i += 1;
            }
        }
        Ok(Tree::subtree(ROOT_LABEL, children))
    }
}

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    expected: &'static [&'static str],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "single-name",
            input: "going out your door Frodo",
            expected: &["Frodo"],
        },
        GoldenCase {
            id: "multi-word",
            input: "first at the Lick Observatory then",
            expected: &["Lick Observatory"],
        },
        GoldenCase {
            id: "duplicates-collapse",
            input: "Mars and Mars and Mars",
            expected: &["Mars"],
        },
        GoldenCase {
            id: "no-entities",
            input: "a dangerous business",
            expected: &[],
        },
        GoldenCase {
            id: "empty",
            input: "",
            expected: &[],
        },
    ]
}

fn extractor() -> NamedEntityExtractor<SpaceTokenizer, CapsTagger, ProperRunChunker> {
    NamedEntityExtractor::new(SpaceTokenizer, CapsTagger, ProperRunChunker)
}

#[test]
fn test_golden_cases() {
    let extractor = extractor();
    for case in get_golden_cases() {
        let result = extractor.extract_english(case.input).unwrap();
        let expected: HashSet<String> = case.expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected, "case {}", case.id);
    }
}

proptest! {
    #[test]
    fn prop_entities_are_contiguous_token_runs(words in proptest::collection::vec("[A-Za-z]{1,6}", 0..12)) {
        let text = words.join(" ");
        let result = extractor().extract_english(&text).unwrap();
        let padded = format!(" {} ", text);
        for entity in &result {
            let contiguous = padded.contains(&format!(" {} ", entity));
            prop_assert!(contiguous, "entity {:?} not contiguous in {:?}", entity, text);
        }
    }

    #[test]
    fn prop_idempotent(words in proptest::collection::vec("[A-Za-z]{1,6}", 0..12)) {
        let text = words.join(" ");
        let extractor = extractor();
        prop_assert_eq!(
            extractor.extract_english(&text).unwrap(),
            extractor.extract_english(&text).unwrap()
        );
    }
}
