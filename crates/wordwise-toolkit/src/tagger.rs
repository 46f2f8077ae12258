//! Lexicon part-of-speech tagger.
//!
//! Tags come from, in order:
//! - punctuation and symbol tables
//! - number shape (`CD`)
//! - capitalisation inside a sentence (`NNP`/`NNPS`, unless closed-class)
//! - the `tagger_lexicon` resource
//! - suffix heuristics for unknown words
//!
//! The lexicon is English; other languages are tagged with it too.

use std::sync::Arc;

use wordwise_core::models::starts_sentence;
use wordwise_core::{NlpResult, PosTag, PosTagger, TaggedToken, Token};

use crate::resources::{LinguisticResources, TaggerLexicon};

/// Words after which an `-ed` form reads as a participle.
const AUXILIARIES: &[&str] = &[
    "is", "was", "were", "are", "am", "be", "been", "being", "has", "have", "had", "'s", "'ve",
];

/// Suffixes that mark an unknown word as an adjective.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary",
];

/// Lexicon-backed tagger for Penn Treebank tags.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    resources: Arc<LinguisticResources>,
}

impl LexiconTagger {
    /// Create a tagger; fails if the bundle has no tagger lexicon.
    pub fn new(resources: Arc<LinguisticResources>) -> NlpResult<Self> {
        resources.require_lexicon()?;
        Ok(Self { resources })
    }

    /// Tag a single word with no context.
    pub fn tag_word(&self, word: &str) -> NlpResult<PosTag> {
        let lexicon = self.resources.require_lexicon()?;
        Ok(classify(lexicon, word, true, None, None))
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[Token]) -> NlpResult<Vec<TaggedToken>> {
        let lexicon = self.resources.require_lexicon()?;
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let prev = tagged.last();
            let sentence_initial = starts_sentence(tokens, i)
                || matches!(
                    prev.map(|p| p.tag),
                    Some(PosTag::OpenQuote) | Some(PosTag::OpenParen) | Some(PosTag::Colon)
                );
            let tag = classify(
                lexicon,
                &token.text,
                sentence_initial,
                prev.map(|p| p.tag),
                i.checked_sub(1).map(|j| tokens[j].text.as_str()),
            );
            tagged.push(TaggedToken::new(token.clone(), tag));
        }

        Ok(tagged)
    }
}

fn classify(
    lexicon: &TaggerLexicon,
    word: &str,
    sentence_initial: bool,
    prev_tag: Option<PosTag>,
    prev_word: Option<&str>,
) -> PosTag {
    if let Some(tag) = punctuation_tag(word) {
        return tag;
    }
    if is_number(word) {
        return PosTag::Cardinal;
    }

    let lower = word.to_lowercase();
    if lower == "'s" && prev_tag.map(PosTag::is_noun).unwrap_or(false) {
        return PosTag::Possessive;
    }

    let known = lexicon.lookup(&lower);
    let capitalized = word.chars().next().map(char::is_uppercase).unwrap_or(false);

    if capitalized && !sentence_initial {
        return match known {
            Some(tag) if is_closed_class(tag) => tag,
            Some(PosTag::NounPlural) => PosTag::ProperNounPlural,
            _ => PosTag::ProperNoun,
        };
    }
    if let Some(tag) = known {
        return tag;
    }
    if capitalized {
        return PosTag::ProperNoun;
    }

    suffix_tag(&lower, prev_tag, prev_word)
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    let tag = match word {
        "," => PosTag::Comma,
        "." | "!" | "?" => PosTag::SentenceFinal,
        ":" | ";" | "..." => PosTag::Colon,
        "--" | "\u{2014}" | "\u{2013}" => PosTag::Dash,
        "``" => PosTag::OpenQuote,
        "''" => PosTag::CloseQuote,
        "(" | "[" | "{" => PosTag::OpenParen,
        ")" | "]" | "}" => PosTag::CloseParen,
        "$" | "US$" | "A$" => PosTag::Dollar,
        "#" => PosTag::Pound,
        "%" | "&" | "*" | "+" | "=" | "@" | "/" => PosTag::Symbol,
        _ => return None,
    };
    Some(tag)
}

fn is_number(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().map(|c| c.is_ascii_digit()).unwrap_or(false)
        && chars.all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | ':' | '/'))
}

fn is_closed_class(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::Determiner
            | PosTag::Predeterminer
            | PosTag::Preposition
            | PosTag::CoordConj
            | PosTag::To
            | PosTag::Pronoun
            | PosTag::PossessivePronoun
            | PosTag::WhPronoun
            | PosTag::PossessiveWhPronoun
            | PosTag::WhDeterminer
            | PosTag::WhAdverb
            | PosTag::Existential
            | PosTag::Modal
    )
}

fn suffix_tag(lower: &str, prev_tag: Option<PosTag>, prev_word: Option<&str>) -> PosTag {
    let len = lower.chars().count();

    if len > 4 && lower.ends_with("ing") {
        return PosTag::VerbGerund;
    }
    if len > 3 && lower.ends_with("ed") {
        let after_aux = prev_word
            .map(|w| AUXILIARIES.contains(&w.to_lowercase().as_str()))
            .unwrap_or(false);
        return match prev_tag {
            Some(PosTag::Determiner) | Some(PosTag::PossessivePronoun) => PosTag::Adjective,
            _ if after_aux => PosTag::VerbPastParticiple,
            _ => PosTag::VerbPast,
        };
    }
    if len > 3 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| len > s.len() + 2 && lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    if len > 4 && lower.ends_with("est") {
        return PosTag::AdjectiveSuperlative;
    }
    if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return PosTag::NounPlural;
    }
    PosTag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::TreebankTokenizer;

    fn resources() -> Arc<LinguisticResources> {
        Arc::new(LinguisticResources::builtin().unwrap())
    }

    fn tag_text(text: &str) -> Vec<(String, PosTag)> {
        let res = resources();
        let tokens = TreebankTokenizer::new(res.clone())
            .unwrap()
            .tokenize_english(text)
            .unwrap();
        LexiconTagger::new(res)
            .unwrap()
            .tag(&tokens)
            .unwrap()
            .into_iter()
            .map(|t| (t.token.text, t.tag))
            .collect()
    }

    fn tag_of(tagged: &[(String, PosTag)], word: &str) -> PosTag {
        tagged.iter().find(|(w, _)| w == word).map(|(_, t)| *t).unwrap()
    }

    #[test]
    fn test_frodo_sentence() {
        let tagged = tag_text("It's a dangerous business, Frodo, going out your door.");
        let tags: Vec<&str> = tagged.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(
            tags,
            vec!["PRP", "VBZ", "DT", "JJ", "NN", ",", "NNP", ",", "VBG", "RP", "PRP$", "NN", "."]
        );
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper() {
        let tagged = tag_text("Men like Schiaparelli watched the red planet.");
        assert_eq!(tag_of(&tagged, "Men"), PosTag::NounPlural);
        assert_eq!(tag_of(&tagged, "Schiaparelli"), PosTag::ProperNoun);
        assert_eq!(tag_of(&tagged, "watched"), PosTag::VerbPast);
        assert_eq!(tag_of(&tagged, "red"), PosTag::Adjective);
    }

    #[test]
    fn test_known_adjective_capitalized_becomes_proper() {
        let tagged = tag_text("then by Perrotin of Nice, and then by others.");
        assert_eq!(tag_of(&tagged, "Nice"), PosTag::ProperNoun);
        assert_eq!(tag_of(&tagged, "of"), PosTag::Preposition);
    }

    #[test]
    fn test_closed_class_keeps_tag_when_capitalized() {
        let tagged = tag_text("so I went");
        assert_eq!(tag_of(&tagged, "I"), PosTag::Pronoun);
    }

    #[test]
    fn test_numbers_and_dashes() {
        let tagged = tag_text("During the opposition of 1894 a light\u{2014}it was seen.");
        assert_eq!(tag_of(&tagged, "1894"), PosTag::Cardinal);
        assert_eq!(tag_of(&tagged, "\u{2014}"), PosTag::Dash);
        assert_eq!(tag_of(&tagged, "During"), PosTag::Preposition);
    }

    #[test]
    fn test_pound_sign() {
        let tagger = LexiconTagger::new(resources()).unwrap();
        assert_eq!(tagger.tag_word("#").unwrap(), PosTag::Pound);
        assert_eq!(tagger.tag_word("%").unwrap(), PosTag::Symbol);
    }

    #[test]
    fn test_possessive_after_noun() {
        let tagged = tag_text("Frodo 's door");
        assert_eq!(tag_of(&tagged, "'s"), PosTag::Possessive);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(suffix_tag("wandering", None, None), PosTag::VerbGerund);
        assert_eq!(suffix_tag("mapped", Some(PosTag::Pronoun), Some("they")), PosTag::VerbPast);
        assert_eq!(
            suffix_tag("mapped", Some(PosTag::VerbPast), Some("was")),
            PosTag::VerbPastParticiple
        );
        assert_eq!(suffix_tag("quietly", None, None), PosTag::Adverb);
        assert_eq!(suffix_tag("marvelous", None, None), PosTag::Adjective);
        assert_eq!(suffix_tag("canals", None, None), PosTag::NounPlural);
        assert_eq!(suffix_tag("glass", None, None), PosTag::Noun);
    }

    #[test]
    fn test_filtered_tokens_keep_sentence_starts() {
        let res = resources();
        let tokens = TreebankTokenizer::new(res.clone())
            .unwrap()
            .tokenize_english("It was late. English readers heard of it.")
            .unwrap();
        // drop "It was late ." so the original indices no longer match positions
        let filtered: Vec<Token> = tokens.into_iter().skip(4).collect();
        let tagged = LexiconTagger::new(res).unwrap().tag(&filtered).unwrap();
        assert_eq!(tagged[0].text(), "English");
        assert_eq!(tagged[0].tag, PosTag::Adjective);
    }

    #[test]
    fn test_tag_word() {
        let tagger = LexiconTagger::new(resources()).unwrap();
        assert_eq!(tagger.tag_word("the").unwrap(), PosTag::Determiner);
        assert_eq!(tagger.tag_word("Frodo").unwrap(), PosTag::ProperNoun);
    }
}
