//! Penn Treebank part-of-speech tagset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Penn Treebank part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PosTag {
    CoordConj,
    Cardinal,
    Determiner,
    Existential,
    ForeignWord,
    Preposition,
    Adjective,
    AdjectiveComparative,
    AdjectiveSuperlative,
    ListMarker,
    Modal,
    Noun,
    NounPlural,
    ProperNoun,
    ProperNounPlural,
    Predeterminer,
    Possessive,
    Pronoun,
    PossessivePronoun,
    Adverb,
    AdverbComparative,
    AdverbSuperlative,
    Particle,
    Symbol,
    To,
    Interjection,
    Verb,
    VerbPast,
    VerbGerund,
    VerbPastParticiple,
    VerbPresent,
    VerbThirdPerson,
    WhDeterminer,
    WhPronoun,
    PossessiveWhPronoun,
    WhAdverb,
    Dollar,
    Pound,
    OpenQuote,
    CloseQuote,
    OpenParen,
    CloseParen,
    Comma,
    Dash,
    SentenceFinal,
    Colon,
}

impl PosTag {
    /// Every tag, in tagset help order.
    pub const ALL: [PosTag; 46] = [
        PosTag::Dollar,
        PosTag::Pound,
        PosTag::CloseQuote,
        PosTag::OpenParen,
        PosTag::CloseParen,
        PosTag::Comma,
        PosTag::Dash,
        PosTag::SentenceFinal,
        PosTag::Colon,
        PosTag::CoordConj,
        PosTag::Cardinal,
        PosTag::Determiner,
        PosTag::Existential,
        PosTag::ForeignWord,
        PosTag::Preposition,
        PosTag::Adjective,
        PosTag::AdjectiveComparative,
        PosTag::AdjectiveSuperlative,
        PosTag::ListMarker,
        PosTag::Modal,
        PosTag::Noun,
        PosTag::ProperNoun,
        PosTag::ProperNounPlural,
        PosTag::NounPlural,
        PosTag::Predeterminer,
        PosTag::Possessive,
        PosTag::Pronoun,
        PosTag::PossessivePronoun,
        PosTag::Adverb,
        PosTag::AdverbComparative,
        PosTag::AdverbSuperlative,
        PosTag::Particle,
        PosTag::Symbol,
        PosTag::To,
        PosTag::Interjection,
        PosTag::Verb,
        PosTag::VerbPast,
        PosTag::VerbGerund,
        PosTag::VerbPastParticiple,
        PosTag::VerbPresent,
        PosTag::VerbThirdPerson,
        PosTag::WhDeterminer,
        PosTag::WhPronoun,
        PosTag::PossessiveWhPronoun,
        PosTag::WhAdverb,
        PosTag::OpenQuote,
    ];

    /// The tag as written in the Penn Treebank.
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::CoordConj => "CC",
            PosTag::Cardinal => "CD",
            PosTag::Determiner => "DT",
            PosTag::Existential => "EX",
            PosTag::ForeignWord => "FW",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::ListMarker => "LS",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Predeterminer => "PDT",
            PosTag::Possessive => "POS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Particle => "RP",
            PosTag::Symbol => "SYM",
            PosTag::To => "TO",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::PossessiveWhPronoun => "WP$",
            PosTag::WhAdverb => "WRB",
            PosTag::Dollar => "$",
            PosTag::Pound => "#",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::OpenParen => "(",
            PosTag::CloseParen => ")",
            PosTag::Comma => ",",
            PosTag::Dash => "--",
            PosTag::SentenceFinal => ".",
            PosTag::Colon => ":",
        }
    }

    /// Tagset help: what the tag stands for.
    pub fn description(self) -> &'static str {
        match self {
            PosTag::CoordConj => "conjunction, coordinating",
            PosTag::Cardinal => "numeral, cardinal",
            PosTag::Determiner => "determiner",
            PosTag::Existential => "existential there",
            PosTag::ForeignWord => "foreign word",
            PosTag::Preposition => "preposition or conjunction, subordinating",
            PosTag::Adjective => "adjective or numeral, ordinal",
            PosTag::AdjectiveComparative => "adjective, comparative",
            PosTag::AdjectiveSuperlative => "adjective, superlative",
            PosTag::ListMarker => "list item marker",
            PosTag::Modal => "modal auxiliary",
            PosTag::Noun => "noun, common, singular or mass",
            PosTag::NounPlural => "noun, common, plural",
            PosTag::ProperNoun => "noun, proper, singular",
            PosTag::ProperNounPlural => "noun, proper, plural",
            PosTag::Predeterminer => "pre-determiner",
            PosTag::Possessive => "genitive marker",
            PosTag::Pronoun => "pronoun, personal",
            PosTag::PossessivePronoun => "pronoun, possessive",
            PosTag::Adverb => "adverb",
            PosTag::AdverbComparative => "adverb, comparative",
            PosTag::AdverbSuperlative => "adverb, superlative",
            PosTag::Particle => "particle",
            PosTag::Symbol => "symbol",
            PosTag::To => "\"to\" as preposition or infinitive marker",
            PosTag::Interjection => "interjection",
            PosTag::Verb => "verb, base form",
            PosTag::VerbPast => "verb, past tense",
            PosTag::VerbGerund => "verb, present participle or gerund",
            PosTag::VerbPastParticiple => "verb, past participle",
            PosTag::VerbPresent => "verb, present tense, not 3rd person singular",
            PosTag::VerbThirdPerson => "verb, present tense, 3rd person singular",
            PosTag::WhDeterminer => "WH-determiner",
            PosTag::WhPronoun => "WH-pronoun",
            PosTag::PossessiveWhPronoun => "WH-pronoun, possessive",
            PosTag::WhAdverb => "Wh-adverb",
            PosTag::Dollar => "dollar",
            PosTag::Pound => "pound sign",
            PosTag::OpenQuote => "opening quotation mark",
            PosTag::CloseQuote => "closing quotation mark",
            PosTag::OpenParen => "opening parenthesis",
            PosTag::CloseParen => "closing parenthesis",
            PosTag::Comma => "comma",
            PosTag::Dash => "dash",
            PosTag::SentenceFinal => "sentence terminator",
            PosTag::Colon => "colon or ellipsis",
        }
    }

    /// Tagset help: a few example words.
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            PosTag::CoordConj => &["&", "and", "both", "but", "either", "or", "yet"],
            PosTag::Cardinal => &["mid-1890", "nine-thirty", "0.5", "1894", "one", "ten"],
            PosTag::Determiner => &["all", "an", "another", "any", "the", "this", "those"],
            PosTag::Existential => &["there"],
            PosTag::ForeignWord => &["gemeinschaft", "hund", "ich", "jeux"],
            PosTag::Preposition => &["astride", "among", "of", "on", "by", "because"],
            PosTag::Adjective => &["third", "oceanic", "dangerous", "first", "red"],
            PosTag::AdjectiveComparative => &["bleaker", "braver", "cheaper", "larger"],
            PosTag::AdjectiveSuperlative => &["calmest", "cheapest", "darkest", "worst"],
            PosTag::ListMarker => &["A", "B", "C", "First", "One", "a", "b"],
            PosTag::Modal => &["can", "cannot", "could", "might", "shall", "will"],
            PosTag::Noun => &["business", "door", "planet", "lesson", "trust"],
            PosTag::NounPlural => &["people", "centuries", "markings", "observers"],
            PosTag::ProperNoun => &["Frodo", "Mars", "Nice", "Schiaparelli"],
            PosTag::ProperNounPlural => &["Americans", "Martians", "Andes"],
            PosTag::Predeterminer => &["all", "both", "half", "many", "quite", "such"],
            PosTag::Possessive => &["'", "'s"],
            PosTag::Pronoun => &["he", "it", "they", "we", "you"],
            PosTag::PossessivePronoun => &["her", "his", "its", "our", "their", "your"],
            PosTag::Adverb => &["rapidly", "so", "well", "first", "then"],
            PosTag::AdverbComparative => &["further", "harder", "more", "faster"],
            PosTag::AdverbSuperlative => &["best", "biggest", "most", "worst"],
            PosTag::Particle => &["aboard", "about", "off", "out", "up"],
            PosTag::Symbol => &["%", "&", "*", "+", "="],
            PosTag::To => &["to"],
            PosTag::Interjection => &["goodbye", "hey", "oh", "wow", "yes"],
            PosTag::Verb => &["learn", "find", "believe", "interpret"],
            PosTag::VerbPast => &["learned", "watched", "failed", "mapped"],
            PosTag::VerbGerund => &["going", "getting", "learning", "fluctuating"],
            PosTag::VerbPastParticiple => &["been", "seen", "dated", "illuminated"],
            PosTag::VerbPresent => &["believe", "can", "do", "have"],
            PosTag::VerbThirdPerson => &["'s", "has", "is", "was"],
            PosTag::WhDeterminer => &["that", "what", "whatever", "which"],
            PosTag::WhPronoun => &["that", "what", "who", "whom"],
            PosTag::PossessiveWhPronoun => &["whose"],
            PosTag::WhAdverb => &["how", "however", "when", "where", "why"],
            PosTag::Dollar => &["$", "-$", "A$", "US$"],
            PosTag::Pound => &["#"],
            PosTag::OpenQuote => &["`", "``"],
            PosTag::CloseQuote => &["'", "''"],
            PosTag::OpenParen => &["(", "[", "{"],
            PosTag::CloseParen => &[")", "]", "}"],
            PosTag::Comma => &[","],
            PosTag::Dash => &["--", "\u{2014}"],
            PosTag::SentenceFinal => &["!", ".", "?"],
            PosTag::Colon => &[":", ";", "..."],
        }
    }

    pub fn is_noun(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }

    pub fn is_proper_noun(self) -> bool {
        matches!(self, PosTag::ProperNoun | PosTag::ProperNounPlural)
    }

    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::Verb
                | PosTag::VerbPast
                | PosTag::VerbGerund
                | PosTag::VerbPastParticiple
                | PosTag::VerbPresent
                | PosTag::VerbThirdPerson
        )
    }

    pub fn is_adjective(self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative
        )
    }

    pub fn is_adverb(self) -> bool {
        matches!(
            self,
            PosTag::Adverb | PosTag::AdverbComparative | PosTag::AdverbSuperlative
        )
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            PosTag::OpenQuote
                | PosTag::CloseQuote
                | PosTag::OpenParen
                | PosTag::CloseParen
                | PosTag::Comma
                | PosTag::Dash
                | PosTag::SentenceFinal
                | PosTag::Colon
        )
    }

    /// Tagset help for tags matching a regex-free prefix, e.g. `"NN"` or `"VB"`.
    /// An empty prefix describes the whole tagset.
    pub fn help(prefix: &str) -> String {
        let mut out = String::new();
        for tag in PosTag::ALL.iter().filter(|t| t.as_str().starts_with(prefix)) {
            out.push_str(&format!(
                "{}: {}\n    {}\n",
                tag.as_str(),
                tag.description(),
                tag.examples().join(" ")
            ));
        }
        out
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for unknown tag strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part-of-speech tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for PosTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PosTag::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl TryFrom<String> for PosTag {
    type Error = UnknownTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PosTag> for &'static str {
    fn from(tag: PosTag) -> Self {
        tag.as_str()
    }
}
