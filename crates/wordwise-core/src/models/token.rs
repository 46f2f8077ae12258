//! Tokens and tagged tokens.

use serde::{Deserialize, Serialize};

use super::PosTag;

/// A word or punctuation unit in document order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
    /// Surface text as it appears after tokenization
    pub text: String,
    /// Position in the document token sequence
    pub index: usize,
    /// Sentence the token belongs to
    pub sentence: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, index: usize, sentence: usize) -> Self {
        Self {
            text: text.into(),
            index,
            sentence,
        }
    }

    /// First character is uppercase.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().map(char::is_uppercase).unwrap_or(false)
    }
}

/// A token paired with its part-of-speech label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(token: Token, tag: PosTag) -> Self {
        Self { token, tag }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.token.text, self.tag)
    }
}

/// Whether `tokens[position]` opens a sentence, judged by its neighbour in
/// the slice rather than by `Token::index`, so filtered lists work too.
pub fn starts_sentence(tokens: &[Token], position: usize) -> bool {
    match (position.checked_sub(1), tokens.get(position)) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(prev), Some(token)) => tokens[prev].sentence != token.sentence,
    }
}

/// Build tokens from plain words, all in sentence 0.
pub fn tokens_from_words<S: AsRef<str>>(words: &[S]) -> Vec<Token> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| Token::new(w.as_ref(), i, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_sentence() {
        let tokens = vec![
            Token::new("Hello", 0, 0),
            Token::new(".", 1, 0),
            Token::new("Bye", 2, 1),
        ];
        assert!(starts_sentence(&tokens, 0));
        assert!(!starts_sentence(&tokens, 1));
        assert!(starts_sentence(&tokens, 2));
        assert!(!starts_sentence(&tokens, 3));
    }

    #[test]
    fn test_starts_sentence_on_filtered_list() {
        // "Hello" (0, s0) "." (1, s0) "Bye" (2, s1) "now" (3, s1) with "." dropped
        let filtered = vec![
            Token::new("Hello", 0, 0),
            Token::new("Bye", 2, 1),
            Token::new("now", 3, 1),
        ];
        assert!(starts_sentence(&filtered, 1));
        assert!(!starts_sentence(&filtered, 2));
    }

    #[test]
    fn test_tagged_display() {
        let tagged = TaggedToken::new(Token::new("Frodo", 0, 0), PosTag::ProperNoun);
        assert_eq!(tagged.to_string(), "Frodo/NNP");
    }
}
