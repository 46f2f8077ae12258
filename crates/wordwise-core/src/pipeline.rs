//! Collaborator traits for the extraction pipeline.
//!
//! Pipeline: Tokenizer → PosTagger → EntityChunker

use crate::models::{TaggedToken, Token, Tree};
use crate::NlpResult;

/// Splits raw text into ordered word and punctuation tokens.
pub trait Tokenizer {
    /// Tokenize `text` using the model for `language`.
    ///
    /// Fails with `UnsupportedLanguage` for unknown tags and
    /// `DependencyUnavailable` when the language model is missing.
    fn tokenize(&self, text: &str, language: &str) -> NlpResult<Vec<Token>>;
}

/// Assigns a part-of-speech tag to every token.
pub trait PosTagger {
    /// Output is aligned with `tokens`: same length, same order.
    fn tag(&self, tokens: &[Token]) -> NlpResult<Vec<TaggedToken>>;
}

/// Groups tagged tokens into named-entity subtrees.
pub trait EntityChunker {
    /// With `binary` set, every entity subtree is labelled `NE`.
    fn chunk(&self, tagged: &[TaggedToken], binary: bool) -> NlpResult<Tree>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str, language: &str) -> NlpResult<Vec<Token>> {
        (**self).tokenize(text, language)
    }
}

impl<P: PosTagger + ?Sized> PosTagger for &P {
    fn tag(&self, tokens: &[Token]) -> NlpResult<Vec<TaggedToken>> {
        (**self).tag(tokens)
    }
}

impl<C: EntityChunker + ?Sized> EntityChunker for &C {
    fn chunk(&self, tagged: &[TaggedToken], binary: bool) -> NlpResult<Tree> {
        (**self).chunk(tagged, binary)
    }
}
