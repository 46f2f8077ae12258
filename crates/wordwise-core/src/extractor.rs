//! Named-entity extraction.
//!
//! Tokenize, tag, chunk in binary mode, then read the surface form of every
//! `NE` subtree directly under the root.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Language, Tree};
use crate::pipeline::{EntityChunker, PosTagger, Tokenizer};
use crate::{NlpError, NlpResult};

/// Label the chunker uses for every entity in binary mode.
pub const ENTITY_LABEL: &str = "NE";

/// Extracts distinct named-entity strings from text.
pub struct NamedEntityExtractor<T, P, C> {
    tokenizer: T,
    tagger: P,
    chunker: C,
}

impl<T, P, C> NamedEntityExtractor<T, P, C>
where
    T: Tokenizer,
    P: PosTagger,
    C: EntityChunker,
{
    /// Create a new extractor from its three collaborators.
    pub fn new(tokenizer: T, tagger: P, chunker: C) -> Self {
        Self {
            tokenizer,
            tagger,
            chunker,
        }
    }

    /// Extract named entities from `quote` tokenized as `language`.
    ///
    /// The tagger is English-trained whatever `language` says; non-English
    /// text is tagged with it anyway.
    pub fn extract(&self, quote: &str, language: &str) -> NlpResult<HashSet<String>> {
        // Step 1: Tokenize
        let tokens = self.tokenizer.tokenize(quote, language)?;
        debug!(language, tokens = tokens.len(), "tokenized");

        if language.parse::<Language>().ok() != Some(Language::English) {
            debug!(language, "tagging non-English text with the English tagger");
        }

        // Step 2: POS tag
        let tagged = self.tagger.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(NlpError::Misaligned {
                expected: tokens.len(),
                actual: tagged.len(),
            });
        }

        // Step 3: Binary entity chunking
        let tree = self.chunker.chunk(&tagged, true)?;

        // Step 4: Collect entity surface forms
        let entities = entity_surfaces(&tree);
        debug!(entities = entities.len(), "extracted named entities");

        Ok(entities)
    }

    /// Extract with the default language, English.
    pub fn extract_english(&self, quote: &str) -> NlpResult<HashSet<String>> {
        self.extract(quote, Language::English.name())
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn tagger(&self) -> &P {
        &self.tagger
    }

    pub fn chunker(&self) -> &C {
        &self.chunker
    }
}

/// Surface forms of the `NE` subtrees directly under `tree`.
///
/// Only the root's children are inspected; nested subtrees are not searched.
pub fn entity_surfaces(tree: &Tree) -> HashSet<String> {
    tree.children()
        .iter()
        .filter_map(|child| match child {
            Tree::Subtree { label, .. } if label == ENTITY_LABEL => Some(child.surface()),
            Tree::Subtree { .. } | Tree::Leaf(_) => None,
        })
        .collect()
}
