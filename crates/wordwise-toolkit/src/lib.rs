//! Wordwise Toolkit
//!
//! Rule and lexicon based implementations of the `wordwise-core` pipeline
//! traits, plus the smaller tools that go with them.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │   LinguisticResources    │  builtin() / load_dir(path)
//!                 │ punkt · lexicon · gazet. │
//!                 │         · wordnet        │
//!                 └────────────┬─────────────┘
//!                              │ Arc (shared, read-only)
//!      ┌───────────────┬───────┴───────┬────────────────┐
//!      ▼               ▼               ▼                ▼
//! TreebankTokenizer LexiconTagger   NeChunker       Lemmatizer
//!   (Tokenizer)     (PosTagger)  (EntityChunker)
//! ```
//!
//! [`Toolkit`] builds every component from one bundle; failing fast with
//! `DependencyUnavailable` when a resource is missing.
//!
//! # Modules
//!
//! - [`resources`]: Resource bundle, manifest and checksums
//! - [`tokenize`]: Sentence and word tokenization
//! - [`tagger`]: Part-of-speech tagging
//! - [`stopwords`]: Stop-word filtering
//! - [`stem`]: Stemming
//! - [`lemmatize`]: Dictionary lemmatization
//! - [`chunk`]: Regexp chunk grammars and named-entity chunking

pub mod chunk;
pub mod lemmatize;
pub mod resources;
pub mod stem;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

pub use chunk::{EntityType, NeChunker, RegexpParser};
pub use lemmatize::Lemmatizer;
pub use resources::{LinguisticResources, ResourceError, ResourceKind};
pub use stem::Stemmer;
pub use stopwords::StopwordFilter;
pub use tagger::LexiconTagger;
pub use tokenize::TreebankTokenizer;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;
use wordwise_core::{
    Language, NamedEntityExtractor, NlpResult, PosTagger, TaggedToken, Token, Tokenizer,
};

/// Extractor wired to a toolkit's components.
pub type ToolkitExtractor<'a> =
    NamedEntityExtractor<&'a TreebankTokenizer, &'a LexiconTagger, &'a NeChunker>;

/// All toolkit components built over one resource bundle.
#[derive(Debug, Clone)]
pub struct Toolkit {
    resources: Arc<LinguisticResources>,
    language: Language,
    tokenizer: TreebankTokenizer,
    tagger: LexiconTagger,
    chunker: NeChunker,
    lemmatizer: Lemmatizer,
    stopwords: StopwordFilter,
}

impl Toolkit {
    /// Build every component; fails on the first missing resource.
    pub fn new(resources: Arc<LinguisticResources>) -> NlpResult<Self> {
        let toolkit = Self {
            tokenizer: TreebankTokenizer::new(resources.clone())?,
            tagger: LexiconTagger::new(resources.clone())?,
            chunker: NeChunker::new(resources.clone())?,
            lemmatizer: Lemmatizer::new(resources.clone())?,
            stopwords: StopwordFilter::default(),
            language: Language::English,
            resources,
        };
        debug!(resources = ?toolkit.resources.available(), "toolkit ready");
        Ok(toolkit)
    }

    /// Toolkit over the built-in resources.
    pub fn builtin() -> NlpResult<Self> {
        Self::new(Arc::new(LinguisticResources::builtin()?))
    }

    /// Set the language used for tokenizing, stop words and stemming.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self.stopwords = StopwordFilter::new(language);
        self
    }

    /// Add stop words on top of the language list.
    pub fn with_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resources(&self) -> &Arc<LinguisticResources> {
        &self.resources
    }

    pub fn tokenizer(&self) -> &TreebankTokenizer {
        &self.tokenizer
    }

    pub fn tagger(&self) -> &LexiconTagger {
        &self.tagger
    }

    pub fn chunker(&self) -> &NeChunker {
        &self.chunker
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Stemmer for the configured language.
    pub fn stemmer(&self) -> NlpResult<Stemmer> {
        Stemmer::new(self.language)
    }

    pub fn extractor(&self) -> ToolkitExtractor<'_> {
        NamedEntityExtractor::new(&self.tokenizer, &self.tagger, &self.chunker)
    }

    /// Tokenize in the configured language.
    pub fn tokenize(&self, text: &str) -> NlpResult<Vec<Token>> {
        self.tokenizer.tokenize(text, self.language.name())
    }

    /// Tokenize and tag in the configured language.
    pub fn tag(&self, text: &str) -> NlpResult<Vec<TaggedToken>> {
        self.tagger.tag(&self.tokenize(text)?)
    }

    pub fn extract_named_entities(&self, quote: &str) -> NlpResult<HashSet<String>> {
        self.extractor().extract(quote, self.language.name())
    }
}

/// Named entities in `quote`, tokenized as `language`.
///
/// Needs only the resources of the tokenizer, tagger and chunker; other
/// kinds may be absent from the bundle.
pub fn extract_named_entities(
    resources: &Arc<LinguisticResources>,
    quote: &str,
    language: &str,
) -> NlpResult<HashSet<String>> {
    NamedEntityExtractor::new(
        TreebankTokenizer::new(Arc::clone(resources))?,
        LexiconTagger::new(Arc::clone(resources))?,
        NeChunker::new(Arc::clone(resources))?,
    )
    .extract(quote, language)
}
