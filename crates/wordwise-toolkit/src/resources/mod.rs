//! Linguistic resource bundle.
//!
//! All lexical data the toolkit consults lives here, acquired once and shared
//! read-only behind an `Arc`. A bundle is either the built-in data compiled
//! into the crate or a directory described by a `manifest.json`.
//!
//! Resources are optional. Components ask for what they need through the
//! `require_*` accessors, which fail with `DependencyUnavailable`.

mod data;
mod manifest;

pub use data::*;
pub use manifest::*;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use wordwise_core::{NlpError, NlpResult};

/// Resource loading errors.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        resource: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} is not valid UTF-8: {source}")]
    Encoding {
        resource: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("checksum mismatch for {resource}: expected {expected}, found {actual}")]
    Checksum {
        resource: String,
        expected: String,
        actual: String,
    },
}

impl ResourceError {
    /// Name of the resource the error concerns.
    pub fn resource(&self) -> &str {
        match self {
            ResourceError::Io { resource, .. }
            | ResourceError::Json { resource, .. }
            | ResourceError::Encoding { resource, .. }
            | ResourceError::Checksum { resource, .. } => resource,
        }
    }
}

impl From<ResourceError> for NlpError {
    fn from(e: ResourceError) -> Self {
        NlpError::unavailable(e.resource().to_string(), e.to_string())
    }
}

pub type ResourceResult<T> = Result<T, ResourceError>;

/// The kinds of resource a bundle may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Per-language abbreviations for sentence splitting
    Punkt,
    /// Word to part-of-speech lexicon
    TaggerLexicon,
    /// Entity type cues and known places
    NeGazetteer,
    /// Base-form dictionary and exceptions for lemmatizing
    Wordnet,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Punkt,
        ResourceKind::TaggerLexicon,
        ResourceKind::NeGazetteer,
        ResourceKind::Wordnet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Punkt => "punkt",
            ResourceKind::TaggerLexicon => "tagger_lexicon",
            ResourceKind::NeGazetteer => "ne_gazetteer",
            ResourceKind::Wordnet => "wordnet",
        }
    }

    /// Default file name inside a resource directory.
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    fn builtin_json(self) -> &'static str {
        match self {
            ResourceKind::Punkt => include_str!("../../data/punkt.json"),
            ResourceKind::TaggerLexicon => include_str!("../../data/tagger_lexicon.json"),
            ResourceKind::NeGazetteer => include_str!("../../data/ne_gazetteer.json"),
            ResourceKind::Wordnet => include_str!("../../data/wordnet.json"),
        }
    }
}

/// Read-only bundle of linguistic resources.
#[derive(Debug, Clone, Default)]
pub struct LinguisticResources {
    punkt: Option<Punkt>,
    lexicon: Option<TaggerLexicon>,
    gazetteer: Option<Gazetteer>,
    wordnet: Option<Wordnet>,
}

impl LinguisticResources {
    /// Bundle with every resource, parsed from the data compiled into the crate.
    pub fn builtin() -> ResourceResult<Self> {
        let mut bundle = Self::default();
        for kind in ResourceKind::ALL {
            bundle.insert(kind, kind.builtin_json())?;
        }
        info!(resources = ResourceKind::ALL.len(), "loaded builtin linguistic resources");
        Ok(bundle)
    }

    /// Load the resources listed in `dir/manifest.json`, verifying checksums.
    ///
    /// Kinds missing from the manifest are left out of the bundle.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> ResourceResult<Self> {
        let dir = dir.as_ref();
        let manifest = Manifest::read(dir)?;

        let mut bundle = Self::default();
        for entry in &manifest.resources {
            let path = dir.join(&entry.file);
            let raw = fs::read(&path).map_err(|source| ResourceError::Io {
                resource: entry.kind.name().to_string(),
                path: path.clone(),
                source,
            })?;
            entry.verify(&raw)?;

            let bytes = raw.len();
            let json = String::from_utf8(raw).map_err(|source| ResourceError::Encoding {
                resource: entry.kind.name().to_string(),
                source,
            })?;
            bundle.insert(entry.kind, &json)?;
            info!(
                resource = entry.kind.name(),
                file = %path.display(),
                bytes,
                "loaded linguistic resource"
            );
        }

        Ok(bundle)
    }

    fn insert(&mut self, kind: ResourceKind, json: &str) -> ResourceResult<()> {
        match kind {
            ResourceKind::Punkt => self.punkt = Some(parse(kind, json)?),
            ResourceKind::TaggerLexicon => self.lexicon = Some(parse(kind, json)?),
            ResourceKind::NeGazetteer => self.gazetteer = Some(parse(kind, json)?),
            ResourceKind::Wordnet => self.wordnet = Some(parse(kind, json)?),
        }
        Ok(())
    }

    /// Kinds present in this bundle.
    pub fn available(&self) -> BTreeSet<ResourceKind> {
        ResourceKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    pub fn has(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Punkt => self.punkt.is_some(),
            ResourceKind::TaggerLexicon => self.lexicon.is_some(),
            ResourceKind::NeGazetteer => self.gazetteer.is_some(),
            ResourceKind::Wordnet => self.wordnet.is_some(),
        }
    }

    /// Copy of this bundle lacking `kind`.
    pub fn without(&self, kind: ResourceKind) -> Self {
        let mut copy = self.clone();
        match kind {
            ResourceKind::Punkt => copy.punkt = None,
            ResourceKind::TaggerLexicon => copy.lexicon = None,
            ResourceKind::NeGazetteer => copy.gazetteer = None,
            ResourceKind::Wordnet => copy.wordnet = None,
        }
        copy
    }

    pub fn require_punkt(&self) -> NlpResult<&Punkt> {
        self.punkt.as_ref().ok_or_else(|| missing(ResourceKind::Punkt))
    }

    pub fn require_lexicon(&self) -> NlpResult<&TaggerLexicon> {
        self.lexicon
            .as_ref()
            .ok_or_else(|| missing(ResourceKind::TaggerLexicon))
    }

    pub fn require_gazetteer(&self) -> NlpResult<&Gazetteer> {
        self.gazetteer
            .as_ref()
            .ok_or_else(|| missing(ResourceKind::NeGazetteer))
    }

    pub fn require_wordnet(&self) -> NlpResult<&Wordnet> {
        self.wordnet
            .as_ref()
            .ok_or_else(|| missing(ResourceKind::Wordnet))
    }
}

fn parse<T: DeserializeOwned>(kind: ResourceKind, json: &str) -> ResourceResult<T> {
    serde_json::from_str(json).map_err(|source| ResourceError::Json {
        resource: kind.name().to_string(),
        source,
    })
}

fn missing(kind: ResourceKind) -> NlpError {
    NlpError::unavailable(kind.name(), "resource not found in bundle")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_everything() {
        let bundle = LinguisticResources::builtin().unwrap();
        assert_eq!(bundle.available().len(), ResourceKind::ALL.len());
        assert!(bundle.require_punkt().is_ok());
        assert!(bundle.require_lexicon().is_ok());
        assert!(bundle.require_gazetteer().is_ok());
        assert!(bundle.require_wordnet().is_ok());
    }

    #[test]
    fn test_without() {
        let bundle = LinguisticResources::builtin()
            .unwrap()
            .without(ResourceKind::Wordnet);
        assert!(!bundle.has(ResourceKind::Wordnet));

        let err = bundle.require_wordnet().unwrap_err();
        assert!(matches!(
            err,
            NlpError::DependencyUnavailable { ref resource, .. } if resource == "wordnet"
        ));
    }

    #[test]
    fn test_resource_error_converts() {
        let err = ResourceError::Checksum {
            resource: "punkt".into(),
            expected: "aa".into(),
            actual: "bb".into(),
        };
        let nlp: NlpError = err.into();
        assert!(matches!(
            nlp,
            NlpError::DependencyUnavailable { ref resource, .. } if resource == "punkt"
        ));
    }
}
