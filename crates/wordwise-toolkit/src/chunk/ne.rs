//! Gazetteer-backed named-entity chunker.
//!
//! Candidate entities are maximal runs of proper nouns (`NNP`/`NNPS`) within
//! one sentence. In binary mode every run is labelled `NE`; otherwise the run
//! is typed with the gazetteer.

use std::fmt;
use std::sync::Arc;

use wordwise_core::{EntityChunker, NlpResult, TaggedToken, Tree, ENTITY_LABEL, ROOT_LABEL};

use crate::resources::{Gazetteer, LinguisticResources};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Person,
    Organization,
    Gpe,
    Location,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Gpe => "GPE",
            EntityType::Location => "LOCATION",
        }
    }

    /// Type a proper-noun run. Cue words win over the place list so that
    /// "Paris Observatory" is an organization.
    pub fn classify(gazetteer: &Gazetteer, words: &[&str]) -> Self {
        if words.iter().any(|w| gazetteer.is_organization_cue(w)) {
            EntityType::Organization
        } else if words.iter().any(|w| gazetteer.is_location_cue(w)) {
            EntityType::Location
        } else if gazetteer.is_place(&words.join(" ")) {
            EntityType::Gpe
        } else {
            EntityType::Person
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NeChunker {
    resources: Arc<LinguisticResources>,
}

impl NeChunker {
    /// Create a chunker; fails if the bundle has no gazetteer.
    pub fn new(resources: Arc<LinguisticResources>) -> NlpResult<Self> {
        resources.require_gazetteer()?;
        Ok(Self { resources })
    }
}

impl EntityChunker for NeChunker {
    fn chunk(&self, tagged: &[TaggedToken], binary: bool) -> NlpResult<Tree> {
        let gazetteer = self.resources.require_gazetteer()?;
        let mut children = Vec::with_capacity(tagged.len());
        let mut i = 0;

        while i < tagged.len() {
            if !tagged[i].tag.is_proper_noun() {
                children.push(Tree::Leaf(tagged[i].clone()));
                i += 1;
                continue;
            }

            let start = i;
            let sentence = tagged[i].token.sentence;
            while i < tagged.len()
                && tagged[i].tag.is_proper_noun()
                && tagged[i].token.sentence == sentence
            {
                i += 1;
            }

            let run = &tagged[start..i];
            let label = if binary {
                ENTITY_LABEL
            } else {
                let words: Vec<&str> = run.iter().map(TaggedToken::text).collect();
                EntityType::classify(gazetteer, &words).as_str()
            };
            children.push(Tree::subtree(
                label,
                run.iter().cloned().map(Tree::Leaf).collect(),
            ));
        }

        Ok(Tree::subtree(ROOT_LABEL, children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordwise_core::{PosTag, Token};

    fn chunker() -> NeChunker {
        NeChunker::new(Arc::new(LinguisticResources::builtin().unwrap())).unwrap()
    }

    fn tagged(pairs: &[(&str, PosTag)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (w, t))| TaggedToken::new(Token::new(*w, i, 0), *t))
            .collect()
    }

    fn lick() -> Vec<TaggedToken> {
        use PosTag::*;
        tagged(&[
            ("seen", VerbPastParticiple),
            ("at", Preposition),
            ("the", Determiner),
            ("Lick", ProperNoun),
            ("Observatory", ProperNoun),
            ("by", Preposition),
            ("Perrotin", ProperNoun),
            ("of", Preposition),
            ("Nice", ProperNoun),
            (".", SentenceFinal),
        ])
    }

    #[test]
    fn test_binary_chunks() {
        let tree = chunker().chunk(&lick(), true).unwrap();
        let entities: Vec<String> = tree.subtrees_labelled(ENTITY_LABEL).map(Tree::surface).collect();
        assert_eq!(entities, vec!["Lick Observatory", "Perrotin", "Nice"]);
        assert_eq!(tree.leaves().len(), lick().len());
    }

    #[test]
    fn test_typed_chunks() {
        let tree = chunker().chunk(&lick(), false).unwrap();
        let labels: Vec<&str> = tree.children().iter().filter_map(Tree::label).collect();
        assert_eq!(labels, vec!["ORGANIZATION", "PERSON", "GPE"]);
    }

    #[test]
    fn test_runs_do_not_cross_sentences() {
        let tokens = vec![
            TaggedToken::new(Token::new("Mars", 0, 0), PosTag::ProperNoun),
            TaggedToken::new(Token::new("Nature", 1, 1), PosTag::ProperNoun),
        ];
        let tree = chunker().chunk(&tokens, true).unwrap();
        assert_eq!(tree.subtrees_labelled(ENTITY_LABEL).count(), 2);
    }

    #[test]
    fn test_classify() {
        let resources = LinguisticResources::builtin().unwrap();
        let gazetteer = resources.require_gazetteer().unwrap();
        assert_eq!(EntityType::classify(gazetteer, &["Paris", "Observatory"]), EntityType::Organization);
        assert_eq!(EntityType::classify(gazetteer, &["Hawái"]), EntityType::Gpe);
        assert_eq!(EntityType::classify(gazetteer, &["United", "States"]), EntityType::Gpe);
        assert_eq!(EntityType::classify(gazetteer, &["Hellas", "Planitia"]), EntityType::Location);
        assert_eq!(EntityType::classify(gazetteer, &["Bruno", "Mars"]), EntityType::Person);
    }

    #[test]
    fn test_no_proper_nouns() {
        use PosTag::*;
        let tokens = tagged(&[("red", Adjective), ("planet", Noun)]);
        let tree = chunker().chunk(&tokens, true).unwrap();
        assert!(tree.children().iter().all(Tree::is_leaf));
    }
}
