//! Phrase trees produced by chunkers.
//!
//! A tree is either a tagged leaf or a labelled subtree with ordered children.
//! Chunkers return a subtree labelled [`ROOT_LABEL`] whose children are the
//! chunks and the leftover leaves, in document order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PosTag, TaggedToken};

/// Label of the sentence root produced by every chunker.
pub const ROOT_LABEL: &str = "S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree {
    Leaf(TaggedToken),
    Subtree { label: String, children: Vec<Tree> },
}

impl Tree {
    pub fn subtree(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree::Subtree {
            label: label.into(),
            children,
        }
    }

    /// Root over plain leaves.
    pub fn flat(tagged: Vec<TaggedToken>) -> Self {
        Tree::subtree(ROOT_LABEL, tagged.into_iter().map(Tree::Leaf).collect())
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Subtree { label, .. } => Some(label),
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Subtree { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// All leaves in order, at any depth.
    pub fn leaves(&self) -> Vec<&TaggedToken> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a TaggedToken>) {
        match self {
            Tree::Leaf(tagged) => out.push(tagged),
            Tree::Subtree { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Leaf texts joined by single spaces.
    pub fn surface(&self) -> String {
        self.leaves()
            .iter()
            .map(|t| t.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Direct children carrying `label`.
    pub fn subtrees_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Tree> + 'a {
        self.children()
            .iter()
            .filter(move |child| child.label() == Some(label))
    }

    /// Tags of all leaves, in order.
    pub fn tags(&self) -> Vec<PosTag> {
        self.leaves().iter().map(|t| t.tag).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Bracketed notation, e.g. `(S It/PRP (NE Frodo/NNP) ./.)`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(tagged) => write!(f, "{}", tagged),
            Tree::Subtree { label, children } => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
