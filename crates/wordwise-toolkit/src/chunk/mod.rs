//! Chunking: tag-pattern grammars and named-entity chunking.

mod grammar;
mod ne;

pub use grammar::{tag_pattern_to_regex, ChunkRule, ChunkStage, RegexpParser, RuleKind};
pub use ne::{EntityType, NeChunker};
