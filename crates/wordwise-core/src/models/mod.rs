//! Domain models for the wordwise toolkit.

mod language;
mod pos;
mod token;
mod tree;

pub use language::*;
pub use pos::*;
pub use token::*;
pub use tree::*;
