//! Data structures and algorithms
//!
//! - `shorthand`: tokenizer, rewriter and generator turning push/pull shorthand into git commands

pub mod shorthand;
