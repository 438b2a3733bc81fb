//! Push/pull shorthand translation
//!
//! A shorthand such as `om:t-f` is turned into a git command line in three stages:
//!
//! - `tokenizer`: lexes the raw string with first-match, priority ordered rules
//! - `rewriter`: resolves branch/remote references against the known entities and normalizes
//!   flag spellings
//! - `generator`: reduces the resolved tokens with longest-match templates and fills in the
//!   default remote, branch and verb
//!
//! Every stage is a pure function of its inputs, so a translation can run from anywhere without
//! shared state.

pub mod entity;
pub mod error;
pub mod generator;
pub mod rewriter;
pub mod token;
pub mod tokenizer;

use crate::artifacts::shorthand::entity::Entity;
use crate::artifacts::shorthand::error::Result;

/// Translate `input` into a git command line (without the leading `git`)
pub fn translate(input: &str, entities: &[Entity], current_branch: Option<&str>) -> Result<String> {
    let tokens = tokenizer::tokenize(input)?;
    let tokens = rewriter::rewrite(entities, tokens)?;

    generator::generate(tokens, current_branch)
}
