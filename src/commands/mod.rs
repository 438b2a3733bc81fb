//! Command implementations
//!
//! Only porcelain commands exist here: the shorthand is a user-facing front for `git push` and
//! `git pull`, built on top of the repository areas.

pub mod porcelain;
