//! Repository collaborators
//!
//! - `refs`: branch and remote listings, read through the `git` binary
//! - `repository`: high-level access to the repository state and command execution

pub mod refs;
pub mod repository;
