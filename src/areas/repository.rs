use crate::areas::refs::Refs;
use crate::artifacts::shorthand::entity::Entity;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Entities and checked-out branch of a repository at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryState {
    pub entities: Vec<Entity>,
    pub current_branch: Option<String>,
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("repository path {path} does not exist"))?;

        let refs = Refs::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Collect branches then remotes, in the order git lists them, plus the current branch
    pub async fn state(&self) -> anyhow::Result<RepositoryState> {
        let branch_listing = self.refs.list_branches().await?;
        let remotes = self.refs.list_remotes().await?;

        let entities = branch_listing
            .branches()
            .iter()
            .map(Entity::branch)
            .chain(remotes.into_iter().map(Entity::remote))
            .collect::<Vec<_>>();

        debug!(
            entities = entities.len(),
            current_branch = branch_listing.current(),
            "read repository state"
        );

        Ok(RepositoryState {
            entities,
            current_branch: branch_listing.current().map(str::to_string),
        })
    }

    /// Run `git <args>` in the repository with its output streamed to ours
    pub async fn run_git(&self, args: &[&str]) -> anyhow::Result<ExitStatus> {
        debug!(?args, path = %self.path.display(), "spawning git");

        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to spawn git {}", args.join(" ")))
    }
}
