use crate::areas::repository::Repository;
use crate::artifacts::shorthand::translate;
use colored::Colorize;
use std::io::Write;
use tracing::info;

/// Exit code reported when git was terminated by a signal
const SIGNALLED_EXIT_CODE: i32 = 1;

/// How a translated command should be handled
#[derive(Debug, Clone, Default)]
pub struct PushPullOptions {
    /// Only print the command instead of running it
    pub print_only: bool,
    /// Use this branch instead of the one checked out
    pub current_branch: Option<String>,
}

impl Repository {
    /// Translate `shorthand` against the repository's branches and remotes, then run it.
    ///
    /// Returns the exit code git finished with. Nothing is spawned if the shorthand does not
    /// translate.
    pub async fn push_pull(
        &mut self,
        shorthand: &str,
        options: &PushPullOptions,
    ) -> anyhow::Result<i32> {
        let state = self.state().await?;
        let current_branch = options
            .current_branch
            .as_deref()
            .or(state.current_branch.as_deref());

        let command = translate(shorthand, &state.entities, current_branch)?;
        info!(shorthand, command = command.as_str(), "translated shorthand");

        if options.print_only {
            writeln!(self.writer(), "{command}")?;
            return Ok(0);
        }

        writeln!(
            self.writer(),
            "Running $ {}",
            format!("git {command}").cyan()
        )?;

        let args = command.split(' ').collect::<Vec<_>>();
        let status = self.run_git(&args).await?;

        if status.success() {
            let outcome = if command.starts_with("pull") {
                "Successfully pulled."
            } else {
                "Successfully pushed."
            };
            writeln!(self.writer(), "{}", outcome.green())?;
        }

        Ok(status.code().unwrap_or(SIGNALLED_EXIT_CODE))
    }
}
