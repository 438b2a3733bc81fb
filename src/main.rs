use clap::Parser;
use colored::Colorize;
use gpp::areas::repository::Repository;
use gpp::commands::porcelain::push_pull::PushPullOptions;
use tracing_subscriber::EnvFilter;

/// Exit code for shorthand, repository and spawn failures
const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Parser)]
#[command(
    name = "gpp",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Shorthand git push and pull",
    long_about = "Turns a compact shorthand into a git push or pull command and runs it. \
    Single letters pick the best matching branch or remote, so `gpp om` runs \
    `git push origin master`, `gpp om:t` pushes master to feature-test and \
    `gpp om,` pulls instead.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        help = "Run as if started in this directory instead of the current one"
    )]
    path: Option<String>,
    #[arg(
        short,
        long,
        required = false,
        help = "Print the translated command instead of running it"
    )]
    print: bool,
    #[arg(long, help = "Use this branch instead of the checked-out one")]
    current_branch: Option<String>,
    #[arg(
        index = 1,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "The shorthand, e.g. `om`, `o master:t`, `om-f` or `pull om`"
    )]
    shorthand: Vec<String>,
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    let options = PushPullOptions {
        print_only: cli.print,
        current_branch: cli.current_branch,
    };

    repository
        .push_pull(&cli.shorthand.join(" "), &options)
        .await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{}", "Error running command:".red());
            eprintln!("{error:#}");
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}
