#[macro_use]
extern crate serde_derive;

use argh::FromArgs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod github;
mod model;
mod sweep;

use config::Config;
use github::Github;

/// Report past-due GitHub milestones that still have open issues.
#[derive(FromArgs)]
#[argh(note = r#"Environment variables:
  GITHUB_TOKEN              Authorization token for GitHub.
  GITHUB_REPOSITORY_OWNER   Owner of the repository.
  GITHUB_REPOSITORY         Name of the repository.

A milestone is reported when it is open, at least 7 days past its due date,
and still has open issues. Variables may also be set in a .env file."#)]
struct Args {
    /// show version
    #[argh(switch)]
    version: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> anyhow::Result<()> {
    if let Ok(path) = dotenv::dotenv() {
        debug!(path = %path.display(), "loaded environment file");
    }
    let config = Config::from_env()?;
    debug!(?config, "configuration");

    let github = Github::new(&config)?;
    let now = chrono::Utc::now();
    let stdout = std::io::stdout();
    let summary = sweep::sweep(&github, now, &mut stdout.lock()).await?;

    info!(
        examined = summary.examined,
        past_due = summary.past_due,
        with_open_issues = summary.with_open_issues,
        "sweep finished"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Args = argh::from_env();
    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }

    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
