//! bridge — print the fastest way to get everyone across the bridge.
//!
//! ```text
//! bridge me 1 assistant 2 janitor 5 prof 10
//! ```
//!
//! Names must be unique.  The search is exponential; past about six people
//! it gets slow.  Set `RUST_LOG=debug` to see per-layer frontier sizes on
//! stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use torch_search::solve_args;

#[derive(Parser, Debug)]
#[command(name = "bridge")]
#[command(about = "Minimum-time bridge and torch schedule", long_about = None)]
// `-h` is left free to be a name; help is `--help` only.
#[command(disable_help_flag = true)]
struct Args {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Alternating names and crossing times, e.g. `me 1 assistant 2`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "NAME TIME")]
    people: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (roster, solution) = solve_args(args.people.as_slice())
        .context("no schedule for the given name/time pairs")?;
    info!(people = roster.len(), total = %solution.total(), "schedule found");

    print!("{}", solution.display(&roster));
    Ok(())
}
