use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semver_labeller::cli::orchestration::run_label_workflow;
use semver_labeller::cli::Args;
use semver_labeller::ui;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("semver-labeller {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let explain = args.explain;
    let result = run_label_workflow(args.into_workflow_args(), std::io::stdin().lock());

    if explain {
        ui::display_analysis(&result.outcome, &result.comments);
    }

    // Bad input never changes the exit code, only the label
    ui::display_label(&result.outcome.label);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
