use std::io;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use semver_bump::cli::orchestration::run_workflow;
use semver_bump::cli::Args;
use semver_bump::ui;

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_workflow(&args, &mut out) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
