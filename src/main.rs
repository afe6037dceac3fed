use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winners::{cli::Cli, config::RunConfig, report};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = RunConfig::from(&args);
    tracing::debug!(input = %config.input.display(), format = ?config.format, "starting run");

    let rendered = report::run(&config)?;
    print!("{rendered}");

    Ok(())
}
