use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use columnize_cli::{run, Cli, OutputTarget};

fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    match &cli.file {
        Some(path) if !cli.reads_stdin() => {
            input = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        _ => {
            std::io::stdin()
                .read_to_end(&mut input)
                .context("failed to read stdin")?;
        }
    }
    Ok(input)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_directive());

    let input = read_input(&cli)?;
    let output = run(&cli, &input, &OutputTarget::detect(cli.color))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output).context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}
