use anyhow::Result;
use clap::Parser;
use lazuri_cli::cli::LazuriCli;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = LazuriCli::parse();
    print!("{}", lazuri_cli::run(&cli)?);
    Ok(())
}
