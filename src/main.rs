//! sockprobe - bind a Unix domain socket at a path and clean it up again

use anyhow::Result;
use clap::Parser;
use sockprobe::config::Config;
use sockprobe::probe::{SocketPath, SocketProbe};
use sockprobe::report::{startup_line, OutputFormat, ProbeReport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sockprobe")]
#[command(about = "Check that a Unix domain socket can be created at a path")]
#[command(version)]
struct Cli {
    /// Socket path to probe (defaults to the configured path)
    path: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.unwrap_or(config.output.format);
    let path = cli
        .path
        .unwrap_or_else(|| config.socket_path().to_path_buf());
    let working_dir = std::env::current_dir()?;

    if format == OutputFormat::Text {
        println!("{}", startup_line(&working_dir));
    }

    let socket_path = SocketPath::new(path);
    tracing::info!("Probing socket path: {}", socket_path);

    let probe = SocketProbe::new(socket_path.clone());
    let outcome = probe.run()?;

    let report = ProbeReport::new(working_dir, socket_path, &outcome);
    println!("{}", report.render(format)?);

    Ok(())
}
