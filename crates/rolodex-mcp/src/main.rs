//! `rolodex-mcp` — the stdio tool server binary.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rolodex_access::ContactsService;
use rolodex_applescript::{GroupDirectory, OsaRunner};
use rolodex_mcp::Server;
use tokio::io::BufReader;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "macOS contacts tool server over stdio")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rolodex.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing. Stdout is the protocol channel, so diagnostics go
  // to stderr.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = rolodex_mcp::config::load(&cli.config)
    .with_context(|| format!("loading config from {}", cli.config.display()))?;
  tracing::info!(
    bridge = %cfg.bridge_path,
    osascript = %cfg.osascript_path,
    "starting rolodex tool server"
  );

  let service = ContactsService::new(rolodex_mcp::backend::loader(&cfg));
  let groups = GroupDirectory::new(OsaRunner::new(&cfg.osascript_path));
  let server = Server::new(service, groups);

  server
    .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    .await
    .context("serving stdio")
}
