//! kof-agent: issue commands to a KOF game-control server
//!
//! Connection settings come from a JSON config file (`--config`) or from
//! `--host` / `--port` / `--connect-timeout`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kof_agent::{AgentClient, AgentConfig, AgentError, config};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kof-agent", about = "Agent for the KOF game-control server")]
struct Args {
    /// JSON file with agentHost / agentPort / agentConnectTimeout
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(long, default_value = "127.0.0.1")]
    host: String,

    #[clap(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Seconds to wait for the server to become ready
    #[clap(long, default_value = "5")]
    connect_timeout: f64,

    #[clap(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit shellcode for a player
    Shellcode {
        #[clap(long)]
        game: String,
        #[clap(long)]
        player: String,
        /// Payload file, `-` for stdin
        file: PathBuf,
    },
    CreateGame {
        #[clap(long)]
        game: String,
    },
    StartGame {
        #[clap(long)]
        game: String,
    },
    DestroyGame {
        #[clap(long)]
        game: String,
    },
}

impl Args {
    fn agent_config(&self) -> Result<AgentConfig> {
        if let Some(path) = &self.config {
            return AgentConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }

        let timeout = Duration::try_from_secs_f64(self.connect_timeout)
            .context("--connect-timeout must be a non-negative number of seconds")?;
        let config = AgentConfig::new(self.host.clone(), self.port, timeout);
        config.validate()?;
        Ok(config)
    }
}

fn read_payload(file: &Path) -> Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut payload = Vec::new();
        std::io::stdin()
            .read_to_end(&mut payload)
            .context("Failed to read payload from stdin")?;
        return Ok(payload);
    }
    std::fs::read(file).with_context(|| format!("Failed to read payload {}", file.display()))
}

/// Print the shellcode outcome the way operators expect to read it
fn report_shellcode(result: &kof_agent::Result<()>) {
    match result {
        Ok(()) => println!("shellcode successful"),
        Err(AgentError::Remote(code)) => println!("shellcode failed: {}", code),
        Err(e) => println!("shellcode failed: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.agent_config()?;
    info!("Using KOF server at {}", config.addr());

    let agent = AgentClient::connect(&config).await?;

    let result = match &args.command {
        Command::Shellcode { game, player, file } => {
            let payload = read_payload(file)?;
            let result = agent.issue_shellcode(game, player, payload).await;
            report_shellcode(&result);
            result
        }
        Command::CreateGame { game } => agent.create_game(game).await,
        Command::StartGame { game } => agent.start_game(game).await,
        Command::DestroyGame { game } => agent.destroy_game(game).await,
    };

    agent.close();
    result?;
    Ok(())
}
