//! Minicode CLI: entry point.
//!
//! `minicode -p "PROMPT"` runs one agent conversation and prints the final
//! answer to stdout. Logs go to stderr.

mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use minicode_agent::AgentLoop;
use minicode_core::config::{load_config, GatewayConfig};
use minicode_providers::HttpGateway;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Minicode, a tiny tool-using coding agent
#[derive(Debug, Parser)]
#[command(name = "minicode", version, about, long_about = None)]
struct Cli {
    /// Prompt to send to the model
    #[arg(short, long)]
    prompt: String,

    /// Model identifier (overrides MINICODE_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Directory that relative file paths and shell commands run from
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    logs: bool,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match run(cli).await {
        Ok(answer) => {
            helpers::print_response(&answer);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", helpers::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let config = load_config().context("cannot reach the model without a credential")?;
    execute(cli, config).await
}

/// Wire gateway, tools and loop together and run one prompt.
async fn execute(cli: Cli, mut config: GatewayConfig) -> Result<String> {
    if let Some(model) = cli.model {
        config.model = model;
    }

    if let Some(workspace) = &cli.workspace {
        std::fs::create_dir_all(workspace)
            .with_context(|| format!("failed to create workspace: {}", workspace.display()))?;
    }

    let gateway = HttpGateway::new(config).context("failed to create model gateway")?;
    let agent = AgentLoop::with_builtin_tools(Arc::new(gateway), cli.workspace);

    info!(model = %agent.model(), "processing prompt");
    let completion = agent.run(&cli.prompt).await.context("agent run failed")?;
    info!(rounds = completion.rounds, "done");

    Ok(completion.content)
}

/// Initialize tracing/logging on stderr. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("minicode=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
