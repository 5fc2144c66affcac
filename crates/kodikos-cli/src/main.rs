//! Entry point invoked by the orchestrator once per execution request.
//!
//! stdout belongs to the submitted program and the status line; the runner's
//! own logs always go to stderr.

use anyhow::Result;
use clap::Parser;
use kodikos_core::config::{load_config, validate_config};
use kodikos_core::{EmbeddedPythonExecutor, RunStatus, Runner, RunnerConfig, INTERRUPTED_EXIT_CODE};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "kodikos-run",
    author,
    version,
    about = "Run one Python program read from stdin and report the outcome on stdout"
)]
struct Cli {
    #[clap(long, short, help = "Optional YAML configuration file")]
    config: Option<PathBuf>,

    #[clap(long, help = "Working directory to create and run the program in")]
    workdir: Option<PathBuf>,

    #[clap(long, short, help = "Log level for runner diagnostics on stderr")]
    log_level: Option<String>,
}

// The interpreter is initialized on first use and finalized by the runner;
// both have to happen on the main thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli).await?;

    let log_level_filter = config.logging.level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Starting run in {}", config.workspace.path.display());

    let executor = EmbeddedPythonExecutor::new(config.interpreter.clone());
    let runner = Runner::new(config, Box::new(executor));

    let mut stdout = std::io::stdout();
    let status = runner.run(tokio::io::stdin(), &mut stdout).await?;

    match status {
        RunStatus::Reported(_) => Ok(()),
        RunStatus::Interrupted(_) => {
            let _ = stdout.flush();
            exit_by_sigint()
        }
        other => {
            let _ = stdout.flush();
            std::process::exit(other.exit_code());
        }
    }
}

/// Die from SIGINT with the default disposition, so the parent sees a
/// signal death the way it would for a stand-alone interpreter.
fn exit_by_sigint() -> ! {
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
        libc::kill(libc::getpid(), libc::SIGINT);
    }
    std::process::exit(INTERRUPTED_EXIT_CODE)
}

async fn resolve_config(cli: &Cli) -> Result<RunnerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).await?,
        None => RunnerConfig::default(),
    };

    if let Some(workdir) = &cli.workdir {
        config.workspace.path = workdir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    validate_config(&config)?;
    Ok(config)
}
