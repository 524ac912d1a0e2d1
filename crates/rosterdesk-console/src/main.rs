/*
[INPUT]:  CLI arguments and YAML configuration file
[OUTPUT]: Running admin console TUI with file-based logging
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use rosterdesk_adapter::{ClientConfig, ConsoleClient, Session};
use rosterdesk_console::{ConsoleConfig, tui};

#[derive(Parser, Debug)]
#[command(name = "rosterdesk-console", version, about = "Admin console for the course platform backend")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "log-dir", value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let _log_guard = init_tracing(&args.log_level, &args.log_dir)?;

    info!(config_path = %args.config_path.display(), "starting rosterdesk-console");

    let config = load_config(&args.config_path)?;

    let client_config = ClientConfig {
        timeout: Duration::from_secs(config.api.timeout_secs),
        ..ClientConfig::default()
    };
    let mut client = ConsoleClient::with_config_and_base_url(client_config, &config.api.base_url)
        .context("create backend client")?;
    client.set_session(Session {
        user_id: config.session.user_id,
        token: config.session.token.clone(),
    });

    tui::run(client, config.session.user_id, config.account_roles).await
}

/// Logs go to a rolling file; the TUI owns the terminal.
fn init_tracing(log_level: &str, log_dir: &PathBuf) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "rosterdesk-console.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn load_config(path: &PathBuf) -> Result<ConsoleConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    ConsoleConfig::from_file(path_str).context("load config")
}
