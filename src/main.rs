//! pwd-dragon entry point.
//!
//! Usage:
//!   pwd-dragon
//!
//! Configuration comes from `PWD_*` environment variables, see
//! [`pwd_dragon::config`]. Logs go to `PWD_LOG_FILE` when set, filtered
//! by `RUST_LOG`.

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use pwd_dragon::config::Config;
use pwd_dragon::init_blacklist_from_path;
use pwd_dragon::session::{self, SessionError};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pwd-dragon: {e}");
            if matches!(e.downcast_ref::<SessionError>(), Some(SessionError::NotATerminal)) {
                eprintln!("Run it directly in a real terminal (not piped, not under CI).");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    if let Some(path) = &config.blacklist_path {
        init_blacklist_from_path(path)?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let cancel = CancellationToken::new();
        let on_signal = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_signal.cancel();
            }
        });

        session::run(&config, cancel).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

/// File logging only; the terminal belongs to the UI.
fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Logging to {:?}", path);
    Ok(())
}
