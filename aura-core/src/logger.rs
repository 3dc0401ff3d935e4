//! Tracing setup for the shell and CLI.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the global tracing subscriber: a console layer, plus a plain
/// (no ANSI) layer into an append-mode log file when a path is given.
/// The level filter comes from `RUST_LOG` (e.g. info, debug, trace); unset
/// defaults to info. Load `.env` (e.g. `dotenvy::dotenv()`) before calling
/// this, otherwise `RUST_LOG` from the file is not picked up.
pub fn init_tracing(log_file: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer().with_target(true);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.log");

        init_tracing(Some(path.to_str().unwrap())).unwrap();
        assert!(path.exists());

        // The subscriber is process-global; a second init must surface an
        // error instead of panicking.
        assert!(init_tracing(None).is_err());
    }
}
