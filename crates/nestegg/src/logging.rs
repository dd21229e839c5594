use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default directives when `RUST_LOG` is unset: the front end at `level`,
/// the engine only when something goes wrong.
fn default_directives(level: &str) -> String {
    format!("nestegg={level},nestegg_core=warn")
}

/// Open `log_path` for appending, creating missing parent directories.
///
/// The file is shared behind an `Arc`; every event gets a `&File` writer,
/// and each formatted event reaches the file in a single write.
fn open_log_file(log_path: &Path) -> io::Result<Arc<File>> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    Ok(Arc::new(file))
}

/// Initialize logging.
///
/// Logs go to stderr, or are appended to `log_file` when one is given so the
/// report on stdout stays clean. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(log_path) => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(open_log_file(log_path)?)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()?;
            tracing::info!(path = %log_path.display(), "logging to file");
        }
        None => {
            registry
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .try_init()?;
        }
    }

    Ok(())
}
