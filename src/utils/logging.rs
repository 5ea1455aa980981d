use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log file used by the viewer when only `RUST_LOG` asks for logging.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Where log records go.
pub enum LogTarget<'a> {
    /// Quiet by default; keeps stdout clean for piped output.
    Stderr,
    /// Used while the terminal is in raw mode.
    File(&'a Path),
}

/// Where the viewer should log, if anywhere.
///
/// The terminal is in raw mode, so records can only go to a file. Nothing is
/// written unless a file was named or `RUST_LOG` is set.
pub fn view_log_file(requested: Option<&Path>, rust_log: Option<&str>) -> Option<PathBuf> {
    match (requested, rust_log) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(filter)) if !filter.trim().is_empty() => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        _ => None,
    }
}

/// Installs the global logger. `RUST_LOG` overrides the default filter.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let (default_filter, pipe): (&str, Option<Box<dyn Write + Send>>) = match target {
        LogTarget::Stderr => ("warn", None),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            ("info", Some(Box::new(file)))
        }
    };

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.format(|buf, record| {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(buf, "[{}] {} {}", timestamp, record.level(), record.args())
    });
    if let Some(pipe) = pipe {
        builder.target(env_logger::Target::Pipe(pipe));
    }

    builder.try_init().context("Logger already initialised")?;
    Ok(())
}
