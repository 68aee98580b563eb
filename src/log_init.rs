use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{BridgeError, Result};

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
    /// Set after the first failed open; later failures stay quiet.
    open_failed: AtomicBool,
}

impl FileLogger {
    fn new(file_path: PathBuf, level: LevelFilter) -> Self {
        Self {
            file_path,
            level,
            open_failed: AtomicBool::new(false),
        }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path);
        match opened {
            Ok(mut file) => {
                let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
                let _ = writeln!(file, "{line}");
            }
            // stdout is reserved for protocol replies
            Err(err) if !self.open_failed.swap(true, Ordering::Relaxed) => {
                eprintln!(
                    "color-name: cannot open log file {}: {err}",
                    self.file_path.display()
                );
            }
            Err(_) => {}
        }
    }

    fn flush(&self) {}
}

/// Append log records at or above `level` to the file at `path`.
///
/// Stdout is never written to. Fails if a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let logger = FileLogger::new(path.as_ref().to_path_buf(), level);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse `error`, `warn`, `info`, `debug`, `trace` or `off`, in any case.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse()
        .map_err(|_| BridgeError::LogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(" TRACE ").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    fn write(logger: &FileLogger, level: log::Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target("shades::report")
                .build(),
        );
    }

    #[test]
    fn test_appends_enabled_records() {
        let path = std::env::temp_dir().join(format!("color-name-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::new(path.clone(), LevelFilter::Info);

        write(&logger, log::Level::Info, "first");
        write(&logger, log::Level::Debug, "hidden");
        write(&logger, log::Level::Warn, "second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "[INFO] shades::report: first\n[WARN] shades::report: second\n"
        );
        assert!(!logger.open_failed.load(Ordering::Relaxed));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unopenable_file_is_flagged_once() {
        let path = PathBuf::from("/nonexistent-dir/color-name.log");
        let logger = FileLogger::new(path, LevelFilter::Debug);

        write(&logger, log::Level::Info, "lost");
        assert!(logger.open_failed.load(Ordering::Relaxed));
        write(&logger, log::Level::Info, "also lost");
        assert!(logger.open_failed.load(Ordering::Relaxed));
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = parse_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "Unknown log level: loud");
    }
}
