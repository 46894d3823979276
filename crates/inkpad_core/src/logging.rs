//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start one rotating file logger per process.
//! - Record panics as sanitized, single-line log events.
//!
//! # Invariants
//! - Repeating `init_logging` with identical settings is a no-op.
//! - Switching level, directory or stderr echo after start is refused.
//! - Nothing here panics.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "inkpad";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_PAYLOAD_LIMIT: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: PathBuf,
    echo_warnings: bool,
    _handle: LoggerHandle,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub log_dir: PathBuf,
    /// Also echo warnings and errors to stderr (terminal front ends).
    pub echo_warnings: bool,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level names, blank or relative directories.
/// - A logger already running with different settings.
/// - Backend start-up failures, reported as text.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    init_logging_with(&LogSettings {
        level: level.to_string(),
        log_dir: PathBuf::from(log_dir.trim()),
        echo_warnings: false,
    })
}

/// Same as [`init_logging`], driven by a settings value.
pub fn init_logging_with(settings: &LogSettings) -> Result<(), String> {
    let level = parse_level(&settings.level)?;
    let log_dir = check_log_dir(&settings.log_dir)?;

    let echo_warnings = settings.echo_warnings;
    if let Some(active) = ACTIVE_LOGGER.get() {
        return ensure_same_settings(active, level, &log_dir, echo_warnings);
    }

    let active =
        ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &log_dir, echo_warnings))?;
    ensure_same_settings(active, level, &log_dir, echo_warnings)
}

/// Returns `(level, log_dir)` of the running logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(
    level: &'static str,
    log_dir: &Path,
    echo_warnings: bool,
) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let duplicate = if echo_warnings {
        Duplicate::Warn
    } else {
        Duplicate::None
    };
    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .duplicate_to_stderr(duplicate)
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_start module=core status=ok level={} os={} version={}",
        level,
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        echo_warnings,
        _handle: handle,
    })
}

fn ensure_same_settings(
    active: &ActiveLogger,
    level: &str,
    log_dir: &Path,
    echo_warnings: bool,
) -> Result<(), String> {
    if active.log_dir != log_dir {
        return Err(format!(
            "logger already writes to `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logger already runs at `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    if active.echo_warnings != echo_warnings {
        return Err(format!(
            "logger already runs with echo_warnings={}; refusing to switch to {echo_warnings}",
            active.echo_warnings
        ));
    }
    Ok(())
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn check_log_dir(log_dir: &Path) -> Result<PathBuf, String> {
    if log_dir.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !log_dir.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            log_dir.display()
        ));
    }
    Ok(log_dir.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(text) = info.payload().downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = info.payload().downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            single_line(&payload, PANIC_PAYLOAD_LIMIT)
        );
        previous(info);
    }));
}

/// Flattens newlines and caps length at `limit` characters.
fn single_line(value: &str, limit: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    let mut out = flat.chars().take(limit).collect::<String>();
    if flat.chars().count() > limit {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        check_log_dir, init_logging, init_logging_with, logging_status, parse_level, single_line,
        LogSettings,
    };
    use std::path::Path;

    #[test]
    fn level_names_are_normalized() {
        assert_eq!(parse_level(" WARNING ").unwrap(), "warn");
        assert_eq!(parse_level("Info").unwrap(), "info");
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn relative_and_blank_dirs_are_rejected() {
        assert!(check_log_dir(Path::new("logs/dev"))
            .unwrap_err()
            .contains("absolute"));
        assert!(check_log_dir(Path::new("")).is_err());
    }

    #[test]
    fn single_line_flattens_and_truncates() {
        let flat = single_line("a\nb\rc-long-tail", 5);
        assert_eq!(flat, "a b c...");
    }

    #[test]
    fn init_is_idempotent_and_refuses_switching() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let first_dir = first.path().to_str().unwrap().to_string();
        let second_dir = second.path().to_str().unwrap().to_string();

        init_logging("info", &first_dir).unwrap();
        init_logging("INFO", &first_dir).unwrap();
        assert!(init_logging("debug", &first_dir)
            .unwrap_err()
            .contains("refusing to switch"));
        assert!(init_logging("info", &second_dir)
            .unwrap_err()
            .contains("refusing to switch"));
        let echoing = LogSettings {
            level: "info".to_string(),
            log_dir: first.path().to_path_buf(),
            echo_warnings: true,
        };
        assert!(init_logging_with(&echoing)
            .unwrap_err()
            .contains("echo_warnings"));

        let (level, dir) = logging_status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
