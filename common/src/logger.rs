use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to prepare log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger: colored level labels on stdout (optional) and
/// plain records appended to `log_file_path`.
pub fn init_logger(log_level: &str, log_file_path: &str, to_stdout: bool) -> Result<(), LoggerError> {
    let file_err = |source| LoggerError::LogFile {
        path: log_file_path.to_string(),
        source,
    };

    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent).map_err(file_err)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(file_err)?;

    let file_dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(log_file);

    let mut root = Dispatch::new().level(parse_level(log_level)).chain(file_dispatch);

    if to_stdout {
        let stdout_dispatch = Dispatch::new()
            .format(|out, message, record| {
                let level_str = match record.level() {
                    log::Level::Error => "ERROR".red(),
                    log::Level::Warn => "WARN".yellow(),
                    log::Level::Info => "INFO".green(),
                    log::Level::Debug => "DEBUG".cyan(),
                    log::Level::Trace => "TRACE".normal(),
                };

                out.finish(format_args!(
                    "[{}][{}][{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    level_str,
                    record.target(),
                    message
                ))
            })
            .chain(io::stdout());
        root = root.chain(stdout_dispatch);
    }

    root.apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" Warn "), LevelFilter::Warn);
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }
}
