use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level, LevelFilter};
use std::str::FromStr;
use std::sync::Once;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Crates that are chatty at `debug` and below.
const QUIET_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// Logs go to stderr; stdout carries the prompts.
///
/// # Panics
/// Panics if a global logger is already set.
pub(crate) fn init_logging_with_level(log_level: LevelFilter) {
    let dispatch = QUIET_TARGETS.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                let time = Local::now().format("%H:%M:%S%.3f");
                let color = color_from_level(record.level());
                out.finish(format_args!("{time} {color} > {message}"));
            })
            .level(log_level),
        |dispatch, target| dispatch.level_for(*target, log_level.min(LevelFilter::Warn)),
    );

    dispatch
        .chain(std::io::stderr())
        .apply()
        .inspect_err(|e| eprintln!("Failed to initialize logging with level `{log_level}`: {e}"))
        .unwrap();

    debug!("Logging initialized with level: {log_level}");
}

fn parse_log_level_from_str(log_level: &str) -> LevelFilter {
    LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            RUST_LOG_ENV, log_level
        )
    })
}

static INIT: Once = Once::new();

/// Sets up logging at `RUST_LOG`, or `info` when unset. Later calls do nothing.
///
/// # Panics
/// Panics if `RUST_LOG` is not a valid log level.
pub fn init_logging() {
    INIT.call_once(|| {
        let log_level = std::env::var(RUST_LOG_ENV)
            .map(|level| parse_log_level_from_str(&level))
            .unwrap_or(LevelFilter::Info);
        init_logging_with_level(log_level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Invalid log level")]
    fn invalid_log_level() {
        parse_log_level_from_str("foobar");
    }

    #[test]
    fn log_levels_are_case_insensitive() {
        assert_eq!(parse_log_level_from_str("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_log_level_from_str("off"), LevelFilter::Off);
    }

    #[test]
    fn test_color_from_level() {
        assert_eq!(
            color_from_level(Level::Error).to_string(),
            "ERROR".red().to_string()
        );
        assert_eq!(
            color_from_level(Level::Warn).to_string(),
            "WARN".yellow().to_string()
        );
        assert_eq!(
            color_from_level(Level::Trace).to_string(),
            "TRACE".white().to_string()
        );
    }
}
