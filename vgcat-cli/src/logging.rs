//! Logger setup for the CLI.
//!
//! Command output goes through `log::info!`, so info and debug records are
//! printed to stdout as bare messages. Warnings and errors go to stderr,
//! keeping `--json` output on stdout machine-readable. Verbose mode adds
//! timestamps and level tags.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Which standard stream a record is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogStream {
    Stdout,
    Stderr,
}

pub(crate) fn stream_for(level: Level) -> LogStream {
    match level {
        Level::Error | Level::Warn => LogStream::Stderr,
        Level::Info | Level::Debug | Level::Trace => LogStream::Stdout,
    }
}

/// Non-verbose line: info is printed bare, other levels get a `level:` prefix.
fn plain_line(level: Level, message: &std::fmt::Arguments<'_>) -> String {
    match level {
        Level::Info => message.to_string(),
        Level::Error => format!(
            "{}: {}",
            "error".if_supports_color(Stderr, |t| t.red()),
            message
        ),
        Level::Warn => format!(
            "{}: {}",
            "warn".if_supports_color(Stderr, |t| t.yellow()),
            message
        ),
        level => format!("{}: {}", level.as_str().to_lowercase(), message),
    }
}

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    builder.format(move |buf, record| {
        let line = if verbose {
            format!(
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        } else {
            plain_line(record.level(), record.args())
        };
        match stream_for(record.level()) {
            LogStream::Stdout => writeln!(buf, "{}", line),
            LogStream::Stderr => writeln!(std::io::stderr(), "{}", line),
        }
    });

    // RUST_LOG wins over the flags when set
    builder.parse_default_env();
    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
