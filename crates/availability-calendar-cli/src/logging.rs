//! Diagnostics for the `availcal` binary.
//!
//! Events from the binary itself (`availcal`) and from the rendering library
//! (`availability_calendar`) go to stderr, so stdout carries only the rendered
//! calendar and can be piped into a page.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// The binary's own target and the library it drives.
const CALENDAR_TARGETS: [&str; 2] = ["availcal", "availability_calendar"];

/// Most detailed level enabled by `-v` repeated `verbosity` times.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter directives enabling the calendar targets at `level`, leaving
/// dependencies at their defaults.
fn calendar_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    CALENDAR_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. A set `RUST_LOG` replaces the `-v` mapping.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(calendar_directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_run_only_warns() {
        assert_eq!(
            calendar_directives(level_for(0)),
            "availcal=warn,availability_calendar=warn"
        );
    }

    #[test]
    fn test_repeated_flag_saturates_at_trace() {
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }
}
