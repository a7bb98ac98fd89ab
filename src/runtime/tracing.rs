use std::io::IsTerminal;

use tracing::warn;
use tracing_subscriber::filter::{Directive, LevelFilter, ParseError};
use tracing_subscriber::EnvFilter;

use crate::vehicle::NOTIFICATION_TARGET;

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`, `warn` when unset
/// - **Vehicle notifications always on**: `rental::notification=info` is added
///   on top of whatever `RUST_LOG` says, so `Car started` is always printed
/// - **Compact format**: No module paths, one line per event
/// - **stderr output**: stdout is left to the program's own output; colors
///   only when stderr is a terminal
///
/// # Environment Variables
///
/// - `RUST_LOG=debug` - Also show which region and vehicle were built
/// - `RUST_LOG=rental_factory_recipe=trace` - Everything from this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let (filter, rejected) = match notification_directive() {
        Ok(directive) => (filter.add_directive(directive), None),
        Err(e) => (filter, Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();

    if let Some(e) = rejected {
        warn!(error = %e, "Vehicle notifications follow RUST_LOG only");
    }
}

fn notification_directive() -> Result<Directive, ParseError> {
    format!("{NOTIFICATION_TARGET}=info").parse()
}
