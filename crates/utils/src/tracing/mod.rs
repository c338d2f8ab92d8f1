use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level};

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Reads directives from `RUST_LOG`, falling back to [`DEFAULT_FILTER`], and
/// writes compact lines to stderr. Returns an error instead of panicking if
/// a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    install(filter)
}

/// Initialize with explicit filter directives, ignoring `RUST_LOG`
pub fn init_with_filter(
    directives: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    install(EnvFilter::try_new(directives)?)
}

fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_with_filter("fnkit_utils=debug");
        assert!(init_with_filter("warn").is_err());
    }

    #[test]
    fn test_bad_directives_are_rejected() {
        assert!(init_with_filter("fnkit=notalevel").is_err());
    }
}
