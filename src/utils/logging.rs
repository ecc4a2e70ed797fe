// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "my_module=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a compact fmt subscriber filtered by `RUST_LOG`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn try_init_logging() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
}

/// Like [`try_init_logging`], but ignores an already-installed subscriber.
pub fn init_logging() {
    if let Err(e) = try_init_logging() {
        tracing::debug!("Logging already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        // Second install is refused, not a panic
        assert!(try_init_logging().is_err());
        init_logging();
    }
}
