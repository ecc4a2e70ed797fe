// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the pure library surface
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, try_init_logging};
