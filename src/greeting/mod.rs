// ============================================================================
// Greeting Module
// Human-readable greetings
// ============================================================================

mod greeter;

pub use greeter::{greet, DEFAULT_NAME};
