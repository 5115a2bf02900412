//! Standard callback implementations.

pub mod logging;
pub mod tracing;

pub use self::logging::LoggingCallback;
pub use self::tracing::TracingCallback;
