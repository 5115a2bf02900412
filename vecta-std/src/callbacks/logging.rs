//! Logging callback for dropped or unexpected ids.

use vecta_core::Callback;

/// A callback that logs every id it receives.
///
/// Register it as the unhandled delegate (or the static fallback entry) to
/// make otherwise silently dropped ids visible. Logs at `debug` level when
/// the `tracing` feature is enabled; otherwise does nothing.
pub struct LoggingCallback;

impl Callback for LoggingCallback {
    fn on_id(&self, id: usize) {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!(id, "unhandled callback id");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = id; // Suppress unused warning
        }
    }
}
