//! Tracing/logging setup shared by every orderdesk binary.

pub mod subscriber;

pub use subscriber::LogFormat;

/// Initialize process-wide observability (tracing/logging).
///
/// The output format comes from `ORDERDESK_LOG_FORMAT`. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
