//! Observability for the Watson client.
//!
//! The crate emits [`tracing`] events: `debug` when a service payload is
//! decoded, `warn` when a closed model meets unknown keys (a sign of
//! client/service version skew) and `trace` when a request is prepared.
//! [`init`] installs a ready-made subscriber for applications that have
//! none of their own.

mod logging;

pub use logging::{init, redact, LogConfig, LogLevel};
