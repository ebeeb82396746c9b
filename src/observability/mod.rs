//! Observability for `foliogen`.
//!
//! Structured logging via `tracing`; nothing here affects generated output.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
