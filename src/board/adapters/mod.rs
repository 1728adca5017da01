//! Adapter implementations of the board ports.
//!
//! - [`memory`]: in-process repository and notifier, mostly for tests
//! - [`fs`]: JSON snapshot file in a capability-scoped directory
//! - [`log_notifier`]: notices forwarded to `tracing`

pub mod fs;
pub mod log_notifier;
pub mod memory;
