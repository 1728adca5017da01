//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without touching the filesystem.

mod notifier;
mod snapshot;

pub use notifier::RecordingNotifier;
pub use snapshot::InMemorySnapshotRepository;
