//! Port contracts for board persistence and user notifications.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;
pub mod repository;

pub use notifier::{BoardNotifier, Notice, NoticeLevel};
pub use repository::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult};
