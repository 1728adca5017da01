//! TaskFlow: a kanban task board library.
//!
//! This crate owns the state of a four-column task board (to do, in
//! progress, review, done) and keeps it consistent under add, update,
//! delete and move operations. Views render from immutable snapshots and
//! subscribe to changes; persistence and user notifications sit behind
//! ports.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board data and transitions with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence and notifications
//! - **Adapters**: Concrete implementations of ports (memory, filesystem,
//!   logging)
//!
//! # Modules
//!
//! - [`board`]: Board domain, store, projections and services

pub mod board;
