//! Task board management for TaskFlow.
//!
//! The board keeps every task in exactly one of four status columns and
//! refuses operations that would break that rule. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The snapshot-owning store in [`store`]
//! - Read-only views in [`projection`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
