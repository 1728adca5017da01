//! Step definitions for kanban board behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
