//! Unit tests for the board module.

mod support;
