//! Engine test support utilities
//!
//! Shared helpers for the engine's unit and integration tests: unified
//! logging initialization.

pub mod logging;
