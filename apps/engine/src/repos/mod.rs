//! Interfaces for the collaborators the engine consumes.

pub mod players;

pub use players::{PlayerRecord, PlayerStore, StoreError};
