//! Store adapters.

pub mod players_mem;

pub use players_mem::InMemoryPlayerStore;
