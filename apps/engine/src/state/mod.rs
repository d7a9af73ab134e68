//! Shared application state.

pub mod rooms;

pub use rooms::RoomRegistry;
