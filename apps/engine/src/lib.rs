//! Authoritative rules engine for an Uno-style multiplayer card game.
//!
//! Pure game logic (deck construction, dealing, turn rotation, play
//! legality, and the state transition applied by a resolved play) lives in
//! [`domain`]. Storage is an external collaborator reached through the
//! traits in [`repos`]; [`services`] hosts the serialized per-room play
//! pipeline and the asynchronous uno-call enforcement built on top of it.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod state;
