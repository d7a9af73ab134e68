//! Per-room game state registry.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::GameState;

/// Registry of live rooms, each guarding its [`GameState`] with a mutex.
///
/// All mutation of a room's state must happen while holding that room's
/// lock; plays, draws, and uno checks for one room are therefore fully
/// serialized while distinct rooms proceed independently.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Mutex<GameState>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a room's state, returning its handle.
    pub fn insert(&self, room_code: &str, state: GameState) -> Arc<Mutex<GameState>> {
        let handle = Arc::new(Mutex::new(state));
        self.rooms.insert(room_code.to_string(), Arc::clone(&handle));
        handle
    }

    pub fn get(&self, room_code: &str) -> Option<Arc<Mutex<GameState>>> {
        self.rooms.get(room_code).map(|r| Arc::clone(&r))
    }

    /// Drop a finished room. Outstanding handles stay valid; delayed
    /// checks looking the room up afterwards simply find nothing.
    pub fn remove(&self, room_code: &str) {
        self.rooms.remove(room_code);
    }
}
