//! In-memory player store.
//!
//! Backs tests and embeddings that keep rooms in process; a real
//! deployment plugs its own [`PlayerStore`] over durable storage.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::Card;
use crate::repos::players::{PlayerRecord, PlayerStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    // Keyed by (room_code, player_id).
    records: DashMap<(String, String), Vec<Card>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a player's hand directly (room setup and tests).
    pub fn insert_player(&self, player_id: &str, room_code: &str, hand: Vec<Card>) {
        self.records
            .insert((room_code.to_string(), player_id.to_string()), hand);
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn fetch_player(
        &self,
        player_id: &str,
        room_code: &str,
    ) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self
            .records
            .get(&(room_code.to_string(), player_id.to_string()))
            .map(|hand| PlayerRecord::new(hand.clone())))
    }

    async fn save_player_hand(
        &self,
        player_id: &str,
        room_code: &str,
        hand: &[Card],
    ) -> Result<(), StoreError> {
        self.records
            .insert((room_code.to_string(), player_id.to_string()), hand.to_vec());
        Ok(())
    }
}
