//! Player/hand store interface.
//!
//! Persistence is owned outside the engine; the engine only reads a
//! player's hand and card count and writes updated hands back. Hand
//! contents are an opaque ordered sequence of [`Card`] it appends to and
//! re-serializes; no other record fields are consulted.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Card;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// The slice of a persisted player record the engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub hand_cards: Vec<Card>,
    pub hand_card_count: usize,
}

impl PlayerRecord {
    pub fn new(hand_cards: Vec<Card>) -> Self {
        Self {
            hand_card_count: hand_cards.len(),
            hand_cards,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(d) => {
                DomainError::infra(InfraErrorKind::StoreUnavailable, d)
            }
            StoreError::Backend(d) => {
                DomainError::infra(InfraErrorKind::Other("STORE".into()), d)
            }
        }
    }
}

#[async_trait]
pub trait PlayerStore: Send + Sync + 'static {
    /// Fetch a player's persisted record; `None` when absent.
    async fn fetch_player(
        &self,
        player_id: &str,
        room_code: &str,
    ) -> Result<Option<PlayerRecord>, StoreError>;

    /// Persist a player's hand (and with it the card count).
    async fn save_player_hand(
        &self,
        player_id: &str,
        room_code: &str,
        hand: &[Card],
    ) -> Result<(), StoreError>;
}
