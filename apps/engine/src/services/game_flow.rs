//! Serialized per-room play pipeline: validate, resolve, persist.

use std::sync::Arc;

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::{
    can_play_card, deal_cards, next_player, process_card_play, shuffle_deck, standard_deck,
    Card, CardColor, DrawPile, GameState, PlayerId,
};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::players::PlayerStore;
use crate::state::rooms::RoomRegistry;

use super::uno_calls::UnoCallService;

/// Drives a room through the play loop: legality check, state transition,
/// hand persistence, then uno-call enforcement. Each mutation happens
/// under the room's lock, so concurrent requests for one room resolve one
/// at a time.
pub struct GameFlowService<S: PlayerStore> {
    store: Arc<S>,
    rooms: Arc<RoomRegistry>,
    uno: UnoCallService<S>,
}

impl<S: PlayerStore> GameFlowService<S> {
    pub fn new(store: Arc<S>, rooms: Arc<RoomRegistry>) -> Self {
        let uno = UnoCallService::new(Arc::clone(&store), Arc::clone(&rooms));
        Self { store, rooms, uno }
    }

    /// The uno-call monitor sharing this service's store and rooms.
    pub fn uno_calls(&self) -> &UnoCallService<S> {
        &self.uno
    }

    /// Shuffle a fresh deck, deal opening hands, persist them, and
    /// register the room's state. The first listed player acts first.
    pub async fn start_round<R: Rng>(
        &self,
        room_code: &str,
        player_ids: &[PlayerId],
        rng: &mut R,
    ) -> Result<(), DomainError> {
        let deck = shuffle_deck(&standard_deck(), rng);
        let mut pile = DrawPile::new(deck);
        let hands = deal_cards(&mut pile, player_ids.len());
        for (pid, hand) in player_ids.iter().zip(&hands) {
            self.store
                .save_player_hand(pid, room_code, hand)
                .await
                .map_err(DomainError::from)?;
        }

        let starting_player = player_ids.first().cloned().unwrap_or_default();
        let state =
            GameState::new_round(starting_player, player_ids, pile, OffsetDateTime::now_utc());
        self.rooms.insert(room_code, state);
        info!(room_code, players = player_ids.len(), "round started");
        Ok(())
    }

    /// Process one play end to end, returning the new state version as the
    /// optimistic-concurrency handle for callers.
    pub async fn play_card(
        &self,
        room_code: &str,
        player_id: &str,
        card: Card,
        chosen_color: Option<CardColor>,
    ) -> Result<u64, DomainError> {
        let room = self.rooms.get(room_code).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("room {room_code} not found"))
        })?;

        let mut state = room.lock().await;
        if state.current_turn_player_id != player_id {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "not this player's turn",
            ));
        }

        let record = self
            .store
            .fetch_player(player_id, room_code)
            .await
            .map_err(DomainError::from)?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("player {player_id} not in room {room_code}"),
                )
            })?;
        let mut hand = record.hand_cards;
        let pos = hand.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::validation(ValidationKind::CardNotInHand, "played card is not in hand")
        })?;

        let legal = match state.top_card() {
            Some(&top) => can_play_card(
                card,
                top,
                state.active_color,
                state.pending_draw_count,
                Some(&hand),
            ),
            // Degraded round with no opening discard: first play stands.
            None => true,
        };
        if !legal {
            return Err(DomainError::validation(
                ValidationKind::IllegalPlay,
                "card cannot be played on the current discard",
            ));
        }
        if card.is_wild() && chosen_color.is_none() {
            warn!(room_code, player_id, "wild played without a colour choice, defaulting to red");
        }

        hand.remove(pos);
        let next = process_card_play(
            &state,
            card,
            chosen_color,
            player_id,
            &state.player_ids,
            OffsetDateTime::now_utc(),
        );
        self.store
            .save_player_hand(player_id, room_code, &hand)
            .await
            .map_err(DomainError::from)?;

        let new_version = next.state_version;
        *state = next;
        debug!(room_code, player_id, state_version = new_version, "play resolved");
        drop(state);

        self.uno.check_uno_calls(room_code, player_id, hand.len()).await;
        Ok(new_version)
    }

    /// Serve the player's pending draw obligation, or a single card when
    /// nothing is pending, then pass the turn. Drawing invalidates any
    /// standing declaration.
    pub async fn draw_from_pile(
        &self,
        room_code: &str,
        player_id: &str,
    ) -> Result<u64, DomainError> {
        let room = self.rooms.get(room_code).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("room {room_code} not found"))
        })?;

        let mut state = room.lock().await;
        if state.current_turn_player_id != player_id {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "not this player's turn",
            ));
        }

        let record = self
            .store
            .fetch_player(player_id, room_code)
            .await
            .map_err(DomainError::from)?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("player {player_id} not in room {room_code}"),
                )
            })?;

        let count = if state.pending_draw_count > 0 {
            state.pending_draw_count as usize
        } else {
            1
        };
        let mut hand = record.hand_cards;
        hand.extend(state.draw_pile.draw(count));
        self.store
            .save_player_hand(player_id, room_code, &hand)
            .await
            .map_err(DomainError::from)?;

        state.pending_draw_count = 0;
        state.uno_called.insert(player_id.to_string(), false);
        let ids = state.player_ids.clone();
        state.current_turn_player_id = next_player(player_id, &ids, state.direction, None);
        state.state_version += 1;
        state.last_activity = OffsetDateTime::now_utc();
        info!(room_code, player_id, drawn = count, "draw served");
        Ok(state.state_version)
    }
}
