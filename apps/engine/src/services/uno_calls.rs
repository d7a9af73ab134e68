//! Uno-call enforcement.
//!
//! Two triggers keep "last card" declarations honest:
//!
//! 1. After every resolved play, declared players other than the actor are
//!    re-checked against their persisted hand; a declaration that no
//!    longer matches a one-card hand costs a two-card penalty.
//! 2. A player who reaches one card without declaring gets a delayed check
//!    scheduled for the end of the grace window.
//!
//! The delayed check carries identifiers only. Everything it acts on —
//! hand, declaration flag, draw pile — is re-read under the room lock at
//! fire time, so a declaration or a draw landing during the window turns
//! the check into a no-op. Absent records and store failures skip the
//! penalty silently.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::rules::{UNO_GRACE, UNO_PENALTY_CARDS};
use crate::domain::GameState;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::players::PlayerStore;
use crate::state::rooms::RoomRegistry;

pub struct UnoCallService<S: PlayerStore> {
    store: Arc<S>,
    rooms: Arc<RoomRegistry>,
}

impl<S: PlayerStore> UnoCallService<S> {
    pub fn new(store: Arc<S>, rooms: Arc<RoomRegistry>) -> Self {
        Self { store, rooms }
    }

    /// Record a player's "last card" declaration.
    ///
    /// Verified against the persisted hand under the room lock: declaring
    /// with more than one card is rejected as a false declaration.
    pub async fn declare_uno(&self, room_code: &str, player_id: &str) -> Result<(), DomainError> {
        let room = self.rooms.get(room_code).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("room {room_code} not found"))
        })?;
        let mut state = room.lock().await;

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
        if record.hand_card_count != 1 {
            return Err(DomainError::validation(
                ValidationKind::FalseDeclaration,
                "uno declared while holding more than one card",
            ));
        }

        state.uno_called.insert(player_id.to_string(), true);
        info!(room_code, player_id, "uno declared");
        Ok(())
    }

    /// Run after `acting_player` resolves a play with `hand_size` cards
    /// left: sweep other players' declarations, and when the actor is down
    /// to one undeclared card, schedule the delayed check.
    pub async fn check_uno_calls(&self, room_code: &str, acting_player: &str, hand_size: usize) {
        let Some(room) = self.rooms.get(room_code) else {
            return;
        };
        let mut state = room.lock().await;
        self.sweep_declared(&mut state, acting_player, room_code).await;

        if hand_size == 1 && !state.has_declared_uno(acting_player) {
            self.schedule_delayed_check(room_code, acting_player);
        }
    }

    /// Re-check every other declared player against their persisted hand.
    async fn sweep_declared(&self, state: &mut GameState, acting_player: &str, room_code: &str) {
        let declared: Vec<String> = state
            .uno_called
            .iter()
            .filter(|(pid, &called)| called && pid.as_str() != acting_player)
            .map(|(pid, _)| pid.clone())
            .collect();

        let now = OffsetDateTime::now_utc();
        for pid in declared {
            // Staleness guard: only declarations near the last play are
            // re-checked. Note this reads the room's global last_activity,
            // not the flagged player's own last action time.
            if now - state.last_activity > UNO_GRACE {
                continue;
            }

            let record = match self.store.fetch_player(&pid, room_code).await {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(err) => {
                    warn!(room_code, player_id = %pid, error = %err, "uno sweep skipped, store unavailable");
                    continue;
                }
            };
            if record.hand_card_count == 1 {
                // Declaration matches the hand; nothing to enforce.
                continue;
            }

            let mut hand = record.hand_cards;
            hand.extend(state.draw_pile.draw(UNO_PENALTY_CARDS));
            match self.store.save_player_hand(&pid, room_code, &hand).await {
                Ok(()) => {
                    state.uno_called.insert(pid.clone(), false);
                    info!(
                        room_code,
                        player_id = %pid,
                        hand_size = hand.len(),
                        "false uno declaration penalized"
                    );
                }
                Err(err) => {
                    warn!(room_code, player_id = %pid, error = %err, "uno penalty write failed");
                }
            }
        }
    }

    fn schedule_delayed_check(&self, room_code: &str, player_id: &str) {
        let store = Arc::clone(&self.store);
        let rooms = Arc::clone(&self.rooms);
        let room_code = room_code.to_string();
        let player_id = player_id.to_string();
        debug!(%room_code, %player_id, "delayed uno check scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(UNO_GRACE).await;
            run_delayed_check(store, rooms, &room_code, &player_id).await;
        });
    }
}

/// The delayed check body. Conditions captured at schedule time are not
/// trusted; hand size and declaration flag are re-read here, and a
/// declaration observed true wins the tie — no penalty.
async fn run_delayed_check<S: PlayerStore>(
    store: Arc<S>,
    rooms: Arc<RoomRegistry>,
    room_code: &str,
    player_id: &str,
) {
    let Some(room) = rooms.get(room_code) else {
        return;
    };
    let mut state = room.lock().await;

    if state.has_declared_uno(player_id) {
        debug!(room_code, player_id, "declaration landed within grace, no penalty");
        return;
    }

    let record = match store.fetch_player(player_id, room_code).await {
        Ok(Some(record)) => record,
        Ok(None) => return,
        Err(err) => {
            warn!(room_code, player_id, error = %err, "delayed uno check skipped, store unavailable");
            return;
        }
    };
    if record.hand_card_count != 1 {
        // The hand moved on during the window (drew or won); nothing to do.
        return;
    }

    let mut hand = record.hand_cards;
    hand.extend(state.draw_pile.draw(UNO_PENALTY_CARDS));
    match store.save_player_hand(player_id, room_code, &hand).await {
        Ok(()) => {
            info!(
                room_code,
                player_id,
                hand_size = hand.len(),
                "missed uno declaration penalized"
            );
        }
        Err(err) => {
            warn!(room_code, player_id, error = %err, "uno penalty write failed");
        }
    }
}
