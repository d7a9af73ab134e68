//! Shared per-room game state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::cards_types::{Card, CardColor};
use super::deck::DrawPile;
use super::turn_order::{Direction, PlayerId};

/// The single shared mutable record for one room's round.
///
/// Mutated only by the play pipeline and the uno-call monitor, always under
/// the room's single-writer lock (see `state::rooms`). `state_version`
/// increases by exactly one per resolved play and never on read-only
/// checks, so clients and store adapters can detect staleness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Append-only discard; the last element is the top card.
    pub discard_pile: Vec<Card>,
    /// Colour the next play must match. Differs from the top card's own
    /// colour when the top is a chosen-colour wild.
    pub active_color: CardColor,
    pub direction: Direction,
    /// Stacked draw obligation facing the next player; 0 when none.
    pub pending_draw_count: u8,
    pub current_turn_player_id: PlayerId,
    /// True once that player has declared "last card" for their current
    /// one-card hand.
    pub uno_called: HashMap<PlayerId, bool>,
    /// Turn order snapshot for the room (the room record owns membership;
    /// this is the ordering plays rotate through).
    pub player_ids: Vec<PlayerId>,
    pub draw_pile: DrawPile,
    pub state_version: u64,
    /// Timestamp of the last resolved play.
    #[serde(with = "time::serde::rfc3339")]
    pub last_activity: OffsetDateTime,
    // Transient fields describing the most recent play, for client animation.
    pub last_played_card_json: Option<String>,
    pub last_played_card_animation_id: Option<String>,
    pub pending_wild_color_choice: Option<CardColor>,
}

impl GameState {
    /// Build the state for a fresh round from the dealer's leftovers.
    ///
    /// Flips the opening discard off the pile; wild openers are re-buried
    /// at the back until a coloured card surfaces. An exhausted (or
    /// all-wild) pile leaves the discard empty with red active, a degraded
    /// but defined start.
    pub fn new_round(
        starting_player: PlayerId,
        player_ids: &[PlayerId],
        mut draw_pile: DrawPile,
        now: OffsetDateTime,
    ) -> Self {
        let mut discard_pile = Vec::new();
        let mut active_color = CardColor::Red;
        for _ in 0..draw_pile.len() {
            let Some(card) = draw_pile.draw_one() else { break };
            if card.is_wild() {
                draw_pile.put_back(card);
                continue;
            }
            active_color = card.color;
            discard_pile.push(card);
            break;
        }

        Self {
            discard_pile,
            active_color,
            direction: Direction::Clockwise,
            pending_draw_count: 0,
            current_turn_player_id: starting_player,
            uno_called: player_ids.iter().map(|p| (p.clone(), false)).collect(),
            player_ids: player_ids.to_vec(),
            draw_pile,
            state_version: 0,
            last_activity: now,
            last_played_card_json: None,
            last_played_card_animation_id: None,
            pending_wild_color_choice: None,
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn has_declared_uno(&self, player_id: &str) -> bool {
        self.uno_called.get(player_id).copied().unwrap_or(false)
    }
}
