//! Pure state transition for a resolved card play.

use time::OffsetDateTime;

use super::cards_types::{Card, CardColor, CardType};
use super::rules::{DRAW_TWO_PENALTY, STACK_CAP, WILD_DRAW_PENALTY};
use super::state::GameState;
use super::turn_order::{next_player, PlayerId};

/// Apply a validated play and derive the next game state.
///
/// Pure function of its inputs; the input state is never mutated and a
/// fresh record is returned with `state_version` bumped by exactly one.
///
/// Legality is a caller precondition: the play must have passed
/// [`super::rules::can_play_card`] first. This function transitions state
/// for whatever it is given and raises nothing.
///
/// A wild played without `chosen_color` falls back to red; the colour
/// choice is mandatory in rules terms and callers should reject or log the
/// omission before getting here.
pub fn process_card_play(
    state: &GameState,
    card: Card,
    chosen_color: Option<CardColor>,
    player_id: &str,
    player_ids: &[PlayerId],
    now: OffsetDateTime,
) -> GameState {
    let mut next = state.clone();
    next.discard_pile.push(card);
    next.current_turn_player_id = player_id.to_string();

    next.active_color = if card.is_wild() {
        chosen_color.unwrap_or(CardColor::Red)
    } else {
        card.color
    };

    match card.card_type {
        CardType::Skip => {
            let skipped = next_player(player_id, player_ids, next.direction, None);
            next.current_turn_player_id =
                next_player(&skipped, player_ids, next.direction, None);
        }
        CardType::Reverse => {
            next.direction = next.direction.flip();
            // With two players a reverse would hand the turn straight back,
            // so it advances like a normal play instead. With more players
            // the reverser keeps the turn and play resumes the other way.
            if player_ids.len() == 2 {
                next.current_turn_player_id =
                    next_player(player_id, player_ids, next.direction, None);
            }
        }
        CardType::DrawTwo => {
            // Continue an even DrawTwo chain, otherwise start a new one.
            if next.pending_draw_count > 0 && next.pending_draw_count % 2 == 0 {
                next.pending_draw_count += DRAW_TWO_PENALTY;
            } else {
                next.pending_draw_count = DRAW_TWO_PENALTY;
            }
            next.current_turn_player_id =
                next_player(player_id, player_ids, next.direction, None);
        }
        CardType::WildDrawFour => {
            // Extend a capped stack, otherwise start at four.
            if next.pending_draw_count >= STACK_CAP {
                next.pending_draw_count += WILD_DRAW_PENALTY;
            } else {
                next.pending_draw_count = WILD_DRAW_PENALTY;
            }
            next.current_turn_player_id =
                next_player(player_id, player_ids, next.direction, None);
        }
        CardType::Number | CardType::Wild => {
            next.current_turn_player_id =
                next_player(player_id, player_ids, next.direction, None);
        }
    }

    // Any non-stacking play clears an unresolved obligation.
    if card.card_type != CardType::DrawTwo && card.card_type != CardType::WildDrawFour {
        next.pending_draw_count = 0;
    }

    let card_json = serde_json::to_string(&card).unwrap_or_default();
    let unix_millis = now.unix_timestamp_nanos() / 1_000_000;
    next.last_played_card_animation_id =
        Some(format!("{player_id}|{card_json}|{unix_millis}"));
    next.last_played_card_json = Some(card_json);
    next.pending_wild_color_choice = if card.is_wild() { chosen_color } else { None };
    next.state_version = state.state_version + 1;
    next.last_activity = now;
    next
}
