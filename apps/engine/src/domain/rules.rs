//! Rule constants and the card-legality predicate.

use std::time::Duration;

use super::cards_types::{Card, CardColor, CardType};

/// Cards dealt to each player at round start.
pub const OPENING_HAND: usize = 7;
/// Pending-draw increment contributed by a DrawTwo.
pub const DRAW_TWO_PENALTY: u8 = 2;
/// Pending-draw increment contributed by a WildDrawFour.
pub const WILD_DRAW_PENALTY: u8 = 4;
/// Once the stacked obligation reaches this cap, only WildDrawFour extends it.
pub const STACK_CAP: u8 = 8;
/// Cards appended for a missed or false "last card" declaration.
pub const UNO_PENALTY_CARDS: usize = 2;
/// Window a player has to declare after reaching one card.
pub const UNO_GRACE: Duration = Duration::from_millis(2000);

/// May `card` be played on top of the current discard?
///
/// Pure predicate; first matching rule decides. `hand` is the acting
/// player's full hand when known, needed only for the WildDrawFour
/// colour-matching restriction (unknown hand means the restriction cannot
/// be enforced and the card passes).
pub fn can_play_card(
    card: Card,
    top_card: Card,
    active_color: CardColor,
    pending_draw_count: u8,
    hand: Option<&[Card]>,
) -> bool {
    if card.is_wild() {
        if card.card_type == CardType::WildDrawFour {
            if let Some(hand) = hand {
                // Restriction: not playable while holding any non-wild card
                // of the active colour.
                if hand
                    .iter()
                    .any(|c| !c.is_wild() && c.color == active_color)
                {
                    return false;
                }
            }
            // A non-maxed stack cannot be interrupted; at the cap it may be
            // continued, and with no stack active the card is always legal.
            if pending_draw_count > 0 && pending_draw_count < STACK_CAP {
                return false;
            }
            return true;
        }
        return true;
    }

    if card.color == active_color {
        return true;
    }

    // When the top card is a chosen-colour wild, only the active colour
    // matters; type and number are never consulted against a wild.
    if top_card.is_wild() {
        return false;
    }

    if card.card_type == top_card.card_type {
        return true;
    }

    if card.card_type == CardType::Number
        && top_card.card_type == CardType::Number
        && card.number == top_card.number
    {
        return true;
    }

    if pending_draw_count > 0 {
        // DrawTwo stacks only onto an even DrawTwo chain, and only in the
        // active colour; WildDrawFour extends a capped stack.
        if pending_draw_count % 2 == 0
            && card.card_type == CardType::DrawTwo
            && card.color == active_color
        {
            return true;
        }
        if pending_draw_count >= STACK_CAP && card.card_type == CardType::WildDrawFour {
            return true;
        }
    }

    false
}
