//! Opening-hand dealing.

use super::cards_types::Card;
use super::deck::DrawPile;
use super::rules::OPENING_HAND;

/// Deal seven cards to each player in round-robin order, one card per
/// player per round, consuming from the front of the pile.
///
/// A short pile is not an error: dealing stops when the pile runs out and
/// later hands come up short. The pile keeps whatever remains as the shared
/// draw source for the round.
pub fn deal_cards(pile: &mut DrawPile, player_count: usize) -> Vec<Vec<Card>> {
    let mut hands = vec![Vec::with_capacity(OPENING_HAND); player_count];
    for _ in 0..OPENING_HAND {
        for hand in hands.iter_mut() {
            match pile.draw_one() {
                Some(card) => hand.push(card),
                None => return hands,
            }
        }
    }
    hands
}
