//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod game_transition;
pub mod rules;
pub mod state;
pub mod turn_order;

#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_transition;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardColor, CardType};
pub use dealing::deal_cards;
pub use deck::{shuffle_deck, standard_deck, DrawPile};
pub use game_transition::process_card_play;
pub use rules::can_play_card;
pub use state::GameState;
pub use turn_order::{next_player, Direction, PlayerId, SeatedPlayer};
