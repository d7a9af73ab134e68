//! Deck construction, shuffling, and the live draw pile.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cards_types::{Card, CardColor, CardType};

/// Cards in a freshly built deck.
pub const DECK_SIZE: usize = 108;

/// Build the canonical 108-card deck in deterministic generation order:
/// for each colour one 0, two each of 1-9, two Skip, two Reverse, two
/// DrawTwo; then four Wild and four WildDrawFour.
pub fn standard_deck() -> Vec<Card> {
    let colors = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in colors {
        deck.push(Card::number(color, 0));
        for face in 1..=9 {
            deck.push(Card::number(color, face));
            deck.push(Card::number(color, face));
        }
        deck.push(Card::action(color, CardType::Skip));
        deck.push(Card::action(color, CardType::Skip));
        deck.push(Card::action(color, CardType::Reverse));
        deck.push(Card::action(color, CardType::Reverse));
        deck.push(Card::action(color, CardType::DrawTwo));
        deck.push(Card::action(color, CardType::DrawTwo));
    }
    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// Fisher-Yates shuffle over a fresh copy; the input is never mutated.
/// Total over decks of any size, including 0 and 1 (no-op).
pub fn shuffle_deck<R: Rng>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// The shared draw source for a room: dealing and penalty draws remove a
/// prefix destructively, nothing is ever pushed on the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawPile(VecDeque<Card>);

impl DrawPile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }

    /// Remove and return the front card, `None` once exhausted.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.0.pop_front()
    }

    /// Remove and return at most `n` cards from the front.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.0.len());
        self.0.drain(..take).collect()
    }

    /// Re-bury a card at the back (used for wild opening discards).
    pub fn put_back(&mut self, card: Card) {
        self.0.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Card>> for DrawPile {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
