//! Core card-related types: Card, CardColor, CardType

/// Card colour. `Wild` is the colour of the two wild card types only;
/// every other card carries one of the four table colours.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardType {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// A single card.
///
/// Invariants are held by construction: `number` is `Some(0..=9)` exactly
/// for number cards, and the wild card types are the only ones carrying
/// `CardColor::Wild`. Use the constructors below rather than building the
/// struct by hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub card_type: CardType,
    /// Face value, present exactly for number cards.
    pub number: Option<u8>,
}

impl Card {
    pub fn number(color: CardColor, face: u8) -> Self {
        debug_assert!(face <= 9, "face value out of range");
        debug_assert!(color != CardColor::Wild, "number cards are coloured");
        Self {
            color,
            card_type: CardType::Number,
            number: Some(face),
        }
    }

    /// A coloured action card: Skip, Reverse, or DrawTwo.
    pub fn action(color: CardColor, card_type: CardType) -> Self {
        debug_assert!(matches!(
            card_type,
            CardType::Skip | CardType::Reverse | CardType::DrawTwo
        ));
        debug_assert!(color != CardColor::Wild, "action cards are coloured");
        Self {
            color,
            card_type,
            number: None,
        }
    }

    pub fn wild() -> Self {
        Self {
            color: CardColor::Wild,
            card_type: CardType::Wild,
            number: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: CardColor::Wild,
            card_type: CardType::WildDrawFour,
            number: None,
        }
    }

    /// True for Wild and WildDrawFour; equivalent to `color == Wild`.
    pub fn is_wild(self) -> bool {
        matches!(self.card_type, CardType::Wild | CardType::WildDrawFour)
    }

    /// True for every non-number card.
    pub fn is_action(self) -> bool {
        self.card_type != CardType::Number
    }
}
