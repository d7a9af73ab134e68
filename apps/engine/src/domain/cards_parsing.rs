//! Card parsing from compact token representations (e.g., "R5", "GS", "W4").
//!
//! Tokens are a colour letter (R/B/G/Y) followed by a face digit or an
//! action letter (S = skip, R = reverse, D = draw two); wilds are "W" and
//! "W4". Used by fixtures and logs; the JSON object form in `cards_serde`
//! remains the storage format.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, CardColor, CardType};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => return Ok(Card::wild()),
            "W4" => return Ok(Card::wild_draw_four()),
            _ => {}
        }
        let mut chars = s.chars();
        let (Some(color_ch), Some(kind_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err(s));
        };
        let color = match color_ch {
            'R' => CardColor::Red,
            'B' => CardColor::Blue,
            'G' => CardColor::Green,
            'Y' => CardColor::Yellow,
            _ => return Err(parse_err(s)),
        };
        match kind_ch {
            d @ '0'..='9' => Ok(Card::number(color, d as u8 - b'0')),
            'S' => Ok(Card::action(color, CardType::Skip)),
            'R' => Ok(Card::action(color, CardType::Reverse)),
            'D' => Ok(Card::action(color, CardType::DrawTwo)),
            _ => Err(parse_err(s)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card_type {
            CardType::Wild => write!(f, "W"),
            CardType::WildDrawFour => write!(f, "W4"),
            _ => {
                let color = match self.color {
                    CardColor::Red => 'R',
                    CardColor::Blue => 'B',
                    CardColor::Green => 'G',
                    CardColor::Yellow => 'Y',
                    CardColor::Wild => '?',
                };
                let kind = match (self.card_type, self.number) {
                    (CardType::Number, Some(n)) => char::from(b'0' + n),
                    (CardType::Skip, _) => 'S',
                    (CardType::Reverse, _) => 'R',
                    (CardType::DrawTwo, _) => 'D',
                    _ => '?',
                };
                write!(f, "{color}{kind}")
            }
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "R5", "W4") into Card
/// instances. Fails if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
