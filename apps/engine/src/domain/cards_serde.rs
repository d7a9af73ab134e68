//! Serialization and deserialization for card types.
//!
//! Cards travel to the hand store and to clients as small JSON objects
//! (`{"color":"red","type":"drawTwo"}`, number cards additionally carrying
//! `"number"`). Deserialization re-checks the structural invariants so a
//! corrupt stored hand cannot smuggle in an impossible card.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, CardColor, CardType};

// CardColor serde
impl Serialize for CardColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Wild => "wild",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for CardColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "red" => Ok(CardColor::Red),
            "blue" => Ok(CardColor::Blue),
            "green" => Ok(CardColor::Green),
            "yellow" => Ok(CardColor::Yellow),
            "wild" => Ok(CardColor::Wild),
            _ => Err(serde::de::Error::custom(format!("Invalid color: {s}"))),
        }
    }
}

// CardType serde
impl Serialize for CardType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            CardType::Number => "number",
            CardType::Skip => "skip",
            CardType::Reverse => "reverse",
            CardType::DrawTwo => "drawTwo",
            CardType::Wild => "wild",
            CardType::WildDrawFour => "wildDrawFour",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "number" => Ok(CardType::Number),
            "skip" => Ok(CardType::Skip),
            "reverse" => Ok(CardType::Reverse),
            "drawTwo" => Ok(CardType::DrawTwo),
            "wild" => Ok(CardType::Wild),
            "wildDrawFour" => Ok(CardType::WildDrawFour),
            _ => Err(serde::de::Error::custom(format!("Invalid card type: {s}"))),
        }
    }
}

/// Wire shape of a card. Kept separate from `Card` so deserialization can
/// validate invariants before handing out a domain value.
#[derive(Serialize, Deserialize)]
struct CardWire {
    color: CardColor,
    #[serde(rename = "type")]
    card_type: CardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<u8>,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardWire {
            color: self.color,
            card_type: self.card_type,
            number: self.number,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardWire::deserialize(deserializer)?;
        match (wire.card_type, wire.number) {
            (CardType::Number, Some(n)) if n <= 9 => {}
            (CardType::Number, _) => {
                return Err(serde::de::Error::custom(
                    "number card requires a face value 0-9",
                ))
            }
            (_, Some(_)) => {
                return Err(serde::de::Error::custom(format!(
                    "{:?} card carries no face value",
                    wire.card_type
                )))
            }
            _ => {}
        }
        let wild_type = matches!(wire.card_type, CardType::Wild | CardType::WildDrawFour);
        if wild_type != (wire.color == CardColor::Wild) {
            return Err(serde::de::Error::custom(
                "wild card types and the wild colour must coincide",
            ));
        }
        Ok(Card {
            color: wire.color,
            card_type: wire.card_type,
            number: wire.number,
        })
    }
}
