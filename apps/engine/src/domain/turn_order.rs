//! Turn rotation: direction of play and next-player resolution.
//!
//! This lives in `domain` so every layer (services, monitors, embedding
//! code) shares a single source of truth for "who acts next".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type PlayerId = String;

/// Direction of play. Only the two unit steps exist; there is no way to
/// express any other magnitude.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Signed unit step: +1 clockwise, -1 counter-clockwise.
    pub fn step(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

// Stored records encode direction as the signed integer the clients expect.
impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.step())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i8::deserialize(deserializer)? {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            other => Err(serde::de::Error::custom(format!(
                "Invalid direction: {other}"
            ))),
        }
    }
}

/// A player with an optional assigned seat, as kept by the room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<u16>,
}

/// Resolve who acts after `current_player_id`.
///
/// With seating supplied and non-empty, players are ordered by seat number
/// ascending (missing seats sort last) and the step wraps around that
/// order. Otherwise `player_ids` positional order is used. A current player
/// that cannot be located degrades silently to the first player in order;
/// it is never an error.
pub fn next_player(
    current_player_id: &str,
    player_ids: &[PlayerId],
    direction: Direction,
    seating: Option<&[SeatedPlayer]>,
) -> PlayerId {
    if let Some(seating) = seating.filter(|s| !s.is_empty()) {
        if !seating.iter().any(|p| p.id == current_player_id) {
            return player_ids.first().cloned().unwrap_or_default();
        }
        let mut sorted: Vec<&SeatedPlayer> = seating.iter().collect();
        sorted.sort_by_key(|p| p.seat_number.unwrap_or(u16::MAX));
        return match sorted.iter().position(|p| p.id == current_player_id) {
            Some(idx) => sorted[step_index(idx, sorted.len(), direction)].id.clone(),
            None => sorted[0].id.clone(),
        };
    }

    let Some(idx) = player_ids.iter().position(|id| id == current_player_id) else {
        return player_ids.first().cloned().unwrap_or_default();
    };
    player_ids[step_index(idx, player_ids.len(), direction)].clone()
}

fn step_index(idx: usize, len: usize, direction: Direction) -> usize {
    let next = idx as i64 + i64::from(direction.step());
    if next < 0 {
        len - 1
    } else if next as usize >= len {
        0
    } else {
        next as usize
    }
}
