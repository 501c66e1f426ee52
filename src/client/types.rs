use serde::{Serialize, Deserialize};

/// One authoritative world state, as returned by `/world`, `/move` and `/restart`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    // Grid, score and time are absent from bare restart acknowledgements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<i64>,
    pub game_active: bool,
    // Only meaningful on move responses.
    #[serde(default)]
    pub collected: bool,
}

impl WorldSnapshot {
    /// Server time clamped to a valid countdown value.
    pub fn countdown_seconds(&self) -> Option<u32> {
        self.time_remaining
            .map(|secs| secs.clamp(0, u32::MAX as i64) as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// How a direction is spelled in the `/move` form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionEncoding {
    /// `U`, `D`, `L`, `R`.
    #[default]
    Letters,
    /// `W`, `S`, `A`, `D`, the keyboard letters.
    Keys,
}

impl Direction {
    pub fn code(self, encoding: DirectionEncoding) -> &'static str {
        match (encoding, self) {
            (DirectionEncoding::Letters, Direction::Up) => "U",
            (DirectionEncoding::Letters, Direction::Down) => "D",
            (DirectionEncoding::Letters, Direction::Left) => "L",
            (DirectionEncoding::Letters, Direction::Right) => "R",
            (DirectionEncoding::Keys, Direction::Up) => "W",
            (DirectionEncoding::Keys, Direction::Down) => "S",
            (DirectionEncoding::Keys, Direction::Left) => "A",
            (DirectionEncoding::Keys, Direction::Right) => "D",
        }
    }

    /// Map a `w/a/s/d` key press to a direction.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}
