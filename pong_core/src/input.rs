//! Keyboard routing for paddle intents

use crate::{PaddleIntent, Side};

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Press,
    Release,
}

/// Keys with a paddle binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    W,
    S,
}

impl Key {
    /// Parse a key name as reported by the host's keyboard events
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            _ => None,
        }
    }

    /// Arrows belong to the right paddle, W/S to the left
    pub fn home_side(self) -> Side {
        match self {
            Key::ArrowUp | Key::ArrowDown => Side::Right,
            Key::W | Key::S => Side::Left,
        }
    }

    fn intent(self) -> PaddleIntent {
        match self {
            Key::ArrowUp | Key::W => PaddleIntent::Up,
            Key::ArrowDown | Key::S => PaddleIntent::Down,
        }
    }
}

/// Map a key event to the paddle it steers.
///
/// `computer` is the side driven by the opponent controller, if any. Its
/// keys are handed to the human side so both schemes work in single-player.
pub fn route_key(
    name: &str,
    edge: KeyEdge,
    computer: Option<Side>,
) -> Option<(Side, PaddleIntent)> {
    let key = Key::from_name(name)?;

    let mut side = key.home_side();
    if computer == Some(side) {
        side = side.opponent();
    }

    let intent = match edge {
        KeyEdge::Press => key.intent(),
        KeyEdge::Release => PaddleIntent::Stop,
    };
    Some((side, intent))
}
