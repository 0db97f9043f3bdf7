use glam::Vec2;
use std::fmt;

/// Which end of the table a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of horizontal velocity that carries the ball toward this side
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn announcement(self) -> &'static str {
        match self {
            Side::Left => "Left player wins!",
            Side::Right => "Right player wins!",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Signed vertical paddle speed, units per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleMotion {
    pub vy: f32,
}

impl PaddleMotion {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2, // units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on the center spot, keeping its velocity
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// Movement intent delivered by an input source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Stop,
}

impl PaddleIntent {
    /// -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> f32 {
        match self {
            PaddleIntent::Up => -1.0,
            PaddleIntent::Down => 1.0,
            PaddleIntent::Stop => 0.0,
        }
    }

    pub fn velocity(self, paddle_speed: f32) -> f32 {
        self.dir() * paddle_speed
    }
}
