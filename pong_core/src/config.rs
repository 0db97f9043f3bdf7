use crate::components::Side;
use crate::params::Params;
use glam::Vec2;

/// Rejected table configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit a surface of height {surface}")]
    PaddleTooTall { paddle: f32, surface: f32 },

    #[error("ball diameter {diameter} does not fit a {width}x{height} surface")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },

    #[error("winning score must be at least 1")]
    ZeroWinScore,
}

/// Table configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u8,
    /// Side steered by the computer in single-player matches
    pub ai_side: Side,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            ai_side: Side::Right,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the playing surface
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Largest legal paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.surface_height - self.paddle_height
    }

    /// Clamp a paddle top edge into `[0, surface_height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Top edge that centers a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.paddle_max_y() / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                surface: self.surface_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.surface_width || diameter >= self.surface_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                width: self.surface_width,
                height: self.surface_height,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }
}

/// Computer reaction preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a menu selection; unknown or missing values fall back to `Easy`.
    pub fn from_selection(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                tracing::debug!(selection = other, "unknown difficulty, using easy");
                Difficulty::Easy
            }
        }
    }

    /// Chance per tick that the computer paddle reacts
    pub fn probability(self) -> f32 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.9,
        }
    }
}

/// Who controls the second paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    SinglePlayer,
    Multiplayer,
}

impl Mode {
    /// "single" selects the computer opponent, anything else is two humans.
    pub fn from_selection(value: &str) -> Self {
        if value.trim() == "single" {
            Mode::SinglePlayer
        } else {
            Mode::Multiplayer
        }
    }

    pub fn has_computer_opponent(self) -> bool {
        self == Mode::SinglePlayer
    }
}

/// Options picked in the pre-match menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    pub mode: Mode,
}

impl MatchConfig {
    pub fn new(difficulty: Difficulty, mode: Mode) -> Self {
        Self { difficulty, mode }
    }

    pub fn from_selection(difficulty: &str, mode: &str) -> Self {
        Self {
            difficulty: Difficulty::from_selection(difficulty),
            mode: Mode::from_selection(mode),
        }
    }
}
