/// Tuning parameters for the reference table. Distances are in surface units,
/// speeds in units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 600.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0; // render hint only, collisions use the surface edge
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 2.5; // per axis

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins
}
