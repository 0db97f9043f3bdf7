use crate::{Ball, Config, GameRng, MatchState, Opponent, PaddleIntent, Side, TickError};

/// The computer only watches a ball that is heading its way and has crossed
/// the midline onto its half.
pub fn ball_in_view(ball: &Ball, side: Side, config: &Config) -> bool {
    let approaching = ball.vel.x * side.toward() > 0.0;
    let midline = config.surface_width / 2.0;
    let on_our_half = match side {
        Side::Left => ball.pos.x < midline,
        Side::Right => ball.pos.x > midline,
    };
    approaching && on_our_half
}

/// Velocity decision for the computer paddle.
///
/// Returns `Some(0.0)` while the ball is out of view, `None` when the reaction
/// roll fails (the paddle keeps its current velocity), and otherwise a velocity
/// chasing the ball's height relative to the paddle center.
pub fn decide(
    state: &MatchState,
    opponent: Opponent,
    config: &Config,
    rng: &mut GameRng,
) -> Result<Option<f32>, TickError> {
    let ball = state.ball()?;
    if !ball_in_view(&ball, opponent.side, config) {
        return Ok(Some(0.0));
    }

    if rng.sample() >= opponent.difficulty {
        return Ok(None);
    }

    let paddle = state.paddle(opponent.side)?;
    let center = paddle.y + config.paddle_height / 2.0;
    let intent = if ball.pos.y > center {
        PaddleIntent::Down
    } else if ball.pos.y < center {
        PaddleIntent::Up
    } else {
        PaddleIntent::Stop
    };

    Ok(Some(intent.velocity(config.paddle_speed)))
}

/// Run the opponent controller and apply its decision. No-op in two-player matches.
pub fn drive_opponent(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
) -> Result<(), TickError> {
    let Some(opponent) = state.opponent() else {
        return Ok(());
    };

    if let Some(vy) = decide(state, opponent, config, rng)? {
        state.set_paddle_velocity(opponent.side, vy)?;
    }
    Ok(())
}
