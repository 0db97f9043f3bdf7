use crate::{Ball, Config, Events, Paddle, Score, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls. Touching a wall counts as a hit.
pub fn reflect_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius <= 0.0 || ball.pos.y + radius >= config.surface_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Does the ball disc overlap the paddle span `[paddle_y, paddle_y + paddle_height]`?
pub fn overlaps_paddle(ball_y: f32, paddle_y: f32, config: &Config) -> bool {
    ball_y + config.ball_radius >= paddle_y
        && ball_y - config.ball_radius <= paddle_y + config.paddle_height
}

/// Ball edge is on or past `side`'s goal line while still heading outward
fn reached_goal_line(ball: &Ball, side: Side, config: &Config) -> bool {
    let heading_out = ball.vel.x * side.toward() > 0.0;
    let crossed = match side {
        Side::Left => ball.pos.x - config.ball_radius <= 0.0,
        Side::Right => ball.pos.x + config.ball_radius >= config.surface_width,
    };
    heading_out && crossed
}

/// Resolve the ball reaching either goal line: bounce off the guarding paddle,
/// or award the point to the other side and recenter the ball.
pub fn resolve_goal_lines(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y))
        .collect();
    let guard = |side: Side| {
        paddles
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, y)| *y)
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for side in [Side::Left, Side::Right] {
            if !reached_goal_line(ball, side, config) {
                continue;
            }

            match guard(side) {
                Some(paddle_y) if overlaps_paddle(ball.pos.y, paddle_y, config) => {
                    ball.vel.x = -ball.vel.x;
                    events.ball_hit_paddle = true;
                }
                _ => {
                    let scorer = side.opponent();
                    score.award(scorer);
                    events.scored(scorer);
                    ball.recenter(config.center());
                    tracing::debug!(%scorer, %score, "point scored");
                }
            }
        }
    }
}
