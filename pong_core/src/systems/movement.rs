use crate::{Ball, Config, Paddle, PaddleMotion};
use hecs::World;

/// Apply paddle velocities
pub fn move_paddles(world: &mut World) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&mut Paddle, &PaddleMotion)>() {
        paddle.y += motion.vy;
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Keep paddles inside `[0, surface_height - paddle_height]`
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
