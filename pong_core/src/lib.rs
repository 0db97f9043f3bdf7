pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance paddles and ball by one tick and resolve wall and goal-line contacts
pub fn advance(state: &mut MatchState, config: &Config, events: &mut Events) {
    let world = &mut state.world;

    // 1. Move paddles by their velocities
    move_paddles(world);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls, checked independently of the goal lines
    reflect_walls(world, config, events);

    // 4-5. Left then right goal line: paddle bounce or point
    resolve_goal_lines(world, config, &mut state.score, events);

    // 6. Keep paddles on the surface
    clamp_paddles(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleMotion::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
