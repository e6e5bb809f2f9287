pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Run one fixed step of the Pong simulation
///
/// Every check looks at the ball where the previous step left it; the ball
/// only moves once all of them have run, and paddles move after the ball.
pub fn step(
    ball: &mut Ball,
    left: &mut Player,
    right: &mut Player,
    config: &Config,
    events: &mut Events,
) {
    // 1. Top/bottom walls
    check_wall_bounce(ball, config, events);

    // 2. Paddles
    check_paddle_bounce(ball, left, right, events);

    // 3. Scoring (ball fully past a side edge)
    check_scoring(ball, left, right, config, events);

    // 4. Move ball
    move_ball(ball);

    // 5. Move paddles based on intents
    move_paddles(left, right);
}
