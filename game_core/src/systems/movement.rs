use crate::{Ball, Player};

/// Advance the ball by one step of its velocity
pub fn move_ball(ball: &mut Ball) {
    ball.move_by_step();
}

/// Apply paddle movement based on intents
pub fn move_paddles(left: &mut Player, right: &mut Player) {
    left.apply_intent();
    right.apply_intent();
}
