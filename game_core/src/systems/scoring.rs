use crate::{Ball, Config, Events, Player};

/// Check if the ball left the board and award the point.
///
/// A ball leaving on the left is a point for the right player and vice versa.
/// The ball goes back to its spawn point with its velocity untouched.
pub fn check_scoring(
    ball: &mut Ball,
    left: &mut Player,
    right: &mut Player,
    config: &Config,
    events: &mut Events,
) {
    let scorer = if ball.is_outside_on_left() {
        right
    } else if ball.is_outside_on_right(config.board_width) {
        left
    } else {
        return;
    };

    scorer.increment_score();
    events.scored = Some(scorer.side);
    ball.reset_to_start();

    tracing::info!(
        side = ?scorer.side,
        score = scorer.score(),
        "point scored"
    );
}
