use crate::{Ball, Config, Events, Player};

/// Check ball collisions with the top and bottom walls
pub fn check_wall_bounce(ball: &mut Ball, config: &Config, events: &mut Events) {
    let hit_top = ball.should_bounce_from_top_wall();
    let hit_bottom = ball.should_bounce_from_bottom_wall(config.board_height);
    if hit_top || hit_bottom {
        ball.bounce_from_wall();
        events.ball_hit_wall = true;
        tracing::debug!(x = ball.pos.x, y = ball.pos.y, "ball hit wall");
    }
}

/// Check ball collisions with both paddles.
///
/// Runs independently of the wall check, so a ball in a corner can have
/// both velocity components flipped in the same tick.
pub fn check_paddle_bounce(ball: &mut Ball, left: &Player, right: &Player, events: &mut Events) {
    for player in [left, right] {
        if ball.should_bounce_from_paddle(player.side, &player.paddle) {
            ball.bounce_from_paddle();
            events.ball_hit_paddle = Some(player.side);
            tracing::debug!(side = ?player.side, y = ball.pos.y, "ball hit paddle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::Vec2;

    fn setup() -> (Config, Player, Player, Events) {
        let config = Config::new();
        let left = Player::new(Side::Left, &config);
        let right = Player::new(Side::Right, &config);
        (config, left, right, Events::new())
    }

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), 15.0)
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, _, _, mut events) = setup();
        let mut ball = ball_at(400.0, 14.0, 4.5, -1.0);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, 1.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 4.5, "X velocity should be unchanged");
        assert_eq!(ball.pos, Vec2::new(400.0, 14.0), "Bounce does not move the ball");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_near_top_wall_does_not_bounce() {
        let (config, _, _, mut events) = setup();
        let mut ball = ball_at(400.0, 16.0, 4.5, -1.0);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, -1.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, _, _, mut events) = setup();
        let mut ball = ball_at(400.0, 590.0, 4.5, 1.5);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, -1.5, "Ball should bounce up after hitting bottom wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (_, left, right, mut events) = setup();
        let mut ball = ball_at(40.0, 300.0, -4.5, 1.5);

        check_paddle_bounce(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, 4.5, "Ball should bounce right after hitting left paddle");
        assert_eq!(ball.vel.y, 1.5, "Paddle bounce keeps dy");
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (_, left, right, mut events) = setup();
        let mut ball = ball_at(760.0, 300.0, 4.5, -1.5);

        check_paddle_bounce(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -4.5, "Ball should bounce left after hitting right paddle");
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_ball_misses_paddle_vertically() {
        let (_, left, right, mut events) = setup();
        // Paddles span y in [250, 350]
        let mut ball = ball_at(40.0, 200.0, -4.5, 1.5);

        check_paddle_bounce(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -4.5);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (_, left, right, mut events) = setup();
        let mut ball = ball_at(40.0, 300.0, 4.5, 1.5);

        check_paddle_bounce(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, 4.5, "Ball should not bounce when moving away");
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_wall_and_paddle_bounce_in_same_tick() {
        let (config, mut left, right, mut events) = setup();
        left.paddle.set_y(0.0);
        let mut ball = ball_at(40.0, 10.0, -4.5, -1.5);

        check_wall_bounce(&mut ball, &config, &mut events);
        check_paddle_bounce(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel, Vec2::new(4.5, 1.5), "Both components flip");
        assert!(events.ball_hit_wall);
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }
}
