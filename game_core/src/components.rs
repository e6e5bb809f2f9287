use glam::Vec2;

use crate::geometry::{clamp, in_range};
use crate::Config;

/// Screen side a player defends. `Left` is player 1, `Right` is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Movement command a player is currently holding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    #[default]
    Stop,
}

/// Paddle component - a player's bat
///
/// `y` is the top edge and is always within `[0, board_height - height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    step: f32,
    max_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, config: &Config) -> Self {
        let mut paddle = Self {
            x,
            y: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
            step: config.paddle_step,
            max_y: config.max_paddle_y(),
        };
        paddle.set_y(y);
        paddle
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Move the paddle, clamping to the board instead of rejecting
    pub fn set_y(&mut self, y: f32) {
        self.y = clamp(y, 0.0, self.max_y);
    }

    pub fn step_up(&mut self) {
        self.set_y(self.y - self.step);
    }

    pub fn step_down(&mut self) {
        self.set_y(self.y + self.step);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    start: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            start: pos,
        }
    }

    /// Spawn point the ball returns to after a point is scored
    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn move_by_step(&mut self) {
        self.pos += self.vel;
    }

    pub fn should_bounce_from_top_wall(&self) -> bool {
        self.pos.y < self.radius && self.vel.y < 0.0
    }

    pub fn should_bounce_from_bottom_wall(&self, board_height: f32) -> bool {
        self.pos.y + self.radius > board_height && self.vel.y > 0.0
    }

    pub fn bounce_from_wall(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Check the ball against the paddle guarding `side`.
    ///
    /// Uses the leading edge of the ball horizontally but only its centre
    /// vertically, so corner grazes are not treated as hits.
    pub fn should_bounce_from_paddle(&self, side: Side, paddle: &Paddle) -> bool {
        let (moving_toward, edge_x) = match side {
            Side::Left => (self.vel.x < 0.0, self.pos.x - self.radius),
            Side::Right => (self.vel.x > 0.0, self.pos.x + self.radius),
        };
        moving_toward
            && in_range(edge_x, paddle.x(), paddle.x() + paddle.width())
            && in_range(self.pos.y, paddle.y(), paddle.y() + paddle.height())
    }

    pub fn bounce_from_paddle(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn is_outside_on_left(&self) -> bool {
        self.pos.x + self.radius < 0.0
    }

    pub fn is_outside_on_right(&self, board_width: f32) -> bool {
        self.pos.x - self.radius > board_width
    }

    /// Put the ball back on its spawn point. Velocity is kept as-is.
    pub fn reset_to_start(&mut self) {
        self.pos = self.start;
    }
}

/// One side of the match: a paddle, a score and the held intent
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub side: Side,
    pub paddle: Paddle,
    pub intent: Intent,
    pub board_x: f32,
    score: u32,
}

impl Player {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            paddle: Paddle::new(config.paddle_x(side), config.paddle_start_y(), config),
            intent: Intent::Stop,
            board_x: config.board_x(side),
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn apply_intent(&mut self) {
        match self.intent {
            Intent::Up => self.paddle.step_up(),
            Intent::Down => self.paddle.step_down(),
            Intent::Stop => {}
        }
    }
}
