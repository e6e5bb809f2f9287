use glam::Vec2;
use thiserror::Error;

use crate::{Params, Side};

/// Reasons a [`Config`] cannot back a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have a positive size, got {width}x{height}")]
    BoardSize { width: f32, height: f32 },

    #[error("paddle must have a positive size, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit on a board of height {board}")]
    PaddleTooTall { paddle: f32, board: f32 },

    #[error("{side:?} paddle at x={x} does not fit on a board of width {board}")]
    PaddleOffBoard { side: Side, x: f32, board: f32 },

    #[error("paddle step must not be negative, got {0}")]
    PaddleStep(f32),

    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),

    #[error("ball start velocity needs two non-zero components, got ({dx}, {dy})")]
    BallVelocity { dx: f32, dy: f32 },

    #[error("tick interval must be at least 1 ms")]
    TickInterval,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub score_y: f32,
    pub score_left_x: f32,
    pub score_right_x: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_left_x: f32,
    pub paddle_right_x: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            score_y: Params::SCORE_Y,
            score_left_x: Params::SCORE_LEFT_X,
            score_right_x: Params::SCORE_RIGHT_X,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_left_x: Params::PADDLE_LEFT_X,
            paddle_right_x: Params::PADDLE_RIGHT_X,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_start_dx: Params::BALL_START_DX,
            ball_start_dy: Params::BALL_START_DY,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_left_x,
            Side::Right => self.paddle_right_x,
        }
    }

    /// Get X position of the score label for `side`
    pub fn board_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.score_left_x,
            Side::Right => self.score_right_x,
        }
    }

    /// Lowest allowed paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.board_height - self.paddle_height
    }

    /// Paddles start vertically centred
    pub fn paddle_start_y(&self) -> f32 {
        (self.board_height - self.paddle_height) / 2.0
    }

    /// Ball spawn point: centre of the board
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.board_width / 2.0, self.board_height / 2.0)
    }

    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_dx, self.ball_start_dy)
    }

    /// Check that the configuration describes a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.board_width) || !positive(self.board_height) {
            return Err(ConfigError::BoardSize {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.board_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                board: self.board_height,
            });
        }
        for side in [Side::Left, Side::Right] {
            let x = self.paddle_x(side);
            if x < 0.0 || x + self.paddle_width > self.board_width {
                return Err(ConfigError::PaddleOffBoard {
                    side,
                    x,
                    board: self.board_width,
                });
            }
        }
        if self.paddle_step.is_nan() || self.paddle_step < 0.0 {
            return Err(ConfigError::PaddleStep(self.paddle_step));
        }
        if !positive(self.ball_radius) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if self.ball_start_dx == 0.0
            || self.ball_start_dy == 0.0
            || !self.ball_start_dx.is_finite()
            || !self.ball_start_dy.is_finite()
        {
            return Err(ConfigError::BallVelocity {
                dx: self.ball_start_dx,
                dy: self.ball_start_dy,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::TickInterval);
        }
        Ok(())
    }
}

// NaN fails every comparison, so this rejects it too
fn positive(value: f32) -> bool {
    value > 0.0
}
