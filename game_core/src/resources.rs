use serde::Serialize;

use crate::Side;

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
    }
}

/// External input, already normalized away from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move { side: Side, intent: crate::Intent },
    TogglePause,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub paddle_y: f32,
    pub score: u32,
}

/// Read-only view of the match handed to renderers after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub paused: bool,
    pub ball: BallView,
    pub player1: PlayerView,
    pub player2: PlayerView,
}

impl Snapshot {
    pub fn player(&self, side: Side) -> &PlayerView {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }
}
