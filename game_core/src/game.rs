use crate::systems::ingest_input;
use crate::{
    step, Ball, BallView, Config, ConfigError, Events, InputEvent, Player, PlayerView, Side,
    Snapshot,
};

/// A running match: the ball, both players and the pause flag.
///
/// The match has no end state; it is either running or paused.
#[derive(Debug, Clone)]
pub struct Match {
    config: Config,
    ball: Ball,
    player1: Player,
    player2: Player,
    paused: bool,
    tick: u64,
    events: Events,
}

impl Default for Match {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Match {
    /// Start a match on a custom board
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        let ball = Ball::new(
            config.ball_start(),
            config.ball_start_velocity(),
            config.ball_radius,
        );
        Self {
            ball,
            player1: Player::new(Side::Left, &config),
            player2: Player::new(Side::Right, &config),
            paused: false,
            tick: 0,
            events: Events::new(),
            config,
        }
    }

    /// Advance the simulation by one fixed step. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        // Clear events at start of tick
        self.events.clear();

        step(
            &mut self.ball,
            &mut self.player1,
            &mut self.player2,
            &self.config,
            &mut self.events,
        );

        self.tick += 1;
    }

    pub fn apply_input(&mut self, event: InputEvent) {
        ingest_input(
            event,
            &mut self.player1,
            &mut self.player2,
            &mut self.paused,
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            paused: self.paused,
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
            },
            player1: PlayerView {
                paddle_y: self.player1.paddle.y(),
                score: self.player1.score(),
            },
            player2: PlayerView {
                paddle_y: self.player2.paddle.y(),
                score: self.player2.score(),
            },
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Test and tooling access to the ball
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Events of the last tick that actually ran
    pub fn events(&self) -> &Events {
        &self.events
    }
}
