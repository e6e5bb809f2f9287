/// Game tuning parameters for Pong
///
/// All distances are board pixels, all speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    // Score labels
    pub const SCORE_Y: f32 = 50.0;
    pub const SCORE_LEFT_X: f32 = 300.0;
    pub const SCORE_RIGHT_X: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_LEFT_X: f32 = 10.0;
    pub const PADDLE_RIGHT_X: f32 = 770.0;
    pub const PADDLE_STEP: f32 = 3.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_DX: f32 = 4.5;
    pub const BALL_START_DY: f32 = 1.5;

    // Loop
    pub const TICK_INTERVAL_MS: u64 = 20;
}
