//! Terminal host for the Pong core: key mapping, rendering and the tick loop

pub mod driver;
pub mod input;
pub mod renderer;
pub mod terminal;
