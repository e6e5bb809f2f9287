use crate::{InputEvent, Player, Side};

/// Apply one normalized input event.
///
/// Runs between ticks, and also while paused so the pause can be lifted.
pub fn ingest_input(event: InputEvent, left: &mut Player, right: &mut Player, paused: &mut bool) {
    match event {
        InputEvent::Move { side, intent } => {
            let player = match side {
                Side::Left => left,
                Side::Right => right,
            };
            player.intent = intent;
        }
        InputEvent::TogglePause => {
            *paused = !*paused;
            tracing::info!(paused = *paused, "pause toggled");
        }
    }
}
