//! Keyboard input handling
//!
//! Q/A move the left paddle, P/L the right one, B toggles pause.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputEvent, Intent, Side};

/// What a physical key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Move { side: Side, intent: Intent },
    Pause,
    Quit,
}

/// Host-level outcome of a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(InputEvent),
    Quit,
}

/// Look up the binding for a key code
pub fn binding_for(code: KeyCode) -> Option<Binding> {
    let binding = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Binding::Move {
            side: Side::Left,
            intent: Intent::Up,
        },
        KeyCode::Char('a') | KeyCode::Char('A') => Binding::Move {
            side: Side::Left,
            intent: Intent::Down,
        },
        KeyCode::Char('p') | KeyCode::Char('P') => Binding::Move {
            side: Side::Right,
            intent: Intent::Up,
        },
        KeyCode::Char('l') | KeyCode::Char('L') => Binding::Move {
            side: Side::Right,
            intent: Intent::Down,
        },
        KeyCode::Char('b') | KeyCode::Char('B') => Binding::Pause,
        KeyCode::Esc => Binding::Quit,
        _ => return None,
    };
    Some(binding)
}

/// Turns key presses and releases into match input.
///
/// Tracks the intent it last sent for each side, so releasing a key only
/// stops the paddle if that key's direction is still the one being held.
#[derive(Debug, Default)]
pub struct Keymap {
    held: [Intent; 2],
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self, side: Side) -> Intent {
        self.held[slot(side)]
    }

    /// Handle key down (first press or auto-repeat)
    pub fn key_down(&mut self, binding: Binding, repeat: bool) -> Option<KeyAction> {
        match binding {
            Binding::Move { side, intent } => {
                self.held[slot(side)] = intent;
                Some(KeyAction::Input(InputEvent::Move { side, intent }))
            }
            // Holding the pause key must not flicker the pause state
            Binding::Pause if repeat => None,
            Binding::Pause => Some(KeyAction::Input(InputEvent::TogglePause)),
            Binding::Quit => Some(KeyAction::Quit),
        }
    }

    /// Handle key up
    pub fn key_up(&mut self, binding: Binding) -> Option<KeyAction> {
        match binding {
            Binding::Move { side, intent } if self.held[slot(side)] == intent => {
                self.held[slot(side)] = Intent::Stop;
                Some(KeyAction::Input(InputEvent::Move {
                    side,
                    intent: Intent::Stop,
                }))
            }
            _ => None,
        }
    }

    /// Translate a raw terminal key event
    pub fn handle(&mut self, event: KeyEvent) -> Option<KeyAction> {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Some(KeyAction::Quit);
        }
        let binding = binding_for(event.code)?;
        match event.kind {
            KeyEventKind::Press => self.key_down(binding, false),
            KeyEventKind::Repeat => self.key_down(binding, true),
            KeyEventKind::Release => self.key_up(binding),
        }
    }
}

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}
