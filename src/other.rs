use std::collections::HashSet;

use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the per-frame sets. Keys being held stay in `down`.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// Context provided to scenes during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub delta_time: f32,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard state and delta time.
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32) -> Self {
        Self {
            keyboard,
            delta_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_keeps_held_keys() {
        let mut keyboard = KeyboardState::default();
        keyboard.down.insert(Keycode::Num1);
        keyboard.pressed.insert(Keycode::Num1);
        keyboard.released.insert(Keycode::Escape);

        keyboard.begin_frame();

        assert!(keyboard.down.contains(&Keycode::Num1));
        assert!(keyboard.pressed.is_empty());
        assert!(keyboard.released.is_empty());
    }
}
