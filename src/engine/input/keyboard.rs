// Keyboard state and queries

use super::device::{DeviceSnapshot, DigitalState};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Raw keyboard state for one frame: the set of keys held down
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Build a state from the keys held down
    pub fn from_keys<I: IntoIterator<Item = KeyCode>>(keys: I) -> Self {
        Self {
            down: keys.into_iter().collect(),
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
    }

    /// Get all keys held down
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.down.iter().copied()
    }
}

impl DigitalState for KeyboardState {
    type Id = KeyCode;

    fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }
}

/// Snapshot pair for the shared keyboard
pub type Keyboard = DeviceSnapshot<KeyboardState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::device::EdgeMode;

    #[test]
    fn test_press_release() {
        let mut state = KeyboardState::default();
        state.press(KeyCode::KeyW);
        assert!(state.is_down(KeyCode::KeyW));

        state.release(KeyCode::KeyW);
        assert!(!state.is_down(KeyCode::KeyW));
    }

    #[test]
    fn test_release_unpressed_key() {
        let mut state = KeyboardState::default();
        state.release(KeyCode::Space);
        assert_eq!(state.pressed_keys().count(), 0);
    }

    #[test]
    fn test_keyboard_edges() {
        let mut keyboard = Keyboard::new(EdgeMode::Transition);
        keyboard.refresh(KeyboardState::from_keys([KeyCode::Space]));
        assert!(keyboard.just_pressed(KeyCode::Space));
        assert!(keyboard.is_up(KeyCode::Enter));

        keyboard.refresh(KeyboardState::from_keys([KeyCode::Space, KeyCode::Enter]));
        assert!(!keyboard.just_pressed(KeyCode::Space));
        assert!(keyboard.just_pressed(KeyCode::Enter));

        keyboard.refresh(KeyboardState::default());
        assert!(keyboard.just_released(KeyCode::Space));
        assert!(keyboard.just_released(KeyCode::Enter));
    }
}
