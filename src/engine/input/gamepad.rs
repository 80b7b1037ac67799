// Gamepad state and queries

use super::device::{DeviceSnapshot, DigitalState};
use glam::Vec2;

/// Digital gamepad inputs, named after the Xbox layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    Back,
    Start,
    BigButton,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl GamepadButton {
    pub const COUNT: usize = 15;

    pub const ALL: [GamepadButton; Self::COUNT] = [
        GamepadButton::A,
        GamepadButton::B,
        GamepadButton::X,
        GamepadButton::Y,
        GamepadButton::Back,
        GamepadButton::Start,
        GamepadButton::BigButton,
        GamepadButton::LeftShoulder,
        GamepadButton::RightShoulder,
        GamepadButton::LeftStick,
        GamepadButton::RightStick,
        GamepadButton::DPadUp,
        GamepadButton::DPadDown,
        GamepadButton::DPadLeft,
        GamepadButton::DPadRight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Analog gamepad inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

/// Raw state of one gamepad for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GamepadState {
    pub connected: bool,
    buttons: [bool; GamepadButton::COUNT],

    /// Sticks in [-1, 1], Y up
    pub left_stick: Vec2,
    pub right_stick: Vec2,

    /// Triggers in [0, 1]
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl GamepadState {
    /// State of a pad that is plugged in with everything at rest
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Builder-style button press, mostly for scripted input
    pub fn with_button(mut self, button: GamepadButton) -> Self {
        self.set_button(button, true);
        self
    }

    /// Builder-style left stick position
    pub fn with_left_stick(mut self, x: f32, y: f32) -> Self {
        self.left_stick = Vec2::new(x, y);
        self
    }

    /// Builder-style right stick position
    pub fn with_right_stick(mut self, x: f32, y: f32) -> Self {
        self.right_stick = Vec2::new(x, y);
        self
    }

    pub fn with_triggers(mut self, left: f32, right: f32) -> Self {
        self.left_trigger = left;
        self.right_trigger = right;
        self
    }

    pub fn set_button(&mut self, button: GamepadButton, down: bool) {
        self.buttons[button.index()] = down;
    }

    /// Analog value of an axis, 0.0 while disconnected
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        if !self.connected {
            return 0.0;
        }
        match axis {
            GamepadAxis::LeftStickX => self.left_stick.x,
            GamepadAxis::LeftStickY => self.left_stick.y,
            GamepadAxis::RightStickX => self.right_stick.x,
            GamepadAxis::RightStickY => self.right_stick.y,
            GamepadAxis::LeftTrigger => self.left_trigger,
            GamepadAxis::RightTrigger => self.right_trigger,
        }
    }
}

impl DigitalState for GamepadState {
    type Id = GamepadButton;

    fn is_down(&self, button: GamepadButton) -> bool {
        self.connected && self.buttons[button.index()]
    }
}

/// Snapshot pair for one player's gamepad
pub type Pad = DeviceSnapshot<GamepadState>;

impl DeviceSnapshot<GamepadState> {
    /// Check if the pad is plugged in this frame
    pub fn is_connected(&self) -> bool {
        self.current().connected
    }

    /// Check if the pad was plugged in since last frame
    pub fn just_connected(&self) -> bool {
        self.current().connected && !self.previous().connected
    }

    /// Check if the pad was unplugged since last frame
    pub fn just_disconnected(&self) -> bool {
        !self.current().connected && self.previous().connected
    }

    /// Analog value this frame, 0.0 while disconnected
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        self.current().axis(axis)
    }

    pub fn left_stick(&self) -> Vec2 {
        Vec2::new(
            self.axis(GamepadAxis::LeftStickX),
            self.axis(GamepadAxis::LeftStickY),
        )
    }

    pub fn right_stick(&self) -> Vec2 {
        Vec2::new(
            self.axis(GamepadAxis::RightStickX),
            self.axis(GamepadAxis::RightStickY),
        )
    }

    /// Left trigger in [0, 1]
    pub fn left_trigger(&self) -> f32 {
        self.axis(GamepadAxis::LeftTrigger)
    }

    /// Right trigger in [0, 1]
    pub fn right_trigger(&self) -> f32 {
        self.axis(GamepadAxis::RightTrigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::device::EdgeMode;
    use approx::assert_relative_eq;

    #[test]
    fn test_button_indices_are_unique() {
        for (i, button) in GamepadButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn test_disconnected_reads_neutral() {
        let mut state = GamepadState::default()
            .with_button(GamepadButton::A)
            .with_left_stick(0.5, -0.5)
            .with_triggers(1.0, 1.0);
        state.connected = false;

        assert!(!state.is_down(GamepadButton::A));
        assert_eq!(state.axis(GamepadAxis::LeftStickX), 0.0);
        assert_eq!(state.axis(GamepadAxis::RightTrigger), 0.0);
    }

    #[test]
    fn test_connected_reads_values() {
        let state = GamepadState::connected()
            .with_button(GamepadButton::DPadLeft)
            .with_right_stick(0.25, 0.75)
            .with_triggers(0.3, 0.9);

        assert!(state.is_down(GamepadButton::DPadLeft));
        assert!(!state.is_down(GamepadButton::DPadRight));
        assert_relative_eq!(state.axis(GamepadAxis::RightStickX), 0.25);
        assert_relative_eq!(state.axis(GamepadAxis::RightStickY), 0.75);
        assert_relative_eq!(state.axis(GamepadAxis::LeftTrigger), 0.3);
        assert_relative_eq!(state.axis(GamepadAxis::RightTrigger), 0.9);
    }

    #[test]
    fn test_pad_connection_edges() {
        let mut pad = Pad::new(EdgeMode::Transition);
        assert!(!pad.is_connected());

        pad.refresh(GamepadState::connected());
        assert!(pad.just_connected());

        pad.refresh(GamepadState::connected());
        assert!(!pad.just_connected());

        pad.refresh(GamepadState::default());
        assert!(pad.just_disconnected());
    }

    #[test]
    fn test_pad_stick_vectors() {
        let mut pad = Pad::new(EdgeMode::Transition);
        pad.refresh(GamepadState::connected().with_left_stick(-1.0, 0.5));

        assert_eq!(pad.left_stick(), Vec2::new(-1.0, 0.5));
        assert_eq!(pad.right_stick(), Vec2::ZERO);
    }

    #[test]
    fn test_pad_button_edges() {
        let mut pad = Pad::new(EdgeMode::Transition);
        pad.refresh(GamepadState::connected());
        pad.refresh(GamepadState::connected().with_button(GamepadButton::Start));

        assert!(pad.just_pressed(GamepadButton::Start));
        assert!(pad.is_down(GamepadButton::Start));
        assert!(pad.is_up(GamepadButton::A));
    }
}
