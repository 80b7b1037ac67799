// Mouse state and queries

use super::device::{DeviceSnapshot, DigitalState};
use glam::Vec2;

/// Mouse buttons tracked by the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    XButton1,
    XButton2,
}

impl MouseButton {
    pub const COUNT: usize = 5;

    /// Map a winit button, if it is one we track
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton as W;

        match button {
            W::Left => Some(MouseButton::Left),
            W::Right => Some(MouseButton::Right),
            W::Middle => Some(MouseButton::Middle),
            W::Back => Some(MouseButton::XButton1),
            W::Forward => Some(MouseButton::XButton2),
            W::Other(_) => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Raw mouse state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    pub(crate) buttons: [bool; MouseButton::COUNT],

    /// Cursor position in window pixels
    pub position: Vec2,

    /// Accumulated scroll since startup, in lines
    pub scroll_wheel: f32,
}

impl MouseState {
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.set_button(button, true);
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_scroll(mut self, scroll_wheel: f32) -> Self {
        self.scroll_wheel = scroll_wheel;
        self
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.buttons[button.index()] = down;
    }
}

impl DigitalState for MouseState {
    type Id = MouseButton;

    fn is_down(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }
}

/// Snapshot pair for the shared mouse
pub type Mouse = DeviceSnapshot<MouseState>;

impl DeviceSnapshot<MouseState> {
    /// Cursor X in window pixels
    pub fn x(&self) -> f32 {
        self.current().position.x
    }

    /// Cursor Y in window pixels
    pub fn y(&self) -> f32 {
        self.current().position.y
    }

    /// Cursor position this frame
    pub fn position(&self) -> Vec2 {
        self.current().position
    }

    /// Cursor movement since last frame
    pub fn delta(&self) -> Vec2 {
        self.current().position - self.previous().position
    }

    pub fn scroll_wheel_value(&self) -> f32 {
        self.current().scroll_wheel
    }

    /// Scroll since last frame
    pub fn scroll_delta(&self) -> f32 {
        self.current().scroll_wheel - self.previous().scroll_wheel
    }

    /// 1.0 if the left button is down, 0.0 otherwise
    pub fn left_button(&self) -> f32 {
        if self.is_down(MouseButton::Left) {
            1.0
        } else {
            0.0
        }
    }
}
