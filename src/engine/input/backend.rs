// Host platform seam: where raw device state comes from

use super::gamepad::GamepadState;
use super::keyboard::KeyboardState;
use super::mouse::MouseState;
use super::player::{PlayerSlot, MAX_PLAYERS};
use std::collections::VecDeque;

/// Source of raw device state, polled once per frame by the manager
///
/// Polling never fails. A pad that is not plugged in reports
/// `GamepadState::default()`, which is disconnected with everything at rest.
pub trait InputBackend {
    fn poll_gamepad(&mut self, slot: PlayerSlot) -> GamepadState;

    fn poll_mouse(&mut self) -> MouseState;

    fn poll_keyboard(&mut self) -> KeyboardState;

    /// Called by the manager before any device is polled for a frame
    fn begin_frame(&mut self) {}

    /// Check if the window lost focus since the last frame
    /// The manager neutralizes every snapshot when this returns true
    fn take_focus_lost(&mut self) -> bool {
        false
    }
}

/// Device states for one scripted frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrame {
    pub pads: [GamepadState; MAX_PLAYERS],
    pub mouse: MouseState,
    pub keyboard: KeyboardState,

    /// Report a focus loss before this frame's devices are polled
    pub focus_lost: bool,
}

impl ScriptedFrame {
    pub fn with_pad(mut self, slot: PlayerSlot, state: GamepadState) -> Self {
        self.pads[slot.index()] = state;
        self
    }

    pub fn with_mouse(mut self, mouse: MouseState) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardState) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Mark this frame as following a window focus loss
    pub fn with_focus_lost(mut self) -> Self {
        self.focus_lost = true;
        self
    }
}

/// Backend that replays queued frames, for tests and tooling
///
/// Each `update()` of the manager consumes one frame. Once the queue runs dry
/// the last frame repeats, so held inputs stay held.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    queue: VecDeque<ScriptedFrame>,
    active: ScriptedFrame,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with a list of frames queued
    pub fn from_frames(frames: impl IntoIterator<Item = ScriptedFrame>) -> Self {
        Self {
            queue: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue a frame to be delivered after the ones already queued
    pub fn push(&mut self, frame: ScriptedFrame) {
        self.queue.push_back(frame);
    }

    /// Number of frames still queued
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl InputBackend for ScriptedBackend {
    fn begin_frame(&mut self) {
        if let Some(next) = self.queue.pop_front() {
            self.active = next;
        }
    }

    fn take_focus_lost(&mut self) -> bool {
        // Only once, even if the frame repeats
        std::mem::take(&mut self.active.focus_lost)
    }

    fn poll_gamepad(&mut self, slot: PlayerSlot) -> GamepadState {
        self.active.pads[slot.index()]
    }

    fn poll_mouse(&mut self) -> MouseState {
        self.active.mouse
    }

    fn poll_keyboard(&mut self) -> KeyboardState {
        self.active.keyboard.clone()
    }
}
