// Input handling system
//
// This module maps named controls ("Jump", "MoveX") to gamepad, keyboard and
// mouse inputs per player, and answers queries for their current value.
//
// ## Architecture
//
// - `device`: Double-buffered snapshots (this frame / last frame) and edge detection
// - `gamepad`, `mouse`, `keyboard`: Raw device state and device-specific queries
// - `control`: Control sources that turn snapshots into a float
// - `config`: Per-player control tables and input settings
// - `scheme`: Starter control schemes
// - `backend`: The host platform seam, plus a scripted backend for tests
// - `winit_backend`: Live backend over winit window events and gilrs
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use pad_controls::{Control, GamepadButton, InputManager, InputSettings, PlayerSlot, WinitBackend};
//
// let settings = InputSettings::default();
// let mut input = InputManager::with_settings(WinitBackend::new(&settings), settings);
// input.bind_button(PlayerSlot::One, "Jump", GamepadButton::A);
//
// // In your event loop, forward window events
// input.backend_mut().handle_window_event(&event);
//
// // Once per frame, before game logic
// input.update();
//
// if input.control_state(PlayerSlot::One, "Jump")? > 0.0 {
//     // Player one is jumping
// }
// ```

pub mod backend;
pub mod config;
pub mod control;
pub mod device;
pub mod gamepad;
pub mod keyboard;
pub mod manager;
pub mod mouse;
pub mod player;
pub mod scheme;
pub mod winit_backend;

// Re-export commonly used types
pub use backend::{InputBackend, ScriptedBackend, ScriptedFrame};
pub use config::{ControlBindings, ControlTable, InputSettings};
pub use control::{Control, ControlContext, ControlFn, CustomControl, Devices, PadRef};
pub use device::{ButtonTrigger, DeviceSnapshot, EdgeMode};
pub use gamepad::{GamepadAxis, GamepadButton, GamepadState, Pad};
pub use keyboard::{Keyboard, KeyboardState};
pub use manager::InputManager;
pub use mouse::{Mouse, MouseButton, MouseState};
pub use player::PlayerSlot;
pub use winit_backend::WinitBackend;

/// Input system errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(usize),

    #[error("Control not found: {name} for {player}")]
    ControlNotFound { player: PlayerSlot, name: String },

    #[error("Input backend unavailable: {0}")]
    Backend(String),
}
