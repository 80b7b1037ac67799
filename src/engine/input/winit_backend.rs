// Live backend: winit window events for keyboard/mouse, gilrs for gamepads

use super::backend::InputBackend;
use super::config::InputSettings;
use super::gamepad::{GamepadButton, GamepadState};
use super::keyboard::KeyboardState;
use super::mouse::{MouseButton, MouseState};
use super::player::{PlayerSlot, MAX_PLAYERS};
use super::InputError;
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};
use glam::Vec2;
use log::{info, warn};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Pixel scroll deltas are converted to lines at this rate
const PIXELS_PER_LINE: f32 = 20.0;

/// Backend fed by the host's winit event loop and a gilrs context
///
/// Keyboard and mouse state accumulate from `handle_window_event` between
/// frames. A press and release that both land between two frames are not seen.
/// Gamepads are assigned to player slots in connection order.
pub struct WinitBackend {
    gilrs: Option<Gilrs>,
    slots: [Option<GamepadId>; MAX_PLAYERS],
    mouse: MouseState,
    keyboard: KeyboardState,
    stick_deadzone: f32,
    trigger_deadzone: f32,
    focus_lost: bool,
}

impl WinitBackend {
    /// Create a backend, falling back to keyboard and mouse if gamepads are unavailable
    pub fn new(settings: &InputSettings) -> Self {
        Self::try_new(settings).unwrap_or_else(|err| {
            warn!("{}; continuing without gamepads", err);
            Self::keyboard_and_mouse(settings)
        })
    }

    /// Create a backend, failing if the gamepad subsystem cannot start
    pub fn try_new(settings: &InputSettings) -> Result<Self, InputError> {
        let gilrs = Gilrs::new().map_err(|e| InputError::Backend(e.to_string()))?;

        let mut backend = Self::keyboard_and_mouse(settings);
        let already_connected: Vec<GamepadId> = gilrs.gamepads().map(|(id, _)| id).collect();
        backend.gilrs = Some(gilrs);
        for id in already_connected {
            backend.assign(id);
        }

        info!("Gamepad backend initialized");
        Ok(backend)
    }

    /// Create a backend that reports every pad as disconnected
    pub fn keyboard_and_mouse(settings: &InputSettings) -> Self {
        Self {
            gilrs: None,
            slots: [None; MAX_PLAYERS],
            mouse: MouseState::default(),
            keyboard: KeyboardState::default(),
            stick_deadzone: settings.stick_deadzone,
            trigger_deadzone: settings.trigger_deadzone,
            focus_lost: false,
        }
    }

    /// Feed a window event from the host's event loop
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.keyboard.press(key),
                        ElementState::Released => self.keyboard.release(key),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.position = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = MouseButton::from_winit(*button) {
                    self.mouse
                        .set_button(button, *state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.scroll_wheel += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Slot a gamepad is assigned to, if any
    pub fn slot_of(&self, id: GamepadId) -> Option<PlayerSlot> {
        self.slots
            .iter()
            .position(|s| *s == Some(id))
            .and_then(|i| PlayerSlot::from_index(i).ok())
    }

    /// Release every key and mouse button, e.g. when the window loses focus
    fn release_all(&mut self) {
        self.focus_lost = true;
        self.keyboard = KeyboardState::default();
        self.mouse = MouseState {
            position: self.mouse.position,
            scroll_wheel: self.mouse.scroll_wheel,
            ..MouseState::default()
        };
    }

    fn assign(&mut self, id: GamepadId) {
        if self.slot_of(id).is_some() {
            return;
        }
        match self.slots.iter().position(Option::is_none) {
            Some(free) => {
                self.slots[free] = Some(id);
                info!("Gamepad {} assigned to P{}", id, free + 1);
            }
            None => warn!("Gamepad {} connected but all player slots are taken", id),
        }
    }

    fn unassign(&mut self, id: GamepadId) {
        if let Some(slot) = self.slot_of(id) {
            self.slots[slot.index()] = None;
            info!("Gamepad {} released from {}", id, slot);
        }
    }

    fn read_pad(&self, gamepad: &gilrs::Gamepad<'_>) -> GamepadState {
        const BUTTONS: [(Button, GamepadButton); GamepadButton::COUNT] = [
            (Button::South, GamepadButton::A),
            (Button::East, GamepadButton::B),
            (Button::West, GamepadButton::X),
            (Button::North, GamepadButton::Y),
            (Button::Select, GamepadButton::Back),
            (Button::Start, GamepadButton::Start),
            (Button::Mode, GamepadButton::BigButton),
            (Button::LeftTrigger, GamepadButton::LeftShoulder),
            (Button::RightTrigger, GamepadButton::RightShoulder),
            (Button::LeftThumb, GamepadButton::LeftStick),
            (Button::RightThumb, GamepadButton::RightStick),
            (Button::DPadUp, GamepadButton::DPadUp),
            (Button::DPadDown, GamepadButton::DPadDown),
            (Button::DPadLeft, GamepadButton::DPadLeft),
            (Button::DPadRight, GamepadButton::DPadRight),
        ];

        let mut state = GamepadState::connected();
        for (source, button) in BUTTONS {
            state.set_button(button, gamepad.is_pressed(source));
        }

        let stick = |x: Axis, y: Axis| {
            radial_deadzone(
                Vec2::new(gamepad.value(x), gamepad.value(y)),
                self.stick_deadzone,
            )
        };
        let trigger = |button: Button| {
            let value = gamepad.button_data(button).map_or(0.0, |data| data.value());
            linear_deadzone(value, self.trigger_deadzone)
        };

        state.left_stick = stick(Axis::LeftStickX, Axis::LeftStickY);
        state.right_stick = stick(Axis::RightStickX, Axis::RightStickY);
        state.left_trigger = trigger(Button::LeftTrigger2);
        state.right_trigger = trigger(Button::RightTrigger2);
        state
    }
}

impl InputBackend for WinitBackend {
    fn begin_frame(&mut self) {
        // gilrs only refreshes its cached pad state while events are drained
        let mut changes = Vec::new();
        if let Some(gilrs) = self.gilrs.as_mut() {
            while let Some(event) = gilrs.next_event() {
                match event.event {
                    EventType::Connected => changes.push((event.id, true)),
                    EventType::Disconnected => changes.push((event.id, false)),
                    _ => {}
                }
            }
        }
        for (id, connected) in changes {
            if connected {
                self.assign(id);
            } else {
                self.unassign(id);
            }
        }
    }

    fn take_focus_lost(&mut self) -> bool {
        std::mem::take(&mut self.focus_lost)
    }

    fn poll_gamepad(&mut self, slot: PlayerSlot) -> GamepadState {
        let (Some(gilrs), Some(id)) = (self.gilrs.as_ref(), self.slots[slot.index()]) else {
            return GamepadState::default();
        };
        match gilrs.connected_gamepad(id) {
            Some(gamepad) => self.read_pad(&gamepad),
            None => GamepadState::default(),
        }
    }

    fn poll_mouse(&mut self) -> MouseState {
        self.mouse
    }

    fn poll_keyboard(&mut self) -> KeyboardState {
        self.keyboard.clone()
    }
}

/// Zero a stick inside the deadzone and rescale the rest to [0, 1] magnitude
fn radial_deadzone(stick: Vec2, deadzone: f32) -> Vec2 {
    let length = stick.length();
    if length <= deadzone || deadzone >= 1.0 {
        return Vec2::ZERO;
    }
    let scaled = ((length - deadzone) / (1.0 - deadzone)).min(1.0);
    stick / length * scaled
}

/// Zero a trigger inside the deadzone and rescale the rest to [0, 1]
fn linear_deadzone(value: f32, deadzone: f32) -> f32 {
    if value <= deadzone || deadzone >= 1.0 {
        return 0.0;
    }
    ((value - deadzone) / (1.0 - deadzone)).clamp(0.0, 1.0)
}
