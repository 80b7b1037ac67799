// Control sources: how a named control turns device snapshots into a value

use super::device::{ButtonTrigger, EdgeMode};
use super::gamepad::{GamepadAxis, GamepadButton, Pad};
use super::keyboard::Keyboard;
use super::mouse::{Mouse, MouseButton};
use super::player::{PlayerSlot, MAX_PLAYERS};
use std::fmt;
use std::rc::Rc;
use winit::keyboard::KeyCode;

/// Every device snapshot the manager owns
#[derive(Debug, Clone)]
pub struct Devices {
    pub(crate) pads: [Pad; MAX_PLAYERS],
    pub(crate) mouse: Mouse,
    pub(crate) keyboard: Keyboard,
}

impl Devices {
    pub fn new(edge_mode: EdgeMode) -> Self {
        Self {
            pads: std::array::from_fn(|_| Pad::new(edge_mode)),
            mouse: Mouse::new(edge_mode),
            keyboard: Keyboard::new(edge_mode),
        }
    }

    pub fn pad(&self, slot: PlayerSlot) -> &Pad {
        &self.pads[slot.index()]
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub(crate) fn reset(&mut self) {
        for pad in &mut self.pads {
            pad.reset();
        }
        self.mouse.reset();
        self.keyboard.reset();
    }
}

/// What a control sees when it is evaluated
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    player: PlayerSlot,
    devices: &'a Devices,
}

impl<'a> ControlContext<'a> {
    pub fn new(player: PlayerSlot, devices: &'a Devices) -> Self {
        Self { player, devices }
    }

    /// The player whose table the control is bound in
    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    /// The owning player's gamepad
    pub fn pad(&self) -> &'a Pad {
        self.devices.pad(self.player)
    }

    /// Another player's gamepad
    pub fn pad_of(&self, slot: PlayerSlot) -> &'a Pad {
        self.devices.pad(slot)
    }

    pub fn mouse(&self) -> &'a Mouse {
        self.devices.mouse()
    }

    pub fn keyboard(&self) -> &'a Keyboard {
        self.devices.keyboard()
    }

    fn resolve(&self, pad: PadRef) -> &'a Pad {
        match pad {
            PadRef::Own => self.pad(),
            PadRef::Slot(slot) => self.pad_of(slot),
        }
    }
}

/// Which gamepad a control reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PadRef {
    /// The pad of whichever player the control is bound for
    #[default]
    Own,
    Slot(PlayerSlot),
}

/// Signature of a custom control
pub type ControlFn = dyn Fn(&ControlContext<'_>) -> f32;

/// Shared custom control function
#[derive(Clone)]
pub struct CustomControl(Rc<ControlFn>);

impl CustomControl {
    pub fn evaluate(&self, ctx: &ControlContext<'_>) -> f32 {
        (self.0)(ctx)
    }
}

impl fmt::Debug for CustomControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("..")
    }
}

/// A source for a named control
///
/// Controls never cache device values; every evaluation re-reads the
/// snapshots, so a control always reflects the latest refresh.
#[derive(Debug, Clone)]
pub enum Control {
    /// 1.0 while the button is down on a connected pad
    GamepadButton { pad: PadRef, button: GamepadButton },

    /// +1.0 for `high`, -1.0 for `low`, summed
    GamepadButtonPair {
        pad: PadRef,
        high: GamepadButton,
        low: GamepadButton,
    },

    /// 1.0 while the trigger condition holds on the pad
    GamepadButtonEdge {
        pad: PadRef,
        button: GamepadButton,
        trigger: ButtonTrigger,
    },

    /// Raw analog value of a stick axis or trigger
    GamepadAxis { pad: PadRef, axis: GamepadAxis },

    Key(KeyCode),

    KeyPair { high: KeyCode, low: KeyCode },

    KeyEdge { key: KeyCode, trigger: ButtonTrigger },

    MouseButton {
        button: MouseButton,
        trigger: ButtonTrigger,
    },

    Custom(CustomControl),
}

impl Control {
    pub fn button(button: GamepadButton) -> Self {
        Self::GamepadButton {
            pad: PadRef::Own,
            button,
        }
    }

    pub fn button_on(pad: PlayerSlot, button: GamepadButton) -> Self {
        Self::GamepadButton {
            pad: PadRef::Slot(pad),
            button,
        }
    }

    pub fn button_pair(high: GamepadButton, low: GamepadButton) -> Self {
        Self::GamepadButtonPair {
            pad: PadRef::Own,
            high,
            low,
        }
    }

    pub fn axis(axis: GamepadAxis) -> Self {
        Self::GamepadAxis {
            pad: PadRef::Own,
            axis,
        }
    }

    pub fn axis_on(pad: PlayerSlot, axis: GamepadAxis) -> Self {
        Self::GamepadAxis {
            pad: PadRef::Slot(pad),
            axis,
        }
    }

    pub fn key(key: KeyCode) -> Self {
        Self::Key(key)
    }

    pub fn key_pair(high: KeyCode, low: KeyCode) -> Self {
        Self::KeyPair { high, low }
    }

    pub fn mouse(button: MouseButton, trigger: ButtonTrigger) -> Self {
        Self::MouseButton { button, trigger }
    }

    /// Mouse button pressed this frame only
    pub fn click(button: MouseButton) -> Self {
        Self::mouse(button, ButtonTrigger::Pressed)
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&ControlContext<'_>) -> f32 + 'static,
    {
        Self::Custom(CustomControl(Rc::new(f)))
    }

    /// Evaluate the control for the given context
    pub fn evaluate(&self, ctx: &ControlContext<'_>) -> f32 {
        match self {
            Control::GamepadButton { pad, button } => flag(ctx.resolve(*pad).is_down(*button)),
            Control::GamepadButtonPair { pad, high, low } => {
                let pad = ctx.resolve(*pad);
                pair(pad.is_down(*high), pad.is_down(*low))
            }
            Control::GamepadButtonEdge {
                pad,
                button,
                trigger,
            } => {
                let pad = ctx.resolve(*pad);
                // A disconnected pad reports every button up; keep it silent
                flag(pad.is_connected() && pad.triggered(*button, *trigger))
            }
            Control::GamepadAxis { pad, axis } => ctx.resolve(*pad).axis(*axis),
            Control::Key(key) => flag(ctx.keyboard().is_down(*key)),
            Control::KeyPair { high, low } => {
                let keyboard = ctx.keyboard();
                pair(keyboard.is_down(*high), keyboard.is_down(*low))
            }
            Control::KeyEdge { key, trigger } => flag(ctx.keyboard().triggered(*key, *trigger)),
            Control::MouseButton { button, trigger } => {
                flag(ctx.mouse().triggered(*button, *trigger))
            }
            Control::Custom(custom) => custom.evaluate(ctx),
        }
    }
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

fn pair(high: bool, low: bool) -> f32 {
    flag(high) - flag(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::gamepad::GamepadState;
    use crate::engine::input::keyboard::KeyboardState;
    use crate::engine::input::mouse::MouseState;
    use approx::assert_relative_eq;

    fn devices() -> Devices {
        Devices::new(EdgeMode::Transition)
    }

    fn eval(control: &Control, player: PlayerSlot, devices: &Devices) -> f32 {
        control.evaluate(&ControlContext::new(player, devices))
    }

    #[test]
    fn test_button_reads_own_pad() {
        let mut devices = devices();
        devices.pads[1].refresh(GamepadState::connected().with_button(GamepadButton::A));

        let jump = Control::button(GamepadButton::A);
        assert_eq!(eval(&jump, PlayerSlot::One, &devices), 0.0);
        assert_eq!(eval(&jump, PlayerSlot::Two, &devices), 1.0);
    }

    #[test]
    fn test_button_on_other_pad() {
        let mut devices = devices();
        devices.pads[0].refresh(GamepadState::connected().with_button(GamepadButton::B));

        let borrowed = Control::button_on(PlayerSlot::One, GamepadButton::B);
        assert_eq!(eval(&borrowed, PlayerSlot::Three, &devices), 1.0);
    }

    #[test]
    fn test_button_pair_values() {
        let mut devices = devices();
        let pair = Control::button_pair(GamepadButton::DPadUp, GamepadButton::DPadDown);

        let cases = [
            (vec![], 0.0),
            (vec![GamepadButton::DPadUp], 1.0),
            (vec![GamepadButton::DPadDown], -1.0),
            (vec![GamepadButton::DPadUp, GamepadButton::DPadDown], 0.0),
        ];
        for (buttons, expected) in cases {
            let state = buttons
                .into_iter()
                .fold(GamepadState::connected(), GamepadState::with_button);
            devices.pads[0].refresh(state);
            assert_eq!(eval(&pair, PlayerSlot::One, &devices), expected);
        }
    }

    #[test]
    fn test_disconnected_pad_is_silent() {
        let mut devices = devices();
        let mut state = GamepadState::default()
            .with_button(GamepadButton::A)
            .with_button(GamepadButton::DPadUp)
            .with_left_stick(1.0, 1.0);
        state.connected = false;
        devices.pads[0].refresh(state);
        devices.pads[0].refresh(state);

        let controls = [
            Control::button(GamepadButton::A),
            Control::button_pair(GamepadButton::DPadUp, GamepadButton::DPadDown),
            Control::button_pair(GamepadButton::DPadDown, GamepadButton::DPadUp),
            Control::axis(GamepadAxis::LeftStickX),
            Control::GamepadButtonEdge {
                pad: PadRef::Own,
                button: GamepadButton::A,
                trigger: ButtonTrigger::Up,
            },
        ];
        for control in &controls {
            assert_eq!(eval(control, PlayerSlot::One, &devices), 0.0, "{control:?}");
        }
    }

    #[test]
    fn test_axis_reads_current_value() {
        let mut devices = devices();
        devices.pads[2].refresh(GamepadState::connected().with_triggers(0.0, 0.6));

        let throttle = Control::axis(GamepadAxis::RightTrigger);
        assert_relative_eq!(eval(&throttle, PlayerSlot::Three, &devices), 0.6);

        devices.pads[2].refresh(GamepadState::connected().with_triggers(0.0, 0.2));
        assert_relative_eq!(eval(&throttle, PlayerSlot::Three, &devices), 0.2);
    }

    #[test]
    fn test_key_pair_cancels() {
        let mut devices = devices();
        let steer = Control::key_pair(KeyCode::ArrowRight, KeyCode::ArrowLeft);

        devices
            .keyboard
            .refresh(KeyboardState::from_keys([KeyCode::ArrowLeft]));
        assert_eq!(eval(&steer, PlayerSlot::Four, &devices), -1.0);

        devices.keyboard.refresh(KeyboardState::from_keys([
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        ]));
        assert_eq!(eval(&steer, PlayerSlot::Four, &devices), 0.0);
    }

    #[test]
    fn test_key_and_key_edge() {
        let mut devices = devices();
        let fire = Control::key(KeyCode::Space);
        let tap = Control::KeyEdge {
            key: KeyCode::Space,
            trigger: ButtonTrigger::Pressed,
        };

        devices
            .keyboard
            .refresh(KeyboardState::from_keys([KeyCode::Space]));
        assert_eq!(eval(&fire, PlayerSlot::One, &devices), 1.0);
        assert_eq!(eval(&tap, PlayerSlot::One, &devices), 1.0);

        devices
            .keyboard
            .refresh(KeyboardState::from_keys([KeyCode::Space]));
        assert_eq!(eval(&fire, PlayerSlot::One, &devices), 1.0);
        assert_eq!(eval(&tap, PlayerSlot::One, &devices), 0.0);
    }

    #[test]
    fn test_mouse_release() {
        let mut devices = devices();
        let release = Control::mouse(MouseButton::Middle, ButtonTrigger::Released);

        devices
            .mouse
            .refresh(MouseState::default().with_button(MouseButton::Middle));
        assert_eq!(eval(&release, PlayerSlot::One, &devices), 0.0);

        devices.mouse.refresh(MouseState::default());
        assert_eq!(eval(&release, PlayerSlot::One, &devices), 1.0);
    }

    #[test]
    fn test_custom_sees_context() {
        let mut devices = devices();
        devices.pads[3].refresh(GamepadState::connected().with_left_stick(0.5, 0.0));
        devices
            .mouse
            .refresh(MouseState::default().with_scroll(2.0));

        let custom = Control::custom(|ctx| ctx.pad().left_stick().x + ctx.mouse().scroll_wheel_value());
        assert_relative_eq!(eval(&custom, PlayerSlot::Four, &devices), 2.5);
        assert_relative_eq!(eval(&custom, PlayerSlot::One, &devices), 2.0);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Control::key(KeyCode::KeyA)), "Key(KeyA)");
        assert_eq!(format!("{:?}", Control::custom(|_| 0.0)), "Custom(..)");
    }
}
