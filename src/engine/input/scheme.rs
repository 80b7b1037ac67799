// Starter control schemes

use super::control::Control;
use super::gamepad::{GamepadAxis, GamepadButton};
use super::mouse::MouseButton;
use winit::keyboard::KeyCode;

/// Default controls for local multiplayer, meant to be installed with `bind_all`
///
/// Pad controls read each player's own pad. Keyboard and mouse are shared, so
/// every player also answers to them.
pub fn default_scheme() -> Vec<(&'static str, Control)> {
    vec![
        // Movement
        ("MoveX", Control::axis(GamepadAxis::LeftStickX)),
        ("MoveY", Control::axis(GamepadAxis::LeftStickY)),
        (
            "Move",
            Control::key_pair(KeyCode::ArrowRight, KeyCode::ArrowLeft),
        ),
        (
            "Climb",
            Control::button_pair(GamepadButton::DPadUp, GamepadButton::DPadDown),
        ),
        ("Jump", Control::button(GamepadButton::A)),
        // Combat
        ("Fire", Control::click(MouseButton::Left)),
        ("Throttle", Control::axis(GamepadAxis::RightTrigger)),
        // Meta
        ("Pause", Control::key(KeyCode::Escape)),
    ]
}

/// Keyboard-only fallback for a player without a pad
pub fn keyboard_scheme() -> Vec<(&'static str, Control)> {
    vec![
        ("MoveX", Control::key_pair(KeyCode::KeyD, KeyCode::KeyA)),
        ("MoveY", Control::key_pair(KeyCode::KeyW, KeyCode::KeyS)),
        ("Jump", Control::key(KeyCode::Space)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_scheme_names_unique() {
        let scheme = default_scheme();
        let mut seen = HashSet::new();
        for (name, _) in &scheme {
            assert!(seen.insert(*name), "Duplicate control name {name}");
        }
    }

    #[test]
    fn test_default_scheme_uses_own_pad() {
        for (name, control) in default_scheme() {
            if let Control::GamepadButton { pad, .. }
            | Control::GamepadButtonPair { pad, .. }
            | Control::GamepadAxis { pad, .. } = control
            {
                assert_eq!(pad, crate::engine::input::control::PadRef::Own, "{name}");
            }
        }
    }

    #[test]
    fn test_keyboard_scheme_overrides_movement() {
        let defaults: HashSet<_> = default_scheme().into_iter().map(|(n, _)| n).collect();
        for (name, _) in keyboard_scheme() {
            assert!(defaults.contains(name));
        }
    }
}
