// Input manager - owns every device snapshot and control table

use super::backend::InputBackend;
use super::config::{ControlBindings, ControlTable, InputSettings};
use super::control::{Control, ControlContext, Devices};
use super::device::ButtonTrigger;
use super::gamepad::{GamepadAxis, GamepadButton, Pad};
use super::keyboard::Keyboard;
use super::mouse::{Mouse, MouseButton};
use super::player::PlayerSlot;
use super::InputError;
use log::{debug, info, trace};
use winit::keyboard::KeyCode;

/// Main input manager, owned by the game loop and passed to whoever queries controls
///
/// Call `update()` exactly once per frame, before any `control_state` call for
/// that frame. Every query between two updates sees the same device state.
pub struct InputManager<B: InputBackend> {
    backend: B,
    devices: Devices,
    bindings: ControlBindings,
    settings: InputSettings,
    frame: u64,
}

impl<B: InputBackend> InputManager<B> {
    /// Create a manager with default settings
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, InputSettings::default())
    }

    /// Create a manager with explicit edge mode and deadzones
    pub fn with_settings(backend: B, settings: InputSettings) -> Self {
        Self {
            backend,
            devices: Devices::new(settings.edge_mode),
            bindings: ControlBindings::new(),
            settings,
            frame: 0,
        }
    }

    /// Poll the backend and refresh every device for a new frame
    ///
    /// Order: pads One to Four, then mouse, then keyboard.
    pub fn update(&mut self) {
        self.backend.begin_frame();
        if self.backend.take_focus_lost() {
            // Held inputs were dropped by the host; don't report them as released
            debug!("Focus lost, resetting input devices");
            self.devices.reset();
        }

        for slot in PlayerSlot::ALL {
            let state = self.backend.poll_gamepad(slot);
            let pad = &mut self.devices.pads[slot.index()];
            pad.refresh(state);

            if pad.just_connected() {
                info!("{} gamepad connected", slot);
            } else if pad.just_disconnected() {
                info!("{} gamepad disconnected", slot);
            }
        }
        self.devices.mouse.refresh(self.backend.poll_mouse());
        self.devices.keyboard.refresh(self.backend.poll_keyboard());

        self.frame += 1;
        trace!("Input frame {} refreshed", self.frame);
    }

    /// Current value of a named control for a player
    pub fn control_state(&self, player: PlayerSlot, name: &str) -> Result<f32, InputError> {
        let control = self
            .bindings
            .get(player, name)
            .ok_or_else(|| InputError::ControlNotFound {
                player,
                name: name.to_string(),
            })?;
        Ok(control.evaluate(&ControlContext::new(player, &self.devices)))
    }

    /// Bind a control for one player, replacing any previous binding of that name
    pub fn bind(&mut self, player: PlayerSlot, name: impl Into<String>, control: Control) {
        self.bindings.bind(player, name, control);
    }

    /// Bind the same control for all four players
    ///
    /// Pad controls bound with `PadRef::Own` read each player's own pad.
    pub fn bind_all(&mut self, name: impl Into<String>, control: Control) {
        self.bindings.bind_all(name, control);
    }

    /// Bind several controls for all four players
    pub fn bind_all_from<S: Into<String>>(&mut self, scheme: impl IntoIterator<Item = (S, Control)>) {
        for (name, control) in scheme {
            self.bind_all(name, control);
        }
    }

    /// Bind an arbitrary function of the device snapshots
    pub fn bind_custom<F>(&mut self, player: PlayerSlot, name: impl Into<String>, f: F)
    where
        F: Fn(&ControlContext<'_>) -> f32 + 'static,
    {
        self.bind(player, name, Control::custom(f));
    }

    /// 1.0 while the button is down on the player's own pad
    pub fn bind_button(&mut self, player: PlayerSlot, name: impl Into<String>, button: GamepadButton) {
        self.bind(player, name, Control::button(button));
    }

    /// 1.0 while the button is down on another player's pad
    pub fn bind_button_from(
        &mut self,
        player: PlayerSlot,
        name: impl Into<String>,
        pad: PlayerSlot,
        button: GamepadButton,
    ) {
        self.bind(player, name, Control::button_on(pad, button));
    }

    /// +1.0 for `high`, -1.0 for `low` on the player's own pad
    pub fn bind_button_pair(
        &mut self,
        player: PlayerSlot,
        name: impl Into<String>,
        high: GamepadButton,
        low: GamepadButton,
    ) {
        self.bind(player, name, Control::button_pair(high, low));
    }

    /// 1.0 while the key is down
    pub fn bind_key(&mut self, player: PlayerSlot, name: impl Into<String>, key: KeyCode) {
        self.bind(player, name, Control::key(key));
    }

    /// +1.0 for `high`, -1.0 for `low`, 0.0 when both or neither are down
    pub fn bind_key_pair(
        &mut self,
        player: PlayerSlot,
        name: impl Into<String>,
        high: KeyCode,
        low: KeyCode,
    ) {
        self.bind(player, name, Control::key_pair(high, low));
    }

    /// Analog axis on the player's own pad
    pub fn bind_axis(&mut self, player: PlayerSlot, name: impl Into<String>, axis: GamepadAxis) {
        self.bind(player, name, Control::axis(axis));
    }

    /// Analog axis on another player's pad
    pub fn bind_axis_from(
        &mut self,
        player: PlayerSlot,
        name: impl Into<String>,
        pad: PlayerSlot,
        axis: GamepadAxis,
    ) {
        self.bind(player, name, Control::axis_on(pad, axis));
    }

    /// 1.0 while the trigger condition holds for a mouse button
    pub fn bind_mouse(
        &mut self,
        player: PlayerSlot,
        name: impl Into<String>,
        button: MouseButton,
        trigger: ButtonTrigger,
    ) {
        self.bind(player, name, Control::mouse(button, trigger));
    }

    /// Check if a player has a control bound under a name
    pub fn is_bound(&self, player: PlayerSlot, name: &str) -> bool {
        self.bindings.table(player).is_bound(name)
    }

    /// Names bound for a player
    pub fn control_names(&self, player: PlayerSlot) -> Vec<&str> {
        self.bindings.table(player).names()
    }

    /// Control table of one player
    pub fn table(&self, player: PlayerSlot) -> &ControlTable {
        self.bindings.table(player)
    }

    /// Check if any player's control reads non-zero this frame
    /// Players without the control bound are skipped
    pub fn any_player_active(&self, name: &str) -> bool {
        !self.players_active(name).is_empty()
    }

    /// Get all players whose control reads non-zero this frame
    pub fn players_active(&self, name: &str) -> Vec<PlayerSlot> {
        PlayerSlot::ALL
            .into_iter()
            .filter(|&player| matches!(self.control_state(player, name), Ok(v) if v != 0.0))
            .collect()
    }

    /// Convert a raw player index, failing outside the four slots
    pub fn player_index(&self, index: usize) -> Result<PlayerSlot, InputError> {
        PlayerSlot::from_index(index)
    }

    /// Gamepad snapshot of one player slot
    pub fn pad(&self, slot: PlayerSlot) -> &Pad {
        self.devices.pad(slot)
    }

    pub fn mouse(&self) -> &Mouse {
        self.devices.mouse()
    }

    pub fn keyboard(&self) -> &Keyboard {
        self.devices.keyboard()
    }

    /// Mutable backend access, e.g. to forward window events
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Settings the manager was created with
    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    /// Number of `update()` calls so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Return every device to its neutral state
    /// Bindings are kept
    pub fn reset(&mut self) {
        self.devices.reset();
    }
}
