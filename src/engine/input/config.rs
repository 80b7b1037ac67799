// Control binding tables and input settings

use super::control::Control;
use super::device::EdgeMode;
use super::player::{PlayerSlot, MAX_PLAYERS};
use std::collections::HashMap;

/// Tunables for the input system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    /// Edge detection semantics used by every device
    pub edge_mode: EdgeMode,

    /// Stick magnitude below which the live backend reports zero
    pub stick_deadzone: f32,

    /// Trigger value below which the live backend reports zero
    pub trigger_deadzone: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            edge_mode: EdgeMode::Transition,
            stick_deadzone: 0.1,
            trigger_deadzone: 0.05,
        }
    }
}

/// Named controls for a single player
#[derive(Debug, Clone)]
pub struct ControlTable {
    /// Player this table belongs to
    player: PlayerSlot,

    /// Mapping from control names to sources
    controls: HashMap<String, Control>,
}

impl ControlTable {
    /// Create an empty table
    pub fn new(player: PlayerSlot) -> Self {
        Self {
            player,
            controls: HashMap::new(),
        }
    }

    /// Create a table from a list of bindings
    pub fn from_bindings<S: Into<String>>(
        player: PlayerSlot,
        bindings: impl IntoIterator<Item = (S, Control)>,
    ) -> Self {
        let mut table = Self::new(player);
        for (name, control) in bindings {
            table.bind(name, control);
        }
        table
    }

    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    /// Bind a control to a name, replacing any previous binding
    /// Returns true if an existing binding was replaced
    pub fn bind(&mut self, name: impl Into<String>, control: Control) -> bool {
        let name = name.into();
        log::debug!("{} bind {:?} -> {:?}", self.player, name, control);
        self.controls.insert(name, control).is_some()
    }

    /// Get the control bound to a name
    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    /// Check if a name has a binding
    pub fn is_bound(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    /// Get all bound names
    pub fn names(&self) -> Vec<&str> {
        self.controls.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Control tables for all player slots
#[derive(Debug, Clone)]
pub struct ControlBindings {
    tables: [ControlTable; MAX_PLAYERS],
}

impl ControlBindings {
    /// Create empty tables for every slot
    pub fn new() -> Self {
        Self {
            tables: PlayerSlot::ALL.map(ControlTable::new),
        }
    }

    pub fn table(&self, player: PlayerSlot) -> &ControlTable {
        &self.tables[player.index()]
    }

    pub fn table_mut(&mut self, player: PlayerSlot) -> &mut ControlTable {
        &mut self.tables[player.index()]
    }

    /// Bind a control for one player
    pub fn bind(&mut self, player: PlayerSlot, name: impl Into<String>, control: Control) -> bool {
        self.table_mut(player).bind(name, control)
    }

    /// Bind the same control for every player
    pub fn bind_all(&mut self, name: impl Into<String>, control: Control) {
        let name = name.into();
        for table in &mut self.tables {
            table.bind(name.clone(), control.clone());
        }
    }

    pub fn get(&self, player: PlayerSlot, name: &str) -> Option<&Control> {
        self.table(player).get(name)
    }
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self::new()
    }
}
