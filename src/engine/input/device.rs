// Double-buffered device snapshots and edge detection

/// How `just_pressed` / `just_released` compare the two frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Fires only on the frame the button changed state
    #[default]
    Transition,

    /// Fires while the button has been in the target state for two frames.
    /// Kept for ports of older control schemes that depended on it.
    Legacy,
}

/// Which aspect of a digital input a control reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonTrigger {
    Down,
    Up,
    Pressed,
    Released,
}

/// Raw device state that can report a digital input as down
pub trait DigitalState {
    type Id: Copy;

    fn is_down(&self, id: Self::Id) -> bool;
}

/// Current and previous frame state for one device
///
/// `previous` always holds what `current` held one refresh ago. Before the
/// first refresh both halves are the neutral default state.
#[derive(Debug, Clone, Default)]
pub struct DeviceSnapshot<S> {
    current: S,
    previous: S,
    edge_mode: EdgeMode,
}

impl<S: Default> DeviceSnapshot<S> {
    /// Create a neutral snapshot
    pub fn new(edge_mode: EdgeMode) -> Self {
        Self {
            current: S::default(),
            previous: S::default(),
            edge_mode,
        }
    }

    /// Shift the current state into the previous slot and store `next`
    /// Call this exactly once per frame, before any queries
    pub fn refresh(&mut self, next: S) {
        self.previous = std::mem::replace(&mut self.current, next);
    }

    /// Return both frames to the neutral state
    pub fn reset(&mut self) {
        self.current = S::default();
        self.previous = S::default();
    }

    /// State polled this frame
    pub fn current(&self) -> &S {
        &self.current
    }

    /// State polled last frame
    pub fn previous(&self) -> &S {
        &self.previous
    }
}

impl<S: DigitalState> DeviceSnapshot<S> {
    /// Check if an input is down this frame
    pub fn is_down(&self, id: S::Id) -> bool {
        self.current.is_down(id)
    }

    /// Check if an input is up this frame
    pub fn is_up(&self, id: S::Id) -> bool {
        !self.current.is_down(id)
    }

    /// Check if an input was down on both this frame and the last
    pub fn is_held(&self, id: S::Id) -> bool {
        self.current.is_down(id) && self.previous.is_down(id)
    }

    /// Check if an input was just pressed, according to the edge mode
    pub fn just_pressed(&self, id: S::Id) -> bool {
        let now = self.current.is_down(id);
        let before = self.previous.is_down(id);
        match self.edge_mode {
            EdgeMode::Transition => now && !before,
            EdgeMode::Legacy => now && before,
        }
    }

    /// Check if an input was just released, according to the edge mode
    pub fn just_released(&self, id: S::Id) -> bool {
        let now = self.current.is_down(id);
        let before = self.previous.is_down(id);
        match self.edge_mode {
            EdgeMode::Transition => !now && before,
            EdgeMode::Legacy => !now && !before,
        }
    }

    /// Evaluate a trigger against this snapshot
    pub fn triggered(&self, id: S::Id, trigger: ButtonTrigger) -> bool {
        match trigger {
            ButtonTrigger::Down => self.is_down(id),
            ButtonTrigger::Up => self.is_up(id),
            ButtonTrigger::Pressed => self.just_pressed(id),
            ButtonTrigger::Released => self.just_released(id),
        }
    }
}
