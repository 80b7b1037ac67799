// Player slot identities

use super::InputError;
use std::fmt;

/// Number of fixed player slots
pub const MAX_PLAYERS: usize = 4;

/// One of the four fixed player identities.
/// Selects both the player's gamepad and their control table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSlot {
    One,
    Two,
    Three,
    Four,
}

impl PlayerSlot {
    /// All slots, in refresh order
    pub const ALL: [PlayerSlot; MAX_PLAYERS] = [
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::Three,
        PlayerSlot::Four,
    ];

    /// Zero-based index of this slot
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
            PlayerSlot::Three => 2,
            PlayerSlot::Four => 3,
        }
    }

    /// Look up a slot from a zero-based index
    pub fn from_index(index: usize) -> Result<Self, InputError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InputError::UnknownPlayer(index))
    }
}

impl TryFrom<usize> for PlayerSlot {
    type Error = InputError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}
