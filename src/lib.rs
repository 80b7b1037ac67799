// Per-player named controls over gamepad, keyboard and mouse snapshots

pub mod engine;

pub use engine::input::*;
