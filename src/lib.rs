pub mod core;
pub mod hint;
pub mod sim;

// Re-export for convenience
pub use crate::core::board::{Board, Control, Host, TextChannel};
pub use crate::core::config::GameConfig;
pub use crate::core::controller::{Controller, Phase, Snapshot, Transition, Trigger};
pub use crate::core::engine::Engine;
pub use crate::core::slot::{Level, Slot};
