//! Core simulation timing shared by every other plugin.
pub mod plugin;

pub use plugin::{CorePlugin, SimulationClock};
