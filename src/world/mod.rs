//! World module housing the room layout and its fixtures.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
