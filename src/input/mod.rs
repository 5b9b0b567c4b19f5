//! Input driver: keyboard and gamepad mapping plus pause control.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::InputPlugin;
