//! Player character: hunger and sleepiness decay, timed eat/sleep actions,
//! dancing, death, and the movement glue around them.

pub mod components;
pub mod config;
pub mod errors;
pub mod events;
pub mod plugin;
pub mod state;
pub mod systems;

pub use plugin::CharacterPlugin;
