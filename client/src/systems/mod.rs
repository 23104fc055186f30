//! Client-side game systems
//!
//! Organized into submodules for maintainability.

mod character;
mod rendering;
mod settings;
mod world;

// Re-export everything for easy access from main.rs
pub use character::*;
pub use rendering::*;
pub use settings::*;
pub use world::*;
