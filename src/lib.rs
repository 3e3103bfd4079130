// Domain layer - cells, storage, rules and patterns
pub mod domain;

// Application layer - the simulation engine and its configuration
pub mod application;

// Presentation layer - console frames and the window viewer
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Config, SimulationEngine, TickReport};
pub use domain::{Area, CellStore, Coord, Pattern, Strategy, presets};
pub use error::{LifeError, Result};
