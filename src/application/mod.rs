pub mod config;
mod engine;

pub use config::Config;
pub use engine::{SimulationEngine, TickReport};
