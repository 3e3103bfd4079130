mod algorithm;
mod area;
mod cell_store;
mod coord;
mod patterns;
pub mod rules;

pub use algorithm::Strategy;
pub use area::Area;
pub use cell_store::{Batch, CellStore};
pub use coord::Coord;
pub use patterns::{Pattern, presets};
pub use rules::Fate;
