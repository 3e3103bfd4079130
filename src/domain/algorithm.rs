//! Strategy enum for selecting how a generation is evaluated.
//!
//! Both strategies read the same snapshot and commit the same batch;
//! they differ only in whether the evaluation is spread across threads.

/// Available tick strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single thread, one pass over the live set
    #[default]
    Serial,
    /// Neighbor counting spread across the rayon pool
    Parallel,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel]
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Serial => "Hash set snapshot, serial scan",
            Strategy::Parallel => "Hash set snapshot, rayon scan",
        }
    }
}
