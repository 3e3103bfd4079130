//! Conway's B3/S23 transition, split into the two questions the sparse
//! tick asks: does a live cell die, and is a dead cell born.

/// Outcome for a cell that is live at snapshot time
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    Survives,
    /// Fewer than 2 live neighbors
    Underpopulated,
    /// More than 3 live neighbors
    Overpopulated,
}

impl Fate {
    /// Classify a live cell by its live-neighbor count
    pub const fn of(neighbors: u8) -> Self {
        match neighbors {
            0 | 1 => Fate::Underpopulated,
            2 | 3 => Fate::Survives,
            _ => Fate::Overpopulated,
        }
    }

    pub const fn is_death(self) -> bool {
        !matches!(self, Fate::Survives)
    }
}

/// Dead cell with exactly 3 neighbors becomes alive
pub const fn is_born(neighbors: u8) -> bool {
    neighbors == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Fate::of(0), Fate::Underpopulated);
        assert_eq!(Fate::of(1), Fate::Underpopulated);
        assert!(Fate::of(1).is_death());
    }

    #[test]
    fn test_survival() {
        assert_eq!(Fate::of(2), Fate::Survives);
        assert!(!Fate::of(3).is_death());
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Fate::of(4), Fate::Overpopulated);
        assert_eq!(Fate::of(8), Fate::Overpopulated);
        assert!(Fate::of(4).is_death());
    }

    #[test]
    fn test_reproduction() {
        assert!(is_born(3));
        assert!(!is_born(2));
        assert!(!is_born(6));
    }
}
