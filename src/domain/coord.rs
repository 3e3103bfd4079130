/// Coord identifies a single cell on the unbounded plane.
/// Immutable once created; equality and hashing use both components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the Moore neighborhood, in the order cells are visited
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, 0),
    (1, -1),
    (1, 1),
];

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy)
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 surrounding coordinates (no wraparound)
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_eight_distinct() {
        let mut n: Vec<_> = Coord::new(0, 0).neighbors().collect();
        n.sort();
        n.dedup();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn test_neighbors_cross_negative_axis() {
        let n: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert!(n.contains(&Coord::new(-1, -1)));
        assert!(n.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_equality_uses_both_components() {
        assert_eq!(Coord::new(3, 4), Coord::from((3, 4)));
        assert_ne!(Coord::new(3, 4), Coord::new(4, 3));
    }
}
