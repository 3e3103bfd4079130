use super::Coord;
use crate::error::{LifeError, Result};

/// Rectangle that newly born cells are clipped to.
/// Storage itself is unbounded; this only governs placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Area {
    width: i64,
    height: i64,
}

impl Area {
    pub const DEFAULT_WIDTH: i64 = 25;
    pub const DEFAULT_HEIGHT: i64 = 25;

    /// Create an area; both dimensions must be positive
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidConfiguration { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> i64 {
        self.width
    }

    pub const fn height(&self) -> i64 {
        self.height
    }

    /// True iff 0 <= x < width and 0 <= y < height
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// (floor(width / 2), floor(height / 2))
    pub const fn center(&self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    /// Every coordinate inside the area, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }
}

impl Default for Area {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_25_by_25() {
        let area = Area::default();
        assert_eq!((area.width(), area.height()), (25, 25));
        assert_eq!(area.center(), Coord::new(12, 12));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Area::new(0, 5),
            Err(LifeError::InvalidConfiguration { width: 0, height: 5 })
        );
        assert!(Area::new(5, -1).is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let area = Area::new(5, 3).unwrap();
        assert!(area.contains(Coord::new(0, 0)));
        assert!(area.contains(Coord::new(4, 2)));
        assert!(!area.contains(Coord::new(5, 0)));
        assert!(!area.contains(Coord::new(0, 3)));
        assert!(!area.contains(Coord::new(-1, 1)));
    }

    #[test]
    fn test_coords_covers_area() {
        let area = Area::new(4, 3).unwrap();
        assert_eq!(area.coords().count(), 12);
    }
}
