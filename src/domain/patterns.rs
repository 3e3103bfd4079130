use super::Coord;

/// A pattern is a set of offsets placed relative to an anchor cell
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, offsets: Vec<(i64, i64)>) -> Self {
        Self { name, description, offsets }
    }

    /// Absolute coordinates of the pattern anchored at `anchor`
    pub fn place_at(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.offsets.iter().map(move |&(dx, dy)| anchor.offset(dx, dy))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}

/// Patterns available to the drivers, offsets are y-up
pub mod presets {
    use super::*;

    /// Default seed: a glider heading toward +x, -y
    pub fn seed() -> Pattern {
        Pattern::new(
            "seed",
            "Glider placed at the center (default)",
            vec![
                (0, 1),
                (1, 0),
                (-1, -1), (0, -1), (1, -1),
            ],
        )
    }

    /// Glider - mirror of the seed, heading toward +x, +y
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4)",
            vec![
                (-1, 1), (0, 1), (1, 1),
                (1, 0),
                (0, -1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(-1, 0), (0, 0), (1, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
                (-1, 0), (0, 0), (1, 0),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah, outgrows small areas",
            vec![
                (0, 1), (1, 1),
                (-1, 0), (0, 0),
                (0, -1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![seed(), glider(), block(), blinker(), toad(), r_pentomino()]
    }

    /// Look a preset up by its name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name == name)
    }
}
