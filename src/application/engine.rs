use super::Config;
use crate::domain::{Area, Batch, CellStore, Coord, Fate, Pattern, Strategy, presets, rules};
use crate::error::{LifeError, Result};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Summary of one completed generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Generation the store now holds
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    /// Live cells after the commit
    pub population: usize,
}

/// SimulationEngine owns the live cells and the generation counter.
/// Each tick is computed from a stable snapshot and committed as one batch.
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    generation: u64,
    area: Area,
    store: CellStore,
}

impl SimulationEngine {
    /// Empty engine on the default 25x25 area, generation 1
    pub fn new() -> Self {
        Self::with_store(CellStore::new())
    }

    /// Engine starting from an existing set of live cells
    pub fn with_store(store: CellStore) -> Self {
        Self {
            generation: 1,
            area: Area::default(),
            store,
        }
    }

    /// Engine sized and seeded the way `config` asks
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut engine = Self::new();
        engine.set_area(config.area.width(), config.area.height())?;
        match config.random_density {
            Some(density) => {
                engine.seed_random(density, &mut rand::rng())?;
            }
            None => engine.initialize_with(&config.pattern),
        }
        Ok(engine)
    }

    /// Set the area used for seed placement and birth clipping.
    /// Call before `initialize` for it to affect the seed.
    pub fn set_area(&mut self, width: i64, height: i64) -> Result<()> {
        self.area = Area::new(width, height)?;
        Ok(())
    }

    pub const fn area(&self) -> Area {
        self.area
    }

    pub const fn width(&self) -> i64 {
        self.area.width()
    }

    pub const fn height(&self) -> i64 {
        self.area.height()
    }

    /// Seed the default pattern around the center of the area
    pub fn initialize(&mut self) {
        self.initialize_with(&presets::seed());
    }

    /// Seed `pattern` around the center of the area.
    /// Cells are committed immediately and are never clipped.
    pub fn initialize_with(&mut self, pattern: &Pattern) {
        let center = self.area.center();
        for coord in pattern.place_at(center) {
            self.store.insert(coord);
        }
        info!(
            pattern = pattern.name,
            width = self.width(),
            height = self.height(),
            population = self.store.count(),
            "initialized"
        );
    }

    /// Fill the area randomly, each cell alive with probability `density`.
    /// Returns the number of cells added.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<usize> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        let before = self.store.count();
        for coord in self.area.coords() {
            if rng.random_bool(density) {
                self.store.insert(coord);
            }
        }
        let added = self.store.count() - before;
        info!(density, added, "seeded random soup");
        Ok(added)
    }

    /// True while at least one cell is live
    pub fn is_alive(&self) -> bool {
        !self.store.is_empty()
    }

    pub const fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in unspecified order
    pub fn all(&self) -> Vec<Coord> {
        self.store.all()
    }

    pub const fn store(&self) -> &CellStore {
        &self.store
    }

    /// Advance one generation on the calling thread
    pub fn tick(&mut self) -> TickReport {
        self.step(Strategy::Serial)
    }

    /// Advance one generation, evaluating cells on the rayon pool
    pub fn tick_parallel(&mut self) -> TickReport {
        self.step(Strategy::Parallel)
    }

    /// Advance one generation with the given strategy.
    /// Every read happens before the batch is committed.
    pub fn step(&mut self, strategy: Strategy) -> TickReport {
        self.generation += 1;

        let batch = match strategy {
            Strategy::Serial => self.plan_serial(),
            Strategy::Parallel => self.plan_parallel(),
        };
        let (births, deaths) = (batch.births(), batch.deaths());
        self.store.commit(batch);

        let report = TickReport {
            generation: self.generation,
            births,
            deaths,
            population: self.store.count(),
        };
        debug!(
            generation = report.generation,
            births = report.births,
            deaths = report.deaths,
            population = report.population,
            strategy = strategy.name(),
            "tick"
        );
        if !self.is_alive() {
            info!(generation = self.generation, "all cells are dead");
        }
        report
    }

    fn plan_serial(&self) -> Batch {
        let mut batch = Batch::new();
        let mut candidates = FxHashSet::default();

        for cell in self.store.iter() {
            if Fate::of(self.live_neighbors(cell)).is_death() {
                batch.remove(cell);
            }
            candidates.extend(cell.neighbors().filter(|n| !self.store.contains(*n)));
        }

        for coord in candidates {
            if self.is_birth(coord) {
                batch.add(coord);
            }
        }
        batch
    }

    fn plan_parallel(&self) -> Batch {
        let live = self.store.as_set();

        let deaths: Vec<Coord> = live
            .par_iter()
            .copied()
            .filter(|&cell| Fate::of(self.live_neighbors(cell)).is_death())
            .collect();

        let candidates: FxHashSet<Coord> = live
            .par_iter()
            .flat_map_iter(|&cell| cell.neighbors().filter(|n| !live.contains(n)))
            .collect();

        let births: Vec<Coord> = candidates
            .par_iter()
            .copied()
            .filter(|&coord| self.is_birth(coord))
            .collect();

        let mut batch = Batch::new();
        deaths.into_iter().for_each(|c| batch.remove(c));
        births.into_iter().for_each(|c| batch.add(c));
        batch
    }

    /// Dead-at-snapshot cell with exactly 3 live neighbors, inside the area
    fn is_birth(&self, coord: Coord) -> bool {
        if !rules::is_born(self.live_neighbors(coord)) {
            return false;
        }
        if !self.area.contains(coord) {
            trace!(x = coord.x, y = coord.y, "birth outside area dropped");
            return false;
        }
        true
    }

    fn live_neighbors(&self, coord: Coord) -> u8 {
        coord.neighbors().filter(|n| self.store.contains(*n)).count() as u8
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(x: i64, y: i64) -> Coord {
        Coord::new(x, y)
    }

    fn engine_with(cells: &[(i64, i64)]) -> SimulationEngine {
        SimulationEngine::with_store(cells.iter().map(|&p| Coord::from(p)).collect())
    }

    fn sorted(mut cells: Vec<Coord>) -> Vec<Coord> {
        cells.sort();
        cells
    }

    #[test]
    fn test_initialize_default_grid() {
        let mut engine = SimulationEngine::new();
        engine.initialize();

        assert_eq!(engine.current_generation(), 1);
        assert!(engine.is_alive());
        assert_eq!(
            sorted(engine.all()),
            sorted(vec![c(12, 13), c(13, 12), c(11, 11), c(12, 11), c(13, 11)])
        );
    }

    #[test]
    fn test_from_config_uses_pattern_and_area() {
        let args = ["--width", "10", "--height", "10", "--pattern", "block"];
        let config = Config::from_args(args).unwrap();
        let engine = SimulationEngine::from_config(&config).unwrap();
        assert_eq!(engine.width(), 10);
        assert_eq!(sorted(engine.all()), vec![c(5, 5), c(5, 6), c(6, 5), c(6, 6)]);
    }

    #[test]
    fn test_set_area_moves_seed() {
        let mut engine = SimulationEngine::new();
        engine.set_area(6, 4).unwrap();
        engine.initialize();
        assert!(engine.store().contains(c(3, 3)));
        assert!(engine.store().contains(c(2, 1)));
    }

    #[test]
    fn test_set_area_rejects_non_positive() {
        let mut engine = SimulationEngine::new();
        assert!(matches!(
            engine.set_area(0, 10),
            Err(LifeError::InvalidConfiguration { width: 0, height: 10 })
        ));
        assert_eq!(engine.width(), 25);
    }

    #[test]
    fn test_tiny_area_keeps_negative_seed_cells() {
        let mut engine = SimulationEngine::new();
        engine.set_area(1, 1).unwrap();
        engine.initialize();
        assert!(engine.store().contains(c(-1, -1)));
        assert_eq!(engine.store().count(), 5);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(5, 5), (6, 5), (5, 6), (6, 6)];
        let mut engine = engine_with(&block);
        let report = engine.tick();

        assert_eq!(engine.current_generation(), 2);
        assert_eq!(report.births, 0);
        assert_eq!(report.deaths, 0);
        assert_eq!(
            sorted(engine.all()),
            sorted(block.iter().map(|&p| Coord::from(p)).collect())
        );
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = engine_with(&[(3, 3)]);
        assert!(engine.is_alive());
        let report = engine.tick();
        assert_eq!(report.deaths, 1);
        assert_eq!(report.population, 0);
        assert!(!engine.is_alive());
    }

    #[test]
    fn test_diagonal_line_collapses_to_center() {
        let mut engine = engine_with(&[(4, 4), (5, 5), (6, 6)]);
        engine.tick();
        assert_eq!(engine.all(), vec![c(5, 5)]);
        engine.tick();
        assert!(!engine.is_alive());
        assert_eq!(engine.current_generation(), 3);
    }

    #[test]
    fn test_blinker_uses_snapshot() {
        // In-place updates would let the first death starve the later births
        let mut engine = engine_with(&[(5, 5), (6, 5), (7, 5)]);
        let report = engine.tick();
        assert_eq!(sorted(engine.all()), vec![c(6, 4), c(6, 5), c(6, 6)]);
        assert_eq!((report.births, report.deaths), (2, 2));

        engine.tick();
        assert_eq!(sorted(engine.all()), vec![c(5, 5), c(6, 5), c(7, 5)]);
    }

    #[test]
    fn test_births_outside_area_are_clipped() {
        let mut engine = engine_with(&[(0, 0), (1, 0), (2, 0)]);
        engine.set_area(5, 5).unwrap();
        engine.tick();

        assert!(!engine.store().contains(c(1, -1)));
        assert_eq!(sorted(engine.all()), vec![c(1, 0), c(1, 1)]);

        engine.tick();
        assert!(!engine.is_alive());
    }

    #[test]
    fn test_seed_glider_translates() {
        let mut engine = SimulationEngine::new();
        engine.initialize();
        let start = sorted(engine.all());
        for _ in 0..4 {
            engine.tick();
        }
        let moved: Vec<_> = start.iter().map(|p| p.offset(1, -1)).collect();
        assert_eq!(sorted(engine.all()), moved);
        assert_eq!(engine.current_generation(), 5);
    }

    #[test]
    fn test_glider_preset_translates() {
        let mut engine = SimulationEngine::new();
        engine.initialize_with(&presets::glider());
        let start = sorted(engine.all());
        for _ in 0..4 {
            engine.tick();
        }
        let moved: Vec<_> = start.iter().map(|p| p.offset(1, 1)).collect();
        assert_eq!(sorted(engine.all()), moved);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = SimulationEngine::new();
        serial.set_area(40, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        serial.seed_random(0.35, &mut rng).unwrap();
        let mut parallel = serial.clone();

        for _ in 0..20 {
            let a = serial.tick();
            let b = parallel.tick_parallel();
            assert_eq!(a, b);
            assert_eq!(sorted(serial.all()), sorted(parallel.all()));
        }
    }

    #[test]
    fn test_seed_random_stays_inside_area() {
        let mut engine = SimulationEngine::new();
        engine.set_area(10, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let added = engine.seed_random(1.0, &mut rng).unwrap();
        assert_eq!(added, 80);
        assert!(engine.all().iter().all(|&p| engine.area().contains(p)));
    }

    #[test]
    fn test_seed_random_rejects_bad_density() {
        let mut engine = SimulationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            engine.seed_random(1.5, &mut rng),
            Err(LifeError::InvalidDensity(1.5))
        );
        assert!(engine.seed_random(f64::NAN, &mut rng).is_err());
    }
}
