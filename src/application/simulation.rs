use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::application::{Seeding, SimulationConfig};
use crate::domain::{
    Algorithm, CellStore, Tag, commit_system, has_alive_cells, lifecycle_system, populate,
};

/// What one generation step changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: u64,
    pub born: usize,
    pub died: usize,
    pub population: usize,
}

/// Simulation orchestrates the per-generation pipeline.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub store: CellStore,
    pub width: usize,
    pub height: usize,
    pub algorithm: Algorithm,
    pub generation: u64,
    pub max_rounds: Option<u64>,
    pub is_paused: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Wrap an already populated store
    pub fn new(store: CellStore, width: usize, height: usize) -> Self {
        Self {
            store,
            width,
            height,
            algorithm: Algorithm::default(),
            generation: 0,
            max_rounds: None,
            is_paused: false,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        }
    }

    /// Build and seed the arena described by `config`
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut store = CellStore::with_capacity(config.cell_count());
        let alive = match config.seeding {
            Seeding::Random { count, seed: Some(seed) } => populate(
                &mut store,
                config.width,
                config.height,
                count,
                &mut StdRng::seed_from_u64(seed),
            ),
            Seeding::Random { count, seed: None } => populate(
                &mut store,
                config.width,
                config.height,
                count,
                &mut rand::rng(),
            ),
            Seeding::Pattern(pattern) => {
                populate(&mut store, config.width, config.height, 0, &mut rand::rng());
                tracing::info!(pattern = pattern.name, "{}", pattern.description);
                pattern.place_centred(&mut store, config.width, config.height)
            }
        };
        tracing::info!(
            width = config.width,
            height = config.height,
            alive,
            algorithm = %config.algorithm,
            strategy = config.algorithm.description(),
            "arena initialised"
        );

        Self {
            algorithm: config.algorithm,
            max_rounds: config.max_rounds,
            updates_per_second: config.updates_per_second,
            ..Self::new(store, config.width, config.height)
        }
    }

    /// Set the counting strategy (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set a round limit (builder pattern)
    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_paused(mut self) -> Self {
        self.is_paused = !self.is_paused;
        self
    }

    pub fn population(&self) -> usize {
        self.store.count_with(&[Tag::Alive])
    }

    /// No cells left, or the round limit has been reached
    pub fn is_finished(&self) -> bool {
        !has_alive_cells(&self.store) || self.max_rounds.is_some_and(|max| self.generation >= max)
    }

    /// Advance exactly one generation: evaluate, then commit
    pub fn step(&mut self) -> GenerationStats {
        let start = std::time::Instant::now();

        lifecycle_system(&mut self.store, self.algorithm);
        let commit = commit_system(&mut self.store);
        self.generation += 1;

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        let stats = GenerationStats {
            generation: self.generation,
            born: commit.born,
            died: commit.died,
            population: commit.population,
        };
        tracing::debug!(
            generation = stats.generation,
            born = stats.born,
            died = stats.died,
            population = stats.population,
            elapsed_ms = self.last_step_time_ms,
            "generation committed"
        );
        stats
    }

    /// Update simulation by one frame.
    /// Steps once the update interval has elapsed, unless paused or finished.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_paused || self.is_finished() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}
