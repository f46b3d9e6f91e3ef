//! Command-line surface and validated run configuration.

use clap::Parser;
use thiserror::Error;

use crate::domain::{Algorithm, Pattern, presets};

/// Conway's Game of Life on an entity/tag store
#[derive(Parser, Debug, Clone)]
#[command(name = "ecs_life", version, about)]
pub struct Cli {
    /// X dimension of the arena
    #[arg(short = 'x', long = "width", default_value_t = 50)]
    pub width: usize,

    /// Y dimension of the arena
    #[arg(short = 'y', long = "height", default_value_t = 50)]
    pub height: usize,

    /// Pixels per cell
    #[arg(short, long, default_value_t = 10)]
    pub scale: u32,

    /// Number of cells alive at the start (clamped to the arena size)
    #[arg(short, long, default_value_t = 1500)]
    pub initial: usize,

    /// Stop after this many generations
    #[arg(short = 'r', long)]
    pub max_rounds: Option<u64>,

    /// Generations per second
    #[arg(long, default_value_t = 10.0)]
    pub rate: f32,

    /// Neighbour counting strategy: naive, lookup or parallel
    #[arg(long, default_value_t = Algorithm::default())]
    pub algorithm: Algorithm,

    /// Seed with a named pattern instead of random cells
    #[arg(long)]
    pub pattern: Option<String>,

    /// RNG seed for a reproducible initial population
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive, got {width}x{height}")]
    EmptyArena { width: usize, height: usize },

    #[error("arena {width}x{height} does not fit in i32 coordinates")]
    ArenaTooLarge { width: usize, height: usize },

    #[error("scale must be positive")]
    ZeroScale,

    #[error("window for {width}x{height} cells at scale {scale} exceeds i32 pixels")]
    WindowTooLarge { width: usize, height: usize, scale: u32 },

    #[error("rate must be a positive number of generations per second, got {0}")]
    InvalidRate(f32),

    #[error("unknown pattern `{name}` (available: {available})")]
    UnknownPattern { name: String, available: String },
}

/// How the arena is seeded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seeding {
    /// `count` cells picked at random; `seed` fixes the RNG when given
    Random { count: usize, seed: Option<u64> },
    /// A preset placed in the middle of an otherwise dead arena
    Pattern(Pattern),
}

/// Validated parameters for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub max_rounds: Option<u64>,
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
    pub seeding: Seeding,
}

impl SimulationConfig {
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Window size in pixels; `try_from` guarantees it fits in i32
    pub fn window_size(&self) -> (i32, i32) {
        let scale = self.scale as i32;
        (self.width as i32 * scale, self.height as i32 * scale)
    }
}

impl TryFrom<Cli> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let (width, height) = (cli.width, cli.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyArena { width, height });
        }
        let too_large = i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
            || width.checked_mul(height).is_none_or(|cells| i32::try_from(cells).is_err());
        if too_large {
            return Err(ConfigError::ArenaTooLarge { width, height });
        }
        if cli.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        let pixels = |cells: usize| {
            i32::try_from(cli.scale)
                .ok()
                .and_then(|scale| (cells as i32).checked_mul(scale))
        };
        if pixels(width).is_none() || pixels(height).is_none() {
            return Err(ConfigError::WindowTooLarge { width, height, scale: cli.scale });
        }
        if !(cli.rate.is_finite() && cli.rate > 0.0) {
            return Err(ConfigError::InvalidRate(cli.rate));
        }

        let seeding = match cli.pattern {
            Some(name) => match presets::find(&name) {
                Some(pattern) => Seeding::Pattern(pattern),
                None => {
                    return Err(ConfigError::UnknownPattern {
                        name,
                        available: presets::names().join(", "),
                    });
                }
            },
            None => {
                let cells = width * height;
                if cli.initial > cells {
                    tracing::warn!(
                        requested = cli.initial,
                        cells,
                        "initial population exceeds arena, clamping"
                    );
                }
                Seeding::Random {
                    count: cli.initial.min(cells),
                    seed: cli.seed,
                }
            }
        };

        Ok(Self {
            width,
            height,
            scale: cli.scale,
            max_rounds: cli.max_rounds,
            updates_per_second: cli.rate,
            algorithm: cli.algorithm,
            seeding,
        })
    }
}
