mod config;
mod simulation;

pub use config::{Cli, ConfigError, Seeding, SimulationConfig};
pub use simulation::{GenerationStats, Simulation};
