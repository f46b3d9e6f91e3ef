// Domain layer - Cell store and the generation pipeline
pub mod domain;

// Application layer - Configuration and simulation coordination
pub mod application;

// Infrastructure layer - Window rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, CellStore, Entity, Position, Tag};
pub use application::{Cli, SimulationConfig, Simulation};
