mod position;
mod neighbors;
mod cell;
mod store;
mod algorithm;
mod lifecycle;
mod commit;
mod initializer;
mod patterns;

pub use position::Position;
pub use neighbors::{is_neighbor, possible_neighbors};
pub use cell::Cell;
pub use store::{CellStore, Entity, Tag};
pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use lifecycle::{Snapshot, lifecycle_system};
pub use commit::{CommitStats, commit_system, has_alive_cells};
pub use initializer::{mark_alive, populate, populate_grid};
pub use patterns::{Pattern, presets};
