//! Arena population: one entity per grid coordinate, a random subset alive.

use rand::Rng;
use rand::seq::index;

use super::{CellStore, Entity, Position, Tag};

/// Create one dead cell per coordinate of a `width × height` arena, row-major.
/// Entity `i` sits at `(i % width, i / width)`.
pub fn populate_grid(store: &mut CellStore, width: usize, height: usize) -> Vec<Entity> {
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let entity = store.create();
            store.set_position(entity, Position::new(x as i32, y as i32));
            cells.push(entity);
        }
    }
    cells
}

/// Populate the arena and mark `n_alive` cells alive, chosen uniformly at
/// random without replacement. Requests beyond the arena size are clamped.
/// Returns the number of cells actually made alive.
pub fn populate<R: Rng + ?Sized>(
    store: &mut CellStore,
    width: usize,
    height: usize,
    n_alive: usize,
    rng: &mut R,
) -> usize {
    let cells = populate_grid(store, width, height);
    let n_alive = n_alive.min(cells.len());

    for i in index::sample(rng, cells.len(), n_alive) {
        store.add_tag(cells[i], Tag::Alive);
    }

    tracing::debug!(width, height, n_alive, "arena populated");
    n_alive
}

/// Mark the cells at the given positions alive. Positions with no cell
/// (outside the arena) are skipped. Returns how many cells were marked.
pub fn mark_alive(store: &mut CellStore, positions: impl IntoIterator<Item = Position>) -> usize {
    let mut marked = 0;
    for pos in positions {
        if let Some(entity) = store.entity_at(pos) {
            store.add_tag(entity, Tag::Alive);
            marked += 1;
        }
    }
    marked
}
