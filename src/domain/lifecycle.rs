//! Lifecycle pass: decide which cells are alive in the next generation.
//!
//! Evaluation reads only a snapshot of the current live positions and never
//! touches `Tag::Alive`. The verdicts are collected first and written as
//! `Tag::AliveNext` afterwards, so no cell can observe a neighbour that has
//! already been updated for this generation.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{Algorithm, Cell, CellStore, Entity, Position, Tag, is_neighbor, possible_neighbors};

/// Live positions of one generation, frozen before evaluation starts.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    alive: HashSet<Position>,
}

impl Snapshot {
    pub fn capture(store: &CellStore) -> Self {
        Self {
            alive: store.alive_positions().collect(),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.alive.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Count live neighbours by looking up the eight surrounding positions.
    /// Positions outside the arena are never in the snapshot and count as dead.
    pub fn live_neighbors(&self, pos: Position) -> u8 {
        possible_neighbors(pos)
            .into_iter()
            .filter(|n| self.alive.contains(n))
            .count() as u8
    }

    /// Count live neighbours by testing adjacency against every live position
    pub fn live_neighbors_scan(&self, pos: Position) -> u8 {
        self.alive
            .iter()
            .filter(|&&other| is_neighbor(pos, other))
            .count() as u8
    }
}

/// Tag every cell that will be alive next generation with `Tag::AliveNext`.
/// Returns how many cells were tagged.
pub fn lifecycle_system(store: &mut CellStore, algorithm: Algorithm) -> usize {
    debug_assert_eq!(
        store.count_with(&[Tag::AliveNext]),
        0,
        "lifecycle started with an uncommitted generation"
    );

    let snapshot = Snapshot::capture(store);
    if snapshot.is_empty() {
        return 0;
    }

    let next = match algorithm {
        Algorithm::NaiveScan => evaluate(store, |pos| snapshot.live_neighbors_scan(pos)),
        Algorithm::Lookup => evaluate(store, |pos| snapshot.live_neighbors(pos)),
        Algorithm::LookupParallel => evaluate_parallel(store, &snapshot),
    };

    for &entity in &next {
        store.add_tag(entity, Tag::AliveNext);
    }
    next.len()
}

/// Serial evaluation: survivors among live cells, then births among dead ones
fn evaluate(store: &CellStore, count: impl Fn(Position) -> u8) -> Vec<Entity> {
    let survivors = store
        .each_with_position(&[Tag::Alive])
        .filter(|&(_, pos)| Cell::Alive.evolve(count(pos)).is_alive());

    let births = store
        .each_without(&[Tag::Alive])
        .filter(|&(_, pos)| Cell::Dead.evolve(count(pos)).is_alive());

    survivors.chain(births).map(|(entity, _)| entity).collect()
}

/// Parallel evaluation. The candidate list is read out of the store up
/// front and every verdict is collected before the caller writes any tag.
fn evaluate_parallel(store: &CellStore, snapshot: &Snapshot) -> Vec<Entity> {
    let candidates: Vec<(Entity, Position)> = store.each_with_position(&[]).collect();

    candidates
        .par_iter()
        .filter_map(|&(entity, pos)| {
            let current = Cell::from_alive(snapshot.contains(pos));
            current
                .evolve(snapshot.live_neighbors(pos))
                .is_alive()
                .then_some(entity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{mark_alive, populate_grid};

    const CENTRE: Position = Position::new(2, 2);

    /// 5×5 arena with the centre cell plus the first `k` of its neighbours alive
    fn neighbourhood(centre_alive: bool, k: usize, rotate: usize) -> (CellStore, Entity) {
        let mut store = CellStore::new();
        populate_grid(&mut store, 5, 5);

        let mut hood = possible_neighbors(CENTRE);
        hood.rotate_left(rotate);
        let mut alive: Vec<Position> = hood[..k].to_vec();
        if centre_alive {
            alive.push(CENTRE);
        }
        mark_alive(&mut store, alive);

        let centre = store.entity_at(CENTRE).unwrap();
        (store, centre)
    }

    fn next_positions(store: &CellStore) -> Vec<Position> {
        let mut positions: Vec<_> = store
            .each_with_position(&[Tag::AliveNext])
            .map(|(_, pos)| pos)
            .collect();
        positions.sort();
        positions
    }

    #[test]
    fn test_live_cell_rule_table() {
        for algo in Algorithm::all() {
            for k in 0..=8 {
                for rotate in [0, 3, 5] {
                    let (mut store, centre) = neighbourhood(true, k, rotate);
                    lifecycle_system(&mut store, algo);

                    assert!(store.has_tag(centre, Tag::Alive));
                    assert_eq!(
                        store.has_tag(centre, Tag::AliveNext),
                        k == 2 || k == 3,
                        "{} with {} live neighbours",
                        algo,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_dead_cell_rule_table() {
        for algo in Algorithm::all() {
            for k in 0..=8 {
                for rotate in [0, 2, 7] {
                    let (mut store, centre) = neighbourhood(false, k, rotate);
                    lifecycle_system(&mut store, algo);

                    assert!(!store.has_tag(centre, Tag::Alive));
                    assert_eq!(
                        store.has_tag(centre, Tag::AliveNext),
                        k == 3,
                        "{} with {} live neighbours",
                        algo,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_counting_strategies_agree() {
        let (store, _) = neighbourhood(true, 5, 1);
        let snapshot = Snapshot::capture(&store);
        for x in -1..=5 {
            for y in -1..=5 {
                let pos = Position::new(x, y);
                assert_eq!(
                    snapshot.live_neighbors(pos),
                    snapshot.live_neighbors_scan(pos),
                    "at {}",
                    pos
                );
            }
        }
    }

    #[test]
    fn test_algorithms_tag_identical_cells() {
        let mut reference = CellStore::new();
        populate_grid(&mut reference, 20, 20);
        let seed: Vec<Position> = (0..120)
            .map(|i| Position::new(i % 20, (i * 7) % 20))
            .collect();
        mark_alive(&mut reference, seed);

        let mut expected = None;
        for algo in Algorithm::all() {
            let mut store = reference.clone();
            lifecycle_system(&mut store, algo);
            let tagged = next_positions(&store);
            match &expected {
                None => expected = Some(tagged),
                Some(first) => assert_eq!(first, &tagged, "{} disagrees", algo),
            }
        }
    }

    #[test]
    fn test_alive_tags_untouched_during_evaluation() {
        let (mut store, _) = neighbourhood(true, 6, 0);
        let mut before: Vec<_> = store.alive_positions().collect();
        before.sort();

        lifecycle_system(&mut store, Algorithm::Lookup);

        let mut after: Vec<_> = store.alive_positions().collect();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_corner_cell_counts_only_in_bounds_neighbours() {
        let mut store = CellStore::new();
        populate_grid(&mut store, 4, 4);
        mark_alive(&mut store, [(0, 1), (1, 0), (1, 1)].map(Position::from));

        let snapshot = Snapshot::capture(&store);
        assert_eq!(snapshot.live_neighbors(Position::new(0, 0)), 3);

        lifecycle_system(&mut store, Algorithm::Lookup);
        assert_eq!(next_positions(&store), vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);
    }

    #[test]
    fn test_empty_generation_tags_nothing() {
        let mut store = CellStore::new();
        populate_grid(&mut store, 6, 6);
        for algo in Algorithm::all() {
            assert_eq!(lifecycle_system(&mut store, algo), 0);
            assert_eq!(store.count_with(&[Tag::AliveNext]), 0);
        }
    }
}
