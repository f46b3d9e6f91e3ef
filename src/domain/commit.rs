//! Commit pass: promote `AliveNext` to `Alive` and leave no residue.

use super::{CellStore, Entity, Tag};

/// Outcome of one commit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub born: usize,
    pub died: usize,
    pub population: usize,
}

/// Replace the current generation with the pending one.
///
/// Both sweeps are read out of the store before any tag changes, so the
/// store goes from "generation N plus pending N+1" to "generation N+1" with
/// nothing in between visible to the next lifecycle pass.
pub fn commit_system(store: &mut CellStore) -> CommitStats {
    let dying: Vec<Entity> = store
        .each_with(&[Tag::Alive])
        .filter(|&entity| !store.has_tag(entity, Tag::AliveNext))
        .collect();
    let pending: Vec<Entity> = store.each_with(&[Tag::AliveNext]).collect();

    for &entity in &dying {
        store.remove_tag(entity, Tag::Alive);
    }

    let mut born = 0;
    for &entity in &pending {
        if !store.has_tag(entity, Tag::Alive) {
            store.add_tag(entity, Tag::Alive);
            born += 1;
        }
        store.remove_tag(entity, Tag::AliveNext);
    }

    CommitStats {
        born,
        died: dying.len(),
        population: store.count_with(&[Tag::Alive]),
    }
}

/// True while at least one cell is alive
pub fn has_alive_cells(store: &CellStore) -> bool {
    store.count_with(&[Tag::Alive]) > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    /// Ten positioned cells; `alive` and `next` pick which carry each tag
    fn tagged(alive: &[usize], next: &[usize]) -> (CellStore, Vec<Entity>) {
        let mut store = CellStore::new();
        let cells: Vec<Entity> = (0..10)
            .map(|x| {
                let e = store.create();
                store.set_position(e, Position::new(x, 0));
                e
            })
            .collect();
        for &i in alive {
            store.add_tag(cells[i], Tag::Alive);
        }
        for &i in next {
            store.add_tag(cells[i], Tag::AliveNext);
        }
        (store, cells)
    }

    #[test]
    fn test_alive_without_next_dies() {
        let (mut store, cells) = tagged(&[0, 1, 2], &[1]);
        let stats = commit_system(&mut store);

        assert!(!store.has_tag(cells[0], Tag::Alive));
        assert!(store.has_tag(cells[1], Tag::Alive));
        assert!(!store.has_tag(cells[2], Tag::Alive));
        assert_eq!(stats, CommitStats { born: 0, died: 2, population: 1 });
    }

    #[test]
    fn test_next_becomes_alive() {
        let (mut store, cells) = tagged(&[], &[3, 4]);
        let stats = commit_system(&mut store);

        assert!(store.has_tag(cells[3], Tag::Alive));
        assert!(store.has_tag(cells[4], Tag::Alive));
        assert_eq!(stats, CommitStats { born: 2, died: 0, population: 2 });
    }

    #[test]
    fn test_alive_equals_pending_set_after_commit() {
        let (mut store, cells) = tagged(&[0, 2, 4, 6], &[2, 3, 6, 9]);
        commit_system(&mut store);

        let mut alive: Vec<_> = store.each_with(&[Tag::Alive]).collect();
        alive.sort();
        assert_eq!(alive, vec![cells[2], cells[3], cells[6], cells[9]]);
    }

    #[test]
    fn test_no_alive_next_residue() {
        let layouts: [(&[usize], &[usize]); 4] = [
            (&[], &[]),
            (&[1, 2, 3], &[]),
            (&[], &[0, 5, 9]),
            (&[0, 1, 2, 3, 4], &[3, 4, 5, 6]),
        ];
        for (alive, next) in layouts {
            let (mut store, _) = tagged(alive, next);
            commit_system(&mut store);
            assert_eq!(store.count_with(&[Tag::AliveNext]), 0);
            assert_eq!(store.count_with(&[Tag::Alive]), next.len());
        }
    }

    #[test]
    fn test_has_alive_cells() {
        let (store, _) = tagged(&[], &[]);
        assert!(!has_alive_cells(&store));

        let (store, _) = tagged(&[7], &[]);
        assert!(has_alive_cells(&store));

        let (mut store, _) = tagged(&[7], &[]);
        commit_system(&mut store);
        assert!(!has_alive_cells(&store));
        assert!(Tag::ALL.iter().all(|&tag| store.count_with(&[tag]) == 0));
    }
}
