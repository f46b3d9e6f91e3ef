//! Cell store: entities, their positions, and presence-only tags.
//!
//! Entities are synthetic ids; each attribute lives in its own sparse set so
//! "every entity with tag T" walks a packed array instead of the whole store.
//! Queries borrow the store immutably, so nothing can be written while a
//! query is being iterated.

use std::collections::HashMap;
use std::fmt;

use super::Position;

/// Opaque identity of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Boolean attributes an entity can carry. Presence is the whole meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Alive in the current generation
    Alive,
    /// Will be alive once the pending generation is committed
    AliveNext,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Alive, Tag::AliveNext];

    const fn slot(self) -> usize {
        match self {
            Tag::Alive => 0,
            Tag::AliveNext => 1,
        }
    }
}

/// Sparse set keyed by entity index: O(1) insert/remove/contains and
/// packed iteration. Removal swaps the last member into the hole.
#[derive(Clone, Debug, Default)]
struct SparseSet {
    sparse: Vec<Option<usize>>,
    dense: Vec<Entity>,
}

impl SparseSet {
    fn contains(&self, entity: Entity) -> bool {
        matches!(self.sparse.get(entity.index()), Some(Some(_)))
    }

    fn insert(&mut self, entity: Entity) -> bool {
        if self.contains(entity) {
            return false;
        }
        let idx = entity.index();
        if idx >= self.sparse.len() {
            self.sparse.resize(idx + 1, None);
        }
        self.sparse[idx] = Some(self.dense.len());
        self.dense.push(entity);
        true
    }

    fn remove(&mut self, entity: Entity) -> bool {
        let Some(slot) = self.sparse.get(entity.index()).copied().flatten() else {
            return false;
        };
        self.dense.swap_remove(slot);
        if let Some(&moved) = self.dense.get(slot) {
            self.sparse[moved.index()] = Some(slot);
        }
        self.sparse[entity.index()] = None;
        true
    }

    fn len(&self) -> usize {
        self.dense.len()
    }

    fn members(&self) -> &[Entity] {
        &self.dense
    }
}

/// Entity/tag container for the simulation.
#[derive(Clone, Debug, Default)]
pub struct CellStore {
    entities: SparseSet,
    positions: Vec<Option<Position>>,
    by_position: HashMap<Position, Entity>,
    tags: [SparseSet; 2],
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a known number of cells
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            entities: SparseSet {
                sparse: Vec::with_capacity(cells),
                dense: Vec::with_capacity(cells),
            },
            positions: Vec::with_capacity(cells),
            by_position: HashMap::with_capacity(cells),
            tags: Default::default(),
        }
    }

    /// Allocate a fresh entity. Ids are never reused, even after `destroy`.
    pub fn create(&mut self) -> Entity {
        let Ok(id) = u32::try_from(self.positions.len()) else {
            panic!("entity ids exhausted after {} allocations", self.positions.len());
        };
        let entity = Entity(id);
        self.positions.push(None);
        self.entities.insert(entity);
        entity
    }

    /// Remove an entity together with its position and tags
    pub fn destroy(&mut self, entity: Entity) {
        self.expect_live(entity);
        for set in &mut self.tags {
            set.remove(entity);
        }
        if let Some(pos) = self.positions[entity.index()].take() {
            self.by_position.remove(&pos);
        }
        self.entities.remove(entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.len() == 0
    }

    /// Attach a position. Two entities may never share one.
    pub fn set_position(&mut self, entity: Entity, pos: Position) {
        self.expect_live(entity);
        if let Some(&holder) = self.by_position.get(&pos) {
            assert_eq!(holder, entity, "position {} already held by {}", pos, holder);
            return;
        }
        if let Some(previous) = self.positions[entity.index()].replace(pos) {
            self.by_position.remove(&previous);
        }
        self.by_position.insert(pos, entity);
    }

    /// Position of an entity; panics if the entity is unknown or unpositioned
    pub fn position(&self, entity: Entity) -> Position {
        self.expect_live(entity);
        match self.positions[entity.index()] {
            Some(pos) => pos,
            None => panic!("entity {} has no position", entity),
        }
    }

    pub fn try_position(&self, entity: Entity) -> Option<Position> {
        if !self.contains(entity) {
            return None;
        }
        self.positions[entity.index()]
    }

    /// Entity occupying a grid coordinate, if any
    pub fn entity_at(&self, pos: Position) -> Option<Entity> {
        self.by_position.get(&pos).copied()
    }

    /// Idempotent: tagging an already tagged entity is a no-op
    pub fn add_tag(&mut self, entity: Entity, tag: Tag) {
        self.expect_live(entity);
        self.tags[tag.slot()].insert(entity);
    }

    /// Idempotent: untagging an untagged entity is a no-op
    pub fn remove_tag(&mut self, entity: Entity, tag: Tag) {
        self.expect_live(entity);
        self.tags[tag.slot()].remove(entity);
    }

    pub fn has_tag(&self, entity: Entity, tag: Tag) -> bool {
        self.expect_live(entity);
        self.tags[tag.slot()].contains(entity)
    }

    /// Entities carrying every listed tag. An empty list matches every entity.
    ///
    /// Iteration walks the smallest of the requested sets, so a query for a
    /// rare tag stays cheap on a large store.
    pub fn each_with<'a>(&'a self, tags: &'a [Tag]) -> impl Iterator<Item = Entity> + 'a {
        let driver = tags
            .iter()
            .map(move |tag| self.tags[tag.slot()].members())
            .min_by_key(|members| members.len())
            .unwrap_or(self.entities.members());

        driver
            .iter()
            .copied()
            .filter(move |&entity| self.has_all(entity, tags))
    }

    /// Entities carrying a position and every listed tag, with that position
    pub fn each_with_position<'a>(
        &'a self,
        tags: &'a [Tag],
    ) -> impl Iterator<Item = (Entity, Position)> + 'a {
        self.each_with(tags)
            .filter_map(move |entity| self.positions[entity.index()].map(|pos| (entity, pos)))
    }

    /// Positioned entities carrying none of the listed tags
    pub fn each_without<'a>(
        &'a self,
        tags: &'a [Tag],
    ) -> impl Iterator<Item = (Entity, Position)> + 'a {
        self.entities
            .members()
            .iter()
            .copied()
            .filter(move |&entity| !tags.iter().any(|tag| self.tags[tag.slot()].contains(entity)))
            .filter_map(move |entity| self.positions[entity.index()].map(|pos| (entity, pos)))
    }

    pub fn count_with(&self, tags: &[Tag]) -> usize {
        match tags {
            [tag] => self.tags[tag.slot()].len(),
            _ => self.each_with(tags).count(),
        }
    }

    /// Positions of every live cell, in store order
    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.each_with_position(&[Tag::Alive]).map(|(_, pos)| pos)
    }

    fn has_all(&self, entity: Entity, tags: &[Tag]) -> bool {
        tags.iter().all(|tag| self.tags[tag.slot()].contains(entity))
    }

    fn expect_live(&self, entity: Entity) {
        assert!(self.contains(entity), "unknown entity {}", entity);
    }
}
