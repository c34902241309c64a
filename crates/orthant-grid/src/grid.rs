//! The [`Grid`] position index and object store.

use crate::config::{ConfigError, GridConfig};
use crate::error::GridError;
use crate::event::GridEvent;
use crate::id::ObjectId;
use crate::position::Position;
use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;
use orthant_core::{Coord, Move};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// An object owned by a [`Grid`].
#[derive(Clone, Debug)]
pub struct GridObject<T> {
    value: T,
    position: Option<Coord>,
}

impl<T> GridObject<T> {
    /// The object's payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Coordinate of the position the object sits on, if placed.
    pub fn position(&self) -> Option<&Coord> {
        self.position.as_ref()
    }

    /// Returns `true` if the object sits on a position.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

/// A sparse, lazily populated grid of positions holding objects.
///
/// Positions are keyed by [`Coord`], so the padding-insensitive equality of
/// coordinates carries over: `(1, 2)` and `(1, 2, 0)` name the same
/// position. Positions iterate in creation order and are never removed.
///
/// The grid is single-writer: every mutation goes through `&mut self`, and
/// the matching [`GridEvent`]s are sent before the mutating call returns.
#[derive(Debug)]
pub struct Grid<T> {
    config: GridConfig,
    offsets: Vec<Coord>,
    positions: IndexMap<Coord, Vec<ObjectId>>,
    objects: Vec<GridObject<T>>,
    subscribers: Vec<Sender<GridEvent>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// An empty grid with the default configuration (2D, orthogonal).
    pub fn new() -> Self {
        Self::build(GridConfig::default())
    }

    /// An empty grid with the given configuration.
    ///
    /// Returns `Err(ConfigError)` if the configuration fails
    /// [`GridConfig::validate`].
    pub fn with_config(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GridConfig) -> Self {
        let offsets = config
            .neighbourhood
            .directions(config.dimensions)
            .into_iter()
            .map(|d| Move::unit(d).vector())
            .collect();
        Self {
            config,
            offsets,
            positions: IndexMap::new(),
            objects: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Build a 2D grid from rows of cells, each cell a list of values.
    ///
    /// The cell at column `x` of row `y` becomes position `(x, y)`, and
    /// each of its values is placed there as a new object, in order. A
    /// position is created for every cell, including empty ones.
    pub fn from_rows<R, C, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: IntoIterator<Item = T>,
    {
        let mut grid = Self::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, values) in row.into_iter().enumerate() {
                let coord = Coord::from([x as i64, y as i64]);
                grid.ensure_position(coord.clone());
                for value in values {
                    grid.place(value, coord.clone());
                }
            }
        }
        grid
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of positions created so far.
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of objects owned by the grid, placed or not.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ── Positions ──────────────────────────────────────────────────

    /// The position at `coord`, if it has been created.
    pub fn position(&self, coord: &Coord) -> Option<Position<'_, T>> {
        self.positions
            .get_key_value(coord)
            .map(|(key, objects)| Position::new(self, key, objects))
    }

    /// The position at `coord`, creating it if needed.
    pub fn get_or_insert_position(&mut self, coord: Coord) -> Position<'_, T> {
        let index = self.ensure_position(coord);
        self.position_at(index)
    }

    /// Every position, in creation order.
    pub fn positions(&self) -> impl Iterator<Item = Position<'_, T>> + '_ {
        self.positions
            .iter()
            .map(move |(key, objects)| Position::new(self, key, objects))
    }

    fn position_at(&self, index: usize) -> Position<'_, T> {
        let (key, objects) = self
            .positions
            .get_index(index)
            .expect("position index issued by ensure_position");
        Position::new(self, key, objects)
    }

    fn ensure_position(&mut self, coord: Coord) -> usize {
        if let Some(index) = self.positions.get_index_of(&coord) {
            return index;
        }
        let (index, _) = self.positions.insert_full(coord.clone(), Vec::new());
        trace!(coord = %coord, "position added");
        self.emit(GridEvent::PositionAdded { coord });
        index
    }

    // ── Objects ────────────────────────────────────────────────────

    /// Add an unplaced object.
    pub fn insert(&mut self, value: T) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(GridObject {
            value,
            position: None,
        });
        id
    }

    /// Add an object and place it at `coord`.
    pub fn place(&mut self, value: T, coord: Coord) -> ObjectId {
        let id = self.insert(value);
        self.relocate(id, Some(coord));
        id
    }

    /// Look up an object.
    pub fn object(&self, id: ObjectId) -> Option<&GridObject<T>> {
        self.objects.get(id.0)
    }

    /// Mutable access to an object's payload.
    pub fn value_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        self.objects.get_mut(id.0).map(|o| &mut o.value)
    }

    /// Every object, in ID order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &GridObject<T>)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o))
    }

    /// Every placed object, grouped by position in creation order and in
    /// arrival order within a position.
    pub fn all_objects(&self) -> impl Iterator<Item = (ObjectId, &T)> + '_ {
        self.positions
            .values()
            .flatten()
            .map(move |&id| (id, &self.objects[id.0].value))
    }

    /// Move an object to `to`, or take it off the grid with `None`.
    ///
    /// Moving an object to the position it already occupies is a no-op and
    /// emits no event.
    pub fn move_to(&mut self, id: ObjectId, to: Option<Coord>) -> Result<(), GridError> {
        self.check(id)?;
        self.relocate(id, to);
        Ok(())
    }

    /// Move a placed object by `mv` and return its new coordinate.
    ///
    /// Returns `Err(GridError::NotPlaced)` if the object is not on a position.
    pub fn move_by(&mut self, id: ObjectId, mv: &Move) -> Result<Coord, GridError> {
        self.offset_by(id, &mv.vector())
    }

    /// Move a placed object by a raw displacement and return its new coordinate.
    ///
    /// Returns `Err(GridError::NotPlaced)` if the object is not on a position.
    pub fn offset_by(&mut self, id: ObjectId, delta: &Coord) -> Result<Coord, GridError> {
        self.check(id)?;
        let target = match &self.objects[id.0].position {
            Some(at) => at + delta,
            None => return Err(GridError::NotPlaced { object: id }),
        };
        self.relocate(id, Some(target));
        Ok(self.objects[id.0].position.clone().unwrap_or_default())
    }

    fn check(&self, id: ObjectId) -> Result<(), GridError> {
        if id.0 < self.objects.len() {
            Ok(())
        } else {
            Err(GridError::UnknownObject { object: id })
        }
    }

    /// `id` must be valid.
    fn relocate(&mut self, id: ObjectId, to: Option<Coord>) {
        let from = self.objects[id.0].position.clone();
        if from == to {
            return;
        }
        if let Some(prev) = &from {
            if let Some(objects) = self.positions.get_mut(prev) {
                objects.retain(|&o| o != id);
            }
        }
        // Store the position's own key so the object reports the coordinate
        // the position was created with.
        let to = to.map(|coord| {
            let index = self.ensure_position(coord);
            let (key, objects) = self
                .positions
                .get_index_mut(index)
                .expect("position index issued by ensure_position");
            objects.push(id);
            key.clone()
        });
        self.objects[id.0].position = to.clone();
        debug!(object = %id, from = ?from, to = ?to, "object moved");
        self.emit(GridEvent::ObjectMoved {
            object: id,
            from,
            to,
        });
    }

    // ── Neighbourhood ──────────────────────────────────────────────

    /// Coordinates one step away along each configured direction.
    ///
    /// Order follows the neighbourhood's direction generator. Positions are
    /// not created.
    pub fn neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 8]> {
        self.offsets.iter().map(|off| coord + off).collect()
    }

    /// Neighbouring coordinates whose positions hold at least one object.
    pub fn occupied_neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 8]> {
        self.offsets
            .iter()
            .map(|off| coord + off)
            .filter(|c| self.positions.get(c).is_some_and(|objects| !objects.is_empty()))
            .collect()
    }

    // ── Notification ───────────────────────────────────────────────

    /// Subscribe to change events.
    ///
    /// The receiver sees every change made after this call. Dropping it
    /// unsubscribes; the grid prunes the dead sender on its next event.
    pub fn subscribe(&mut self) -> Receiver<GridEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers as of the last event.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn emit(&mut self, event: GridEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
