//! Cells on the board.

use crate::rule::next_state;
use std::{
    cell::Cell,
    fmt::{Debug, Error, Formatter},
};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, i.e., `(column, row)`.
/// Both coordinates are 0-indexed.
pub type Coord = (usize, usize);

/// A cell on the board.
///
/// The name `LifeCell` is chosen to avoid ambiguity with
/// [`std::cell::Cell`].
///
/// A cell does not own its neighbors. The board keeps all cells in one
/// flat arena, and a cell only records the indices of its neighbors
/// in that arena.
#[derive(Clone)]
pub struct LifeCell {
    /// The coordinates of the cell.
    pub coord: Coord,

    /// Whether the cell is alive in the current generation.
    pub(crate) alive: Cell<bool>,

    /// Whether the cell will be alive in the next generation.
    ///
    /// Only meaningful between [`determine_next_live_state`](Self::determine_next_live_state)
    /// and [`advance`](Self::advance) within one step.
    pub(crate) alive_next: Cell<bool>,

    /// The eight cells in the neighborhood, as indices into the arena.
    ///
    /// `None` means that there is no neighbor in that direction,
    /// which happens on the edges of a clipped board.
    pub(crate) nbhd: [Option<usize>; 8],
}

impl LifeCell {
    /// Generates a new dead cell without neighbors.
    pub fn new(coord: Coord) -> Self {
        LifeCell {
            coord,
            alive: Cell::new(false),
            alive_next: Cell::new(false),
            nbhd: [None; 8],
        }
    }

    /// Generates a new cell whose neighbors are the given indices.
    ///
    /// Mostly useful for building small arenas by hand.
    pub fn with_neighbors<I: IntoIterator<Item = usize>>(coord: Coord, nbhd: I) -> Self {
        let mut cell = LifeCell::new(coord);
        for (slot, i) in cell.nbhd.iter_mut().zip(nbhd) {
            *slot = Some(i);
        }
        cell
    }

    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Sets the state of the cell.
    #[inline]
    pub fn set_alive(&self, alive: bool) {
        self.alive.set(alive)
    }

    /// The state computed for the next generation.
    #[inline]
    pub fn is_alive_next(&self) -> bool {
        self.alive_next.get()
    }

    /// Indices of the neighbors in the arena.
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.nbhd.iter().flatten().copied()
    }

    /// Number of living neighbors, looked up in `cells`.
    pub fn live_neighbors(&self, cells: &[LifeCell]) -> usize {
        self.neighbors().filter(|&i| cells[i].is_alive()).count()
    }

    /// Computes the state of the cell in the next generation
    /// from the current states of its neighbors in `cells`.
    ///
    /// Only [`alive_next`](#structfield.alive_next) is changed.
    pub fn determine_next_live_state(&self, cells: &[LifeCell]) {
        let count = self.live_neighbors(cells);
        self.alive_next.set(next_state(self.is_alive(), count));
    }

    /// Commits the state computed by
    /// [`determine_next_live_state`](Self::determine_next_live_state).
    #[inline]
    pub fn advance(&self) {
        self.alive.set(self.alive_next.get());
    }
}

impl Debug for LifeCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_struct("LifeCell")
            .field("coord", &self.coord)
            .field("alive", &self.alive.get())
            .field("alive_next", &self.alive_next.get())
            .finish()
    }
}
