//! The board.

use crate::{
    cells::{Coord, LifeCell},
    error::Error,
    topology::{Topology, NBHD},
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng};

/// The board.
///
/// A grid of `columns × rows` cells, stored column by column in one
/// flat vector. Cells refer to their neighbors by index into that vector,
/// so the board can be cloned without sharing any cell with the clone.
#[derive(Clone, Debug)]
pub struct Board {
    /// Number of columns.
    columns: usize,

    /// Number of rows.
    rows: usize,

    /// The display scale factor. Irrelevant to the simulation.
    cell_size: usize,

    /// How the edges are connected.
    topology: Topology,

    /// All the cells on the board.
    ///
    /// The cell at `(x, y)` is at index `x * rows + y`.
    cells: Box<[LifeCell]>,

    /// The random source used to seed the cells.
    pub(crate) rng: StdRng,

    /// The probability of a cell being alive in the last randomization.
    pub(crate) live_density: f64,

    /// Number of generations since the board was created.
    generation: u64,

    /// The maximal number of generations in a single stable phase trial.
    pub(crate) stable_phase_limit: u64,
}

impl Board {
    /// Creates a new board covering a `width × height` area,
    /// where each cell takes `cell_size × cell_size`.
    ///
    /// The fractional remainder of `width / cell_size` and `height / cell_size`
    /// is dropped. Every cell is then independently set alive with
    /// probability `live_density`.
    pub fn new(
        width: i32,
        height: i32,
        cell_size: i32,
        live_density: f64,
        rng: StdRng,
    ) -> Result<Self, Error> {
        Board::with_topology(
            width,
            height,
            cell_size,
            live_density,
            Topology::default(),
            rng,
        )
    }

    /// Creates a new board with the given topology.
    ///
    /// See [`new`](Self::new) for the meaning of the other arguments.
    pub fn with_topology(
        width: i32,
        height: i32,
        cell_size: i32,
        live_density: f64,
        topology: Topology,
        rng: StdRng,
    ) -> Result<Self, Error> {
        if cell_size <= 0 {
            return Err(Error::NonPositiveCellSize(cell_size));
        }
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize(width, height));
        }
        let columns = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;
        if columns == 0 || rows == 0 {
            return Err(Error::EmptyBoard(width, height, cell_size));
        }

        let mut cells = Vec::with_capacity(columns * rows);
        for x in 0..columns {
            for y in 0..rows {
                cells.push(LifeCell::new((x, y)));
            }
        }
        debug!(
            "new {}x{} board ({} cells, {})",
            columns,
            rows,
            cells.len(),
            topology
        );

        let mut board = Board {
            columns,
            rows,
            cell_size: cell_size as usize,
            topology,
            cells: cells.into_boxed_slice(),
            rng,
            live_density,
            generation: 0,
            stable_phase_limit: 10000,
        };
        board.init_nbhd();
        board.randomize(live_density);
        Ok(board)
    }

    /// Links the cells to their neighbors according to the topology.
    fn init_nbhd(&mut self) {
        let (columns, rows, topology) = (self.columns, self.rows, self.topology);
        for x in 0..columns {
            for y in 0..rows {
                let mut nbhd = [None; 8];
                for (slot, &d) in nbhd.iter_mut().zip(NBHD.iter()) {
                    *slot = topology
                        .neighbor((x, y), d, columns, rows)
                        .map(|(nx, ny)| nx * rows + ny);
                }
                self.cells[x * rows + y].nbhd = nbhd;
            }
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The display scale factor.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Width of the covered area, `columns * cell_size`.
    pub fn width(&self) -> usize {
        self.columns * self.cell_size
    }

    /// Height of the covered area, `rows * cell_size`.
    pub fn height(&self) -> usize {
        self.rows * self.cell_size
    }

    /// The topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Changes the topology and rebuilds the neighbor table.
    ///
    /// The states of the cells are kept.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
        self.init_nbhd();
        debug!("rebuilt neighbor table ({})", topology);
    }

    /// The live density used in the last randomization.
    pub fn live_density(&self) -> f64 {
        self.live_density
    }

    /// Sets the maximal number of generations in a single trial of
    /// [`stable_phase_time`](Self::stable_phase_time).
    pub fn set_stable_phase_limit(&mut self, stable_phase_limit: u64) {
        self.stable_phase_limit = stable_phase_limit;
    }

    /// Number of generations advanced since the board was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All the cells, column by column.
    pub fn cells(&self) -> &[LifeCell] {
        &self.cells
    }

    /// Finds a cell by its coordinates.
    pub fn find_cell(&self, coord: Coord) -> Option<&LifeCell> {
        let (x, y) = coord;
        if x < self.columns && y < self.rows {
            Some(&self.cells[x * self.rows + y])
        } else {
            None
        }
    }

    /// Whether the cell at `coord` is alive.
    pub fn is_alive(&self, coord: Coord) -> Result<bool, Error> {
        self.find_cell(coord)
            .map(LifeCell::is_alive)
            .ok_or(Error::OutOfBounds(coord))
    }

    /// Sets the state of the cell at `coord`.
    pub fn set_alive(&mut self, coord: Coord, alive: bool) -> Result<(), Error> {
        let cell = self.find_cell(coord).ok_or(Error::OutOfBounds(coord))?;
        cell.set_alive(alive);
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in self.cells.iter() {
            cell.set_alive(false);
        }
    }

    /// Reseeds every cell independently: a cell becomes alive
    /// if a uniform draw from `[0, 1)` is less than `live_density`.
    ///
    /// A density `<= 0` gives an empty board, `>= 1` a full one.
    /// The topology is not changed.
    pub fn randomize(&mut self, live_density: f64) {
        self.live_density = live_density;
        for cell in self.cells.iter() {
            cell.set_alive(self.rng.gen::<f64>() < live_density);
        }
    }

    /// Advances the board by one generation.
    ///
    /// Every cell computes its next state before any cell commits,
    /// so all neighbor reads see the previous generation.
    pub fn advance(&mut self) {
        for cell in self.cells.iter() {
            cell.determine_next_live_state(&self.cells);
        }
        for cell in self.cells.iter() {
            cell.advance();
        }
        self.generation += 1;
        trace!("generation {}: {} cells", self.generation, self.cell_count());
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The states of all cells, row by row.
    pub fn states(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|y| {
                (0..self.columns)
                    .map(|x| self.cells[x * self.rows + y].is_alive())
                    .collect()
            })
            .collect()
    }

    /// A fingerprint of the current generation.
    ///
    /// Two boards of the same size have equal fingerprints
    /// exactly when all their cells have the same states.
    pub(crate) fn fingerprint(&self) -> Vec<bool> {
        self.cells.iter().map(LifeCell::is_alive).collect()
    }

    /// Reflects the board across its middle column.
    pub fn mirror(&mut self) {
        for y in 0..self.rows {
            for x in 0..self.columns / 2 {
                let left = &self.cells[x * self.rows + y];
                let right = &self.cells[(self.columns - 1 - x) * self.rows + y];
                left.alive.swap(&right.alive);
            }
        }
    }
}

/// Two boards are equal if they have the same size
/// and all their cells have the same states.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_alive() == b.is_alive())
    }
}
