//! Board configuration.

use crate::{board::Board, error::Error, topology::Topology};
use educe::Educe;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board configuration.
///
/// The board will be generated from this configuration.
///
/// When deserialized, the field names are in camelCase
/// (`width`, `height`, `cellSize`, `liveDensity`, ...),
/// but the PascalCase spellings (`Width`, `CellSize`, ...) are also accepted.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    /// Width of the area covered by the board.
    #[educe(Default = 50)]
    #[cfg_attr(feature = "serde", serde(alias = "Width"))]
    pub width: i32,

    /// Height of the area covered by the board.
    #[educe(Default = 20)]
    #[cfg_attr(feature = "serde", serde(alias = "Height"))]
    pub height: i32,

    /// Width and height of a single cell.
    ///
    /// The board has `width / cell_size` columns and
    /// `height / cell_size` rows.
    #[educe(Default = 1)]
    #[cfg_attr(feature = "serde", serde(alias = "CellSize"))]
    pub cell_size: i32,

    /// The probability of a cell being alive initially.
    ///
    /// Values below 0 give an empty board, values above 1 a full one.
    #[educe(Default = 0.5)]
    #[cfg_attr(feature = "serde", serde(alias = "LiveDensity"))]
    pub live_density: f64,

    /// How the edges of the board are connected.
    #[cfg_attr(feature = "serde", serde(alias = "Topology"))]
    pub topology: Topology,

    /// The seed of the random source.
    ///
    /// `None` means that the random source is seeded from the system.
    #[cfg_attr(feature = "serde", serde(alias = "Seed"))]
    pub seed: Option<u64>,

    /// The maximal number of generations in a single trial of
    /// [`Board::stable_phase_time`] before the trial is given up.
    #[educe(Default = 10000)]
    #[cfg_attr(feature = "serde", serde(alias = "StablePhaseLimit"))]
    pub stable_phase_limit: u64,
}

impl Settings {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Settings {
            width,
            height,
            cell_size,
            ..Settings::default()
        }
    }

    /// Sets the live density.
    pub fn set_live_density(mut self, live_density: f64) -> Self {
        self.live_density = live_density;
        self
    }

    /// Sets the topology.
    pub fn set_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Sets the seed of the random source.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the generation limit of a stable phase trial.
    pub fn set_stable_phase_limit(mut self, stable_phase_limit: u64) -> Self {
        self.stable_phase_limit = stable_phase_limit;
        self
    }

    /// The random source described by the configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Creates a new board from the configuration.
    ///
    /// Returns an error if the cell size is not positive,
    /// or if the board would have no cells.
    pub fn board(&self) -> Result<Board, Error> {
        let mut board = Board::with_topology(
            self.width,
            self.height,
            self.cell_size,
            self.live_density,
            self.topology,
            self.rng(),
        )?;
        board.set_stable_phase_limit(self.stable_phase_limit);
        Ok(board)
    }
}
