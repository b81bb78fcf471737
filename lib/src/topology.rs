//! How the edges of the board are connected.

use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative positions of the eight neighbors, as `(dx, dy)`.
pub(crate) const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// How the edges of the board are connected.
///
/// The topology decides which cells are neighbors. It is computed once
/// and cached on the board as indices, so changing it means rebuilding
/// the whole neighbor table.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topology {
    /// The left edge wraps to the right edge and the top edge to the bottom,
    /// so every cell has exactly eight neighbors.
    #[educe(Default)]
    Torus,

    /// Only cells inside the board are neighbors.
    /// Cells on the edges have five neighbors, corners have three.
    Clipped,
}

impl Topology {
    /// The neighbor of `(x, y)` in the direction `(dx, dy)`
    /// on a board with the given size.
    ///
    /// Returns `None` if there is no such neighbor.
    pub fn neighbor(
        self,
        (x, y): (usize, usize),
        (dx, dy): (isize, isize),
        columns: usize,
        rows: usize,
    ) -> Option<(usize, usize)> {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        match self {
            Topology::Torus => Some((
                nx.rem_euclid(columns as isize) as usize,
                ny.rem_euclid(rows as isize) as usize,
            )),
            Topology::Clipped => {
                if 0 <= nx && nx < columns as isize && 0 <= ny && ny < rows as isize {
                    Some((nx as usize, ny as usize))
                } else {
                    None
                }
            }
        }
    }
}

impl Display for Topology {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Topology::Torus => "torus",
            Topology::Clipped => "clipped",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "torus" | "wrap" | "t" => Ok(Topology::Torus),
            "clipped" | "clip" | "c" => Ok(Topology::Clipped),
            _ => Err(String::from("invalid topology")),
        }
    }
}
