//! Analysis of a board: symmetry, still-life blocks, stable phase
//! and pattern search.

use crate::{board::Board, error::Error, topology::Topology};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which pairs of cells are compared when counting symmetric cells.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symmetry {
    /// The cell at `(x, y)` is paired with
    /// `(columns - 1 - x, rows - 1 - y)`,
    /// its reflection through the center of the board.
    #[educe(Default)]
    PointReflection,

    /// The cell at `(x, y)` is paired with `(columns - 1 - x, y)`,
    /// its reflection across the middle column.
    MirrorColumns,
}

impl Symmetry {
    /// The partner of a cell on a board with the given size.
    pub fn act_on(self, (x, y): (usize, usize), columns: usize, rows: usize) -> (usize, usize) {
        match self {
            Symmetry::PointReflection => (columns - 1 - x, rows - 1 - y),
            Symmetry::MirrorColumns => (columns - 1 - x, y),
        }
    }
}

impl Display for Symmetry {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Symmetry::PointReflection => "point",
            Symmetry::MirrorColumns => "mirror",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

impl FromStr for Symmetry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" | "C2" => Ok(Symmetry::PointReflection),
            "mirror" | "D2|" => Ok(Symmetry::MirrorColumns),
            _ => Err(String::from("invalid symmetry")),
        }
    }
}

/// How a cell is shown after [`Board::classify_blocks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// A dead cell.
    Dead,
    /// A living cell that is not part of a block.
    Alive,
    /// A living cell inside a 2×2 block.
    Block,
}

impl CellKind {
    /// `*` for a block, `O` for other living cells, `.` for dead cells.
    pub fn to_char(self) -> char {
        match self {
            CellKind::Dead => '.',
            CellKind::Alive => 'O',
            CellKind::Block => '*',
        }
    }
}

/// Displays a classification, one line per row.
pub fn render_classified(kinds: &[Vec<CellKind>]) -> String {
    let mut str = String::new();
    for row in kinds {
        str.extend(row.iter().map(|k| k.to_char()));
        str.push('\n');
    }
    str
}

impl Board {
    /// Counts the cells whose partner under `symmetry` has the same state.
    ///
    /// Every cell is visited, so both members of a pair are counted:
    /// a board that is invariant under `symmetry` gives the total number of cells.
    pub fn symmetric_count(&self, symmetry: Symmetry) -> usize {
        self.count_pairs(symmetry, |a, b| a == b)
    }

    /// Counts the living cells whose partner under `symmetry` is also alive.
    pub fn symmetric_alive_count(&self, symmetry: Symmetry) -> usize {
        self.count_pairs(symmetry, |a, b| a && b)
    }

    fn count_pairs<F: Fn(bool, bool) -> bool>(&self, symmetry: Symmetry, f: F) -> usize {
        let (columns, rows) = (self.columns(), self.rows());
        self.cells()
            .iter()
            .filter(|cell| {
                let partner = symmetry.act_on(cell.coord, columns, rows);
                let partner = self.cells()[partner.0 * rows + partner.1].is_alive();
                f(cell.is_alive(), partner)
            })
            .count()
    }

    /// Evolves the board and its reflection across the middle column
    /// side by side, as two independent copies.
    ///
    /// Returns the first generation (counted from 1) at which the two copies
    /// are equal, i.e., at which the board is its own mirror image,
    /// or `None` if they differ for all `generations` generations.
    /// The board itself is not changed.
    pub fn explore_symmetry(&self, generations: u64) -> Option<u64> {
        let mut board1 = self.clone();
        let mut board2 = self.clone();
        board2.mirror();
        for i in 0..generations {
            board1.advance();
            board2.advance();
            if board1 == board2 {
                debug!("symmetric after {} generations", i + 1);
                return Some(i + 1);
            }
        }
        debug!("asymmetric after {} generations", generations);
        None
    }

    /// Marks every living cell inside a 2×2 block of living cells.
    ///
    /// All 2×2 windows lying completely inside the board are examined,
    /// without wrapping around the edges. The simulation is not affected.
    ///
    /// The result is indexed as `[row][column]`.
    pub fn classify_blocks(&self) -> Vec<Vec<CellKind>> {
        let states = self.states();
        let mut kinds: Vec<Vec<CellKind>> = states
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&alive| if alive { CellKind::Alive } else { CellKind::Dead })
                    .collect()
            })
            .collect();
        for y in 0..self.rows().saturating_sub(1) {
            for x in 0..self.columns().saturating_sub(1) {
                if states[y][x] && states[y][x + 1] && states[y + 1][x] && states[y + 1][x + 1] {
                    kinds[y][x] = CellKind::Block;
                    kinds[y][x + 1] = CellKind::Block;
                    kinds[y + 1][x] = CellKind::Block;
                    kinds[y + 1][x + 1] = CellKind::Block;
                }
            }
        }
        kinds
    }

    /// Advances the board until two consecutive generations are the same.
    ///
    /// Returns the number of generations advanced before the repeat,
    /// so a board that never changes gives `0`.
    /// Only fixed points are detected; oscillators with a longer period
    /// run until `limit` generations and give `None`.
    fn steps_until_repeat(&mut self, limit: u64) -> Option<u64> {
        let mut state = self.fingerprint();
        for steps in 0..limit {
            self.advance();
            let new_state = self.fingerprint();
            if new_state == state {
                return Some(steps);
            }
            state = new_state;
        }
        None
    }

    /// Estimates how long it takes the board to settle on a clipped grid.
    ///
    /// Runs `max_iterations` trials on a copy of the board with
    /// [`Topology::Clipped`]. The first trial starts from the current state;
    /// each later one reseeds the copy with the board's live density and
    /// rebuilds its neighbor table. Each trial counts the generations until
    /// the state repeats (see [`set_stable_phase_limit`](Self::set_stable_phase_limit)
    /// for the limit of a trial).
    ///
    /// Returns the mean over the completed trials, rounded down,
    /// or `0` if `max_iterations <= 0` or no trial completes.
    /// Only the random source of the board is changed.
    pub fn stable_phase_time(&mut self, max_iterations: i32) -> u64 {
        if max_iterations <= 0 {
            return 0;
        }
        let mut trial = self.clone();
        let mut sum = 0;
        let mut completed = 0;
        for i in 0..max_iterations {
            if i > 0 {
                trial.rng = StdRng::seed_from_u64(self.rng.gen());
                trial.randomize(self.live_density);
            }
            trial.set_topology(Topology::Clipped);
            match trial.steps_until_repeat(self.stable_phase_limit) {
                Some(steps) => {
                    sum += steps;
                    completed += 1;
                }
                None => debug!(
                    "trial {} did not settle in {} generations",
                    i, self.stable_phase_limit
                ),
            }
        }
        if completed > 0 {
            sum / completed
        } else {
            0
        }
    }

    /// Searches the board for an exact copy of `pattern`.
    ///
    /// Returns the `(row, column)` of the top-left corner of the first match,
    /// scanning row by row. Rotations and reflections are not considered,
    /// and matches do not wrap around the edges.
    pub fn find_pattern(&self, pattern: &Pattern) -> Option<(usize, usize)> {
        find_submatrix(&self.states(), pattern.rows())
    }
}

/// Searches `grid` for an exact copy of `pattern` as a contiguous submatrix.
///
/// Both are indexed as `[row][column]`; rows of `grid` are assumed to have
/// the same length. Returns the `(row, column)` of the first match.
/// An empty pattern is never found.
pub fn find_submatrix(grid: &[Vec<bool>], pattern: &[Vec<bool>]) -> Option<(usize, usize)> {
    let height = pattern.len();
    let width = pattern.first().map_or(0, Vec::len);
    let rows = grid.len();
    let columns = grid.first().map_or(0, Vec::len);
    if height == 0 || width == 0 || height > rows || width > columns {
        return None;
    }
    (0..=rows - height)
        .flat_map(|r| (0..=columns - width).map(move |c| (r, c)))
        .find(|&(r, c)| {
            pattern.iter().enumerate().all(|(pr, prow)| {
                prow.iter()
                    .enumerate()
                    .all(|(pc, &p)| grid[r + pr].get(c + pc) == Some(&p))
            })
        })
}

/// A rectangular pattern of living and dead cells,
/// used as the needle of [`Board::find_pattern`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// The cells, indexed as `[row][column]`.
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Creates a pattern from its rows.
    ///
    /// Shorter rows are padded with dead cells.
    /// Returns an error if the pattern has no cells.
    pub fn new(mut rows: Vec<Vec<bool>>) -> Result<Self, Error> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(Error::InvalidPattern(String::from("empty pattern")));
        }
        for row in rows.iter_mut() {
            row.resize(width, false);
        }
        Ok(Pattern { rows })
    }

    /// Reads a pattern from a fixture file. See [`FromStr`] for the format.
    ///
    /// Parse errors name the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse().map_err(|e: Error| e.in_file(path))
    }

    /// The cells, indexed as `[row][column]`.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Parses a pattern with one line per row and one character per column.
///
/// * **Living** cells are represented by `*`, `o`, `O` or `1`;
/// * **Dead** cells are represented by ` `, `.` or `0`.
///
/// Trailing empty lines are ignored.
impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '*' | 'o' | 'O' | '1' => Ok(true),
                        ' ' | '.' | '0' => Ok(false),
                        _ => Err(Error::InvalidPattern(format!(
                            "unexpected character {:?}",
                            c
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        while rows.last().map_or(false, Vec::is_empty) {
            rows.pop();
        }
        Pattern::new(rows)
    }
}
