//! Saving and loading the states of the board as text.

use crate::{board::Board, error::Error};
use educe::Educe;
use log::{debug, warn};
use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text formats of a snapshot.
///
/// Both formats have one line per row. They are not interchangeable:
/// a snapshot must be loaded in the format it was saved in.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SnapshotFormat {
    /// One character per column.
    ///
    /// `*` is a living cell. Dead cells are saved as spaces;
    /// any character other than `*` is loaded as dead.
    #[educe(Default)]
    Plaintext,

    /// One comma-separated token per column,
    /// `1` for a living cell and `0` for a dead cell.
    Csv,
}

impl Display for SnapshotFormat {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            SnapshotFormat::Plaintext => "plain",
            SnapshotFormat::Csv => "csv",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

impl FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "plaintext" | "p" => Ok(SnapshotFormat::Plaintext),
            "csv" | "c" => Ok(SnapshotFormat::Csv),
            _ => Err(String::from("invalid snapshot format")),
        }
    }
}

/// A format error at the 1-based `line`.
fn format_error(line: usize, reason: String) -> Error {
    Error::Format { line, reason }
}

/// Parses one row of a snapshot. The row must cover at least `columns` cells.
fn parse_row(line: &str, columns: usize, format: SnapshotFormat) -> Result<Vec<bool>, String> {
    match format {
        SnapshotFormat::Plaintext => {
            let row: Vec<bool> = line.chars().take(columns).map(|c| c == '*').collect();
            if row.len() < columns {
                return Err(format!(
                    "expected {} columns, found {}",
                    columns,
                    line.chars().count()
                ));
            }
            Ok(row)
        }
        SnapshotFormat::Csv => {
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            if tokens.len() < columns {
                return Err(format!(
                    "expected {} columns, found {}",
                    columns,
                    tokens.len()
                ));
            }
            tokens[..columns]
                .iter()
                .map(|&t| match t {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    _ => Err(format!("unexpected token {:?}", t)),
                })
                .collect()
        }
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Board {
    /// Displays the board in the given format, one line per row.
    ///
    /// Every line, including the last one, ends with `\n`.
    pub fn to_snapshot(&self, format: SnapshotFormat) -> String {
        let mut str = String::with_capacity((self.columns() * 2 + 1) * self.rows());
        for row in self.states() {
            match format {
                SnapshotFormat::Plaintext => {
                    str.extend(row.iter().map(|&alive| if alive { '*' } else { ' ' }));
                }
                SnapshotFormat::Csv => {
                    let tokens: Vec<&str> = row
                        .iter()
                        .map(|&alive| if alive { "1" } else { "0" })
                        .collect();
                    str.push_str(&tokens.join(","));
                }
            }
            str.push('\n');
        }
        str
    }

    /// Sets the states of all cells from a snapshot.
    ///
    /// The snapshot must have at least as many lines as the board has rows,
    /// and each of these lines must cover at least as many cells as the board
    /// has columns. Extra lines and columns are ignored.
    ///
    /// The board is only changed if the whole snapshot is valid.
    pub fn load_snapshot(&mut self, text: &str, format: SnapshotFormat) -> Result<(), Error> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < self.rows() {
            return Err(format_error(
                lines.len() + 1,
                format!("expected {} lines, found {}", self.rows(), lines.len()),
            ));
        }
        let mut states = Vec::with_capacity(self.rows());
        for (i, line) in lines.iter().take(self.rows()).enumerate() {
            let row =
                parse_row(line, self.columns(), format).map_err(|e| format_error(i + 1, e))?;
            states.push(row);
        }
        for (y, row) in states.into_iter().enumerate() {
            for (x, alive) in row.into_iter().enumerate() {
                self.set_alive((x, y), alive)?;
            }
        }
        Ok(())
    }

    /// Writes a snapshot of the board to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: SnapshotFormat) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.to_snapshot(format)).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved generation {} to {:?}", self.generation(), path);
        Ok(())
    }

    /// Sets the states of all cells from a snapshot file.
    ///
    /// See [`load_snapshot`](Self::load_snapshot). Format errors name the file.
    pub fn load_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: SnapshotFormat,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let text = read(path)?;
        self.load_snapshot(&text, format)
            .map_err(|e| e.in_file(path))?;
        debug!("loaded {:?}", path);
        Ok(())
    }

    /// Writes a colony fixture into the board, with its top-left corner at `(x, y)`.
    ///
    /// The fixture has one line per row and one character per column;
    /// `*` is a living cell and anything else is dead.
    /// The board is not resized: cells falling outside it are skipped.
    pub fn load_colony(&mut self, text: &str, x: usize, y: usize) {
        let mut skipped = 0;
        for (dy, line) in text.lines().enumerate() {
            for (dx, c) in line.chars().enumerate() {
                let coord = (x.saturating_add(dx), y.saturating_add(dy));
                if self.set_alive(coord, c == '*').is_err() {
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!(
                "colony at ({}, {}) exceeds the board, {} cells skipped",
                x, y, skipped
            );
        }
    }

    /// Reads a colony fixture from a file and writes it into the board
    /// at `(x, y)`.
    ///
    /// See [`load_colony`](Self::load_colony).
    pub fn load_colony_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        x: usize,
        y: usize,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let text = read(path)?;
        self.load_colony(&text, x, y);
        debug!("loaded colony {:?} at ({}, {})", path, x, y);
        Ok(())
    }
}
