//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Cell size should be positive, got {0}.
    NonPositiveCellSize(i32),
    /// Width and height should not be negative, got {0} x {1}.
    NegativeSize(i32, i32),
    /// A {0} x {1} area with cell size {2} leaves no cells on the board.
    EmptyBoard(i32, i32, i32),
    /// Cell at {0:?} is outside the board.
    OutOfBounds(Coord),
    /// Unable to access {path:?}: {source}
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Format error at line {line}: {reason}
    Format { line: usize, reason: String },
    /// Invalid pattern: {0}
    InvalidPattern(String),
    /// Error in {path:?}: {source}
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches a file name to an error raised while parsing text
    /// that came from that file.
    ///
    /// I/O errors already carry their path and are returned unchanged.
    pub(crate) fn in_file<P: Into<PathBuf>>(self, file: P) -> Self {
        match self {
            e @ (Error::Format { .. } | Error::InvalidPattern(_)) => Error::InFile {
                path: file.into(),
                source: Box::new(e),
            },
            e => e,
        }
    }
}
