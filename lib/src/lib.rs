//! __cli-life__ simulates Conway's Game of Life on a rectangular board,
//! either wrapping around the edges (a torus) or clipped at them.
//!
//! The board is created from [`Settings`], advanced generation by generation,
//! saved to and loaded from text snapshots, and examined with a few analysis
//! utilities: symmetry counting, block classification, stable phase
//! estimation and pattern search.
//!
//! # Example
//!
//! ```rust
//! use cli_life_lib::{Settings, SnapshotFormat};
//!
//! let mut board = Settings::new(5, 5, 1)
//!     .set_live_density(0.0)
//!     .set_seed(1)
//!     .board()
//!     .unwrap();
//!
//! // A blinker.
//! board.load_colony(" \n***", 1, 1);
//! board.advance();
//!
//! assert_eq!(
//!     board.to_snapshot(SnapshotFormat::Plaintext),
//!     "     \n  *  \n  *  \n  *  \n     \n"
//! );
//! ```

#![cfg_attr(docs_rs, feature(doc_cfg))]

mod analysis;
mod board;
mod cells;
mod config;
mod error;
mod rule;
mod snapshot;
mod topology;

pub use analysis::{find_submatrix, render_classified, CellKind, Pattern, Symmetry};
pub use board::Board;
pub use cells::{Coord, LifeCell};
pub use config::Settings;
pub use error::Error;
pub use rule::{next_state, RULE_STRING};
pub use snapshot::SnapshotFormat;
pub use topology::Topology;
