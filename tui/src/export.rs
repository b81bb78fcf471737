//! Exporting the board as a snapshot and an image.

use cli_life_lib::{Board, Error as LifeError, SnapshotFormat};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Maximal line length of a plain PBM file.
const PBM_LINE: usize = 70;

/// Renders the board as a plain (`P1`) PBM image.
///
/// Every cell becomes a `cell_size` × `cell_size` square of pixels,
/// black for living cells.
pub(crate) fn to_pbm(board: &Board) -> String {
    let scale = board.cell_size();
    let mut pbm = format!("P1\n{} {}\n", board.width(), board.height());
    for row in board.states() {
        let pixels: String = row
            .iter()
            .flat_map(|&alive| std::iter::repeat(if alive { '1' } else { '0' }).take(scale))
            .collect();
        for _ in 0..scale {
            for (i, c) in pixels.chars().enumerate() {
                if i > 0 && i % PBM_LINE == 0 {
                    pbm.push('\n');
                }
                pbm.push(c);
            }
            pbm.push('\n');
        }
    }
    pbm
}

/// Writes a snapshot and a PBM image of the board next to `base`,
/// named after its stem and the current generation.
///
/// Returns the paths of the two files.
pub(crate) fn export(
    board: &Board,
    base: &Path,
    format: SnapshotFormat,
) -> Result<(PathBuf, PathBuf), LifeError> {
    let stem = base
        .file_stem()
        .map_or_else(|| String::from("board"), |s| s.to_string_lossy().into_owned());
    let name = format!("{}-gen{}", stem, board.generation());
    let snapshot = base.with_file_name(format!("{}.txt", name));
    let image = base.with_file_name(format!("{}.pbm", name));
    board.save_to_file(&snapshot, format)?;
    fs::write(&image, to_pbm(board)).map_err(|source| LifeError::Io {
        path: image.clone(),
        source,
    })?;
    info!("exported to {:?} and {:?}", snapshot, image);
    Ok((snapshot, image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli_life_lib::Settings;
    use std::error::Error;

    #[test]
    fn scaled_image() -> Result<(), Box<dyn Error>> {
        let mut board = Settings::new(4, 2, 2).set_live_density(0.0).set_seed(0).board()?;
        board.set_alive((0, 0), true)?;
        assert_eq!(to_pbm(&board), "P1\n4 2\n1100\n1100\n");
        Ok(())
    }

    #[test]
    fn long_lines_are_wrapped() -> Result<(), Box<dyn Error>> {
        let board = Settings::new(100, 1, 1).set_live_density(1.0).set_seed(0).board()?;
        let pbm = to_pbm(&board);
        let lines: Vec<&str> = pbm.lines().collect();
        let (full, rest) = ("1".repeat(70), "1".repeat(30));
        assert_eq!(lines, vec!["P1", "100 1", full.as_str(), rest.as_str()]);
        Ok(())
    }

    #[test]
    fn export_files() -> Result<(), Box<dyn Error>> {
        let dir = std::env::temp_dir();
        let base = dir.join(format!("cli-life-{}-export.txt", std::process::id()));
        let board = Settings::new(5, 5, 1).set_live_density(0.5).set_seed(8).board()?;
        let (snapshot, image) = export(&board, &base, SnapshotFormat::Csv)?;
        assert!(snapshot.ends_with(format!("cli-life-{}-export-gen0.txt", std::process::id())));
        assert_eq!(fs::read_to_string(&snapshot)?, board.to_snapshot(SnapshotFormat::Csv));
        assert_eq!(fs::read_to_string(&image)?, to_pbm(&board));
        fs::remove_file(snapshot)?;
        fs::remove_file(image)?;
        Ok(())
    }
}
