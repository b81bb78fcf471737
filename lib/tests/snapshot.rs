use cli_life_lib::{Board, Error as LifeError, Settings, SnapshotFormat};
use std::{error::Error, fs, path::PathBuf};

fn board(columns: i32, rows: i32, density: f64, seed: u64) -> Result<Board, Box<dyn Error>> {
    let board = Settings::new(columns, rows, 1)
        .set_live_density(density)
        .set_seed(seed)
        .board()?;
    Ok(board)
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cli-life-{}-{}", std::process::id(), name))
}

#[test]
fn plaintext() -> Result<(), Box<dyn Error>> {
    let mut board = board(4, 3, 0.0, 0)?;
    board.load_colony("*\n **\n   *", 0, 0);
    assert_eq!(
        board.to_snapshot(SnapshotFormat::Plaintext),
        "*   \n ** \n   *\n"
    );
    Ok(())
}

#[test]
fn csv() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 2, 0.0, 0)?;
    board.set_alive((1, 0), true)?;
    board.set_alive((2, 1), true)?;
    assert_eq!(board.to_snapshot(SnapshotFormat::Csv), "0,1,0\n0,0,1\n");
    Ok(())
}

#[test]
fn round_trip() -> Result<(), Box<dyn Error>> {
    for &format in &[SnapshotFormat::Plaintext, SnapshotFormat::Csv] {
        let original = board(17, 11, 0.5, 11)?;
        let mut loaded = board(17, 11, 0.5, 12)?;
        assert_ne!(original, loaded);
        loaded.load_snapshot(&original.to_snapshot(format), format)?;
        assert_eq!(original, loaded);
    }
    Ok(())
}

#[test]
fn round_trip_through_files() -> Result<(), Box<dyn Error>> {
    for &format in &[SnapshotFormat::Plaintext, SnapshotFormat::Csv] {
        let path = temp_file(&format!("round-trip.{}", format));
        let original = board(20, 20, 0.3, 21)?;
        original.save_to_file(&path, format)?;
        let mut loaded = board(20, 20, 0.0, 0)?;
        loaded.load_from_file(&path, format)?;
        fs::remove_file(&path)?;
        assert_eq!(original.states(), loaded.states());
    }
    Ok(())
}

#[test]
fn plaintext_other_characters_are_dead() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 1, 1.0, 0)?;
    board.load_snapshot("*01\n", SnapshotFormat::Plaintext)?;
    assert_eq!(board.states(), vec![vec![true, false, false]]);
    Ok(())
}

#[test]
fn extra_lines_and_columns_are_ignored() -> Result<(), Box<dyn Error>> {
    let mut board = board(2, 2, 0.0, 0)?;
    board.load_snapshot("1,1,1\n0,1,0\n1,1,1\n", SnapshotFormat::Csv)?;
    assert_eq!(board.states(), vec![vec![true, true], vec![false, true]]);
    Ok(())
}

#[test]
fn too_few_lines() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 3, 0.0, 0)?;
    let result = board.load_snapshot("***\n***\n", SnapshotFormat::Plaintext);
    assert!(matches!(result, Err(LifeError::Format { line: 3, .. })));
    assert_eq!(board.cell_count(), 0);
    Ok(())
}

#[test]
fn line_too_short() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 3, 0.0, 0)?;
    let result = board.load_snapshot("***\n**\n***\n", SnapshotFormat::Plaintext);
    assert!(matches!(result, Err(LifeError::Format { line: 2, .. })));
    let result = board.load_snapshot("1,1,1\n1,1,1\n1,1\n", SnapshotFormat::Csv);
    assert!(matches!(result, Err(LifeError::Format { line: 3, .. })));
    // Nothing is written unless the whole snapshot is valid.
    assert_eq!(board.cell_count(), 0);
    Ok(())
}

#[test]
fn csv_unexpected_token() -> Result<(), Box<dyn Error>> {
    let mut board = board(2, 1, 0.0, 0)?;
    let result = board.load_snapshot("1,*\n", SnapshotFormat::Csv);
    assert!(matches!(result, Err(LifeError::Format { line: 1, .. })));
    Ok(())
}

#[test]
fn format_error_names_the_file() -> Result<(), Box<dyn Error>> {
    let path = temp_file("short.txt");
    fs::write(&path, "**\n***\n***\n")?;
    let mut board = board(3, 3, 0.0, 0)?;
    let result = board.load_from_file(&path, SnapshotFormat::Plaintext);
    fs::remove_file(&path)?;
    let err = result.err().ok_or("the snapshot should be rejected")?;
    assert!(err.to_string().contains(&format!("{:?}", path)));
    match err {
        LifeError::InFile { path: p, source } => {
            assert_eq!(p, path);
            assert!(matches!(*source, LifeError::Format { line: 1, .. }));
        }
        e => panic!("unexpected error: {:?}", e),
    }
    Ok(())
}

#[test]
fn format_error_without_a_file() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 3, 0.0, 0)?;
    let err = board
        .load_snapshot("***\n", SnapshotFormat::Plaintext)
        .err()
        .ok_or("the snapshot should be rejected")?;
    assert_eq!(err.to_string(), "Format error at line 2: expected 3 lines, found 1");
    Ok(())
}

#[test]
fn missing_file() -> Result<(), Box<dyn Error>> {
    let mut board = board(3, 3, 0.0, 0)?;
    let result = board.load_from_file(temp_file("missing.txt"), SnapshotFormat::Plaintext);
    assert!(matches!(result, Err(LifeError::Io { .. })));
    Ok(())
}

#[test]
fn colony_at_offset() -> Result<(), Box<dyn Error>> {
    let mut board = board(6, 6, 0.0, 0)?;
    board.load_colony("**\n *", 3, 2);
    assert!(board.is_alive((3, 2))?);
    assert!(board.is_alive((4, 2))?);
    assert!(!board.is_alive((3, 3))?);
    assert!(board.is_alive((4, 3))?);
    assert_eq!(board.cell_count(), 3);
    assert_eq!(board.columns(), 6);
    Ok(())
}

#[test]
fn colony_is_clipped() -> Result<(), Box<dyn Error>> {
    let mut board = board(4, 4, 0.0, 0)?;
    board.load_colony("****\n****", 2, 3);
    assert_eq!(board.cell_count(), 2);
    assert!(board.is_alive((2, 3))?);
    assert!(board.is_alive((3, 3))?);
    assert_eq!(board.columns(), 4);
    assert_eq!(board.rows(), 4);
    Ok(())
}

#[test]
fn colony_from_file() -> Result<(), Box<dyn Error>> {
    let path = temp_file("colony.txt");
    fs::write(&path, " * \n  *\n***\n")?;
    let mut board = board(10, 10, 0.0, 0)?;
    board.load_colony_from_file(&path, 1, 1)?;
    fs::remove_file(&path)?;
    assert_eq!(board.cell_count(), 5);
    assert!(board.is_alive((2, 1))?);
    assert!(board.is_alive((3, 2))?);
    Ok(())
}

#[test]
fn format_names() {
    assert_eq!("plain".parse::<SnapshotFormat>(), Ok(SnapshotFormat::Plaintext));
    assert_eq!("csv".parse::<SnapshotFormat>(), Ok(SnapshotFormat::Csv));
    assert!("xml".parse::<SnapshotFormat>().is_err());
    assert_eq!(SnapshotFormat::default(), SnapshotFormat::Plaintext);
}
