use crate::{
    args::{Args, Mode},
    settings::load_settings,
};
use cli_life_lib::{Board, Pattern, SnapshotFormat, Symmetry};
use log::info;
use std::{error::Error, path::Path};

/// Sets up the board described by the arguments.
pub(crate) fn board(args: &Args) -> Result<Board, Box<dyn Error>> {
    let mut settings = load_settings(&args.settings, args.settings_given)?;
    if let Some(seed) = args.seed {
        settings = settings.set_seed(seed);
    }
    if let Some(topology) = args.topology {
        settings = settings.set_topology(topology);
    }
    let mut board = settings.board()?;
    if let Some(colony) = &args.colony {
        let (x, y) = args.colony_at;
        board.load_colony_from_file(colony, x, y)?;
    }
    info!(
        "{} x {} board, {} living cells",
        board.columns(),
        board.rows(),
        board.cell_count()
    );
    Ok(board)
}

/// The status line shown above the board.
pub(crate) fn status(board: &Board, symmetry: Symmetry) -> String {
    format!(
        "Gen: {}  Cells: {}  Symmetric ({}): {}/{}",
        board.generation(),
        board.cell_count(),
        symmetry,
        board.symmetric_count(symmetry),
        board.columns() * board.rows()
    )
}

/// Prints the board for `generations` generations.
pub(crate) fn run_batch(mut board: Board, format: SnapshotFormat, symmetry: Symmetry, generations: u64) {
    for _ in 0..generations {
        println!("{}", status(&board, symmetry));
        print!("{}", board.to_snapshot(format));
        board.advance();
    }
    println!("{}", status(&board, symmetry));
    print!("{}", board.to_snapshot(format));
}

/// Prints the requested analyses of the board.
pub(crate) fn analyze(
    mut board: Board,
    symmetry: Symmetry,
    stable_phase: Option<i32>,
    explore_symmetry: Option<u64>,
    find: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    println!("{}", status(&board, symmetry));
    if let Some(path) = find {
        let pattern = Pattern::from_file(path)?;
        match board.find_pattern(&pattern) {
            Some((row, column)) => println!("Found {:?} at row {}, column {}.", path, row, column),
            None => println!("{:?} not found.", path),
        }
    }
    if let Some(generations) = explore_symmetry {
        match board.explore_symmetry(generations) {
            Some(gen) => println!("Mirror symmetric after {} generations.", gen),
            None => println!("Not mirror symmetric within {} generations.", generations),
        }
    }
    if let Some(trials) = stable_phase {
        let time = board.stable_phase_time(trials);
        println!("Stable phase time over {} trials: {}.", trials, time);
    }
    Ok(())
}

pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let board = board(&args)?;
    match args.mode {
        Mode::Analysis {
            stable_phase,
            explore_symmetry,
            ref find,
        } => analyze(
            board,
            args.symmetry,
            stable_phase,
            explore_symmetry,
            find.as_deref(),
        ),
        Mode::Batch { generations } => {
            run_batch(board, args.format, args.symmetry, generations);
            Ok(())
        }
        Mode::Interactive => interactive(board, &args),
    }
}

#[cfg(feature = "tui")]
fn interactive(board: Board, args: &Args) -> Result<(), Box<dyn Error>> {
    crate::tui::run_tui(board, args)
}

#[cfg(not(feature = "tui"))]
fn interactive(board: Board, args: &Args) -> Result<(), Box<dyn Error>> {
    run_batch(board, args.format, args.symmetry, 10);
    Ok(())
}
