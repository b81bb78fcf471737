use crate::{args::Args, cli::status, export::export};
use cli_life_lib::{render_classified, Board, SnapshotFormat};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use std::{
    error::Error,
    io::{self, Stdout, Write},
    thread,
    time::Duration,
};

const HELP: &str = "[s] save  [l] load  [e] export  [b] blocks  [q] quit";

/// Number of frames a message stays on the bottom bar.
const MESSAGE_FRAMES: u32 = 3;

/// The bottom bar: a short-lived message, or the key help.
#[derive(Debug, Default)]
struct BottomBar {
    message: Option<String>,
    frames: u32,
}

impl BottomBar {
    fn show(&mut self, message: String) {
        self.message = Some(message);
        self.frames = MESSAGE_FRAMES;
    }

    /// The text for the next frame.
    fn next_text(&mut self) -> &str {
        if self.frames == 0 {
            self.message = None;
        } else {
            self.frames -= 1;
        }
        self.message.as_deref().unwrap_or(HELP)
    }
}

struct LifeWindow {
    out: Stdout,
    block_view: bool,
    bar: BottomBar,
}

impl LifeWindow {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(LifeWindow {
            out,
            block_view: false,
            bar: BottomBar::default(),
        })
    }

    fn update(&mut self, board: &Board, args: &Args) -> io::Result<()> {
        let grid = if self.block_view {
            render_classified(&board.classify_blocks())
        } else {
            board.to_snapshot(SnapshotFormat::Plaintext)
        };
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(status(board, args.symmetry)),
            SetAttribute(Attribute::Reset)
        )?;
        let mut y: u16 = 1;
        for line in grid.lines() {
            queue!(self.out, cursor::MoveTo(0, y), Print(line))?;
            y = y.saturating_add(1);
        }
        let bottom = self.bar.next_text();
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(bottom),
            SetAttribute(Attribute::Reset)
        )?;
        self.out.flush()
    }

    fn bottom_line(&mut self, board: &Board, text: &str) -> io::Result<()> {
        let y = u16::try_from(board.rows() + 1).unwrap_or(u16::MAX);
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Reverse),
            Print(text),
            SetAttribute(Attribute::Reset)
        )?;
        self.out.flush()
    }

    fn quit(&mut self, board: &Board) -> io::Result<bool> {
        self.bottom_line(board, "Are you sure to quit? [Y/n]")?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(matches!(
                    key.code,
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter
                ));
            }
        }
    }

    /// Handles a key press. Returns `true` if the loop should stop.
    fn handle_key(&mut self, key: KeyEvent, board: &mut Board, args: &Args) -> io::Result<bool> {
        let message = match key.code {
            KeyCode::Char('s') => Some(match board.save_to_file(&args.state_file, args.format) {
                Ok(()) => format!("Saved to {:?}.", args.state_file),
                Err(e) => e.to_string(),
            }),
            KeyCode::Char('l') => Some(match board.load_from_file(&args.state_file, args.format) {
                Ok(()) => format!("Loaded from {:?}.", args.state_file),
                Err(e) => e.to_string(),
            }),
            KeyCode::Char('e') => Some(match export(board, &args.state_file, args.format) {
                Ok((snapshot, image)) => format!("Exported to {:?} and {:?}.", snapshot, image),
                Err(e) => e.to_string(),
            }),
            KeyCode::Char('b') => {
                self.block_view = !self.block_view;
                None
            }
            KeyCode::Char('q') => return self.quit(board),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            _ => None,
        };
        if let Some(message) = message {
            self.bar.show(message);
        }
        Ok(false)
    }
}

impl Drop for LifeWindow {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode()
            .and_then(|()| execute!(self.out, LeaveAlternateScreen, cursor::Show))
        {
            warn!("unable to restore the terminal: {}", e);
        }
    }
}

/// Runs the interactive loop until the user quits.
///
/// Each iteration shows the board, advances it by one generation,
/// handles at most one key press and then waits for the interval.
pub(crate) fn run_tui(mut board: Board, args: &Args) -> Result<(), Box<dyn Error>> {
    let mut window = LifeWindow::new()?;

    loop {
        window.update(&board, args)?;
        board.advance();
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && window.handle_key(key, &mut board, args)? {
                    break;
                }
            }
        }
        thread::sleep(args.interval);
    }

    drop(window);
    print!("{}", board.to_snapshot(args.format));
    Ok(())
}
