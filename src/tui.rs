//! The terminal user interface.
//!
//! Arrow keys move a cursor over the board. Enter or Space acts on the square
//! under the cursor: a piece is selected, an empty square is a move target.

use crate::config::{Config, GlyphSet};
use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{execute, queue};
use engine::constants::{BOARD_SIZE, Cell};
use engine::coords::{index_of, is_playable_cell, square_name};
use engine::history::Game;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Cursor(isize, isize),
    Activate,
    Undo,
    NewGame,
    Quit,
}

struct App {
    game: Game,
    cursor: (usize, usize),
}

impl App {
    fn new() -> Self {
        Self {
            game: Game::new(),
            // Start on Dark's front row.
            cursor: (2, 1),
        }
    }

    /// Returns `false` once the user asked to quit.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Cursor(dr, dc) => {
                let (row, col) = self.cursor;
                self.cursor = (
                    row.saturating_add_signed(dr).min(BOARD_SIZE - 1),
                    col.saturating_add_signed(dc).min(BOARD_SIZE - 1),
                );
            }
            Action::Activate => activate(&mut self.game, index_of(self.cursor.0, self.cursor.1)),
            Action::Undo => {
                self.game.undo();
            }
            Action::NewGame => self.game.reset(),
            Action::Quit => return false,
        }
        true
    }
}

/// Routes a click: occupied squares are selections, empty squares moves.
fn activate(game: &mut Game, index: usize) {
    if game.state().board().cell(index).is_empty() {
        if let Some(mv) = game.play(index) {
            debug!(mv = %mv.to_notation(), "played");
        }
    } else {
        game.select(index);
    }
}

fn key_action(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Runs the interactive board until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    let result = in_alternate_screen(&mut stdout, |out| event_loop(out, config));
    let disabled = terminal::disable_raw_mode();
    result.and(disabled)
}

/// Runs `body` on the alternate screen. The main screen and cursor are
/// restored whether or not `body` (or entering the screen) fails.
fn in_alternate_screen<W: Write>(out: &mut W, body: impl FnOnce(&mut W) -> io::Result<()>) -> io::Result<()> {
    let result = execute!(out, terminal::EnterAlternateScreen, cursor::Hide).and_then(|()| body(out));
    let left = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    result.and(left)
}

fn event_loop<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    let mut app = App::new();
    loop {
        draw(out, &app, config)?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(action) = key_action(key) {
            if !app.apply(action) {
                return Ok(());
            }
        }
    }
}

fn symbol(cell: Cell, glyphs: GlyphSet) -> char {
    match (glyphs, cell) {
        (_, Cell::Empty) => ' ',
        (GlyphSet::Unicode, _) => cell.glyph(),
        (GlyphSet::Ascii, _) => cell.to_char(),
    }
}

fn draw<W: Write>(out: &mut W, app: &App, config: &Config) -> io::Result<()> {
    let state = app.game.state();
    let hints = if config.display.show_hints {
        state.legal_targets()
    } else {
        Default::default()
    };
    let selected = state.selection().origin();

    queue!(out, terminal::Clear(ClearType::All), MoveTo(0, 0))?;
    for row in 0..BOARD_SIZE {
        queue!(out, MoveTo(0, row as u16), Print(format!("{} ", BOARD_SIZE - row)))?;
        for col in 0..BOARD_SIZE {
            let index = index_of(row, col);
            let background = if (row, col) == app.cursor {
                TermColor::Blue
            } else if selected == Some(index) {
                TermColor::DarkYellow
            } else if hints.contains(index) {
                TermColor::DarkGreen
            } else if is_playable_cell(row, col) {
                TermColor::DarkGrey
            } else {
                TermColor::Grey
            };
            queue!(
                out,
                SetBackgroundColor(background),
                SetForegroundColor(TermColor::White),
                Print(format!(" {} ", symbol(state.board().cell(index), config.display.glyphs))),
                ResetColor
            )?;
        }
    }

    let files: String = (0..BOARD_SIZE).map(|c| format!(" {} ", (b'a' + c as u8) as char)).collect();
    queue!(out, MoveTo(0, BOARD_SIZE as u16), Print(format!("  {}", files)))?;

    let status = match (app.game.winner(), state.chain_origin()) {
        (Some(side), _) => format!("Winner: {}", side.name()),
        (None, Some(origin)) => format!(
            "Turn: {} (continue capturing from {})",
            state.active_player().name(),
            square_name(origin)
        ),
        (None, None) => format!("Turn: {}", state.active_player().name()),
    };
    queue!(out, MoveTo(0, BOARD_SIZE as u16 + 2), Print(status))?;

    if let Some(turn) = app.game.history().turns().last() {
        queue!(
            out,
            MoveTo(0, BOARD_SIZE as u16 + 3),
            Print(format!("Last: {} {}", turn.player.name(), turn.to_notation()))
        )?;
    }
    queue!(
        out,
        MoveTo(0, BOARD_SIZE as u16 + 5),
        Print("arrows move  enter select/move  u undo  n new  q quit")
    )?;
    out.flush()
}
