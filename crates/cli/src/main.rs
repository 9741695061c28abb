//! Line protocol for driving the draughts engine from another process.
//!
//! One command per line on stdin, replies on stdout. Logs go to stderr.

use engine::board::Board;
use engine::constants::Color;
use engine::coords::{parse_square, square_name};
use engine::error::NotationError;
use engine::game::{GameState, Selection};
use engine::history::Game;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Protocol {
    game: Game,
}

impl Protocol {
    fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Handles a single command line. Returns `false` once the session should end.
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = parts.first() else {
            return Ok(true);
        };

        match *command {
            "isready" => writeln!(out, "readyok")?,
            "newgame" => self.game = Game::new(),
            "position" => match parse_position(&parts[1..]) {
                Ok((state, moves)) => {
                    let mut game = Game::from_state(state);
                    match moves.iter().find(|text| !play_sequence(&mut game, text)) {
                        Some(text) => {
                            warn!(mv = *text, "illegal move in position command");
                            writeln!(out, "rejected {}", text)?;
                        }
                        None => self.game = game,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "bad position command");
                    writeln!(out, "error {}", e)?;
                }
            },
            "select" => match parts.get(1).map(|s| parse_square(s)) {
                Some(Ok(sq)) => {
                    self.game.select(sq);
                    match self.game.state().selection() {
                        Selection::Idle => writeln!(out, "idle")?,
                        Selection::Selected(sq) => writeln!(out, "selected {}", square_name(sq))?,
                        Selection::Chaining(sq) => writeln!(out, "chain {}", square_name(sq))?,
                    }
                }
                Some(Err(e)) => writeln!(out, "error {}", e)?,
                None => writeln!(out, "error missing square")?,
            },
            "move" => match parts.get(1).map(|s| parse_square(s)) {
                Some(Ok(sq)) => match self.game.play(sq) {
                    Some(mv) => {
                        match self.game.state().chain_origin() {
                            Some(origin) => writeln!(out, "moved {} chain {}", mv.to_notation(), square_name(origin))?,
                            None => writeln!(out, "moved {}", mv.to_notation())?,
                        }
                        if let Some(side) = self.game.winner() {
                            writeln!(out, "winner {}", side.name())?;
                        }
                    }
                    None => writeln!(out, "rejected")?,
                },
                Some(Err(e)) => writeln!(out, "error {}", e)?,
                None => writeln!(out, "error missing square")?,
            },
            "targets" => writeln!(out, "targets {}", self.game.state().legal_targets())?,
            "origins" => writeln!(out, "origins {}", self.game.state().movable_origins())?,
            "show" => {
                write!(out, "{}", self.game.state().board())?;
                writeln!(out, "turn {}", self.game.state().active_player().name())?;
            }
            "notation" => {
                let state = self.game.state();
                writeln!(out, "board {} {}", state.board().to_notation(), state.active_player().to_char())?;
            }
            "winner" => {
                let name = self.game.winner().map_or("none", Color::name);
                writeln!(out, "winner {}", name)?;
            }
            "undo" => {
                if self.game.undo() {
                    writeln!(out, "undone")?;
                } else {
                    writeln!(out, "rejected")?;
                }
            }
            "history" => {
                for (i, turn) in self.game.history().turns().iter().enumerate() {
                    writeln!(out, "{}. {} {}", i + 1, turn.player.name(), turn.to_notation())?;
                }
            }
            "quit" => return Ok(false),
            _ => warn!(command = *command, "unknown command"),
        }
        Ok(true)
    }
}

/// Plays a move sequence like `c3-d4` or `b6xd4xf2` on `game`.
fn play_sequence(game: &mut Game, text: &str) -> bool {
    let squares: Result<Vec<usize>, NotationError> = text.split(['-', 'x']).map(parse_square).collect();
    let Ok(squares) = squares else {
        return false;
    };
    let Some((&origin, destinations)) = squares.split_first() else {
        return false;
    };
    if destinations.is_empty() {
        return false;
    }

    if game.state().chain_origin().is_none() {
        game.select(origin);
    }
    if game.state().selection().origin() != Some(origin) {
        return false;
    }
    destinations.iter().all(|&sq| game.play(sq).is_some())
}

/// Parses the arguments of `position startpos|board <notation> <d|l> [moves ...]`.
fn parse_position<'a>(args: &'a [&'a str]) -> Result<(GameState, &'a [&'a str]), NotationError> {
    let (state, rest) = match args {
        ["startpos", rest @ ..] => (GameState::new(), rest),
        ["board", layout, side, rest @ ..] => {
            let board = Board::from_notation(layout)?;
            let player = side
                .chars()
                .next()
                .filter(|_| side.len() == 1)
                .and_then(Color::from_char)
                .ok_or_else(|| NotationError::BadSide(side.to_string()))?;
            (GameState::from_board(board, player), rest)
        }
        _ => return Err(NotationError::BadPosition(args.join(" "))),
    };

    let moves = match rest {
        ["moves", moves @ ..] => moves,
        _ => &[],
    };
    Ok((state, moves))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut protocol = Protocol::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    info!("checkers protocol ready");

    for line in stdin.lock().lines() {
        let line = line?;
        if !protocol.handle(&line, &mut stdout)? {
            break;
        }
        stdout.flush()?;
    }
    Ok(())
}
