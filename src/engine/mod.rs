//! Console protocol engine.
//!
//! A line-oriented dispatcher in the classic checkers-program style: each
//! input line is either a command or a move. Between commands the engine
//! ponders: it keeps deepening its kept line on the current position with no
//! limits, silently, until new input interrupts the search.

pub mod command;
mod io;
mod output;

use std::thread;
use std::time::Duration;

use crate::board::search::{think, Verbosity};
use crate::board::{Board, Move};

use command::{parse_command, Command, LimitArg};
use io::Io;

/// Engine state: the live board, the game record, and the search limits.
pub struct Engine {
    io: Io,
    board: Board,
    start_board: Board,
    history: Vec<Move>,
    best_moves: Vec<Move>,
    rotate: bool,
    force_mode: bool,
    depth_limit: Option<u32>,
    time_limit_secs: Option<u64>,
}

impl Engine {
    /// A fresh engine on the opening position: unlimited depth, ten seconds
    /// per move, attached to the process console.
    #[must_use]
    pub fn new() -> Self {
        Engine {
            io: Io::from_stdin(),
            board: Board::opening(),
            start_board: Board::opening(),
            history: Vec::new(),
            best_moves: Vec::new(),
            rotate: false,
            force_mode: false,
            depth_limit: None,
            time_limit_secs: Some(10),
        }
    }

    /// The main loop: prompt, ponder until input, dispatch. Returns on `quit`
    /// or end of input.
    pub fn run(&mut self) {
        self.print_board();
        loop {
            self.prompt();
            self.ponder();
            if self.io.eof() {
                break;
            }
            let Some(line) = self.io.read_line() else {
                break;
            };
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            trace_log!("command: {cmd:?}");
            if !self.dispatch(cmd) {
                break;
            }
        }
        self.io.flush();
    }

    /// Handle one command; `false` ends the main loop.
    fn dispatch(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => return false,
            Command::Help => self.io.write(output::HELP),
            Command::Analyze => self.do_analyze(),
            Command::Black => {
                self.board.set_black_to_move();
                self.best_moves.clear();
            }
            Command::White => {
                self.board.set_white_to_move();
                self.best_moves.clear();
            }
            Command::Force => self.force_mode = true,
            Command::Go => {
                self.force_mode = false;
                self.computer_makes_move();
            }
            Command::History => self.do_history(),
            Command::New => self.do_new(),
            Command::Ping(arg) => match arg {
                Some(arg) => self.io.write(&format!("pong {arg}\n")),
                None => self.io.write("pong\n"),
            },
            Command::Ponder => self.io.write("Error (command not implemented): ponder\n"),
            Command::Print => self.print_board(),
            Command::Rotate => {
                self.rotate = !self.rotate;
                self.print_board();
            }
            Command::SetBoard(arg) => self.do_setboard(arg),
            Command::SetDepth(arg) => match arg {
                Some(limit) => self.depth_limit = bound_of(limit),
                None => self.io.write("Error (option missing): sd\n"),
            },
            Command::SetTime(arg) => match arg {
                Some(limit) => self.time_limit_secs = bound_of(limit).map(u64::from),
                None => self.io.write("Error (option missing): st\n"),
            },
            Command::Undo => self.do_undo(),
            Command::Move(text) => {
                if !self.human_makes_move(&text) {
                    self.computer_makes_move();
                }
            }
        }
        true
    }

    /// Apply a move to the game: record it, play it on the board, and keep
    /// the pondered line only if the move follows it. Returns the multi-jump
    /// continuation flag from the board.
    fn apply_move(&mut self, m: &Move) -> bool {
        self.history.push(*m);
        let continues = self.board.make_move(m);

        if !self.best_moves.is_empty() {
            if self.best_moves[0] == *m {
                self.best_moves.remove(0);
            } else {
                self.best_moves.clear();
            }
        }
        continues
    }

    /// Play a move given by the user. Returns `true` while the user is still
    /// on move (multi-jump in progress, or the move did not parse).
    fn human_makes_move(&mut self, text: &str) -> bool {
        match self.board.find_move(text) {
            Ok(m) => {
                let continues = self.apply_move(&m);
                self.print_board();
                self.report_result();
                continues
            }
            Err(err) => {
                self.io.write(&format!("Error ({err}): {text}\n"));
                true
            }
        }
    }

    /// Think under the configured limits and play the chosen line, following
    /// multi-jump continuations; think again if a chain outruns the line.
    fn computer_makes_move(&mut self) {
        if self.force_mode {
            return;
        }
        self.io.write("  Thinking ...\n");
        loop {
            think(
                &self.io,
                &mut self.best_moves,
                &self.board,
                self.depth_limit,
                self.time_limit_secs.map(Duration::from_secs),
                Verbosity::Verbose,
            );
            if self.best_moves.is_empty() {
                break;
            }
            let mut continues;
            loop {
                let m = self.best_moves[0];
                self.io.write(&format!("move {m}\n"));
                continues = self.apply_move(&m);
                self.print_board();
                if !continues || self.best_moves.is_empty() {
                    break;
                }
            }
            if !continues {
                break;
            }
        }
        self.report_result();
    }

    fn do_analyze(&mut self) {
        self.io.write("  Analyzing ...\n");
        think(
            &self.io,
            &mut self.best_moves,
            &self.board,
            self.depth_limit,
            self.time_limit_secs.map(Duration::from_secs),
            Verbosity::Verbose,
        );
    }

    fn do_new(&mut self) {
        self.board = Board::opening();
        self.start_board = Board::opening();
        self.history.clear();
        self.best_moves.clear();
        self.print_board();
    }

    fn do_setboard(&mut self, arg: Option<String>) {
        let Some(text) = arg else {
            self.io.write("Error (option missing): setboard\n");
            return;
        };
        match text.parse::<Board>() {
            Ok(board) => {
                self.board = board.clone();
                self.start_board = board;
                self.history.clear();
                self.best_moves.clear();
                self.print_board();
                self.io.flush();
            }
            Err(err) => self.io.write(&format!("Error ({err}): setboard\n")),
        }
    }

    fn do_undo(&mut self) {
        if let Some(m) = self.history.pop() {
            self.board.undo_move(&m);
            self.best_moves.clear();
            self.print_board();
        } else {
            self.io.write("Error (no move to undo): undo\n");
        }
    }

    /// Replay the game record from its starting position.
    fn do_history(&mut self) {
        let mut board = self.start_board.clone();
        for m in &self.history {
            self.io.write(&format!(
                "  {} {} {m}\n",
                board.side_to_move(),
                if m.is_capture() { "jump" } else { "move" },
            ));
            board.make_move(m);
        }
    }

    /// Deepen the kept line on the user's time. Runs without limits and
    /// without output; new input interrupts it. When the search finishes on
    /// its own (forced game end), wait for input instead.
    fn ponder(&mut self) {
        if self.force_mode
            || !think(
                &self.io,
                &mut self.best_moves,
                &self.board,
                None,
                None,
                Verbosity::Silent,
            )
        {
            self.idle();
        }
    }

    /// Sleep-poll until a line or end of input arrives.
    fn idle(&self) {
        loop {
            self.io.flush();
            if self.io.lines_to_read() || self.io.eof() {
                break;
            }
            thread::sleep(Duration::from_micros(500));
        }
    }

    fn prompt(&self) {
        self.io
            .write(&format!("  *** {} move ***\n", self.board.side_to_move()));
    }

    fn print_board(&self) {
        self.io.write(&output::render_board(&self.board, self.rotate));
    }

    fn report_result(&self) {
        if let Some(line) = output::result_line(&self.board) {
            self.io.write(line);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

fn bound_of(limit: LimitArg) -> Option<u32> {
    match limit {
        LimitArg::Unlimited => None,
        LimitArg::Bounded(n) => Some(n),
    }
}
