//! Console command parsing.

/// Argument to the `sd` and `st` limit commands. Anything that is not a
/// plain number (including the word `unlimited`) lifts the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitArg {
    Unlimited,
    Bounded(u32),
}

/// Engine console commands. Anything unrecognized is handed over as a
/// candidate move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Think aloud about the current position without moving
    Analyze,
    /// Set Black on move; the engine will play White
    Black,
    /// Play neither color
    Force,
    /// Leave force mode and play the color that is on move
    Go,
    Help,
    /// Show the record of moves
    History,
    /// Reset to the starting position
    New,
    /// Keepalive; answered with `pong`
    Ping(Option<String>),
    /// Background thinking toggle (not implemented)
    Ponder,
    /// Show the current board
    Print,
    Quit,
    /// Rotate the board display 180 degrees
    Rotate,
    /// Set up a position from a descriptor; `None` when the argument is
    /// missing
    SetBoard(Option<String>),
    /// Limit search depth
    SetDepth(Option<LimitArg>),
    /// Limit thinking time per move, in seconds
    SetTime(Option<LimitArg>),
    /// Take back the last half-move
    Undo,
    /// Set White on move; the engine will play Black
    White,
    /// A move in square-pair notation, e.g. `b6a5`
    Move(String),
}

/// Parse one input line. `None` for blank lines.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    Some(match head {
        "?" | "help" => Command::Help,
        "analyze" => Command::Analyze,
        "black" => Command::Black,
        "force" => Command::Force,
        "go" => Command::Go,
        "history" => Command::History,
        "new" => Command::New,
        "ping" => Command::Ping(parts.next().map(str::to_string)),
        "ponder" => Command::Ponder,
        "print" => Command::Print,
        "quit" => Command::Quit,
        "rotate" => Command::Rotate,
        "sd" => Command::SetDepth(parts.next().map(parse_limit)),
        "st" => Command::SetTime(parts.next().map(parse_limit)),
        "setboard" => {
            let rest: Vec<&str> = parts.collect();
            if rest.is_empty() {
                Command::SetBoard(None)
            } else {
                Command::SetBoard(Some(rest.join(" ")))
            }
        }
        "undo" => Command::Undo,
        "white" => Command::White,
        other => Command::Move(other.to_string()),
    })
}

fn parse_limit(arg: &str) -> LimitArg {
    match arg.parse::<u32>() {
        Ok(n) => LimitArg::Bounded(n),
        Err(_) => LimitArg::Unlimited,
    }
}
