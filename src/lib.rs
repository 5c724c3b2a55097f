//! An English/American checkers engine.
//!
//! The playing strength lives in [`board`]: a 32-square packed bitboard
//! position, shift/mask move generation with mandatory captures and
//! multi-jump chains, and a time-bounded iterative-deepening alpha-beta
//! search. [`engine`] wraps it in the interactive console protocol
//! (`go`, `setboard`, `sd`, `st`, ...).

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod board;
pub mod engine;
