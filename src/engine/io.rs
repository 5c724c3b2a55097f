//! Line-buffered, non-blocking console I/O.
//!
//! Reading must never block the engine while it is thinking: the search polls
//! for new input between nodes and pondering stops the moment a command
//! arrives. A detached thread owns stdin and hands complete lines over a
//! channel; the engine side drains the channel without blocking and only
//! waits on it when it explicitly asks for the next line. Output goes through
//! one buffered writer, flushed at the search poll points and before blocking
//! reads.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, BufRead, BufWriter, Stdout, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::board::search::SearchIo;

pub struct Io {
    incoming: Receiver<String>,
    pending: RefCell<VecDeque<String>>,
    closed: Cell<bool>,
    out: RefCell<BufWriter<Stdout>>,
}

impl Io {
    /// Start the reader thread on stdin and wrap stdout.
    #[must_use]
    pub fn from_stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Io {
            incoming: rx,
            pending: RefCell::new(VecDeque::new()),
            closed: Cell::new(false),
            out: RefCell::new(BufWriter::new(io::stdout())),
        }
    }

    /// Move every line the reader has produced so far into the local buffer.
    fn pump(&self) {
        loop {
            match self.incoming.try_recv() {
                Ok(line) => self.pending.borrow_mut().push_back(line),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed.set(true);
                    break;
                }
            }
        }
    }

    /// Whether a complete line is waiting to be read.
    #[must_use]
    pub fn lines_to_read(&self) -> bool {
        self.pump();
        !self.pending.borrow().is_empty()
    }

    /// Whether input ended and every buffered line has been consumed.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.pump();
        self.closed.get() && self.pending.borrow().is_empty()
    }

    /// Next input line, blocking if none is buffered. `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        self.pump();
        if let Some(line) = self.pending.borrow_mut().pop_front() {
            return Some(line);
        }
        if self.closed.get() {
            return None;
        }
        self.flush();
        match self.incoming.recv() {
            Ok(line) => Some(line),
            Err(_) => {
                self.closed.set(true);
                None
            }
        }
    }

    pub fn write(&self, text: &str) {
        let _ = self.out.borrow_mut().write_all(text.as_bytes());
    }

    pub fn flush(&self) {
        let _ = self.out.borrow_mut().flush();
    }
}

impl SearchIo for Io {
    fn poll_input(&self) -> bool {
        self.flush();
        self.lines_to_read() || self.eof()
    }

    fn write(&self, text: &str) {
        Io::write(self, text);
    }
}
