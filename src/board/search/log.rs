//! Verbose search output.

use std::fmt::Write as _;
use std::time::Duration;

use crate::board::types::Move;

/// Destination for search output and source of interruption, polled at the
/// node-count interval inside alpha-beta.
pub trait SearchIo {
    /// Flush buffered output and report whether the search must unwind
    /// because input arrived or the stream ended.
    fn poll_input(&self) -> bool;

    /// Emit verbose search output.
    fn write(&self, text: &str);
}

/// I/O sink that never interrupts and discards output. Used for fixed-depth
/// analysis, benches, and tests.
pub struct SilentIo;

impl SearchIo for SilentIo {
    fn poll_input(&self) -> bool {
        false
    }

    fn write(&self, _text: &str) {}
}

/// One line (plus optional title block) of per-iteration statistics:
/// right-justified depth, score (`-` when the iteration timed out), elapsed
/// seconds, node count, then the PV eight moves per row.
pub(crate) fn iteration_report(
    depth: u32,
    score: Option<i32>,
    elapsed: Duration,
    nodes: u64,
    pv: &[Move],
    with_title: bool,
) -> String {
    let mut out = String::new();
    if with_title {
        out.push_str("  depth   value      time       nodes\n");
        out.push_str(
            "  ----------------------------------------------------------------------------\n",
        );
    }
    let _ = write!(out, "  {depth:5}  ");
    match score {
        Some(value) => {
            let _ = write!(out, "{value:6}");
        }
        None => out.push_str("     -"),
    }
    let _ = write!(
        out,
        " {:5}.{:03} {nodes:11} ",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    for (i, m) in pv.iter().enumerate() {
        if i > 0 && i % 8 == 0 {
            out.push_str("\n                                      ");
        }
        let _ = write!(out, " {m}");
    }
    out.push('\n');
    out
}
