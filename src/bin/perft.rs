use std::env;
use std::time::Instant;

use checkers_engine::board::Board;

fn main() {
    let depth: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(8)
        .max(1);

    let board = Board::opening();
    println!("perft divide from the opening, depth {depth}");
    let start = Instant::now();
    let mut total = 0u64;
    for m in &board.generate_moves() {
        let mut child = board.clone();
        let count = if child.make_move(m) {
            child.perft(depth)
        } else {
            child.perft(depth - 1)
        };
        println!("  {m}: {count}");
        total += count;
    }
    println!("total {total} in {:.3?}", start.elapsed());
}
