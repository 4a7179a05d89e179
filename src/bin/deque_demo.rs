//! Prints the double-ended queue walkthrough transcript.

use container_primer::walkthrough;

fn main() {
    let mut transcript = String::new();
    let _ = walkthrough::deque_walkthrough(&mut transcript);
    print!("{transcript}");
}
