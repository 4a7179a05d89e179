//! Prints the priority queue walkthrough transcript.

use container_primer::walkthrough;

fn main() {
    let mut transcript = String::new();
    let _ = walkthrough::priority_walkthrough(&mut transcript);
    print!("{transcript}");
}
