//! Prints the FIFO queue walkthrough transcript.

use container_primer::walkthrough;

fn main() {
    let mut transcript = String::new();
    let _ = walkthrough::fifo_walkthrough(&mut transcript);
    print!("{transcript}");
}
