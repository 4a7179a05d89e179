//! Prints the sorted multiset walkthrough transcript.

use container_primer::walkthrough;

fn main() {
    let mut transcript = String::new();
    let _ = walkthrough::multiset_walkthrough(&mut transcript);
    print!("{transcript}");
}
