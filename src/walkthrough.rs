//! Fixed demonstration scripts for the four containers.
//!
//! Each function replays a short, hard-coded sequence of insertions,
//! removals, and printouts against one container and writes the resulting
//! transcript to the given sink. The scripts take no input and the
//! transcripts are byte-for-byte deterministic.

use core::fmt::{self, Write};

use crate::{Deque, Fifo, MaxHeap, Multiset};

/// Replays the deque script: mixed front/back insertion, positional reads,
/// full iteration, then one removal from each end.
pub fn deque_walkthrough(out: &mut impl Write) -> fmt::Result {
    let mut deque = Deque::new();

    deque.push_back(10);
    deque.push_front(5);
    deque.push_back(20);
    deque.push_front(2);

    // Deque now holds [2, 5, 10, 20]
    if let Some(first) = deque.front() {
        writeln!(out, "First element: {first}")?;
    }
    if let Some(last) = deque.back() {
        writeln!(out, "Last element: {last}")?;
    }
    if let Some(second) = deque.get(1) {
        writeln!(out, "Element at index 1: {second}")?;
    }

    write!(out, "All elements:")?;
    for value in deque.iter() {
        write!(out, " {value}")?;
    }
    writeln!(out)?;

    deque.pop_back();
    deque.pop_front();

    write!(out, "After removing both ends:")?;
    for value in deque.iter() {
        write!(out, " {value}")?;
    }
    writeln!(out)
}

/// Replays the FIFO script: enqueue three values, then drain oldest-first,
/// printing each value as it is removed.
pub fn fifo_walkthrough(out: &mut impl Write) -> fmt::Result {
    let mut queue = Fifo::new();

    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);

    write!(out, "Queue elements:")?;
    while !queue.is_empty() {
        if let Some(value) = queue.peek() {
            write!(out, " {value}")?;
        }
        queue.dequeue();
    }
    writeln!(out)
}

/// Replays the priority queue script: insert four values in arbitrary
/// order, then drain largest-first, printing each value as it is removed.
pub fn priority_walkthrough(out: &mut impl Write) -> fmt::Result {
    let mut heap = MaxHeap::new();

    heap.push(30);
    heap.push(100);
    heap.push(25);
    heap.push(40);

    writeln!(out, "Priority queue elements (descending):")?;
    let mut sep = "";
    while !heap.is_empty() {
        if let Some(value) = heap.peek() {
            write!(out, "{sep}{value}")?;
        }
        sep = " ";
        heap.pop();
    }
    writeln!(out)
}

/// Replays the multiset script: insert five values with duplicates, print
/// the sorted contents, remove one instance of 10, print again.
pub fn multiset_walkthrough(out: &mut impl Write) -> fmt::Result {
    let mut set = Multiset::new();

    set.insert(10);
    set.insert(20);
    set.insert(10);
    set.insert(30);
    set.insert(20);

    writeln!(out, "Multiset elements:")?;
    let mut sep = "";
    for value in set.iter() {
        write!(out, "{sep}{value}")?;
        sep = " ";
    }
    writeln!(out)?;

    set.remove_one(10);

    writeln!(out, "After removing one 10:")?;
    let mut sep = "";
    for value in set.iter() {
        write!(out, "{sep}{value}")?;
        sep = " ";
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn render(script: fn(&mut String) -> fmt::Result) -> String {
        let mut transcript = String::new();
        assert!(script(&mut transcript).is_ok());
        transcript
    }

    #[test]
    fn test_deque_transcript() {
        let expected = "First element: 2\n\
                        Last element: 20\n\
                        Element at index 1: 5\n\
                        All elements: 2 5 10 20\n\
                        After removing both ends: 5 10\n";
        assert_eq!(render(deque_walkthrough), expected);
    }

    #[test]
    fn test_fifo_transcript() {
        assert_eq!(render(fifo_walkthrough), "Queue elements: 10 20 30\n");
    }

    #[test]
    fn test_priority_transcript() {
        let expected = "Priority queue elements (descending):\n\
                        100 40 30 25\n";
        assert_eq!(render(priority_walkthrough), expected);
    }

    #[test]
    fn test_multiset_transcript() {
        let expected = "Multiset elements:\n\
                        10 10 20 20 30\n\
                        After removing one 10:\n\
                        10 20 20 30\n";
        assert_eq!(render(multiset_walkthrough), expected);
    }

    #[test]
    fn test_transcripts_are_deterministic() {
        let scripts: [fn(&mut String) -> fmt::Result; 4] = [
            deque_walkthrough,
            fifo_walkthrough,
            priority_walkthrough,
            multiset_walkthrough,
        ];

        for script in scripts {
            assert_eq!(render(script), render(script));
        }
    }

    #[test]
    fn test_transcripts_end_with_newline() {
        let scripts: [fn(&mut String) -> fmt::Result; 4] = [
            deque_walkthrough,
            fifo_walkthrough,
            priority_walkthrough,
            multiset_walkthrough,
        ];

        for script in scripts {
            assert!(render(script).ends_with('\n'));
        }
    }
}
