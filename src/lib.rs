#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[macro_use]
extern crate alloc;

mod deque;
pub use deque::Deque;

mod fifo;
pub use fifo::Fifo;

mod heap;
pub use heap::{Heap, Max, MaxHeap, Min, MinHeap, OrderPolicy};

mod multiset;
pub use multiset::Multiset;

pub mod walkthrough;
