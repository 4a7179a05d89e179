use core::marker::PhantomData;

use alloc::vec::Vec;

/// Trait for defining order policies for the heap
///
/// # Type Parameters
///
/// * `T` - The type of the elements in the heap
///
/// # Methods
///
/// * `outranks(a: &T, b: &T) -> bool` - Returns true if `a` should be extracted before `b`
///
pub trait OrderPolicy<T> {
    /// Returns true if `a` should be extracted before `b`
    fn outranks(a: &T, b: &T) -> bool;
}

/// Order policy extracting the minimum first
#[derive(Debug, Clone)]
pub struct Min;

/// Order policy extracting the maximum first
#[derive(Debug, Clone)]
pub struct Max;

impl<T: PartialOrd> OrderPolicy<T> for Min {
    #[inline]
    fn outranks(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> OrderPolicy<T> for Max {
    #[inline]
    fn outranks(a: &T, b: &T) -> bool {
        a > b
    }
}

/// A heap that always extracts the current maximum
pub type MaxHeap<T> = Heap<T, Max>;

/// A heap that always extracts the current minimum
pub type MinHeap<T> = Heap<T, Min>;

/// A binary heap over a flat array, ordered by a policy
///
/// The element outranking all others under the policy sits at the root and
/// is the one returned by [`peek`](Heap::peek) and [`pop`](Heap::pop).
/// Extraction order among equal elements is unspecified.
///
/// # Type Parameters
///
/// * `T` - The type of the elements in the heap
/// * `O` - The order policy for the heap
#[derive(Debug, Clone)]
pub struct Heap<T, O> {
    items: Vec<T>,
    _order: PhantomData<O>,
}

impl<T, O> Heap<T, O>
where
    T: PartialOrd + Copy,
    O: OrderPolicy<T>,
{
    /// Creates a new, empty `Heap`.
    ///
    /// # Returns
    ///
    /// * `Self` - The `Heap` instance
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Creates a new `Heap` with at least the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `cap` - The initial capacity of the heap
    ///
    /// # Returns
    ///
    /// * `Self` - The `Heap` instance
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            _order: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    ///
    /// # Returns
    ///
    /// * `bool` - True if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current number of elements stored in the heap
    ///
    /// # Returns
    ///
    /// * `usize` - The current number of elements stored in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Clears the heap
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pushes a new element into the heap
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push into the heap
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns a reference to the element outranking all others
    ///
    /// If the heap is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - A reference to the top element, if it exists
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the element outranking all others
    ///
    /// If the heap is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The top element, if it exists
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Some(value)
    }

    /// Moves the element at `i` up until its parent outranks it
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if O::outranks(&self.items[i], &self.items[parent]) {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `i` down until it outranks both children
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= self.items.len() {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < self.items.len() && O::outranks(&self.items[right], &self.items[left]) {
                child = right;
            }

            if O::outranks(&self.items[child], &self.items[i]) {
                self.items.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}

impl<T, O> Default for Heap<T, O>
where
    T: PartialOrd + Copy,
    O: OrderPolicy<T>,
{
    fn default() -> Self {
        Self::new()
    }
}
