use alloc::boxed::Box;

/// A growable double-ended queue backed by a ring buffer.
///
/// Elements are stored in a circular buffer with a moving front index;
/// when the buffer fills up, it is reallocated at twice the capacity with
/// the elements re-linearized in logical order.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// The circular buffer, allocated on the heap
    buf: Box<[T]>,
    /// The index of the front element in the buffer
    front: usize,
    /// The current number of elements stored in the deque
    len: usize,
}

impl<T> Deque<T>
where
    T: Default + Clone,
{
    /// Creates a new, empty `Deque`.
    ///
    /// No allocation happens until the first push.
    ///
    /// # Returns
    ///
    /// * `Self` - The `Deque` instance
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            front: 0,
            len: 0,
        }
    }

    /// Creates a new `Deque` with at least the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `cap` - The initial capacity of the deque
    ///
    /// # Returns
    ///
    /// * `Self` - The `Deque` instance
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: vec![T::default(); cap].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Returns true if the deque is empty
    ///
    /// # Returns
    ///
    /// * `bool` - True if the deque is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of elements stored in the deque
    ///
    /// # Returns
    ///
    /// * `usize` - The current number of elements stored in the deque
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the deque
    ///
    /// # Returns
    ///
    /// * `usize` - The number of elements the deque can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Clears the deque, resetting all elements and the indices
    #[inline]
    pub fn clear(&mut self) {
        self.buf.fill(T::default());
        self.front = 0;
        self.len = 0;
    }

    /// Reallocates the buffer at twice the capacity, re-linearizing the
    /// elements so the front lands at index 0.
    fn grow(&mut self) {
        let new_cap = if self.buf.is_empty() {
            4
        } else {
            self.buf.len() * 2
        };

        let mut new_buf = vec![T::default(); new_cap].into_boxed_slice();
        for (i, slot) in new_buf.iter_mut().take(self.len).enumerate() {
            let idx = (self.front + i) % self.buf.len();
            *slot = core::mem::take(&mut self.buf[idx]);
        }

        self.buf = new_buf;
        self.front = 0;
    }

    /// Pushes a new element to the front of the deque
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push to the front of the deque
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }

        self.front = if self.front == 0 {
            self.buf.len() - 1
        } else {
            self.front - 1
        };
        self.buf[self.front] = value;
        self.len += 1;
    }

    /// Pushes a new element to the back of the deque
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push to the back of the deque
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }

        let idx = (self.front + self.len) % self.buf.len();
        self.buf[idx] = value;
        self.len += 1;
    }

    /// Pops the element from the front of the deque
    ///
    /// If the deque is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The element at the front of the deque, if it exists
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = core::mem::take(&mut self.buf[self.front]);
        self.front = (self.front + 1) % self.buf.len();
        self.len -= 1;

        Some(value)
    }

    /// Pops the element from the back of the deque
    ///
    /// If the deque is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The element at the back of the deque, if it exists
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        let idx = (self.front + self.len) % self.buf.len();
        Some(core::mem::take(&mut self.buf[idx]))
    }

    /// Returns a reference to the front element of the deque
    ///
    /// If the deque is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - A reference to the front element of the deque, if it exists
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the back element of the deque
    ///
    /// If the deque is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - A reference to the back element of the deque, if it exists
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.get(self.len - 1)
        }
    }

    /// Returns a reference to the element at the specified index from the front of the deque
    ///
    /// If the index is out of bounds, returns None
    ///
    /// # Arguments
    ///
    /// * `i` - The index of the element to retrieve
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - A reference to the element at the specified index, if it exists
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            None
        } else {
            let idx = (self.front + i) % self.buf.len();
            Some(&self.buf[idx])
        }
    }

    /// Returns an iterator over the elements in front-to-back order
    ///
    /// # Returns
    ///
    /// * `impl Iterator<Item = &T>` - An iterator over the elements in the deque
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.buf[(self.front + i) % self.buf.len()])
    }
}

impl<T: Default + Clone> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}
