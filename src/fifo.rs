use crate::deque::Deque;

/// A first-in-first-out queue.
///
/// A thin adapter over [`Deque`]: elements enter at the back and leave at
/// the front, so the oldest remaining element is always removed first.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    deque: Deque<T>,
}

impl<T> Fifo<T>
where
    T: Default + Clone,
{
    /// Creates a new, empty `Fifo`.
    ///
    /// # Returns
    ///
    /// * `Self` - The `Fifo` instance
    #[inline]
    pub fn new() -> Self {
        Self {
            deque: Deque::new(),
        }
    }

    /// Returns true if the queue is empty
    ///
    /// # Returns
    ///
    /// * `bool` - True if the queue is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the current number of elements stored in the queue
    ///
    /// # Returns
    ///
    /// * `usize` - The current number of elements stored in the queue
    #[inline]
    pub const fn len(&self) -> usize {
        self.deque.len()
    }

    /// Adds an element to the back of the queue
    ///
    /// # Arguments
    ///
    /// * `value` - The value to add
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.deque.push_back(value);
    }

    /// Removes and returns the oldest remaining element
    ///
    /// If the queue is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The oldest remaining element, if it exists
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    /// Returns a reference to the oldest remaining element
    ///
    /// If the queue is empty, returns None
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - A reference to the oldest remaining element, if it exists
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.deque.front()
    }

    /// Clears the queue
    #[inline]
    pub fn clear(&mut self) {
        self.deque.clear();
    }
}

impl<T: Default + Clone> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Fifo::new();

        queue.enqueue(10);
        queue.enqueue(20);
        queue.enqueue(30);

        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.dequeue(), Some(20));
        assert_eq!(queue.dequeue(), Some(30));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = Fifo::new();

        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = Fifo::<i32>::new();

        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_enqueue_after_drain() {
        let mut queue = Fifo::new();

        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        assert!(queue.is_empty());

        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut queue = Fifo::new();

        queue.enqueue(1);
        queue.enqueue(2);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }
}
