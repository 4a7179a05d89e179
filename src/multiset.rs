use ahash::RandomState;
use hashbrown::HashMap;

use alloc::collections::BTreeSet;
use core::hash::Hash;

/// A sorted multiset of values.
///
/// Duplicates are allowed and iteration is always in non-decreasing order.
/// Multiplicities live in a hash map keyed by value, giving O(1) `count`
/// and `contains` lookups, while a sorted set of the distinct values drives
/// ordered iteration. Removal takes out exactly one instance of a value and
/// is a silent no-op when the value is absent.
#[derive(Debug, Clone)]
pub struct Multiset<T> {
    /// Maps each distinct value to its multiplicity
    freq: HashMap<T, usize, RandomState>,
    /// The distinct values in sorted order
    sorted: BTreeSet<T>,
    /// Total number of elements including duplicates
    total: usize,
}

impl<T> Multiset<T>
where
    T: Ord + Hash + Copy,
{
    /// Creates a new, empty `Multiset`.
    ///
    /// # Returns
    ///
    /// * `Self` - The `Multiset` instance
    pub fn new() -> Self {
        Self {
            freq: HashMap::with_hasher(RandomState::default()),
            sorted: BTreeSet::new(),
            total: 0,
        }
    }

    /// Returns true if the multiset is empty
    ///
    /// # Returns
    ///
    /// * `bool` - True if the multiset is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the total number of elements, counting duplicates
    ///
    /// # Returns
    ///
    /// * `usize` - The total number of elements stored in the multiset
    #[inline]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Returns the number of distinct values
    ///
    /// # Returns
    ///
    /// * `usize` - The number of distinct values stored in the multiset
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.sorted.len()
    }

    /// Inserts a value, incrementing its multiplicity
    ///
    /// # Arguments
    ///
    /// * `value` - The value to insert
    pub fn insert(&mut self, value: T) {
        *self.freq.entry(value).or_insert(0) += 1;
        self.sorted.insert(value);
        self.total += 1;
    }

    /// Removes exactly one instance of a value
    ///
    /// Removing an absent value is a no-op; other instances of the same
    /// value stay in the multiset.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to remove one instance of
    ///
    /// # Returns
    ///
    /// * `bool` - True if an instance was removed
    pub fn remove_one(&mut self, value: T) -> bool {
        match self.freq.get_mut(&value) {
            Some(count) if *count > 1 => {
                *count -= 1;
            }
            Some(_) => {
                self.freq.remove(&value);
                self.sorted.remove(&value);
            }
            None => return false,
        }

        self.total -= 1;
        true
    }

    /// Returns the multiplicity of a value
    ///
    /// # Arguments
    ///
    /// * `value` - The value to look up
    ///
    /// # Returns
    ///
    /// * `usize` - The number of instances of the value, zero if absent
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        self.freq.get(value).copied().unwrap_or(0)
    }

    /// Returns true if at least one instance of the value is present
    ///
    /// # Arguments
    ///
    /// * `value` - The value to look up
    ///
    /// # Returns
    ///
    /// * `bool` - True if the value is present
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.freq.contains_key(value)
    }

    /// Clears the multiset
    pub fn clear(&mut self) {
        self.freq.clear();
        self.sorted.clear();
        self.total = 0;
    }

    /// Returns an iterator over the elements in non-decreasing order,
    /// repeating each value once per instance
    ///
    /// # Returns
    ///
    /// * `impl Iterator<Item = T>` - An iterator over the elements in sorted order
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.sorted
            .iter()
            .flat_map(|&value| core::iter::repeat_n(value, self.count(&value)))
    }
}

impl<T: Ord + Hash + Copy> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_sorted_iteration_with_duplicates() {
        let mut set = Multiset::new();

        set.insert(10);
        set.insert(20);
        set.insert(10);
        set.insert(30);
        set.insert(20);

        let elems: Vec<_> = set.iter().collect();
        assert_eq!(elems, vec![10, 10, 20, 20, 30]);
        assert_eq!(set.len(), 5);
        assert_eq!(set.distinct_len(), 3);
    }

    #[test]
    fn test_remove_one_keeps_other_instances() {
        let mut set = Multiset::new();

        set.insert(10);
        set.insert(20);
        set.insert(10);
        set.insert(30);
        set.insert(20);

        assert!(set.remove_one(10));

        let elems: Vec<_> = set.iter().collect();
        assert_eq!(elems, vec![10, 20, 20, 30]);
        assert_eq!(set.count(&10), 1);
    }

    #[test]
    fn test_remove_one_absent_is_noop() {
        let mut set = Multiset::new();

        set.insert(1);
        set.insert(2);

        let before: Vec<_> = set.iter().collect();
        assert!(!set.remove_one(99));
        let after: Vec<_> = set.iter().collect();

        assert_eq!(before, after);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_last_instance_drops_value() {
        let mut set = Multiset::new();

        set.insert(5);
        assert!(set.contains(&5));

        assert!(set.remove_one(5));
        assert!(!set.contains(&5));
        assert_eq!(set.count(&5), 0);
        assert!(set.is_empty());

        assert!(!set.remove_one(5));
    }

    #[test]
    fn test_unsorted_insertion_order() {
        let mut set = Multiset::new();

        for value in [9, 3, 7, 3, 1, 9, 9] {
            set.insert(value);
        }

        let elems: Vec<_> = set.iter().collect();
        assert_eq!(elems, vec![1, 3, 3, 7, 9, 9, 9]);
        assert_eq!(set.count(&9), 3);
        assert_eq!(set.count(&3), 2);
    }

    #[test]
    fn test_clear() {
        let mut set = Multiset::new();

        set.insert(1);
        set.insert(1);
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.distinct_len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_float_elements() {
        let mut set = Multiset::new();

        set.insert(OrderedFloat(2.5));
        set.insert(OrderedFloat(0.5));
        set.insert(OrderedFloat(2.5));

        let elems: Vec<_> = set.iter().collect();
        assert_eq!(
            elems,
            vec![OrderedFloat(0.5), OrderedFloat(2.5), OrderedFloat(2.5)]
        );

        assert!(set.remove_one(OrderedFloat(2.5)));
        assert_eq!(set.count(&OrderedFloat(2.5)), 1);
    }
}
