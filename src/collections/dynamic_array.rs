//! Growable, index-addressable container of owned element handles.
//!
//! The container tracks its own logical length and an exact slot capacity:
//! - Slots `[0, len)` hold live elements in insertion order
//! - Slots `[len, capacity)` are vacant
//! - Capacity grows by [`GROWTH_FACTOR`] when an insert finds no free slot, and
//!   shrinks by [`SHRINK_FACTOR`] once a removal leaves it at most half full
//!
//! Invalid indices and degenerate ranges are silent no-ops that return a neutral
//! value (absence, an empty result, or the rejected element handed back). Only
//! allocation failure is reported as an [`Error`].
//!
//! Ownership follows the remove/destroy split: `remove*` hands elements back to
//! the caller, `destroy*` drops them inside the container.

use std::iter::Flatten;
use std::slice;

use crate::core::error::Error;
use crate::core::types::Result;

/// Capacity multiplier applied when an insert needs room
pub const GROWTH_FACTOR: f64 = 1.3;

/// Capacity multiplier applied when a removal leaves the container sparse
pub const SHRINK_FACTOR: f64 = 0.7;

/// Iterator over the live elements of a [`DynamicArray`]
pub type Iter<'a, T> = Flatten<slice::Iter<'a, Option<T>>>;

/// Growable container with explicit capacity management
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    /// Backing slots; `slots.len()` is the capacity
    slots: Vec<Option<T>>,
    /// Number of live elements
    len: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }
}

impl<T> DynamicArray<T> {
    /// Create an empty container with exactly `capacity` slots
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut array = Self::default();
        array.grow_to(capacity)?;
        Ok(array)
    }

    /// Drop every element and start over with `capacity` empty slots
    pub fn reinit(&mut self, capacity: usize) -> Result<()> {
        *self = Self::default();
        self.grow_to(capacity)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check if the container holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at `index`, or `None` when `index >= len`
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_ref()
    }

    /// Mutable element at `index`, or `None` when `index >= len`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_mut()
    }

    /// Linear scan for an element equal to `element`
    ///
    /// For shared handles compare identity with [`contains_by`](Self::contains_by)
    /// and `Arc::ptr_eq` instead.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Linear scan for an element matching `predicate`
    pub fn contains_by(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Iterate live elements in index order
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots[..self.len].iter().flatten()
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right
    ///
    /// Valid for `index <= len`. Out of range the container is untouched and the
    /// element comes back as `Ok(Some(element))`. Errors only if growing fails.
    pub fn insert_at(&mut self, element: T, index: usize) -> Result<Option<T>> {
        if index > self.len {
            return Ok(Some(element));
        }
        if self.len == self.capacity() {
            self.resize(grown_capacity(self.capacity()))?;
        }
        self.move_contents(index, self.len, 1);
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(None)
    }

    /// Insert at the front
    pub fn prepend(&mut self, element: T) -> Result<()> {
        self.insert_at(element, 0).map(|_| ())
    }

    /// Insert at the back
    pub fn append(&mut self, element: T) -> Result<()> {
        self.insert_at(element, self.len).map(|_| ())
    }

    /// Replace the element at `index` without touching its neighbours
    ///
    /// Returns the displaced element as `Ok`. When `index >= len` nothing
    /// changes and `element` itself comes back as `Err`.
    pub fn update(&mut self, index: usize, element: T) -> std::result::Result<T, T> {
        if index >= self.len {
            return Err(element);
        }
        match self.slots[index].as_mut() {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(element),
        }
    }

    /// Remove `count` elements starting at `index` and return them in order
    ///
    /// Valid for `index + count <= len`; otherwise returns an empty `Vec` and
    /// leaves the container unchanged.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Vec<T> {
        if !self.is_valid_range(index, count) {
            return Vec::new();
        }
        let removed = self.slots[index..index + count]
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        self.close_gap(index, count);
        removed
    }

    /// Remove the element at `index` and return it
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.remove_range(index, 1).pop()
    }

    /// Remove every element and return them in order
    pub fn remove_all(&mut self) -> Vec<T> {
        self.remove_range(0, self.len)
    }

    /// Drop `count` elements starting at `index`, then close the gap
    ///
    /// Same validity rules as [`remove_range`](Self::remove_range). Returns the
    /// number of elements released.
    pub fn destroy_range(&mut self, index: usize, count: usize) -> usize {
        if !self.is_valid_range(index, count) {
            return 0;
        }
        let mut released = 0;
        for slot in &mut self.slots[index..index + count] {
            if slot.take().is_some() {
                released += 1;
            }
        }
        self.close_gap(index, count);
        released
    }

    /// Drop the element at `index`; `false` if out of range
    pub fn destroy(&mut self, index: usize) -> bool {
        self.destroy_range(index, 1) > 0
    }

    /// Drop every element
    pub fn destroy_all(&mut self) -> usize {
        self.destroy_range(0, self.len)
    }

    /// Shift the slot range `[start, end)` by `direction` slots
    ///
    /// Positive directions move toward higher indices and are processed from
    /// the high end down; negative directions are processed from the low end
    /// up, so no source slot is overwritten before it has moved. Slots are
    /// swapped, never overwritten, so whatever occupied the destination ends
    /// up in the vacated slots.
    ///
    /// Zero directions, empty or inverted ranges, and moves that would touch
    /// slots outside `[0, capacity)` are ignored. `len` is not adjusted.
    pub fn move_contents(&mut self, start: usize, end: usize, direction: isize) {
        if direction == 0 || start >= end || end > self.capacity() {
            return;
        }
        let (Some(_), Some(new_end)) = (
            start.checked_add_signed(direction),
            end.checked_add_signed(direction),
        ) else {
            return;
        };
        if new_end > self.capacity() {
            return;
        }

        let offset = direction.unsigned_abs();
        if direction > 0 {
            for i in (start..end).rev() {
                self.slots.swap(i, i + offset);
            }
        } else {
            for i in start..end {
                self.slots.swap(i, i - offset);
            }
        }
    }

    /// Set the slot count to exactly `new_capacity`
    ///
    /// Ignored when `new_capacity` is below `len` or equal to the current
    /// capacity.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let capacity = self.capacity();
        if new_capacity < self.len || new_capacity == capacity {
            return Ok(());
        }
        if new_capacity > capacity {
            self.grow_to(new_capacity)
        } else {
            self.slots.truncate(new_capacity);
            self.slots.shrink_to_fit();
            Ok(())
        }
    }

    /// Call `f(element, index)` for every element
    pub fn for_each(&self, mut f: impl FnMut(&T, usize)) {
        for (index, element) in self.indexed() {
            f(element, index);
        }
    }

    /// Check whether any element satisfies `predicate`, stopping at the first match
    pub fn exists(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> bool {
        self.indexed().any(|(index, element)| predicate(element, index))
    }

    /// New container holding clones of the accepted elements, order preserved
    pub fn filter(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Result<DynamicArray<T>>
    where
        T: Clone,
    {
        let mut result = DynamicArray::with_capacity(self.len)?;
        for (index, element) in self.indexed() {
            if predicate(element, index) {
                result.append(element.clone())?;
            }
        }
        Ok(result)
    }

    /// New container of `f(element, index)` for every element
    pub fn map<U>(&self, mut f: impl FnMut(&T, usize) -> U) -> Result<DynamicArray<U>> {
        let mut result = DynamicArray::with_capacity(self.len)?;
        for (index, element) in self.indexed() {
            result.append(f(element, index))?;
        }
        Ok(result)
    }

    /// Fold `f(acc, element, index)` from the first element to the last
    pub fn fold_left<A>(&self, init: A, mut f: impl FnMut(A, &T, usize) -> A) -> A {
        self.indexed().fold(init, |acc, (index, element)| f(acc, element, index))
    }

    /// Fold `f(acc, element, index)` from the last element to the first
    pub fn fold_right<A>(&self, init: A, mut f: impl FnMut(A, &T, usize) -> A) -> A {
        self.indexed().rev().fold(init, |acc, (index, element)| f(acc, element, index))
    }

    /// New container holding clones of `[start, end)`
    ///
    /// `end` is clamped to `len`; an empty or inverted range yields an empty
    /// container.
    pub fn slice(&self, start: usize, end: usize) -> Result<DynamicArray<T>>
    where
        T: Clone,
    {
        let end = end.min(self.len);
        if start >= end {
            return DynamicArray::with_capacity(0);
        }
        let mut result = DynamicArray::with_capacity(end - start)?;
        for element in self.slots[start..end].iter().flatten() {
            result.append(element.clone())?;
        }
        Ok(result)
    }

    /// Release the backing storage and hand every element back to the caller
    pub fn into_vec(self) -> Vec<T> {
        let len = self.len;
        self.slots.into_iter().take(len).flatten().collect()
    }

    fn indexed(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|element| (index, element)))
    }

    fn is_valid_range(&self, index: usize, count: usize) -> bool {
        count > 0 && index.checked_add(count).is_some_and(|end| end <= self.len)
    }

    /// Pull `[index + count, len)` left over the vacated slots, then shrink if sparse
    fn close_gap(&mut self, index: usize, count: usize) {
        self.move_contents(index + count, self.len, -(count as isize));
        self.len -= count;
        if self.len <= self.capacity() / 2 {
            // Shrinking cannot fail.
            let _ = self.resize(shrunk_capacity(self.capacity(), self.len));
        }
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        let additional = new_capacity.saturating_sub(self.slots.len());
        self.slots
            .try_reserve_exact(additional)
            .map_err(|source| Error::Allocation {
                requested: new_capacity,
                source,
            })?;
        self.slots.resize_with(new_capacity, || None);
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Capacity after one growth step; always at least one more slot
fn grown_capacity(capacity: usize) -> usize {
    ((capacity as f64 * GROWTH_FACTOR) as usize).max(capacity + 1)
}

/// Capacity after one shrink step; never below `len`
fn shrunk_capacity(capacity: usize, len: usize) -> usize {
    ((capacity as f64 * SHRINK_FACTOR) as usize).max(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    /// Element that counts how many times it has been dropped
    #[derive(Debug)]
    struct Tracked {
        id: u32,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(n: u32, drops: &Rc<Cell<usize>>) -> DynamicArray<Tracked> {
        let mut array = DynamicArray::with_capacity(n as usize).unwrap();
        for id in 0..n {
            array.append(Tracked { id, drops: drops.clone() }).unwrap();
        }
        array
    }

    fn filled(values: &[i32]) -> DynamicArray<i32> {
        let mut array = DynamicArray::with_capacity(values.len()).unwrap();
        for &v in values {
            array.append(v).unwrap();
        }
        array
    }

    fn contents(array: &DynamicArray<i32>) -> Vec<i32> {
        array.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let array: DynamicArray<i32> = DynamicArray::with_capacity(4).unwrap();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 4);
        assert!(array.is_empty());
        assert_eq!(array.get(0), None);
    }

    #[test]
    fn test_append_grows_past_capacity() {
        let mut array = DynamicArray::with_capacity(4).unwrap();
        for v in 0..5 {
            array.append(v).unwrap();
        }
        assert_eq!(array.len(), 5);
        assert!(array.capacity() > 4);
        assert!(array.capacity() >= array.len());
        assert_eq!(contents(&array), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_growth_from_zero_capacity() {
        let mut array = DynamicArray::with_capacity(0).unwrap();
        array.append(7).unwrap();
        assert_eq!(array.capacity(), 1);
        array.append(8).unwrap();
        assert_eq!(array.capacity(), 2);
        assert_eq!(contents(&array), vec![7, 8]);
    }

    #[test]
    fn test_growth_policy_is_multiplicative() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
        assert_eq!(grown_capacity(10), 13);
        assert_eq!(grown_capacity(2048), 2662);
    }

    #[test]
    fn test_insert_at_shifts_tail_right() {
        let mut array = filled(&[0, 1, 2, 3]);
        assert_eq!(array.insert_at(9, 1).unwrap(), None);
        assert_eq!(contents(&array), vec![0, 9, 1, 2, 3]);
        array.prepend(-1).unwrap();
        assert_eq!(contents(&array), vec![-1, 0, 9, 1, 2, 3]);
        array.insert_at(42, array.len()).unwrap();
        assert_eq!(array.get(6), Some(&42));
    }

    #[test]
    fn test_insert_out_of_range_hands_element_back() {
        let mut array = filled(&[1, 2]);
        assert_eq!(array.insert_at(5, 3).unwrap(), Some(5));
        assert_eq!(contents(&array), vec![1, 2]);
    }

    #[test]
    fn test_update() {
        let mut array = filled(&[1, 2, 3]);
        assert_eq!(array.update(1, 20), Ok(2));
        assert_eq!(contents(&array), vec![1, 20, 3]);
        // Out of range: untouched, element returned
        assert_eq!(array.update(3, 99), Err(99));
        assert_eq!(array.update(usize::MAX, 7), Err(7));
        assert_eq!(contents(&array), vec![1, 20, 3]);
    }

    #[test]
    fn test_capacity_overflow_is_allocation_error() {
        let result = DynamicArray::<u64>::with_capacity(usize::MAX);
        assert!(matches!(
            result,
            Err(Error::Allocation { requested: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_failed_growth_leaves_array_intact() {
        let mut array = filled(&[1, 2, 3]);
        assert!(matches!(
            array.resize(usize::MAX),
            Err(Error::Allocation { .. })
        ));
        assert_eq!(contents(&array), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let array = filled(&[1]);
        assert_eq!(array.get(1), None);
        assert_eq!(array.get(usize::MAX), None);
    }

    #[test]
    fn test_contains() {
        let array = filled(&[3, 5, 8]);
        assert!(array.contains(&5));
        assert!(!array.contains(&4));
    }

    #[test]
    fn test_contains_by_identity() {
        let shared = Arc::new(5);
        let mut array = DynamicArray::with_capacity(2).unwrap();
        array.append(Arc::new(5)).unwrap();
        assert!(array.contains(&shared));
        assert!(!array.contains_by(|e| Arc::ptr_eq(e, &shared)));

        array.append(shared.clone()).unwrap();
        assert!(array.contains_by(|e| Arc::ptr_eq(e, &shared)));
        assert!(!array.contains_by(|e| **e > 5));
    }

    #[test]
    fn test_remove_range_closes_gap() {
        let mut array = filled(&[0, 1, 2, 3, 4, 5]);
        let removed = array.remove_range(1, 3);
        assert_eq!(removed, vec![1, 2, 3]);
        assert_eq!(contents(&array), vec![0, 4, 5]);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_remove_single_and_all() {
        let mut array = filled(&[10, 20, 30]);
        assert_eq!(array.remove(0), Some(10));
        assert_eq!(contents(&array), vec![20, 30]);
        assert_eq!(array.remove(5), None);
        assert_eq!(array.remove_all(), vec![20, 30]);
        assert!(array.is_empty());
    }

    #[test]
    fn test_invalid_ranges_are_silent() {
        let mut array = filled(&[1, 2, 3]);
        assert!(array.remove_range(2, 2).is_empty());
        assert!(array.remove_range(usize::MAX, 2).is_empty());
        assert!(array.remove_range(0, 0).is_empty());
        assert_eq!(array.destroy_range(1, 5), 0);
        assert!(!array.destroy(3));
        assert_eq!(contents(&array), vec![1, 2, 3]);
    }

    #[test]
    fn test_shrink_after_sparse_removal() {
        let mut array = filled(&(0..10).collect::<Vec<_>>());
        assert_eq!(array.capacity(), 10);
        array.remove_range(0, 4);
        assert_eq!(array.capacity(), 10); // 6 live of 10: not sparse yet
        array.remove_range(0, 1);
        // 5 <= 10 / 2 triggers one 0.7x step
        assert_eq!(array.capacity(), 7);
        assert_eq!(contents(&array), vec![5, 6, 7, 8, 9]);
        array.remove_all();
        assert_eq!(array.capacity(), 4);
        assert!(array.capacity() >= array.len());
    }

    #[test]
    fn test_shrink_never_below_len() {
        assert_eq!(shrunk_capacity(10, 5), 7);
        assert_eq!(shrunk_capacity(10, 2), 7);
        assert_eq!(shrunk_capacity(4, 2), 2);
        assert_eq!(shrunk_capacity(1, 0), 0);
    }

    #[test]
    fn test_destroy_releases_remove_does_not() {
        let drops = Rc::new(Cell::new(0));
        let mut array = tracked(5, &drops);

        let removed = array.remove_range(0, 2);
        assert_eq!(drops.get(), 0);
        assert_eq!(removed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        assert_eq!(array.destroy_range(0, 2), 2);
        assert_eq!(drops.get(), 2);
        assert_eq!(array.get(0).map(|t| t.id), Some(4));

        drop(removed);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_destroy_all_and_drop() {
        let drops = Rc::new(Cell::new(0));
        let mut array = tracked(3, &drops);
        assert!(array.destroy(1));
        assert_eq!(drops.get(), 1);
        assert_eq!(array.destroy_all(), 2);
        assert_eq!(drops.get(), 3);

        let array = tracked(4, &drops);
        drop(array);
        assert_eq!(drops.get(), 7);
    }

    #[test]
    fn test_into_vec_hands_back_ownership() {
        let drops = Rc::new(Cell::new(0));
        let array = tracked(3, &drops);
        let owned = array.into_vec();
        assert_eq!(drops.get(), 0);
        assert_eq!(owned.len(), 3);
        drop(owned);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_reinit_drops_contents() {
        let drops = Rc::new(Cell::new(0));
        let mut array = tracked(3, &drops);
        array.reinit(8).unwrap();
        assert_eq!(drops.get(), 3);
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_move_contents_right_preserves_order() {
        let mut array = DynamicArray::with_capacity(6).unwrap();
        for v in [1, 2, 3, 4] {
            array.append(v).unwrap();
        }
        array.move_contents(1, 4, 2);
        assert_eq!(array.slots, vec![Some(1), None, None, Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn test_move_contents_left_preserves_order() {
        let mut array = filled(&[1, 2, 3, 4, 5]);
        array.slots[0] = None;
        array.slots[1] = None;
        array.move_contents(2, 5, -2);
        assert_eq!(array.slots, vec![Some(3), Some(4), Some(5), None, None]);
    }

    #[test]
    fn test_move_contents_rejects_degenerate_moves() {
        let mut array = filled(&[1, 2, 3]);
        let before = array.slots.clone();
        array.move_contents(0, 3, 0);
        array.move_contents(2, 2, 1);
        array.move_contents(2, 1, 1);
        array.move_contents(0, 3, 1); // would write past capacity
        array.move_contents(0, 2, -1); // would write below zero
        array.move_contents(0, 4, -1); // reads past capacity
        assert_eq!(array.slots, before);
    }

    #[test]
    fn test_for_each_and_exists() {
        let array = filled(&[4, 5, 6]);
        let mut seen = Vec::new();
        array.for_each(|v, i| seen.push((i, *v)));
        assert_eq!(seen, vec![(0, 4), (1, 5), (2, 6)]);

        let mut calls = 0;
        assert!(array.exists(|v, _| {
            calls += 1;
            *v == 5
        }));
        assert_eq!(calls, 2);
        assert!(!array.exists(|v, _| *v > 10));
    }

    #[test]
    fn test_filter_and_map() {
        let array = filled(&[1, 2, 3, 4, 5]);
        let even = array.filter(|v, _| v % 2 == 0).unwrap();
        assert_eq!(contents(&even), vec![2, 4]);

        let scaled = array.map(|v, i| v * 10 + i as i32).unwrap();
        assert_eq!(contents(&scaled), vec![10, 21, 32, 43, 54]);
        assert_eq!(scaled.len(), array.len());
        // Source untouched
        assert_eq!(contents(&array), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_folds_run_in_both_directions() {
        let array = filled(&[1, 2, 3]);
        let left = array.fold_left(String::new(), |acc, v, _| format!("{acc}{v}"));
        let right = array.fold_right(String::new(), |acc, v, _| format!("{acc}{v}"));
        assert_eq!(left, "123");
        assert_eq!(right, "321");
        assert_eq!(array.fold_left(0, |acc, v, _| acc + v), 6);

        let left_indices = array.fold_left(Vec::new(), |mut acc, _, i| {
            acc.push(i);
            acc
        });
        let right_indices = array.fold_right(Vec::new(), |mut acc, _, i| {
            acc.push(i);
            acc
        });
        assert_eq!(left_indices, vec![0, 1, 2]);
        assert_eq!(right_indices, vec![2, 1, 0]);
        // Weighted sum: 1*0 + 2*1 + 3*2
        assert_eq!(array.fold_right(0, |acc, v, i| acc + v * i as i32), 8);
    }

    #[test]
    fn test_slice() {
        let array = filled(&[0, 1, 2, 3, 4]);
        assert_eq!(contents(&array.slice(1, 3).unwrap()), vec![1, 2]);
        assert_eq!(contents(&array.slice(3, 99).unwrap()), vec![3, 4]);
        assert!(array.slice(3, 3).unwrap().is_empty());
        assert!(array.slice(4, 1).unwrap().is_empty());
    }

    #[test]
    fn test_matches_vec_model_under_mixed_operations() {
        let mut array = DynamicArray::with_capacity(2).unwrap();
        let mut model: Vec<u32> = Vec::new();
        let mut seed: u32 = 0x2545_f491;
        let mut next = || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for step in 0..2000u32 {
            let roll = next();
            if roll % 3 != 0 || model.is_empty() {
                let index = next() as usize % (model.len() + 1);
                array.insert_at(step, index).unwrap();
                model.insert(index, step);
            } else {
                let index = next() as usize % model.len();
                let count = 1 + next() as usize % (model.len() - index);
                let removed = array.remove_range(index, count);
                let expected: Vec<u32> = model.drain(index..index + count).collect();
                assert_eq!(removed, expected);
            }
            assert_eq!(array.len(), model.len());
            assert!(array.capacity() >= array.len());
        }
        for (i, v) in model.iter().enumerate() {
            assert_eq!(array.get(i), Some(v));
        }
    }
}
