// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A first-in-first-out queue over a ring buffer that doubles when full. Unlike a fixed
//! size ring buffer, pushing into a full queue never overwrites the oldest element.

use std::{fmt::Debug, ops::Range};

use super::CircularQueueIterator;
use crate::{ContainerError, ContainerResult, DEFAULT_QUEUE_CAPACITY, GetMemSize,
            next_capacity, storage_size};

/// Growable FIFO queue backed by a ring buffer.
///
/// The logical elements start at slot `head` and run for `count` slots, wrapping around
/// the end of the buffer. `tail` is the next free slot. These always hold:
/// - `count <= capacity`
/// - `tail == (head + count) % capacity`
///
/// When [`push_back`](Self::push_back) finds the queue full, the capacity doubles and the
/// elements are moved to the front of a fresh buffer, oldest first.
///
/// # Examples
///
/// ```
/// use r3bl_containers::CircularQueue;
///
/// # fn main() -> miette::Result<()> {
/// let mut queue = CircularQueue::new()?;
/// for ch in "Hi_my_f".chars() {
///     queue.push_back(ch)?;
/// }
/// assert_eq!(queue.capacity(), 10);
///
/// queue.pop_front();
/// queue.pop_front();
/// for ch in "Oth".chars() {
///     queue.push_back(ch)?;
/// }
///
/// assert_eq!(queue.front(), Some(&'_'));
/// assert_eq!(queue.back(), Some(&'h'));
/// assert_eq!(queue.iter().collect::<String>(), "_my_fOth");
/// # Ok(())
/// # }
/// ```
pub struct CircularQueue<T> {
    internal_storage: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with [`DEFAULT_QUEUE_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the buffer can't be allocated.
    pub fn new() -> ContainerResult<Self> { Self::with_capacity(DEFAULT_QUEUE_CAPACITY) }

    /// Creates an empty queue with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the buffer can't be allocated.
    pub fn with_capacity(capacity: usize) -> ContainerResult<Self> {
        Ok(Self {
            internal_storage: allocate_slots(capacity)?,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Builds a queue by pushing every item of `iter` in order, so the first item is at
    /// the front.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::push_back`].
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> ContainerResult<Self> {
        let mut queue = Self::new()?;
        for item in iter {
            queue.push_back(item)?;
        }
        Ok(queue)
    }
}

mod mutator {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> CircularQueue<T> {
        /// Appends `item` at the back (the `tail` slot), doubling the capacity first if
        /// the queue is full.
        ///
        /// # Errors
        ///
        /// [`ContainerError::AllocationFailure`] or [`ContainerError::CapacityOverflow`]
        /// if the queue was full and could not grow. The queue is unchanged and `item`
        /// is dropped.
        pub fn push_back(&mut self, item: T) -> ContainerResult<()> {
            if self.is_full() {
                let old_capacity = self.capacity();
                self.resize(next_capacity(old_capacity)?)?;
                tracing::debug!(
                    message = "queue grew",
                    from = old_capacity,
                    to = self.capacity()
                );
            }
            self.internal_storage[self.tail] = Some(item);
            self.tail = (self.tail + 1) % self.capacity();
            self.count += 1;
            Ok(())
        }

        /// Removes the oldest element. Returns [`None`] (and changes nothing) if the
        /// queue is empty. Dropping the returned value is the pop-and-discard form.
        pub fn pop_front(&mut self) -> Option<T> {
            if self.count == 0 {
                return None;
            }
            let value = self.internal_storage[self.head].take();
            self.head = (self.head + 1) % self.capacity();
            self.count -= 1;
            value
        }

        /// Moves the stored elements, oldest first, to the start of a fresh buffer of
        /// exactly `new_capacity` slots. Afterwards `head` is `0`.
        ///
        /// If the occupied range wraps past the end of the old buffer the move happens in
        /// two segments: `head..capacity` first, then `0..tail`.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::ResizeRejected`] if `new_capacity` is smaller than
        ///   [`Self::len`].
        /// - [`ContainerError::AllocationFailure`] if the new buffer can't be allocated.
        ///
        /// In both cases the queue keeps its old buffer untouched.
        pub fn resize(&mut self, new_capacity: usize) -> ContainerResult<()> {
            let occupied = self.count;
            if new_capacity < occupied {
                tracing::debug!(
                    message = "queue resize rejected",
                    requested = new_capacity,
                    occupied
                );
                return Err(ContainerError::ResizeRejected {
                    requested: new_capacity,
                    occupied,
                });
            }

            let mut new_storage = Vec::new();
            new_storage
                .try_reserve_exact(new_capacity)
                .map_err(|source| {
                    ContainerError::allocation_failure(new_capacity, source)
                })?;

            let (first_segment, second_segment) = self.occupied_segments();
            for range in [first_segment, second_segment] {
                new_storage.extend(self.internal_storage[range].iter_mut().map(Option::take));
            }
            new_storage.resize_with(new_capacity, || None);

            self.internal_storage = new_storage;
            self.head = 0;
            self.tail = if new_capacity == 0 { 0 } else { occupied % new_capacity };
            Ok(())
        }

        /// Drops every element and resets the indices. The capacity stays the same.
        pub fn clear(&mut self) {
            self.internal_storage.iter_mut().for_each(|slot| *slot = None);
            self.head = 0;
            self.tail = 0;
            self.count = 0;
        }
    }
}

mod accessor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> CircularQueue<T> {
        /// The element that the next [`Self::pop_front`] would return.
        #[must_use]
        pub fn front(&self) -> Option<&T> { self.get(0) }

        /// The most recently pushed element.
        #[must_use]
        pub fn back(&self) -> Option<&T> {
            if self.count == 0 {
                return None;
            }
            self.internal_storage[self.last_occupied_slot()].as_ref()
        }

        /// Element at logical position `index`, counting from the front.
        #[must_use]
        pub fn get(&self, index: usize) -> Option<&T> {
            if index >= self.count {
                return None;
            }
            let actual_index = (self.head + index) % self.capacity();
            self.internal_storage
                .get(actual_index)
                .and_then(Option::as_ref)
        }

        /// Iterates from front to back.
        #[must_use]
        pub fn iter(&self) -> CircularQueueIterator<'_, T> { CircularQueueIterator::new(self) }

        /// Slot index of the newest element. Only meaningful when the queue isn't empty.
        /// When `tail` sits at `0` the newest element is in the last slot, not one past
        /// it.
        pub(super) fn last_occupied_slot(&self) -> usize {
            if self.tail == 0 {
                self.capacity() - 1
            } else {
                self.tail - 1
            }
        }

        /// The slot ranges holding the elements, oldest first. The second range is empty
        /// unless the occupied region wraps around the end of the buffer.
        pub(super) fn occupied_segments(&self) -> (Range<usize>, Range<usize>) {
            if self.count == 0 {
                (0..0, 0..0)
            } else if self.head < self.tail {
                (self.head..self.tail, 0..0)
            } else {
                (self.head..self.capacity(), 0..self.tail)
            }
        }
    }
}

mod size {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> CircularQueue<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.count }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.count == 0 }

        #[must_use]
        pub fn is_full(&self) -> bool { self.count == self.capacity() }

        #[must_use]
        pub fn capacity(&self) -> usize { self.internal_storage.len() }
    }

    impl<T> GetMemSize for CircularQueue<T> {
        fn get_mem_size(&self) -> usize {
            storage_size::<Self, Option<T>>(self.capacity())
        }
    }
}

/// This implementation allows the queue to be used in a for loop directly.
impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = CircularQueueIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Two queues are equal when they hold equal elements in the same order, regardless of
/// capacity or where in the buffer the elements sit.
impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

fn allocate_slots<T>(capacity: usize) -> ContainerResult<Vec<Option<T>>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|source| ContainerError::allocation_failure(capacity, source))?;
    storage.resize_with(capacity, || None);
    Ok(storage)
}
