// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A last-in-first-out stack over a contiguous buffer that doubles when full. For the
//! first-in-first-out counterpart, take a look at [`crate::CircularQueue`].

use std::fmt::Debug;

use crate::{ContainerError, ContainerResult, DEFAULT_STACK_CAPACITY, GetMemSize,
            next_capacity, storage_size};

/// Growable LIFO stack.
///
/// Elements occupy the index range `[0, len)` of the buffer with no gaps; the top of the
/// stack is the element at `len - 1`. When a [`push`](Self::push) finds the stack full,
/// the capacity is doubled first (a fresh buffer is allocated, the occupied elements are
/// moved over and the old buffer is freed), which keeps push amortized O(1).
///
/// [`pop`](Self::pop) never shrinks the buffer.
///
/// # Examples
///
/// ```
/// use r3bl_containers::{GrowableStack, DEFAULT_STACK_CAPACITY};
///
/// # fn main() -> miette::Result<()> {
/// let mut stack = GrowableStack::new()?;
/// for ch in "HOLA AMIGO".chars() {
///     stack.push(ch)?;
/// }
/// assert_eq!(stack.len(), 10);
/// assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY * 2);
///
/// let mut reversed = String::new();
/// while let Some(ch) = stack.pop() {
///     reversed.push(ch);
/// }
/// assert_eq!(reversed, "OGIMA ALOH");
/// assert_eq!(stack.pop(), None);
/// # Ok(())
/// # }
/// ```
pub struct GrowableStack<T> {
    internal_storage: Vec<T>,
    capacity: usize,
}

impl<T> GrowableStack<T> {
    /// Creates an empty stack with [`DEFAULT_STACK_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the buffer can't be allocated.
    pub fn new() -> ContainerResult<Self> { Self::with_capacity(DEFAULT_STACK_CAPACITY) }

    /// Creates an empty stack with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the buffer can't be allocated.
    pub fn with_capacity(capacity: usize) -> ContainerResult<Self> {
        Ok(Self {
            internal_storage: allocate(capacity)?,
            capacity,
        })
    }

    /// Builds a stack by pushing every item of `iter` in order, so the last item ends up
    /// on top.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::push`].
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> ContainerResult<Self> {
        let mut stack = Self::new()?;
        for item in iter {
            stack.push(item)?;
        }
        Ok(stack)
    }
}

mod mutator {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> GrowableStack<T> {
        /// Puts `item` on top of the stack, doubling the capacity first if it is full.
        ///
        /// # Errors
        ///
        /// [`ContainerError::AllocationFailure`] or [`ContainerError::CapacityOverflow`]
        /// if the stack was full and could not grow. The stack is unchanged and `item`
        /// is dropped.
        pub fn push(&mut self, item: T) -> ContainerResult<()> {
            if self.is_full() {
                let old_capacity = self.capacity;
                self.resize(next_capacity(old_capacity)?)?;
                tracing::debug!(
                    message = "stack grew",
                    from = old_capacity,
                    to = self.capacity
                );
            }
            self.internal_storage.push(item);
            Ok(())
        }

        /// Removes the top element. Returns [`None`] (and changes nothing) if the stack
        /// is empty. Dropping the returned value is the pop-and-discard form.
        pub fn pop(&mut self) -> Option<T> { self.internal_storage.pop() }

        /// Moves the stored elements into a fresh buffer of exactly `new_capacity`
        /// slots.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::ResizeRejected`] if `new_capacity` is smaller than
        ///   [`Self::len`].
        /// - [`ContainerError::AllocationFailure`] if the new buffer can't be allocated.
        ///
        /// In both cases the stack keeps its old buffer untouched.
        pub fn resize(&mut self, new_capacity: usize) -> ContainerResult<()> {
            let occupied = self.len();
            if new_capacity < occupied {
                tracing::debug!(
                    message = "stack resize rejected",
                    requested = new_capacity,
                    occupied
                );
                return Err(ContainerError::ResizeRejected {
                    requested: new_capacity,
                    occupied,
                });
            }

            let mut new_storage = allocate(new_capacity)?;
            new_storage.append(&mut self.internal_storage);
            self.internal_storage = new_storage;
            self.capacity = new_capacity;
            Ok(())
        }

        /// Drops every element. The capacity stays the same.
        pub fn clear(&mut self) { self.internal_storage.clear(); }
    }
}

mod accessor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> GrowableStack<T> {
        /// The element that the next [`Self::pop`] would return.
        #[must_use]
        pub fn top(&self) -> Option<&T> { self.internal_storage.last() }

        pub fn top_mut(&mut self) -> Option<&mut T> { self.internal_storage.last_mut() }

        /// Elements from bottom to top.
        #[must_use]
        pub fn as_slice(&self) -> &[T] { &self.internal_storage }

        /// Iterates from bottom to top.
        pub fn iter(&self) -> std::slice::Iter<'_, T> { self.internal_storage.iter() }
    }
}

mod size {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> GrowableStack<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.internal_storage.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.internal_storage.is_empty() }

        #[must_use]
        pub fn is_full(&self) -> bool { self.len() == self.capacity }

        #[must_use]
        pub fn capacity(&self) -> usize { self.capacity }
    }

    impl<T> GetMemSize for GrowableStack<T> {
        fn get_mem_size(&self) -> usize { storage_size::<Self, T>(self.capacity) }
    }
}

/// This implementation allows the stack to be used in a for loop directly.
impl<'a, T> IntoIterator for &'a GrowableStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Two stacks are equal when they hold equal elements in the same order, regardless of
/// capacity.
impl<T: PartialEq> PartialEq for GrowableStack<T> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Eq> Eq for GrowableStack<T> {}

impl<T: Debug> Debug for GrowableStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableStack")
            .field("capacity", &self.capacity)
            .field("elements", &self.internal_storage)
            .finish()
    }
}

fn allocate<T>(capacity: usize) -> ContainerResult<Vec<T>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|source| ContainerError::allocation_failure(capacity, source))?;
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn stack_of(text: &str) -> GrowableStack<char> {
        GrowableStack::try_from_iter(text.chars()).unwrap()
    }

    #[test]
    fn test_empty_stack() {
        let stack: GrowableStack<char> = GrowableStack::new().unwrap();
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.iter().next(), None);
    }

    #[test]
    fn test_push_then_top() {
        let mut stack = GrowableStack::new().unwrap();
        stack.push('H').unwrap();
        stack.push('O').unwrap();
        assert_eq!(stack.top(), Some(&'O'));
        // top() doesn't mutate.
        assert_eq!(stack.top(), Some(&'O'));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut stack = stack_of("HOLA AMIGO");
        let mut popped = vec![];
        while let Some(ch) = stack.pop() {
            popped.push(ch);
        }
        assert_eq!(popped.into_iter().collect::<String>(), "OGIMA ALOH");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_on_empty_is_idempotent() {
        let mut stack: GrowableStack<u8> = GrowableStack::new().unwrap();
        for _ in 0..3 {
            assert_eq!(stack.pop(), None);
            assert_eq!(stack.len(), 0);
            assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
        }
    }

    #[test_case(5, 5)]
    #[test_case(6, 10)]
    #[test_case(10, 10)]
    #[test_case(11, 20)]
    #[test_case(21, 40)]
    fn test_capacity_doubles_when_full(push_count: usize, expected_capacity: usize) {
        let mut stack = GrowableStack::new().unwrap();
        for it in 0..push_count {
            stack.push(it).unwrap();
        }
        assert_eq!(stack.capacity(), expected_capacity);
        assert_eq!(stack.as_slice(), (0..push_count).collect::<Vec<_>>());
    }

    #[test]
    fn test_pop_never_shrinks() {
        let mut stack = stack_of("HOLA AMIGO!");
        let capacity = stack.capacity();
        let mem_size = stack.get_mem_size();
        while stack.pop().is_some() {}
        assert_eq!(stack.capacity(), capacity);
        assert_eq!(stack.get_mem_size(), mem_size);
    }

    #[test]
    fn test_zero_capacity_grows() {
        let mut stack = GrowableStack::with_capacity(0).unwrap();
        assert!(stack.is_full());
        stack.push(1).unwrap();
        assert_eq!(stack.capacity(), 1);
        stack.push(2).unwrap();
        assert_eq!(stack.capacity(), 2);
        assert_eq!(stack.top(), Some(&2));
    }

    #[test]
    fn test_resize_rejected_leaves_stack_intact() {
        let mut stack = stack_of("abc");
        let before = stack.as_slice().to_vec();
        assert_eq!(
            stack.resize(2),
            Err(ContainerError::ResizeRejected {
                requested: 2,
                occupied: 3
            })
        );
        assert_eq!(stack.as_slice(), before);
        assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
    }

    #[test]
    fn test_resize_keeps_order() {
        let mut stack = stack_of("abc");
        stack.resize(3).unwrap();
        assert!(stack.is_full());
        stack.resize(8).unwrap();
        assert_eq!(stack.capacity(), 8);
        assert_eq!(stack.iter().collect::<String>(), "abc");
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let result = GrowableStack::<u64>::with_capacity(usize::MAX);
        assert!(matches!(
            result,
            Err(ContainerError::AllocationFailure {
                requested: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_top_mut_and_clear() {
        let mut stack = stack_of("ab");
        if let Some(top) = stack.top_mut() {
            *top = 'z';
        }
        assert_eq!(stack.pop(), Some('z'));
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
    }

    #[test]
    fn test_into_iterator_implementation() {
        let stack = stack_of("xyz");
        let mut collected = String::new();
        for ch in &stack {
            collected.push(*ch);
        }
        assert_eq!(collected, "xyz");
    }
}
