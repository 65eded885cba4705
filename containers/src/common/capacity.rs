// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capacity defaults and the geometric growth policy shared by [`crate::GrowableStack`]
//! and [`crate::CircularQueue`].

use super::{ContainerError, ContainerResult};

/// Number of slots a [`crate::GrowableStack`] allocates when created with
/// [`crate::GrowableStack::new`].
pub const DEFAULT_STACK_CAPACITY: usize = 5;

/// Number of slots a [`crate::CircularQueue`] allocates when created with
/// [`crate::CircularQueue::new`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Multiplier applied to the capacity of a full container before a push.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the capacity a full container grows to. A zero capacity grows to `1` so that
/// a push into a zero sized container always makes progress.
///
/// # Errors
///
/// [`ContainerError::CapacityOverflow`] if the product doesn't fit in [`usize`].
pub fn next_capacity(capacity: usize) -> ContainerResult<usize> {
    match capacity.checked_mul(GROWTH_FACTOR) {
        Some(0) => Ok(1),
        Some(it) => Ok(it),
        None => Err(ContainerError::CapacityOverflow { capacity }),
    }
}
