// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Generic homogeneous containers
//!
//! Three independent containers, each holding values of exactly one element type `T`:
//!
//! | Container              | Access | Storage                                             |
//! | :--------------------- | :----- | :-------------------------------------------------- |
//! | [`GrowableStack`]      | LIFO   | contiguous buffer, doubles when full                |
//! | [`CircularQueue`]      | FIFO   | ring buffer, doubles when full, wraparound indices  |
//! | [`SentinelList`]       | both   | doubly linked nodes in an arena, permanent sentinel |
//!
//! None of them ever shrinks its backing storage. Every allocation goes through
//! [`Vec::try_reserve_exact`] (or the map equivalent), so running out of memory is
//! reported as [`ContainerError::AllocationFailure`] instead of aborting.
//!
//! Pops and read-only accessors return [`Option`]. [`None`] always means the container
//! was already empty; the remaining element count is available from `len()`.
//!
//! # Example
//!
//! ```
//! use r3bl_containers::{CircularQueue, GrowableStack, SentinelList};
//!
//! # fn main() -> miette::Result<()> {
//! let mut stack = GrowableStack::new()?;
//! stack.push('a')?;
//! stack.push('b')?;
//! assert_eq!(stack.pop(), Some('b'));
//!
//! let mut queue = CircularQueue::new()?;
//! queue.push_back('a')?;
//! queue.push_back('b')?;
//! assert_eq!(queue.pop_front(), Some('a'));
//!
//! let mut list = SentinelList::new();
//! list.push_back('b')?;
//! list.push_front('a')?;
//! let it = list.search(&'b').unwrap();
//! list.insert(it, 'x')?;
//! assert_eq!(list.iter().copied().collect::<String>(), "axb");
//! # Ok(())
//! # }
//! ```
//!
//! # Thread safety
//!
//! The containers contain no internal synchronization. Sharing one across threads needs
//! an external lock held for the duration of each call.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod list;
pub mod queue;
pub mod stack;

// Re-export.
pub use common::*;
pub use list::*;
pub use queue::*;
pub use stack::*;
