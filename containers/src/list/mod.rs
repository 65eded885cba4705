// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains:
//! 1. [`SentinelList`] - a circular doubly linked list with a permanent sentinel node.
//! 2. [`NodeHandle`] - the checked position type used to walk, insert and delete.
//! 3. [`ListIter`] and [`ListIntoIter`] - head-to-tail iterators.
//!
//! Nodes live in an arena keyed by ids that are never reused, which is what lets a
//! handle to a deleted node be reported as [`crate::ContainerError::StaleHandle`]
//! instead of dangling.

// Attach sources.
pub mod list_iterator;
pub mod list_node;
pub mod node_handle;
pub mod sentinel_list;

// Re-export.
pub use list_iterator::*;
pub use list_node::*;
pub use node_handle::*;
pub use sentinel_list::*;
