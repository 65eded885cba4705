// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::SENTINEL_ID;

static LIST_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Hands out a distinct id to every list created in this process, so that handles can't
/// be used across lists.
pub(super) fn next_list_id() -> usize { LIST_ID_COUNTER.fetch_add(1, Ordering::Relaxed) }

/// Opaque position in a [`super::SentinelList`]: either a data node or the sentinel.
///
/// The sentinel position is what [`super::SentinelList::end`] returns. It is a valid
/// place to [`advance`](super::SentinelList::advance) from or
/// [`insert`](super::SentinelList::insert) before, but it holds no element.
///
/// A handle doesn't borrow the list. Once its node is deleted (or popped) every copy of
/// it becomes stale, and the list reports that instead of touching another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(super) list_id: usize,
    pub(super) node_id: usize,
}

impl NodeHandle {
    pub(super) fn new(list_id: usize, node_id: usize) -> Self { Self { list_id, node_id } }

    /// `true` for the sentinel (one-past-last / one-before-first) position.
    #[must_use]
    pub fn is_sentinel(&self) -> bool { self.node_id == SENTINEL_ID }
}
