// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Id of the sentinel node in every [`super::SentinelList`]. Data nodes get ids starting
/// at `1`.
pub const SENTINEL_ID: usize = 0;

/// `prev` / `next` links of one node, expressed as node ids. The sentinel has links but
/// no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLinks {
    pub prev: usize,
    pub next: usize,
}

impl NodeLinks {
    /// Links of a node that points at itself in both directions. Only the sentinel of an
    /// empty list is ever in this state.
    #[must_use]
    pub fn self_loop(node_id: usize) -> Self {
        Self {
            prev: node_id,
            next: node_id,
        }
    }
}

/// A data node owned by the list's arena.
#[derive(Debug)]
pub struct ListNode<T> {
    pub links: NodeLinks,
    pub payload: T,
}
