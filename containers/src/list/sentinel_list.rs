// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Circular doubly linked list with a permanent sentinel node. See [`SentinelList`].

use std::fmt::Debug;

use rustc_hash::FxHashMap;

use super::{ListIter, ListNode, NodeHandle, NodeLinks, SENTINEL_ID,
            node_handle::next_list_id};
use crate::{ContainerError, ContainerResult, GetMemSize, storage_size};

/// Doubly linked list whose nodes form a single circular chain through a sentinel.
///
/// ```text
///         ┌──────────────────────────────────────────────────────┐
///         ↓                                                      │
///   ╔══════════╗ next  ┌────────┐ next  ┌────────┐ next  ┌────────┐
///   ║ sentinel ║ ────→ │ head   │ ────→ │  ...   │ ────→ │ tail   │
///   ║ (no data)║ ←──── │ node 1 │ ←──── │        │ ←──── │ node n │
///   ╚══════════╝ prev  └────────┘ prev  └────────┘ prev  └────────┘
///         │                                                  ↑
///         └──────────────────────────────────────────────────┘
/// ```
///
/// - `sentinel.next` is the head and `sentinel.prev` is the tail.
/// - The list is empty exactly when the sentinel links to itself.
/// - [`Self::begin`] is the head (the sentinel when empty) and [`Self::end`] is always
///   the sentinel, so a forward walk runs from `begin()` until it reaches `end()`.
///
/// Nodes are stored in an arena keyed by node id. Ids are never reused, so a
/// [`NodeHandle`] to a deleted node is detected as stale.
///
/// # Examples
///
/// ```
/// use r3bl_containers::SentinelList;
///
/// # fn main() -> miette::Result<()> {
/// let mut list = SentinelList::new();
/// for ch in "Hi_my_f".chars() {
///     list.push_back(ch)?;
/// }
///
/// // Walk forward with handles.
/// let mut it = list.begin();
/// let mut walked = String::new();
/// while it != list.end() {
///     walked.push(*list.get(it)?);
///     it = list.advance(it)?;
/// }
/// assert_eq!(walked, "Hi_my_f");
///
/// // Splice before a found node, then delete it.
/// let found = list.search(&'m').unwrap();
/// list.insert(found, '+')?;
/// assert_eq!(list.delete(found)?, 'm');
/// assert_eq!(list.iter().collect::<String>(), "Hi_+y_f");
/// # Ok(())
/// # }
/// ```
pub struct SentinelList<T> {
    list_id: usize,
    sentinel: NodeLinks,
    nodes: FxHashMap<usize, ListNode<T>>,
    last_node_id: usize,
}

/// The two states a [`SentinelList`] can be in. Every mutator moves between them only
/// at the `0 <-> 1` element boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// The sentinel links to itself.
    Empty,
    /// Holds this many (at least one) elements.
    Populated(usize),
}

impl<T> Default for SentinelList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> SentinelList<T> {
    /// Creates an empty list: just the sentinel, linked to itself. Doesn't allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            list_id: next_list_id(),
            sentinel: NodeLinks::self_loop(SENTINEL_ID),
            nodes: FxHashMap::default(),
            last_node_id: SENTINEL_ID,
        }
    }

    /// Creates an empty list with arena room for `capacity` nodes.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the arena can't be allocated.
    pub fn with_capacity(capacity: usize) -> ContainerResult<Self> {
        let mut list = Self::new();
        list.nodes
            .try_reserve(capacity)
            .map_err(|source| ContainerError::allocation_failure(capacity, source))?;
        Ok(list)
    }

    /// Builds a list by pushing every item of `iter` to the back.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::push_back`].
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> ContainerResult<Self> {
        let mut list = Self::new();
        for item in iter {
            list.push_back(item)?;
        }
        Ok(list)
    }
}

mod mutator {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> SentinelList<T> {
        /// Splices `item` in right before the sentinel, making it the new tail.
        ///
        /// # Errors
        ///
        /// [`ContainerError::AllocationFailure`] if the arena can't grow.
        pub fn push_back(&mut self, item: T) -> ContainerResult<NodeHandle> {
            self.splice_before(SENTINEL_ID, item)
        }

        /// Splices `item` in right after the sentinel, making it the new head.
        ///
        /// # Errors
        ///
        /// [`ContainerError::AllocationFailure`] if the arena can't grow.
        pub fn push_front(&mut self, item: T) -> ContainerResult<NodeHandle> {
            self.splice_before(self.sentinel.next, item)
        }

        /// Removes the tail. Returns [`None`] (and changes nothing) if the list is empty.
        pub fn pop_back(&mut self) -> Option<T> { self.unlink(self.sentinel.prev) }

        /// Removes the head. Returns [`None`] (and changes nothing) if the list is empty.
        pub fn pop_front(&mut self) -> Option<T> { self.unlink(self.sentinel.next) }

        /// Splices `item` in immediately before `position` and returns the new node's
        /// handle. Inserting before [`Self::end`] appends, inserting before
        /// [`Self::begin`] prepends. No other handle is invalidated.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::StaleHandle`] or [`ContainerError::ForeignHandle`] if
        ///   `position` is not a live position in this list.
        /// - [`ContainerError::AllocationFailure`] if the arena can't grow.
        pub fn insert(
            &mut self,
            position: NodeHandle,
            item: T,
        ) -> ContainerResult<NodeHandle> {
            let node_id = self.validate(position)?;
            self.splice_before(node_id, item)
        }

        /// Unlinks the node at `position` and returns its element. Every copy of
        /// `position` becomes stale.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::SentinelHandle`] if `position` is the sentinel. This is
        ///   also the only live position of an empty list, so deleting from an empty
        ///   list ends up here. Nothing is changed.
        /// - [`ContainerError::StaleHandle`] or [`ContainerError::ForeignHandle`] if
        ///   `position` is not a live position in this list.
        pub fn delete(&mut self, position: NodeHandle) -> ContainerResult<T> {
            let node_id = self.validate(position)?;
            if node_id == SENTINEL_ID {
                tracing::debug!(
                    message = "delete of sentinel rejected",
                    list_id = self.list_id
                );
                return Err(ContainerError::SentinelHandle { operation: "delete" });
            }
            self.unlink(node_id)
                .ok_or(ContainerError::StaleHandle { node_id })
        }

        /// Drops every element, head to tail. Handles from before the call become stale,
        /// except for the sentinel.
        pub fn clear(&mut self) { while self.pop_front().is_some() {} }

        /// Inserts a new node between `next_id`'s current predecessor and `next_id`.
        fn splice_before(&mut self, next_id: usize, item: T) -> ContainerResult<NodeHandle> {
            self.nodes
                .try_reserve(1)
                .map_err(|source| ContainerError::allocation_failure(self.len() + 1, source))?;
            let new_id = self
                .last_node_id
                .checked_add(1)
                .ok_or(ContainerError::CapacityOverflow {
                    capacity: self.last_node_id,
                })?;
            self.last_node_id = new_id;

            let prev_id = self.links(next_id).prev;
            self.nodes.insert(
                new_id,
                ListNode {
                    links: NodeLinks {
                        prev: prev_id,
                        next: next_id,
                    },
                    payload: item,
                },
            );
            self.links_mut(prev_id).next = new_id;
            self.links_mut(next_id).prev = new_id;

            Ok(self.handle(new_id))
        }

        /// Detaches `node_id`, joining its neighbors. Returns [`None`] for the sentinel
        /// (so pops on an empty list are no-ops) and for ids no longer in the arena.
        fn unlink(&mut self, node_id: usize) -> Option<T> {
            let node = self.nodes.remove(&node_id)?;
            let NodeLinks { prev, next } = node.links;
            self.links_mut(prev).next = next;
            self.links_mut(next).prev = prev;
            Some(node.payload)
        }

        fn links_mut(&mut self, node_id: usize) -> &mut NodeLinks {
            if node_id == SENTINEL_ID {
                return &mut self.sentinel;
            }
            match self.nodes.get_mut(&node_id) {
                Some(node) => &mut node.links,
                None => unreachable!("node {node_id} is linked but not in the arena"),
            }
        }
    }
}

mod navigation {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> SentinelList<T> {
        /// Position of the head, or the sentinel (equal to [`Self::end`]) when empty.
        #[must_use]
        pub fn begin(&self) -> NodeHandle { self.handle(self.sentinel.next) }

        /// The sentinel position: one past the tail and one before the head.
        #[must_use]
        pub fn end(&self) -> NodeHandle { self.handle(SENTINEL_ID) }

        /// The position after `position`. Advancing from the tail yields the sentinel,
        /// advancing from the sentinel yields the head.
        ///
        /// # Errors
        ///
        /// [`ContainerError::StaleHandle`] or [`ContainerError::ForeignHandle`] if
        /// `position` is not a live position in this list.
        pub fn advance(&self, position: NodeHandle) -> ContainerResult<NodeHandle> {
            let node_id = self.validate(position)?;
            Ok(self.handle(self.links(node_id).next))
        }

        /// The position before `position`. Rewinding from the head yields the sentinel,
        /// rewinding from the sentinel yields the tail.
        ///
        /// # Errors
        ///
        /// [`ContainerError::StaleHandle`] or [`ContainerError::ForeignHandle`] if
        /// `position` is not a live position in this list.
        pub fn rewind(&self, position: NodeHandle) -> ContainerResult<NodeHandle> {
            let node_id = self.validate(position)?;
            Ok(self.handle(self.links(node_id).prev))
        }

        /// `true` if `position` can be used with this list right now.
        #[must_use]
        pub fn contains_handle(&self, position: NodeHandle) -> bool {
            self.validate(position).is_ok()
        }

        /// Confirms `position` belongs to this list and its node is still there.
        pub(super) fn validate(&self, position: NodeHandle) -> ContainerResult<usize> {
            if position.list_id != self.list_id {
                tracing::debug!(
                    message = "foreign handle rejected",
                    list_id = self.list_id,
                    handle_list_id = position.list_id
                );
                return Err(ContainerError::ForeignHandle {
                    handle_list_id: position.list_id,
                    list_id: self.list_id,
                });
            }
            let node_id = position.node_id;
            if node_id != SENTINEL_ID && !self.nodes.contains_key(&node_id) {
                tracing::debug!(message = "stale handle rejected", node_id);
                return Err(ContainerError::StaleHandle { node_id });
            }
            Ok(node_id)
        }

        pub(super) fn handle(&self, node_id: usize) -> NodeHandle {
            NodeHandle::new(self.list_id, node_id)
        }

        pub(in crate::list) fn links(&self, node_id: usize) -> &NodeLinks {
            if node_id == SENTINEL_ID {
                return &self.sentinel;
            }
            &self.nodes[&node_id].links
        }
    }
}

mod accessor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> SentinelList<T> {
        #[must_use]
        pub fn front(&self) -> Option<&T> { self.payload(self.sentinel.next) }

        #[must_use]
        pub fn back(&self) -> Option<&T> { self.payload(self.sentinel.prev) }

        pub fn front_mut(&mut self) -> Option<&mut T> {
            let node_id = self.sentinel.next;
            self.nodes.get_mut(&node_id).map(|node| &mut node.payload)
        }

        pub fn back_mut(&mut self) -> Option<&mut T> {
            let node_id = self.sentinel.prev;
            self.nodes.get_mut(&node_id).map(|node| &mut node.payload)
        }

        /// Element stored at `position`.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::SentinelHandle`] if `position` is the sentinel.
        /// - [`ContainerError::StaleHandle`] or [`ContainerError::ForeignHandle`] if
        ///   `position` is not a live position in this list.
        pub fn get(&self, position: NodeHandle) -> ContainerResult<&T> {
            let node_id = self.validate(position)?;
            self.payload(node_id)
                .ok_or(ContainerError::SentinelHandle { operation: "read" })
        }

        /// Mutable element stored at `position`. Same errors as [`Self::get`].
        ///
        /// # Errors
        ///
        /// See [`Self::get`].
        pub fn get_mut(&mut self, position: NodeHandle) -> ContainerResult<&mut T> {
            let node_id = self.validate(position)?;
            self.nodes
                .get_mut(&node_id)
                .map(|node| &mut node.payload)
                .ok_or(ContainerError::SentinelHandle { operation: "write" })
        }

        /// First position, head to tail, whose element equals `target`.
        #[must_use]
        pub fn search(&self, target: &T) -> Option<NodeHandle>
        where
            T: PartialEq,
        {
            self.search_by(|item| item == target)
        }

        /// First position, head to tail, whose element satisfies `predicate`.
        pub fn search_by(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeHandle> {
            let mut node_id = self.sentinel.next;
            while node_id != SENTINEL_ID {
                let node = &self.nodes[&node_id];
                if predicate(&node.payload) {
                    return Some(self.handle(node_id));
                }
                node_id = node.links.next;
            }
            None
        }

        /// Iterates head to tail. Also a [`DoubleEndedIterator`].
        #[must_use]
        pub fn iter(&self) -> ListIter<'_, T> { ListIter::new(self) }

        pub(in crate::list) fn payload(&self, node_id: usize) -> Option<&T> {
            self.nodes.get(&node_id).map(|node| &node.payload)
        }

        pub(in crate::list) fn head_id(&self) -> usize { self.sentinel.next }

        pub(in crate::list) fn tail_id(&self) -> usize { self.sentinel.prev }
    }
}

mod size {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> SentinelList<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.nodes.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

        #[must_use]
        pub fn state(&self) -> ListState {
            match self.len() {
                0 => ListState::Empty,
                count => ListState::Populated(count),
            }
        }
    }

    impl<T> GetMemSize for SentinelList<T> {
        fn get_mem_size(&self) -> usize {
            storage_size::<Self, (usize, ListNode<T>)>(self.nodes.capacity())
        }
    }
}

/// Releases the nodes head to tail, then the sentinel goes with the struct.
impl<T> Drop for SentinelList<T> {
    fn drop(&mut self) { self.clear(); }
}

impl<T: PartialEq> PartialEq for SentinelList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SentinelList<T> {}

impl<T: Debug> Debug for SentinelList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentinelList")
            .field("list_id", &self.list_id)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn list_of(text: &str) -> SentinelList<char> {
        SentinelList::try_from_iter(text.chars()).unwrap()
    }

    fn forward(list: &SentinelList<char>) -> String {
        let mut acc = String::new();
        let mut it = list.begin();
        while it != list.end() {
            acc.push(*list.get(it).unwrap());
            it = list.advance(it).unwrap();
        }
        acc
    }

    fn backward(list: &SentinelList<char>) -> String {
        let mut acc = String::new();
        let mut it = list.rewind(list.end()).unwrap();
        while it != list.end() {
            acc.push(*list.get(it).unwrap());
            it = list.rewind(it).unwrap();
        }
        acc
    }

    /// Walks the raw links and checks that they form one circle through the sentinel
    /// that visits exactly `len` data nodes.
    fn assert_chain_intact<T>(list: &SentinelList<T>) {
        let mut visited = 0;
        let mut node_id = list.sentinel.next;
        let mut prev_id = SENTINEL_ID;
        while node_id != SENTINEL_ID {
            let links = list.links(node_id);
            assert_eq!(links.prev, prev_id);
            assert_ne!(links.next, node_id);
            prev_id = node_id;
            node_id = links.next;
            visited += 1;
        }
        assert_eq!(list.sentinel.prev, prev_id);
        assert_eq!(visited, list.len());
    }

    #[test]
    fn test_empty_list() {
        let list: SentinelList<char> = SentinelList::new();
        assert_eq!(list.sentinel, NodeLinks::self_loop(SENTINEL_ID));
        assert_eq!(list.len(), 0);
        assert_eq!(list.state(), ListState::Empty);
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.advance(list.end()).unwrap(), list.end());
        assert_eq!(list.rewind(list.end()).unwrap(), list.end());
        assert_chain_intact(&list);
    }

    #[test]
    fn test_push_back_and_front() {
        let mut list = SentinelList::new();
        list.push_back('b').unwrap();
        list.push_front('a').unwrap();
        list.push_back('c').unwrap();
        assert_eq!(list.state(), ListState::Populated(3));
        assert_eq!(list.front(), Some(&'a'));
        assert_eq!(list.back(), Some(&'c'));
        assert_eq!(forward(&list), "abc");
        assert_eq!(backward(&list), "cba");
        assert_chain_intact(&list);
    }

    #[test]
    fn test_pop_both_ends() {
        let mut list = list_of("Hi_my_f");
        assert_eq!(list.pop_front(), Some('H'));
        assert_eq!(list.pop_back(), Some('f'));
        assert_eq!(list.len(), 5);
        assert_eq!(forward(&list), "i_my_");
        assert_chain_intact(&list);
    }

    #[test]
    fn test_pop_until_empty_restores_self_loop() {
        let mut list = list_of("ab");
        assert_eq!(list.pop_back(), Some('b'));
        assert_eq!(list.pop_back(), Some('a'));
        assert_eq!(list.sentinel, NodeLinks::self_loop(SENTINEL_ID));
        for _ in 0..3 {
            assert_eq!(list.pop_back(), None);
            assert_eq!(list.pop_front(), None);
            assert_eq!(list.sentinel, NodeLinks::self_loop(SENTINEL_ID));
        }
    }

    #[test]
    fn test_advance_and_rewind_wrap_through_sentinel() {
        let list = list_of("xyz");
        let tail = list.rewind(list.end()).unwrap();
        assert_eq!(list.get(tail), Ok(&'z'));
        assert_eq!(list.advance(tail).unwrap(), list.end());
        assert_eq!(list.advance(list.end()).unwrap(), list.begin());
        assert_eq!(list.rewind(list.begin()).unwrap(), list.end());
    }

    #[test_case("abc", 'a', "abc" ; "first")]
    #[test_case("abc", 'c', "abc" ; "last")]
    #[test_case("abcb", 'b', "abcb" ; "first of duplicates")]
    fn test_search_finds_first_match(text: &str, target: char, expected: &str) {
        let list = list_of(text);
        let found = list.search(&target).unwrap();
        assert_eq!(list.get(found), Ok(&target));
        // The match is the first one: nothing before it equals the target.
        let mut it = list.rewind(found).unwrap();
        while it != list.end() {
            assert_ne!(list.get(it), Ok(&target));
            it = list.rewind(it).unwrap();
        }
        assert_eq!(forward(&list), expected);
    }

    #[test]
    fn test_search_not_found() {
        let list = list_of("abc");
        assert_eq!(list.search(&'z'), None);
        let empty: SentinelList<char> = SentinelList::new();
        assert_eq!(empty.search(&'a'), None);
    }

    #[test]
    fn test_search_by_predicate() {
        let list = SentinelList::try_from_iter([3, 8, 5, 10]).unwrap();
        let found = list.search_by(|it| *it > 4).unwrap();
        assert_eq!(list.get(found), Ok(&8));
        assert_eq!(list.search_by(|it| *it > 100), None);
    }

    #[test]
    fn test_insert_positions() {
        let mut list = list_of("bd");
        list.insert(list.begin(), 'a').unwrap();
        list.insert(list.end(), 'e').unwrap();
        let d = list.search(&'d').unwrap();
        let c = list.insert(d, 'c').unwrap();
        assert_eq!(list.get(c), Ok(&'c'));
        assert_eq!(forward(&list), "abcde");
        assert_eq!(backward(&list), "edcba");
        assert_chain_intact(&list);
    }

    #[test]
    fn test_insert_keeps_other_handles_valid() {
        let mut list = list_of("ac");
        let a = list.begin();
        let c = list.advance(a).unwrap();
        list.insert(c, 'b').unwrap();
        assert_eq!(list.get(a), Ok(&'a'));
        assert_eq!(list.get(c), Ok(&'c'));
        assert_eq!(list.advance(list.advance(a).unwrap()).unwrap(), c);
    }

    #[test]
    fn test_delete_returns_element_and_relinks() {
        let mut list = list_of("abc");
        let b = list.search(&'b').unwrap();
        assert_eq!(list.delete(b), Ok('b'));
        assert_eq!(forward(&list), "ac");
        assert_eq!(backward(&list), "ca");
        assert_chain_intact(&list);
    }

    #[test]
    fn test_delete_sentinel_is_rejected() {
        let mut list = list_of("ab");
        assert_eq!(
            list.delete(list.end()),
            Err(ContainerError::SentinelHandle { operation: "delete" })
        );
        assert_eq!(forward(&list), "ab");

        let mut empty: SentinelList<char> = SentinelList::new();
        assert_eq!(
            empty.delete(empty.begin()),
            Err(ContainerError::SentinelHandle { operation: "delete" })
        );
        assert_eq!(empty.state(), ListState::Empty);
    }

    #[test]
    fn test_stale_handle_is_reported() {
        let mut list = list_of("abc");
        let b = list.search(&'b').unwrap();
        list.delete(b).unwrap();

        let stale = ContainerError::StaleHandle {
            node_id: b.node_id,
        };
        assert_eq!(list.get(b), Err(stale.clone()));
        assert_eq!(list.advance(b), Err(stale.clone()));
        assert_eq!(list.delete(b), Err(stale));
        assert!(!list.contains_handle(b));
        assert!(list.insert(b, 'x').is_err());
        assert_eq!(forward(&list), "ac");

        // Popping invalidates too.
        let a = list.begin();
        list.pop_front();
        assert!(!list.contains_handle(a));
    }

    #[test]
    fn test_foreign_handle_is_reported() {
        let mut first = list_of("ab");
        let second = list_of("ab");
        let handle = second.begin();
        assert!(matches!(
            first.get(handle),
            Err(ContainerError::ForeignHandle { .. })
        ));
        assert!(matches!(
            first.delete(handle),
            Err(ContainerError::ForeignHandle { .. })
        ));
        assert!(!first.contains_handle(second.end()));
        assert_eq!(forward(&first), "ab");
    }

    #[test]
    fn test_get_sentinel_is_rejected() {
        let mut list = list_of("a");
        assert_eq!(
            list.get(list.end()),
            Err(ContainerError::SentinelHandle { operation: "read" })
        );
        let end = list.end();
        assert_eq!(
            list.get_mut(end).map(|_| ()),
            Err(ContainerError::SentinelHandle { operation: "write" })
        );
    }

    #[test]
    fn test_mutable_access() {
        let mut list = list_of("abc");
        *list.front_mut().unwrap() = 'A';
        *list.back_mut().unwrap() = 'C';
        let b = list.search(&'b').unwrap();
        *list.get_mut(b).unwrap() = 'B';
        assert_eq!(forward(&list), "ABC");
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut list = list_of("abc");
        let old = list.begin();
        list.clear();
        assert_eq!(list.state(), ListState::Empty);
        assert_eq!(list.sentinel, NodeLinks::self_loop(SENTINEL_ID));
        assert!(!list.contains_handle(old));
        assert!(list.contains_handle(list.end()));
        list.push_back('z').unwrap();
        assert_eq!(forward(&list), "z");
        assert_chain_intact(&list);
    }

    /// Pushes "Hi_my_friend" to the back, "Other" to the front one char at a time, then
    /// deletes the single 'O'.
    #[test]
    fn test_search_and_delete_mixed_pushes() {
        let mut list = list_of("Hi_my_friend");
        for ch in "Other".chars() {
            list.push_front(ch).unwrap();
        }
        assert_eq!(forward(&list), "rehtOHi_my_friend");

        let o = list.search(&'O').unwrap();
        assert_eq!(list.get(list.advance(o).unwrap()), Ok(&'H'));
        assert_eq!(list.get(list.rewind(o).unwrap()), Ok(&'t'));
        assert_eq!(list.delete(o), Ok('O'));

        assert_eq!(list.search(&'O'), None);
        assert_eq!(forward(&list), "rehtHi_my_friend");
        assert_eq!(backward(&list), "dneirf_ym_iHther");
        assert_eq!(list.len(), 16);
        assert_chain_intact(&list);
    }

    #[test]
    fn test_with_capacity_reserves_arena() {
        let list: SentinelList<u8> = SentinelList::with_capacity(16).unwrap();
        assert!(list.nodes.capacity() >= 16);
        assert!(list.get_mem_size() > std::mem::size_of::<SentinelList<u8>>());
        assert!(list.is_empty());
    }
}
