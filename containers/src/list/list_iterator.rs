// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{SENTINEL_ID, SentinelList};

/// Borrowing head-to-tail iterator, created by [`SentinelList::iter`].
///
/// Follows the `next` links from the head and the `prev` links from the tail, stopping
/// when the two cursors have yielded `len` elements between them.
#[derive(Debug)]
pub struct ListIter<'a, T> {
    list: &'a SentinelList<T>,
    front_id: usize,
    back_id: usize,
    remaining: usize,
}

impl<'a, T> ListIter<'a, T> {
    pub(super) fn new(list: &'a SentinelList<T>) -> Self {
        Self {
            list,
            front_id: list.head_id(),
            back_id: list.tail_id(),
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.front_id == SENTINEL_ID {
            return None;
        }
        let item = self.list.payload(self.front_id)?;
        self.front_id = self.list.links(self.front_id).next;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<T> DoubleEndedIterator for ListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.back_id == SENTINEL_ID {
            return None;
        }
        let item = self.list.payload(self.back_id)?;
        self.back_id = self.list.links(self.back_id).prev;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

/// Owning iterator that pops elements off the list it consumed.
#[derive(Debug)]
pub struct ListIntoIter<T> {
    list: SentinelList<T>,
}

impl<T> Iterator for ListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> { self.list.pop_front() }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.list.len(), Some(self.list.len())) }
}

impl<T> DoubleEndedIterator for ListIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.list.pop_back() }
}

impl<T> ExactSizeIterator for ListIntoIter<T> {}

impl<'a, T> IntoIterator for &'a SentinelList<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> IntoIterator for SentinelList<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { ListIntoIter { list: self } }
}
