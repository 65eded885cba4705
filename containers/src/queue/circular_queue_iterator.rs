// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CircularQueue;

/// Front-to-back iterator over a [`CircularQueue`], created by [`CircularQueue::iter`].
///
/// Walks logical positions `0..len`, mapping each one onto its (possibly wrapped) slot.
#[derive(Debug)]
pub struct CircularQueueIterator<'a, T> {
    queue: &'a CircularQueue<T>,
    front_index: usize,
    back_index: usize,
}

impl<'a, T> CircularQueueIterator<'a, T> {
    pub(super) fn new(queue: &'a CircularQueue<T>) -> Self {
        Self {
            queue,
            front_index: 0,
            back_index: queue.len(),
        }
    }
}

impl<'a, T> Iterator for CircularQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_index == self.back_index {
            return None;
        }
        let item = self.queue.get(self.front_index);
        self.front_index += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_index - self.front_index;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for CircularQueueIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_index == self.back_index {
            return None;
        }
        self.back_index -= 1;
        self.queue.get(self.back_index)
    }
}

impl<T> ExactSizeIterator for CircularQueueIterator<'_, T> {}
