// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::mem::size_of;

/// Reports how many bytes a container holds on to, including reserved but unused slots.
///
/// Since no container shrinks, this value only grows over the container's lifetime
/// (until it is dropped).
pub trait GetMemSize {
    fn get_mem_size(&self) -> usize;
}

/// Bytes used by `slot_count` slots of type `Slot` plus the owning struct `Owner`
/// itself.
#[must_use]
pub fn storage_size<Owner, Slot>(slot_count: usize) -> usize {
    size_of::<Owner>() + slot_count.saturating_mul(size_of::<Slot>())
}
