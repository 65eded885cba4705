// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type shared by all containers. See [`ContainerError`] for details.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::collections::TryReserveError;

/// Type alias to make it easy to work with [`ContainerError`].
///
/// Since [`ContainerError`] implements [`miette::Diagnostic`], `?` converts it into a
/// [`miette::Report`] for callers that return [`miette::Result`].
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Errors reported by [`crate::GrowableStack`], [`crate::CircularQueue`] and
/// [`crate::SentinelList`].
///
/// An empty container is not an error: pops and accessors return [`None`] instead.
///
/// | Variant                | Cause                                                  | State after |
/// | :--------------------- | :----------------------------------------------------- | :---------- |
/// | [`ResizeRejected`]     | Requested capacity is smaller than the occupied count  | unchanged   |
/// | [`AllocationFailure`]  | The allocator refused to provide the backing storage   | unchanged   |
/// | [`CapacityOverflow`]   | Doubling the capacity would overflow [`usize`]         | unchanged   |
/// | [`SentinelHandle`]     | Read or delete through the list's sentinel position    | unchanged   |
/// | [`StaleHandle`]        | The handle's node was already deleted                  | unchanged   |
/// | [`ForeignHandle`]      | The handle belongs to a different list                 | unchanged   |
///
/// [`ResizeRejected`]: Self::ResizeRejected
/// [`AllocationFailure`]: Self::AllocationFailure
/// [`CapacityOverflow`]: Self::CapacityOverflow
/// [`SentinelHandle`]: Self::SentinelHandle
/// [`StaleHandle`]: Self::StaleHandle
/// [`ForeignHandle`]: Self::ForeignHandle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ContainerError {
    #[error("Resize to {requested} slots rejected, {occupied} elements are stored")]
    #[diagnostic(
        code(r3bl_containers::resize_rejected),
        help("Containers never drop elements to fit a smaller capacity")
    )]
    ResizeRejected { requested: usize, occupied: usize },

    #[error("Could not allocate storage for {requested} elements")]
    #[diagnostic(
        code(r3bl_containers::allocation_failure),
        help("The container is unchanged and can still be used")
    )]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Capacity {capacity} can't grow without overflowing usize")]
    #[diagnostic(code(r3bl_containers::capacity_overflow))]
    CapacityOverflow { capacity: usize },

    #[error("The sentinel position holds no element, can't {operation} it")]
    #[diagnostic(
        code(r3bl_containers::list::sentinel_handle),
        help("`end()` and the `begin()` of an empty list both point at the sentinel")
    )]
    SentinelHandle { operation: &'static str },

    #[error("Node {node_id} is no longer in the list")]
    #[diagnostic(
        code(r3bl_containers::list::stale_handle),
        help("A handle is invalidated when the node it points to is deleted or popped")
    )]
    StaleHandle { node_id: usize },

    #[error("Handle from list {handle_list_id} used on list {list_id}")]
    #[diagnostic(code(r3bl_containers::list::foreign_handle))]
    ForeignHandle {
        handle_list_id: usize,
        list_id: usize,
    },
}

impl ContainerError {
    pub(crate) fn allocation_failure(requested: usize, source: TryReserveError) -> Self {
        tracing::debug!(
            message = "allocation refused",
            requested = requested,
            error = %source,
        );
        Self::AllocationFailure { requested, source }
    }
}
