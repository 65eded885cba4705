// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod circular_queue;
pub mod circular_queue_iterator;

// Re-export.
pub use circular_queue::*;
pub use circular_queue_iterator::*;
