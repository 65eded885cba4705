// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod capacity;
pub mod container_error;
pub mod get_mem_size;

// Re-export.
pub use capacity::*;
pub use container_error::*;
pub use get_mem_size::*;
