// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod growable_stack;

// Re-export.
pub use growable_stack::*;
