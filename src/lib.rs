//! Public library API for inspecting flattened message files.

/// Flattened message parsing, type registry, value rendering, and session orchestration.
pub mod msg;
