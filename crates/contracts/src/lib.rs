//! Shared wire types for the FarmLink frontend.
//!
//! Everything here mirrors JSON the server already emits; the client never
//! owns these entities, it only projects them for display. Pure projection
//! logic (conversation aggregation, unread normalization, input validation)
//! lives next to the types so it can be unit-tested off the wasm target.

pub mod domain;
pub mod system;
