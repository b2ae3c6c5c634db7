//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move rules and self-check filtering
//! - `status.rs` - Attack testing and status classification
//! - `apply.rs` - Move application and the checked commit path
//! - `proptest.rs` - Property-based tests

mod movegen;
