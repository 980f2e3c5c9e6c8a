//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - apply/undo round-trip correctness
//! - `movegen.rs` - capability table and move generation
//! - `eval.rs` - material evaluation
//! - `search.rs` - alpha-beta vs. unpruned minimax
//! - `edge_cases.rs` - special positions and precondition failures
//! - `proptest.rs` - property-based tests

mod proptest;
