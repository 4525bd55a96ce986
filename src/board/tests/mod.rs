//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `man.rs` - Man move, capture and promotion predicates
//! - `king.rs` - King move, capture and path-blocking predicates
//! - `layout.rs` - Starting layout and board lookup
//! - `movegen.rs` - Move generation under both capture policies
//! - `make_move.rs` - Applying moves, jumps and promotion
//! - `evaluation.rs` - End-of-game predicates
//! - `proptest.rs` - Property-based tests

mod king;
mod movegen;
