//! Common utilities for the tagwright crates.
//!
//! This crate provides shared infrastructure used by the tree and parser crates:
//! - **Warning System** - colored, deduplicated terminal output for recoverable problems

pub mod warning;
