//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders parsed blocks as a stable, line-per-block text
//!   dump for `insta` snapshot testing
//! - **`invariants`**: runtime checks for parser correctness (spans tile the
//!   source, text content matches its source slice, code is verbatim)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
