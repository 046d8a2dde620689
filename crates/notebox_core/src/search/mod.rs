//! Filtering and sorting over the in-memory note collection.
//!
//! # Responsibility
//! - Provide pure predicates and comparators for view projections.
//! - Keep projection rules independent of any UI binding.

pub mod filter;
pub mod sort;
