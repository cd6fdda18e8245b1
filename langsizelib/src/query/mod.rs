//! Query processing: order totals and fold the tail.
//!
//! This module handles the third stage of the pipeline. Every output format
//! reads its ordering from here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use langsizelib::query::rank;
//!
//! let ranked = rank(&result.totals, 10);
//! ```

pub mod ranking;

pub use ranking::{rank, RankedResult, OTHER};
