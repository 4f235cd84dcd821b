//! Core primitives for the `ldiff` line comparison tool.
//!
//! `ldiff-core` models each input file as a multiset of content lines
//! (trimmed, non-blank lines with their repetition counts) and reports
//! three kinds of differences between two such multisets: lines
//! exclusive to either side, in that side's original order, and lines
//! present on both sides with different repetition counts. All public
//! items include runnable examples.
//!
//! ```
//! use ldiff_core::{LineMultiset, RenderConfig};
//!
//! let lhs = LineMultiset::from_lines(["a", "b", "a", "c"]);
//! let rhs = LineMultiset::from_lines(["b", "c", "c", "d"]);
//!
//! let result = lhs.diff(&rhs);
//! assert_eq!(result.only_in_lhs(), ["a", "a"]);
//! assert_eq!(result.only_in_rhs(), ["d"]);
//!
//! let report = result.render("a.txt", "b.txt", &RenderConfig::default());
//! assert!(report.contains("only in a.txt"));
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod diff;
mod error;
mod loader;
mod multiset;
mod render;

pub use diff::{CountMismatch, DiffResult, Summary};
pub use error::LoadError;
pub use loader::load;
pub use multiset::LineMultiset;
pub use render::{RenderConfig, RenderError};

/// Returns the semantic version of the `ldiff-core` crate.
///
/// ```
/// assert!(!ldiff_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
