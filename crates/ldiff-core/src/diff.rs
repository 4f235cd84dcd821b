use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::LineMultiset;

/// A line present in both inputs with differing repetition counts.
///
/// ```
/// use ldiff_core::LineMultiset;
///
/// let lhs = LineMultiset::from_lines(["foo", "foo", "foo"]);
/// let rhs = LineMultiset::from_lines(["foo"]);
/// let result = lhs.diff(&rhs);
/// let mismatch = &result.count_mismatches()[0];
/// assert_eq!((mismatch.lhs_count, mismatch.rhs_count), (3, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMismatch {
    /// The shared line content.
    pub line: String,
    /// Occurrences in the first input.
    pub lhs_count: usize,
    /// Occurrences in the second input.
    pub rhs_count: usize,
}

/// Line-count statistics for both inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// All lines read from the first input, blank included.
    pub lhs_total: usize,
    /// All lines read from the second input, blank included.
    pub rhs_total: usize,
    /// Non-blank content lines in the first input.
    pub lhs_content: usize,
    /// Non-blank content lines in the second input.
    pub rhs_content: usize,
    /// `lhs_content - rhs_content` as a signed delta.
    pub content_delta: i64,
}

/// The structured outcome of comparing two [`LineMultiset`]s.
///
/// ```
/// use ldiff_core::LineMultiset;
///
/// let lhs = LineMultiset::from_lines(["a", "b"]);
/// let result = lhs.diff(&lhs.clone());
/// assert!(result.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    only_in_lhs: Vec<String>,
    only_in_rhs: Vec<String>,
    count_mismatches: Vec<CountMismatch>,
    summary: Summary,
}

impl DiffResult {
    /// Lines exclusive to the first input, in its original order with
    /// repeats kept.
    #[must_use]
    pub fn only_in_lhs(&self) -> &[String] {
        &self.only_in_lhs
    }

    /// Lines exclusive to the second input, in its original order with
    /// repeats kept.
    #[must_use]
    pub fn only_in_rhs(&self) -> &[String] {
        &self.only_in_rhs
    }

    /// Lines present in both inputs with unequal counts, ordered
    /// lexicographically by content.
    #[must_use]
    pub fn count_mismatches(&self) -> &[CountMismatch] {
        &self.count_mismatches
    }

    /// Line-count statistics for both inputs.
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Indicates whether the two inputs were equivalent as multisets.
    ///
    /// The summary never affects emptiness; inputs differing only in
    /// blank-line counts still compare as equivalent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_lhs.is_empty()
            && self.only_in_rhs.is_empty()
            && self.count_mismatches.is_empty()
    }
}

impl LineMultiset {
    /// Compares two multisets and classifies every distinct content line.
    ///
    /// Each line falls into exactly one of four buckets: exclusive to
    /// `self`, exclusive to `other`, present in both with unequal
    /// counts, or fully reconciled (equal nonzero counts, no entry).
    /// Classification is by content and multiplicity only; no
    /// positional alignment is attempted.
    ///
    /// ```
    /// use ldiff_core::LineMultiset;
    ///
    /// let lhs = LineMultiset::from_lines(["a", "b", "a", "c"]);
    /// let rhs = LineMultiset::from_lines(["b", "c", "c", "d"]);
    /// let result = lhs.diff(&rhs);
    ///
    /// assert_eq!(result.only_in_lhs(), ["a", "a"]);
    /// assert_eq!(result.only_in_rhs(), ["d"]);
    /// assert_eq!(result.count_mismatches().len(), 1);
    /// assert_eq!(result.count_mismatches()[0].line, "c");
    /// ```
    #[must_use]
    pub fn diff(&self, other: &LineMultiset) -> DiffResult {
        let mut exclusive_lhs: BTreeSet<&str> = BTreeSet::new();
        let mut exclusive_rhs: BTreeSet<&str> = BTreeSet::new();
        let mut count_mismatches = Vec::new();

        let all_lines: BTreeSet<&String> =
            self.frequency().keys().chain(other.frequency().keys()).collect();

        for line in all_lines {
            let lhs_count = self.count_of(line);
            let rhs_count = other.count_of(line);
            match (lhs_count, rhs_count) {
                (0, 0) => {}
                (_, 0) => {
                    exclusive_lhs.insert(line);
                }
                (0, _) => {
                    exclusive_rhs.insert(line);
                }
                _ if lhs_count != rhs_count => {
                    count_mismatches.push(CountMismatch {
                        line: line.clone(),
                        lhs_count,
                        rhs_count,
                    });
                }
                _ => {}
            }
        }

        // Second pass: replay each side's original order, keeping the
        // occurrences whose content was flagged exclusive above.
        let only_in_lhs = ordered_exclusives(self, &exclusive_lhs);
        let only_in_rhs = ordered_exclusives(other, &exclusive_rhs);

        let summary = Summary {
            lhs_total: self.total_lines(),
            rhs_total: other.total_lines(),
            lhs_content: self.content_lines(),
            rhs_content: other.content_lines(),
            content_delta: self.content_lines() as i64 - other.content_lines() as i64,
        };

        DiffResult { only_in_lhs, only_in_rhs, count_mismatches, summary }
    }
}

fn ordered_exclusives(side: &LineMultiset, exclusive: &BTreeSet<&str>) -> Vec<String> {
    side.ordered_lines()
        .iter()
        .filter(|line| exclusive.contains(line.as_str()))
        .cloned()
        .collect()
}
