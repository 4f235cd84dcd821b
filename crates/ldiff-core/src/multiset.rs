use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A multiset view of one text artifact's lines.
///
/// Every line is trimmed of surrounding whitespace before
/// classification. Lines that are empty after trimming count toward
/// [`total_lines`](Self::total_lines) but are excluded from both the
/// ordered sequence and the frequency mapping, so blank-line-only
/// differences never surface in a diff.
///
/// ```
/// use ldiff_core::LineMultiset;
///
/// let multiset = LineMultiset::from_text("foo\n\n  bar  \nfoo\n");
/// assert_eq!(multiset.total_lines(), 4);
/// assert_eq!(multiset.content_lines(), 3);
/// assert_eq!(multiset.ordered_lines(), ["foo", "bar", "foo"]);
/// assert_eq!(multiset.count_of("foo"), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMultiset {
    ordered_lines: Vec<String>,
    frequency: BTreeMap<String, usize>,
    total_lines: usize,
}

impl LineMultiset {
    /// Builds a multiset from raw text, splitting on line boundaries.
    ///
    /// A trailing newline does not produce a phantom final line, so
    /// two inputs differing only in trailing-newline presence compare
    /// as equal.
    ///
    /// ```
    /// use ldiff_core::LineMultiset;
    ///
    /// let with_newline = LineMultiset::from_text("a\nb\n");
    /// let without = LineMultiset::from_text("a\nb");
    /// assert_eq!(with_newline, without);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut multiset = Self::default();
        for line in text.lines() {
            multiset.push_line(line);
        }
        multiset
    }

    /// Builds a multiset from an iterator of raw lines.
    ///
    /// ```
    /// use ldiff_core::LineMultiset;
    ///
    /// let multiset = LineMultiset::from_lines(["x", "", "y"]);
    /// assert_eq!(multiset.total_lines(), 3);
    /// assert_eq!(multiset.content_lines(), 2);
    /// ```
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut multiset = Self::default();
        for line in lines {
            multiset.push_line(line.as_ref());
        }
        multiset
    }

    fn push_line(&mut self, raw: &str) {
        self.total_lines += 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        *self.frequency.entry(trimmed.to_string()).or_insert(0) += 1;
        self.ordered_lines.push(trimmed.to_string());
    }

    /// Returns the trimmed, non-blank lines in file order, repeats kept.
    #[must_use]
    pub fn ordered_lines(&self) -> &[String] {
        &self.ordered_lines
    }

    /// Returns the mapping from distinct line content to occurrence count.
    #[must_use]
    pub fn frequency(&self) -> &BTreeMap<String, usize> {
        &self.frequency
    }

    /// Returns the occurrence count for the given content line, zero if absent.
    ///
    /// ```
    /// use ldiff_core::LineMultiset;
    ///
    /// let multiset = LineMultiset::from_lines(["a", "a"]);
    /// assert_eq!(multiset.count_of("a"), 2);
    /// assert_eq!(multiset.count_of("b"), 0);
    /// ```
    #[must_use]
    pub fn count_of(&self, line: &str) -> usize {
        self.frequency.get(line).copied().unwrap_or(0)
    }

    /// Returns the count of all lines read, blank lines included.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Returns the count of non-blank content lines.
    #[must_use]
    pub fn content_lines(&self) -> usize {
        self.ordered_lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let multiset = LineMultiset::from_text("  padded  \n\ttabbed\t\n");
        assert_eq!(multiset.ordered_lines(), ["padded", "tabbed"]);
    }

    #[test]
    fn blank_lines_count_toward_total_only() {
        let multiset = LineMultiset::from_text("a\n\n   \nb\n");
        assert_eq!(multiset.total_lines(), 4);
        assert_eq!(multiset.content_lines(), 2);
        assert!(multiset.frequency().keys().all(|line| !line.is_empty()));
    }

    #[test]
    fn content_count_matches_frequency_sum() {
        let multiset = LineMultiset::from_text("a\nb\na\n\nc\na\n");
        let frequency_sum: usize = multiset.frequency().values().sum();
        assert_eq!(multiset.content_lines(), frequency_sum);
        assert_eq!(multiset.content_lines(), multiset.ordered_lines().len());
    }

    #[test]
    fn empty_text_yields_empty_multiset() {
        let multiset = LineMultiset::from_text("");
        assert_eq!(multiset.total_lines(), 0);
        assert_eq!(multiset.content_lines(), 0);
        assert!(multiset.frequency().is_empty());
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let multiset = LineMultiset::from_text("a\r\nb\r\n");
        assert_eq!(multiset.ordered_lines(), ["a", "b"]);
    }

    #[test]
    fn from_lines_matches_from_text() {
        let from_lines = LineMultiset::from_lines(["a", "", "b"]);
        let from_text = LineMultiset::from_text("a\n\nb\n");
        assert_eq!(from_lines, from_text);
    }
}
