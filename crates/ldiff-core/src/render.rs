use std::fmt::Write as _;

use crate::diff::DiffResult;

const COLOR_RESET: &str = "\u{1b}[0m";
const COLOR_RED: &str = "\u{1b}[31m";
const COLOR_GREEN: &str = "\u{1b}[32m";
const COLOR_YELLOW: &str = "\u{1b}[33m";

/// Configuration toggles for report rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderConfig {
    color: bool,
}

impl RenderConfig {
    /// Constructs a configuration with default settings (no ANSI color).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI color output.
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Indicates whether color output is enabled.
    #[must_use]
    pub fn color_enabled(self) -> bool {
        self.color
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    message: String,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self { message: err.to_string() }
    }
}

impl DiffResult {
    /// Renders the human-readable text report.
    ///
    /// The report opens with per-file line counts and a content-count
    /// comparison. When no differences exist a single equivalence line
    /// follows; otherwise up to three sections are emitted, each entry
    /// numbered with a 1-based ordinal.
    ///
    /// ```
    /// use ldiff_core::{LineMultiset, RenderConfig};
    ///
    /// let lhs = LineMultiset::from_lines(["a"]);
    /// let rhs = LineMultiset::from_lines(["b"]);
    /// let report = lhs.diff(&rhs).render("a.txt", "b.txt", &RenderConfig::default());
    /// assert!(report.contains("only in a.txt (1 line):"));
    /// assert!(report.contains("  1. a"));
    /// ```
    #[must_use]
    pub fn render(&self, lhs_label: &str, rhs_label: &str, config: &RenderConfig) -> String {
        let summary = self.summary();
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{lhs_label}: total lines = {}, content lines = {}",
            summary.lhs_total, summary.lhs_content
        );
        let _ = writeln!(
            output,
            "{rhs_label}: total lines = {}, content lines = {}",
            summary.rhs_total, summary.rhs_content
        );
        output.push('\n');

        if summary.content_delta > 0 {
            let extra = summary.content_delta.unsigned_abs() as usize;
            let _ = writeln!(
                output,
                "{lhs_label} has {extra} more content line{} than {rhs_label}",
                plural(extra)
            );
        } else if summary.content_delta < 0 {
            let extra = summary.content_delta.unsigned_abs() as usize;
            let _ = writeln!(
                output,
                "{rhs_label} has {extra} more content line{} than {lhs_label}",
                plural(extra)
            );
        } else {
            output.push_str("both files have the same number of content lines\n");
        }
        output.push('\n');

        if self.is_empty() {
            output.push_str(
                "files are equivalent: same content lines with the same repetition counts\n",
            );
            return output;
        }

        if !self.only_in_lhs().is_empty() {
            let count = self.only_in_lhs().len();
            let _ = writeln!(output, "only in {lhs_label} ({count} line{}):", plural(count));
            for (index, line) in self.only_in_lhs().iter().enumerate() {
                push_entry(&mut output, index + 1, line, COLOR_RED, config);
            }
            output.push('\n');
        }

        if !self.only_in_rhs().is_empty() {
            let count = self.only_in_rhs().len();
            let _ = writeln!(output, "only in {rhs_label} ({count} line{}):", plural(count));
            for (index, line) in self.only_in_rhs().iter().enumerate() {
                push_entry(&mut output, index + 1, line, COLOR_GREEN, config);
            }
            output.push('\n');
        }

        if !self.count_mismatches().is_empty() {
            output.push_str("lines in both files with different repetition counts:\n");
            for (index, mismatch) in self.count_mismatches().iter().enumerate() {
                let entry = format!(
                    "{} ({lhs_label}: {}, {rhs_label}: {})",
                    mismatch.line, mismatch.lhs_count, mismatch.rhs_count
                );
                push_entry(&mut output, index + 1, &entry, COLOR_YELLOW, config);
            }
            output.push('\n');
        }

        output
    }

    /// Renders the full result, summary included, as JSON.
    ///
    /// ```
    /// use ldiff_core::LineMultiset;
    ///
    /// let lhs = LineMultiset::from_lines(["a"]);
    /// let rhs = LineMultiset::from_lines(["b"]);
    /// let json = lhs.diff(&rhs).render_json().unwrap();
    /// assert!(json.contains("\"only_in_lhs\":[\"a\"]"));
    /// ```
    pub fn render_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn push_entry(output: &mut String, ordinal: usize, text: &str, color: &str, config: &RenderConfig) {
    if config.color_enabled() {
        output.push_str(color);
    }
    let _ = writeln!(output, "  {ordinal}. {text}");
    if config.color_enabled() {
        output.push_str(COLOR_RESET);
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use crate::{LineMultiset, RenderConfig};

    #[test]
    fn equivalent_inputs_render_single_statement() {
        let lhs = LineMultiset::from_text("x\n\ny\n");
        let rhs = LineMultiset::from_text("x\ny\n");
        let report = lhs.diff(&rhs).render("a.txt", "b.txt", &RenderConfig::default());

        assert!(report.contains("files are equivalent"));
        assert!(!report.contains("only in"));
    }

    #[test]
    fn sections_use_one_based_ordinals() {
        let lhs = LineMultiset::from_lines(["p", "q"]);
        let rhs = LineMultiset::from_lines(["r"]);
        let report = lhs.diff(&rhs).render("a.txt", "b.txt", &RenderConfig::default());

        assert!(report.contains("  1. p"));
        assert!(report.contains("  2. q"));
        assert!(report.contains("only in b.txt (1 line):"));
        assert!(report.contains("  1. r"));
    }

    #[test]
    fn color_wraps_entries_with_ansi_codes() {
        let lhs = LineMultiset::from_lines(["gone"]);
        let rhs = LineMultiset::from_lines(["new"]);
        let config = RenderConfig::default().with_color(true);
        let report = lhs.diff(&rhs).render("a.txt", "b.txt", &config);

        assert!(report.contains("\u{1b}[31m"), "expected ANSI red segment");
        assert!(report.contains("\u{1b}[32m"), "expected ANSI green segment");
        assert!(report.contains("\u{1b}[0m"));
    }

    #[test]
    fn mismatch_entries_carry_both_counts() {
        let lhs = LineMultiset::from_lines(["dup", "dup"]);
        let rhs = LineMultiset::from_lines(["dup"]);
        let report = lhs.diff(&rhs).render("a.txt", "b.txt", &RenderConfig::default());

        assert!(report.contains("lines in both files with different repetition counts:"));
        assert!(report.contains("  1. dup (a.txt: 2, b.txt: 1)"));
    }

    #[test]
    fn comparison_sentence_points_at_larger_side() {
        let lhs = LineMultiset::from_lines(["a", "b"]);
        let rhs = LineMultiset::from_lines(["a"]);
        let report = lhs.diff(&rhs).render("big.txt", "small.txt", &RenderConfig::default());
        assert!(report.contains("big.txt has 1 more content line than small.txt"));

        let reversed = rhs.diff(&lhs).render("small.txt", "big.txt", &RenderConfig::default());
        assert!(reversed.contains("big.txt has 1 more content line than small.txt"));
    }
}
