// Diagnostics printed when a test's combined output does not match its
// expectation.

use colored::{Color, Colorize};
use similar::{ChangeTag, TextDiff};
use std::fmt::{self, Display};

/// Full failure dump: the expected and actual text in their entirety,
/// followed by a line diff with the expected side's line numbers in the
/// left gutter and the actual side's in the right.
pub struct FailureReport<'a> {
    pub expected: &'a str,
    pub actual: &'a str,
}

struct LineNumber(Option<usize>);

impl Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "    "),
            Some(idx) => write!(f, "{:<4}", idx + 1),
        }
    }
}

impl FailureReport<'_> {
    fn fmt_diff(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = TextDiff::from_lines(self.expected, self.actual);

        for change in diff.iter_all_changes() {
            let (sign, color) = match change.tag() {
                ChangeTag::Delete => ("-", Some(Color::Red)),
                ChangeTag::Insert => ("+", Some(Color::Green)),
                ChangeTag::Equal => (" ", None),
            };
            write!(
                f,
                "{} {} |",
                LineNumber(change.old_index()),
                LineNumber(change.new_index())
            )?;

            let line = format!("{}{}", sign, change);
            match color {
                Some(color) => write!(f, "{}", line.color(color))?,
                None => write!(f, "{}", line)?,
            }
        }

        Ok(())
    }
}

impl Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EXPECTED --------")?;
        writeln!(f, "{}", self.expected)?;
        writeln!(f, "OUTPUT ----------")?;
        writeln!(f, "{}", self.actual)?;
        writeln!(f, "DIFF ------------")?;
        self.fmt_diff(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_both_texts_and_marks_extra_lines() {
        colored::control::set_override(false);

        let report = FailureReport {
            expected: "1\n",
            actual: "1\n2\n",
        };
        let rendered = report.to_string();

        assert!(rendered.contains("EXPECTED --------"));
        assert!(rendered.contains("OUTPUT ----------"));
        assert!(rendered.contains("+2"));
    }

    #[test]
    fn missing_output_shows_as_deleted_lines() {
        colored::control::set_override(false);

        let report = FailureReport {
            expected: "1\n",
            actual: "",
        };

        assert!(report.to_string().contains("-1"));
    }
}
