use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome counts in first-recorded order. Returned by value from the
/// batch run so the reporter can be exercised in isolation.
#[derive(Debug, Default)]
pub struct Tally {
    counts: Vec<(Outcome, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        let recorded = self
            .counts
            .iter_mut()
            .find(|(recorded, _)| *recorded == outcome);

        match recorded {
            Some((_, count)) => *count += 1,
            None => self.counts.push((outcome, 1)),
        }
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts
            .iter()
            .find(|(recorded, _)| *recorded == outcome)
            .map_or(0, |(_, count)| *count)
    }

    /// Outcomes with their counts, in the order first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, usize)> + '_ {
        self.counts.iter().copied()
    }
}
