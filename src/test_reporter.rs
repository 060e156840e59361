use crate::tally::{Outcome, Tally};
use std::process::ExitCode;

/// Tab-separated summary: one `label\tcount` line per outcome recorded,
/// in first-recorded order. Outcomes never seen are omitted.
pub fn format_summary(tally: &Tally) -> String {
    let mut summary = String::new();
    for (outcome, count) in tally.iter() {
        summary.push_str(&format!("{}\t{}\n", outcome, count));
    }
    summary
}

/// Prints the summary and converts the tally into the driver's exit
/// status: failure as soon as any test failed.
pub fn report_tally(tally: &Tally) -> ExitCode {
    print!("{}", format_summary(tally));

    if tally.count(Outcome::Fail) == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_outcomes_in_first_recorded_order() {
        let mut tally = Tally::new();
        tally.record(Outcome::Fail);
        tally.record(Outcome::Pass);
        tally.record(Outcome::Fail);

        assert_eq!(format_summary(&tally), "FAIL\t2\nPASS\t1\n");
    }

    #[test]
    fn summary_omits_outcomes_never_recorded() {
        let mut tally = Tally::new();
        tally.record(Outcome::Pass);

        assert_eq!(format_summary(&tally), "PASS\t1\n");
    }

    #[test]
    fn empty_tally_produces_an_empty_summary() {
        assert_eq!(format_summary(&Tally::new()), "");
    }
}
