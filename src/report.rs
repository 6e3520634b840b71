use crate::eval::{Outcome, Verification};
use std::io::{self, Write};

/// Write the correct/incorrect/ratio block for one dataset. Advisory
/// output; callers wanting the numbers should use the outcome directly.
pub fn write_outcome(w: &mut impl Write, label: &str, outcome: &Outcome) -> io::Result<()> {
    writeln!(w, "Correct Number: [{}] {}", label, outcome.correct)?;
    writeln!(w, "Incorrect Number: [{}] {}", label, outcome.incorrect)?;
    writeln!(w, "Ratio: [{}] {:.4}", label, outcome.ratio())?;
    Ok(())
}

pub fn write_report(w: &mut impl Write, verification: &Verification) -> io::Result<()> {
    write_outcome(w, "MatchedPairs", &verification.matched)?;
    writeln!(w)?;
    write_outcome(w, "MismatchedPairs", &verification.mismatched)?;
    Ok(())
}
