use super::super::domain::Verdict;

/// Ceiling of the 36-point scale.
pub const MAX_GUNAS: u8 = 36;

/// Lowest total still read as a good match.
pub const GOOD_MATCH_THRESHOLD: u8 = 18;

pub(crate) fn decide_verdict(total_gunas: u8) -> Verdict {
    if total_gunas >= GOOD_MATCH_THRESHOLD {
        Verdict::Good
    } else {
        Verdict::Low
    }
}
