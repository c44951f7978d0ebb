//! Ashta-Koota (eight-fold) compatibility matching.
//!
//! Reference tables feed the friendship resolver, which feeds the eight Koota
//! scorers; the engine sums them into a 36-point report with a verdict. Every
//! step is a pure function of its inputs.

pub mod domain;
pub(crate) mod evaluation;
pub mod friendship;
pub mod router;
pub mod tables;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{CompatibilityReport, Couple, Koota, KootaScore, Person, Verdict};
pub use evaluation::{AshtaKootaEngine, GOOD_MATCH_THRESHOLD, MAX_GUNAS};
pub use friendship::{relationship, Relationship};
pub use router::compatibility_router;
pub use tables::{Gana, Nadi, Nakshatra, Planet, UnknownName, Varna, Yoni, ZodiacSign};
pub use validation::{CompatibilityRequest, InvalidField, MatchError, PersonInput};

/// Score a couple from raw names, groom first.
pub fn compute_compatibility(
    groom_moon_sign: &str,
    groom_nakshatra: &str,
    bride_moon_sign: &str,
    bride_nakshatra: &str,
) -> Result<CompatibilityReport, MatchError> {
    let request = CompatibilityRequest::new(
        PersonInput::new(bride_moon_sign, bride_nakshatra),
        PersonInput::new(groom_moon_sign, groom_nakshatra),
    );
    AshtaKootaEngine::new().evaluate(&request)
}
