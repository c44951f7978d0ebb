mod policy;
pub(crate) mod rules;

pub use policy::{GOOD_MATCH_THRESHOLD, MAX_GUNAS};

use std::collections::BTreeMap;

use super::domain::{CompatibilityReport, Couple, Koota};
use super::validation::{CompatibilityRequest, MatchError};
use policy::decide_verdict;
use rules::{bhakoot, graha_maitri, INDEPENDENT_RULES};
use tracing::debug;

/// Stateless Ashta-Koota evaluator. It only reads the constant reference tables,
/// so one instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct AshtaKootaEngine;

impl AshtaKootaEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate the raw names, then score. Nothing is scored if any name is
    /// outside the vocabulary.
    pub fn evaluate(
        &self,
        request: &CompatibilityRequest,
    ) -> Result<CompatibilityReport, MatchError> {
        let couple = request.validate()?;
        Ok(self.score(&couple))
    }

    pub fn score(&self, couple: &Couple) -> CompatibilityReport {
        let mut breakdown = BTreeMap::new();

        for rule in INDEPENDENT_RULES {
            breakdown.insert(rule.koota(), rule.score(couple));
        }

        // Bhakoot consumes the lords-friendly signal, so Graha Maitri goes first.
        let maitri = graha_maitri(couple);
        breakdown.insert(Koota::GrahaMaitri, maitri.points);
        breakdown.insert(Koota::Bhakoot, bhakoot(couple, maitri.lords_friendly));

        let total_gunas = breakdown.values().sum::<u8>();
        let verdict = decide_verdict(total_gunas);

        debug!(
            bride.moon_sign = %couple.bride.moon_sign,
            bride.nakshatra = %couple.bride.nakshatra,
            groom.moon_sign = %couple.groom.moon_sign,
            groom.nakshatra = %couple.groom.nakshatra,
            total_gunas,
            %verdict,
            "ashta-koota scored"
        );

        CompatibilityReport {
            total_gunas,
            max_gunas: MAX_GUNAS,
            breakdown,
            verdict,
        }
    }
}
