use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tables::{Nakshatra, ZodiacSign};

/// Moon placement of one party: the sign and the lunar mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub moon_sign: ZodiacSign,
    pub nakshatra: Nakshatra,
}

impl Person {
    pub const fn new(moon_sign: ZodiacSign, nakshatra: Nakshatra) -> Self {
        Self {
            moon_sign,
            nakshatra,
        }
    }
}

/// Validated pair of parties. Several Kootas are directional, so the roles are
/// never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Couple {
    pub bride: Person,
    pub groom: Person,
}

impl Couple {
    pub const fn new(bride: Person, groom: Person) -> Self {
        Self { bride, groom }
    }

    /// Same people with bride and groom roles exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            bride: self.groom,
            groom: self.bride,
        }
    }
}

/// The eight scoring categories, declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    #[serde(rename = "Graha Maitri")]
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

impl Koota {
    pub const ALL: [Koota; 8] = [
        Koota::Varna,
        Koota::Vashya,
        Koota::Tara,
        Koota::Yoni,
        Koota::GrahaMaitri,
        Koota::Gana,
        Koota::Bhakoot,
        Koota::Nadi,
    ];

    /// Highest points the category can award; the eight maxima sum to 36.
    pub const fn max_points(self) -> u8 {
        self as u8 + 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Koota::Varna => "Varna",
            Koota::Vashya => "Vashya",
            Koota::Tara => "Tara",
            Koota::Yoni => "Yoni",
            Koota::GrahaMaitri => "Graha Maitri",
            Koota::Gana => "Gana",
            Koota::Bhakoot => "Bhakoot",
            Koota::Nadi => "Nadi",
        }
    }
}

impl fmt::Display for Koota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points awarded by a single Koota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KootaScore {
    pub koota: Koota,
    pub points: u8,
}

/// Overall reading of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Good,
    Low,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::Low => "Low",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final Ashta-Koota result. `breakdown` iterates (and serializes) in
/// [`Koota`] declaration order and always holds all eight entries when the
/// report comes from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub total_gunas: u8,
    pub max_gunas: u8,
    pub breakdown: BTreeMap<Koota, u8>,
    pub verdict: Verdict,
}

impl CompatibilityReport {
    /// Points for one Koota, or `None` when the breakdown lacks it (only
    /// possible for a report built or deserialized by hand).
    pub fn points(&self, koota: Koota) -> Option<u8> {
        self.breakdown.get(&koota).copied()
    }

    pub fn scores(&self) -> impl Iterator<Item = KootaScore> + '_ {
        self.breakdown
            .iter()
            .map(|(&koota, &points)| KootaScore { koota, points })
    }
}
