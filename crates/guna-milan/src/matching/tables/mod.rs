//! Static reference tables for Ashta-Koota matching.

mod graha;
mod nakshatra;
mod rashi;

pub use graha::{Planet, ALL_PLANETS};
pub use nakshatra::{Gana, Nadi, Nakshatra, Yoni, ALL_NAKSHATRAS, YONI_ENEMY_PAIRS};
pub use rashi::{Varna, ZodiacSign, ALL_SIGNS};

/// A name outside the fixed sign or nakshatra vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a recognised {kind}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
