//! Zodiac signs (rashis) with their Varna class, ruling planet, and Vashya
//! dominance sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::graha::Planet;
use super::UnknownName;

/// The 12 zodiac signs in canonical order, starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in canonical order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Canonical English name, as accepted on input.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    pub const fn varna(self) -> Varna {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Varna::Kshatriya,
            Self::Taurus | Self::Virgo | Self::Capricorn => Varna::Vaishya,
            Self::Gemini | Self::Libra | Self::Aquarius => Varna::Shudra,
            Self::Cancer | Self::Scorpio | Self::Pisces => Varna::Brahmin,
        }
    }

    /// Planetary lord of the sign.
    pub const fn lord(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// Signs this sign holds in Vashya (control). The relation is directed:
    /// `Aries` dominates `Leo`, but `Leo` does not dominate `Aries`.
    pub const fn dominates(self) -> &'static [ZodiacSign] {
        use ZodiacSign::*;
        match self {
            Aries => &[Leo, Scorpio],
            Taurus => &[Cancer, Libra],
            Gemini => &[Virgo],
            Cancer => &[Scorpio, Pisces],
            Leo => &[Libra],
            Virgo => &[Pisces, Gemini],
            Libra => &[Virgo, Capricorn],
            Scorpio => &[Cancer],
            Sagittarius => &[Pisces],
            Capricorn => &[Aries, Aquarius],
            Aquarius => &[Aries],
            Pisces => &[Capricorn],
        }
    }

    /// Forward distance from `from` to `self`, counted in signs (0..=11).
    pub const fn distance_from(self, from: ZodiacSign) -> u8 {
        (self.index() + 12 - from.index()) % 12
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name() == value)
            .ok_or_else(|| UnknownName::new("zodiac sign", value))
    }
}

/// Classical caste ordering used by Varna Koota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

impl Varna {
    /// Shudra=0 .. Brahmin=3.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shudra => "Shudra",
            Self::Vaishya => "Vaishya",
            Self::Kshatriya => "Kshatriya",
            Self::Brahmin => "Brahmin",
        }
    }
}
