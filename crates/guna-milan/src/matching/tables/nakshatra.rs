//! The 27 nakshatras and their Gana, Yoni, and Nadi classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownName;

/// Lunar mansions in canonical order, starting from Ashwini.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Canonical name, as accepted on input. Compound names use one space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }

    /// Forward count from `from` to `self` (0..=26); 0 means the same nakshatra.
    pub const fn count_from(self, from: Nakshatra) -> u8 {
        (self.index() + 27 - from.index()) % 27
    }

    pub const fn gana(self) -> Gana {
        use Gana::*;
        match self {
            Self::Ashwini | Self::Mrigashira | Self::Punarvasu | Self::Pushya => Deva,
            Self::Hasta | Self::Swati | Self::Anuradha | Self::Shravana | Self::Revati => Deva,
            Self::Bharani | Self::Rohini | Self::Ardra => Manushya,
            Self::PurvaPhalguni | Self::UttaraPhalguni => Manushya,
            Self::PurvaAshadha | Self::UttaraAshadha => Manushya,
            Self::PurvaBhadrapada | Self::UttaraBhadrapada => Manushya,
            Self::Krittika | Self::Ashlesha | Self::Magha | Self::Chitra => Rakshasa,
            Self::Vishakha | Self::Jyeshtha | Self::Mula => Rakshasa,
            Self::Dhanishta | Self::Shatabhisha => Rakshasa,
        }
    }

    pub const fn yoni(self) -> Yoni {
        use Yoni::*;
        match self {
            Self::Ashwini | Self::Shatabhisha => Horse,
            Self::Bharani | Self::Revati => Elephant,
            Self::Krittika | Self::Pushya => Sheep,
            Self::Rohini => Serpent,
            Self::Mrigashira | Self::Anuradha | Self::Jyeshtha => Deer,
            Self::Ardra | Self::Mula => Dog,
            Self::Punarvasu | Self::Ashlesha => Cat,
            Self::Magha | Self::PurvaPhalguni => Rat,
            Self::UttaraPhalguni | Self::UttaraBhadrapada => Cow,
            Self::Hasta | Self::Swati => Buffalo,
            Self::Chitra | Self::Vishakha => Tiger,
            Self::PurvaAshadha | Self::Shravana => Monkey,
            Self::UttaraAshadha => Mongoose,
            Self::Dhanishta | Self::PurvaBhadrapada => Lion,
        }
    }

    pub const fn nadi(self) -> Nadi {
        use Nadi::*;
        match self {
            Self::Ashwini | Self::Rohini | Self::Punarvasu | Self::PurvaPhalguni => Adi,
            Self::Chitra | Self::Anuradha | Self::PurvaAshadha => Adi,
            Self::Dhanishta | Self::PurvaBhadrapada => Adi,
            Self::Bharani | Self::Mrigashira | Self::Pushya | Self::UttaraPhalguni => Madhya,
            Self::Swati | Self::Jyeshtha | Self::UttaraAshadha => Madhya,
            Self::Shatabhisha | Self::UttaraBhadrapada => Madhya,
            Self::Krittika | Self::Ardra | Self::Ashlesha | Self::Magha => Antya,
            Self::Hasta | Self::Vishakha | Self::Mula => Antya,
            Self::Shravana | Self::Revati => Antya,
        }
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = UnknownName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|nakshatra| nakshatra.name() == value)
            .ok_or_else(|| UnknownName::new("nakshatra", value))
    }
}

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Animal symbol of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Unordered pairs of sworn-enemy animals.
pub const YONI_ENEMY_PAIRS: [(Yoni, Yoni); 8] = [
    (Yoni::Rat, Yoni::Cat),
    (Yoni::Lion, Yoni::Elephant),
    (Yoni::Dog, Yoni::Deer),
    (Yoni::Monkey, Yoni::Sheep),
    (Yoni::Mongoose, Yoni::Serpent),
    (Yoni::Cow, Yoni::Tiger),
    (Yoni::Horse, Yoni::Buffalo),
    (Yoni::Rat, Yoni::Lion),
];

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
        }
    }

    /// True when the two animals form an enemy pair, in either order.
    pub fn is_enemy_of(self, other: Yoni) -> bool {
        YONI_ENEMY_PAIRS
            .iter()
            .any(|&(a, b)| (a == self && b == other) || (a == other && b == self))
    }
}

/// Biological humor (dosha channel) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_names_round_trip_through_from_str() {
        for nakshatra in ALL_NAKSHATRAS {
            assert_eq!(nakshatra.name().parse::<Nakshatra>(), Ok(nakshatra));
        }
        assert!("PurvaPhalguni".parse::<Nakshatra>().is_err());
        assert!("Moola".parse::<Nakshatra>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Nakshatra::UttaraBhadrapada).expect("serializes");
        assert_eq!(json, "\"Uttara Bhadrapada\"");
    }

    #[test]
    fn classifications_match_reference_table() {
        use Gana::*;
        use Nadi::*;
        use Yoni::*;

        let expected = [
            (Nakshatra::Ashwini, Deva, Horse, Adi),
            (Nakshatra::Bharani, Manushya, Elephant, Madhya),
            (Nakshatra::Krittika, Rakshasa, Sheep, Antya),
            (Nakshatra::Rohini, Manushya, Serpent, Adi),
            (Nakshatra::Mrigashira, Deva, Deer, Madhya),
            (Nakshatra::Ardra, Manushya, Dog, Antya),
            (Nakshatra::Punarvasu, Deva, Cat, Adi),
            (Nakshatra::Pushya, Deva, Sheep, Madhya),
            (Nakshatra::Ashlesha, Rakshasa, Cat, Antya),
            (Nakshatra::Magha, Rakshasa, Rat, Antya),
            (Nakshatra::PurvaPhalguni, Manushya, Rat, Adi),
            (Nakshatra::UttaraPhalguni, Manushya, Cow, Madhya),
            (Nakshatra::Hasta, Deva, Buffalo, Antya),
            (Nakshatra::Chitra, Rakshasa, Tiger, Adi),
            (Nakshatra::Swati, Deva, Buffalo, Madhya),
            (Nakshatra::Vishakha, Rakshasa, Tiger, Antya),
            (Nakshatra::Anuradha, Deva, Deer, Adi),
            (Nakshatra::Jyeshtha, Rakshasa, Deer, Madhya),
            (Nakshatra::Mula, Rakshasa, Dog, Antya),
            (Nakshatra::PurvaAshadha, Manushya, Monkey, Adi),
            (Nakshatra::UttaraAshadha, Manushya, Mongoose, Madhya),
            (Nakshatra::Shravana, Deva, Monkey, Antya),
            (Nakshatra::Dhanishta, Rakshasa, Lion, Adi),
            (Nakshatra::Shatabhisha, Rakshasa, Horse, Madhya),
            (Nakshatra::PurvaBhadrapada, Manushya, Lion, Adi),
            (Nakshatra::UttaraBhadrapada, Manushya, Cow, Madhya),
            (Nakshatra::Revati, Deva, Elephant, Antya),
        ];

        assert_eq!(expected.len(), ALL_NAKSHATRAS.len());
        for (row, (nakshatra, gana, yoni, nadi)) in expected.into_iter().enumerate() {
            assert_eq!(nakshatra, ALL_NAKSHATRAS[row]);
            assert_eq!(nakshatra.gana(), gana, "gana of {nakshatra}");
            assert_eq!(nakshatra.yoni(), yoni, "yoni of {nakshatra}");
            assert_eq!(nakshatra.nadi(), nadi, "nadi of {nakshatra}");
        }
    }

    #[test]
    fn gana_distribution_is_nine_each() {
        let count = |gana: Gana| ALL_NAKSHATRAS.iter().filter(|n| n.gana() == gana).count();
        assert_eq!(count(Gana::Deva), 9);
        assert_eq!(count(Gana::Manushya), 9);
        assert_eq!(count(Gana::Rakshasa), 9);
    }

    #[test]
    fn nadi_distribution_is_nine_each() {
        let count = |nadi: Nadi| ALL_NAKSHATRAS.iter().filter(|n| n.nadi() == nadi).count();
        assert_eq!(count(Nadi::Adi), 9);
        assert_eq!(count(Nadi::Madhya), 9);
        assert_eq!(count(Nadi::Antya), 9);
    }

    #[test]
    fn enemy_pairs_are_symmetric_and_never_reflexive() {
        assert!(Yoni::Cat.is_enemy_of(Yoni::Rat));
        assert!(Yoni::Rat.is_enemy_of(Yoni::Cat));
        assert!(Yoni::Lion.is_enemy_of(Yoni::Rat));
        assert!(!Yoni::Horse.is_enemy_of(Yoni::Elephant));
        for (a, _) in YONI_ENEMY_PAIRS {
            assert!(!a.is_enemy_of(a));
        }
    }

    #[test]
    fn count_from_is_directional() {
        assert_eq!(Nakshatra::Anuradha.count_from(Nakshatra::Rohini), 13);
        assert_eq!(Nakshatra::Rohini.count_from(Nakshatra::Anuradha), 14);
        assert_eq!(Nakshatra::Revati.count_from(Nakshatra::Revati), 0);
    }
}
