use super::super::domain::{Couple, Koota};
use super::super::friendship::{relationship, Relationship};
use super::super::tables::Gana;

/// A Koota whose points depend only on the couple.
///
/// Graha Maitri and Bhakoot are coupled through the lords-friendly signal and are
/// scored by [`graha_maitri`] and [`bhakoot`] instead.
pub(crate) trait KootaRule: Sync {
    fn koota(&self) -> Koota;
    fn score(&self, couple: &Couple) -> u8;
}

pub(crate) struct VarnaRule;
pub(crate) struct VashyaRule;
pub(crate) struct TaraRule;
pub(crate) struct YoniRule;
pub(crate) struct GanaRule;
pub(crate) struct NadiRule;

/// Rules that may be evaluated in any order.
pub(crate) const INDEPENDENT_RULES: [&dyn KootaRule; 6] = [
    &VarnaRule,
    &VashyaRule,
    &TaraRule,
    &YoniRule,
    &GanaRule,
    &NadiRule,
];

/// Tara offsets (count mod 9) for Janma, Vipat, Pratyak and Naidhana.
const INAUSPICIOUS_TARAS: [u8; 4] = [0, 2, 4, 6];

/// Sign distances forming the 2/12, 5/9 and 6/8 Bhakoot afflictions.
const BHAKOOT_DOSHA_DISTANCES: [u8; 6] = [1, 11, 4, 8, 5, 7];

impl KootaRule for VarnaRule {
    fn koota(&self) -> Koota {
        Koota::Varna
    }

    fn score(&self, couple: &Couple) -> u8 {
        let groom = couple.groom.moon_sign.varna().rank();
        let bride = couple.bride.moon_sign.varna().rank();
        if groom >= bride {
            1
        } else {
            0
        }
    }
}

impl KootaRule for VashyaRule {
    fn koota(&self) -> Koota {
        Koota::Vashya
    }

    // Only groom-over-bride control counts.
    fn score(&self, couple: &Couple) -> u8 {
        let groom = couple.groom.moon_sign;
        let bride = couple.bride.moon_sign;
        if groom == bride || groom.dominates().contains(&bride) {
            2
        } else {
            0
        }
    }
}

impl KootaRule for TaraRule {
    fn koota(&self) -> Koota {
        Koota::Tara
    }

    fn score(&self, couple: &Couple) -> u8 {
        let count = couple.groom.nakshatra.count_from(couple.bride.nakshatra);
        if INAUSPICIOUS_TARAS.contains(&(count % 9)) {
            0
        } else {
            3
        }
    }
}

impl KootaRule for YoniRule {
    fn koota(&self) -> Koota {
        Koota::Yoni
    }

    fn score(&self, couple: &Couple) -> u8 {
        let bride = couple.bride.nakshatra.yoni();
        let groom = couple.groom.nakshatra.yoni();
        if bride.is_enemy_of(groom) {
            0
        } else {
            4
        }
    }
}

impl KootaRule for GanaRule {
    fn koota(&self) -> Koota {
        Koota::Gana
    }

    fn score(&self, couple: &Couple) -> u8 {
        use Gana::*;
        match (couple.bride.nakshatra.gana(), couple.groom.nakshatra.gana()) {
            (a, b) if a == b => 6,
            (Deva, Manushya) | (Manushya, Deva) => 5,
            (Manushya, Rakshasa) | (Rakshasa, Manushya) => 1,
            _ => 0,
        }
    }
}

impl KootaRule for NadiRule {
    fn koota(&self) -> Koota {
        Koota::Nadi
    }

    // Same Nadi is always afflicted; pada-level exceptions are not applied.
    fn score(&self, couple: &Couple) -> u8 {
        if couple.bride.nakshatra.nadi() == couple.groom.nakshatra.nadi() {
            0
        } else {
            8
        }
    }
}

/// Graha Maitri points plus whether the sign lords are favourable enough to
/// cancel a Bhakoot dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrahaMaitri {
    pub points: u8,
    pub lords_friendly: bool,
}

pub(crate) fn graha_maitri(couple: &Couple) -> GrahaMaitri {
    let bride_lord = couple.bride.moon_sign.lord();
    let groom_lord = couple.groom.moon_sign.lord();

    if bride_lord == groom_lord {
        return GrahaMaitri {
            points: 5,
            lords_friendly: true,
        };
    }

    use Relationship::*;
    let points = match (
        relationship(bride_lord, groom_lord),
        relationship(groom_lord, bride_lord),
    ) {
        (Friend, Friend) => 5,
        (Friend, Neutral) | (Neutral, Friend) => 4,
        (Neutral, Neutral) => 3,
        (Neutral, Enemy) | (Enemy, Neutral) => 2,
        _ => 0,
    };

    GrahaMaitri {
        points,
        lords_friendly: points >= 4,
    }
}

/// Bhakoot needs the Graha Maitri outcome: friendly lords act as parihara and
/// cancel the distance dosha.
pub(crate) fn bhakoot(couple: &Couple, lords_friendly: bool) -> u8 {
    let distance = couple.groom.moon_sign.distance_from(couple.bride.moon_sign);
    if !BHAKOOT_DOSHA_DISTANCES.contains(&distance) || lords_friendly {
        7
    } else {
        0
    }
}
