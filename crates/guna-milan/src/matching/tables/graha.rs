//! Classical planets and their natural friendship tables.
//!
//! Each planet carries its own friend and neutral lists. The lists are not
//! reciprocal: the Moon counts Mercury as a friend while Mercury counts the
//! Moon as neither friend nor neutral. Anything absent from both lists is an
//! enemy of the source planet.

use std::fmt;


/// The seven sign-ruling planets (sapta grahas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// Planets this planet regards as friends.
    pub const fn friends(self) -> &'static [Planet] {
        use Planet::*;
        match self {
            Sun => &[Moon, Mars, Jupiter],
            Moon => &[Sun, Mercury],
            Mars => &[Sun, Moon, Jupiter],
            Mercury => &[Sun, Venus],
            Jupiter => &[Sun, Moon, Mars],
            Venus => &[Mercury, Saturn],
            Saturn => &[Mercury, Venus],
        }
    }

    /// Planets this planet regards as neutral.
    pub const fn neutrals(self) -> &'static [Planet] {
        use Planet::*;
        match self {
            Sun => &[Mercury],
            Moon => &[Mars, Jupiter, Venus, Saturn],
            Mars => &[Venus],
            Mercury => &[Mars, Jupiter, Saturn],
            Jupiter => &[Saturn],
            Venus => &[Mars, Jupiter],
            Saturn => &[Jupiter],
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_and_neutral_lists_never_overlap() {
        for planet in ALL_PLANETS {
            for friend in planet.friends() {
                assert!(
                    !planet.neutrals().contains(friend),
                    "{planet} lists {friend} as both friend and neutral"
                );
            }
            assert!(!planet.friends().contains(&planet));
            assert!(!planet.neutrals().contains(&planet));
        }
    }
}
