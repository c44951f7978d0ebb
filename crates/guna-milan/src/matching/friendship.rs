use super::tables::Planet;

/// How one planet regards another under natural (naisargika) friendship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// Directed lookup: how `source` regards `target`.
///
/// Absence from both of the source's lists means enmity. Self-relationships are
/// never asked for by the scorers; the answer for them is `Enemy` by the same rule.
pub fn relationship(source: Planet, target: Planet) -> Relationship {
    if source.friends().contains(&target) {
        Relationship::Friend
    } else if source.neutrals().contains(&target) {
        Relationship::Neutral
    } else {
        Relationship::Enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_listed_friends_and_neutrals() {
        assert_eq!(relationship(Planet::Sun, Planet::Jupiter), Relationship::Friend);
        assert_eq!(relationship(Planet::Sun, Planet::Mercury), Relationship::Neutral);
        assert_eq!(relationship(Planet::Sun, Planet::Saturn), Relationship::Enemy);
    }

    #[test]
    fn relationship_is_directional() {
        assert_eq!(relationship(Planet::Moon, Planet::Mercury), Relationship::Friend);
        assert_eq!(relationship(Planet::Mercury, Planet::Moon), Relationship::Enemy);
        assert_eq!(relationship(Planet::Moon, Planet::Venus), Relationship::Neutral);
        assert_eq!(relationship(Planet::Venus, Planet::Moon), Relationship::Enemy);
    }
}
