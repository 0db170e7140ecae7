//! Canonical display form of an address-segment type.

use serde::{Deserialize, Serialize};

use crate::enums::{AbstractLevel, NamePosition};

/// The canonical full name, abbreviation and display position for an
/// address-segment type.
///
/// Produced by the resolver family and the fuzzy normalizer. Immutable;
/// equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Granularity this spec applies to.
    pub level: AbstractLevel,
    /// Full type name, e.g. "улица".
    pub name: String,
    /// Abbreviation, e.g. "ул.".
    pub short_name: String,
    /// Where the type is rendered relative to the value.
    pub position: NamePosition,
}

impl LevelSpec {
    pub fn new(
        level: AbstractLevel,
        name: impl Into<String>,
        short_name: impl Into<String>,
        position: NamePosition,
    ) -> Self {
        Self {
            level,
            name: name.into(),
            short_name: short_name.into(),
            position,
        }
    }
}

/// One row of the object-level reference table.
///
/// Row order in the table encodes priority: the first matching entry wins,
/// which is the only tie-break for genuinely overlapping abbreviations
/// (the single-letter "п" is claimed by both "поселение" and "поселок").
#[derive(Debug, Clone)]
pub struct VariantEntry {
    /// Canonical full name.
    pub name: &'static str,
    /// Canonical abbreviation.
    pub short_name: &'static str,
    /// Display position of the type relative to the value.
    pub position: NamePosition,
    /// Alternate spellings grouped by the raw levels they apply to.
    pub groups: Vec<MatchGroup>,
}

/// A set of candidate spellings valid at a set of raw registry levels.
#[derive(Debug, Clone)]
pub struct MatchGroup {
    /// Lowercase alternate spellings.
    pub names: Vec<&'static str>,
    /// Raw level codes at which these spellings apply.
    pub levels: Vec<u8>,
}

impl VariantEntry {
    /// Build the canonical [`LevelSpec`] for this entry at `level`.
    pub fn to_spec(&self, level: AbstractLevel) -> LevelSpec {
        LevelSpec::new(level, self.name, self.short_name, self.position)
    }

    /// Iterate every alternate spelling, ignoring level applicability.
    ///
    /// The fuzzy normalizer matches against this flat view.
    pub fn all_variant_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().flat_map(|g| g.names.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_spec_equality_is_structural() {
        let a = LevelSpec::new(AbstractLevel::Street, "улица", "ул.", NamePosition::Before);
        let b = LevelSpec::new(AbstractLevel::Street, "улица", "ул.", NamePosition::Before);
        assert_eq!(a, b);
        let c = LevelSpec::new(AbstractLevel::Street, "улица", "ул", NamePosition::Before);
        assert_ne!(a, c);
    }

    #[test]
    fn variant_entry_flattens_groups() {
        let entry = VariantEntry {
            name: "просека",
            short_name: "пр-к",
            position: NamePosition::Before,
            groups: vec![
                MatchGroup {
                    names: vec!["просека", "пр-ка"],
                    levels: vec![6],
                },
                MatchGroup {
                    names: vec!["просек"],
                    levels: vec![8],
                },
            ],
        };
        let names: Vec<_> = entry.all_variant_names().collect();
        assert_eq!(names, vec!["просека", "пр-ка", "просек"]);
    }
}
