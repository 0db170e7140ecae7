//! Fuzzy normalization of free-form type names into canonical specs.

use gar_model::{AbstractLevel, LevelSpec, NamePosition};
use gar_standards::object_types;

use crate::resolve::fold;

const CANONICAL_SCORE: f64 = 1.0;
const VARIANT_SCORE: f64 = 0.8;

/// Normalize a raw `(name, short_name)` pair into the canonical spec of
/// the best-matching variant table entry.
///
/// Each candidate field scores 1.0 against an entry's canonical name or
/// abbreviation and 0.8 against any alternate spelling, level-blind. The
/// first entry with the strictly highest total wins, so table order breaks
/// ties. When nothing matches at all the inputs pass through trimmed but
/// otherwise untouched.
///
/// `level` only stamps the resulting spec; it never filters candidates.
pub fn normalize_level_spec(level: AbstractLevel, name: &str, short_name: &str) -> LevelSpec {
    let folded_name = fold(name);
    let folded_short = fold(short_name);

    let mut best_score = 0.0;
    let mut best_spec: Option<LevelSpec> = None;
    for entry in object_types() {
        let canon_name = fold(entry.name);
        let canon_short = fold(entry.short_name);
        let score_field = |candidate: &str| {
            if candidate == canon_name || candidate == canon_short {
                CANONICAL_SCORE
            } else if entry.all_variant_names().any(|v| v == candidate) {
                VARIANT_SCORE
            } else {
                0.0
            }
        };
        let score = score_field(&folded_name) + score_field(&folded_short);
        if score > best_score {
            best_score = score;
            best_spec = Some(entry.to_spec(level));
        }
    }

    best_spec.unwrap_or_else(|| {
        LevelSpec::new(level, name.trim(), short_name.trim(), NamePosition::Before)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_normalizes_to_itself() {
        let spec = normalize_level_spec(AbstractLevel::Region, "республика", "респ.");
        assert_eq!(spec.name, "республика");
        assert_eq!(spec.short_name, "респ.");
    }

    #[test]
    fn folding_ignores_case_and_whitespace() {
        let spec = normalize_level_spec(AbstractLevel::Region, " РеСпУблиКа ", "реСП");
        assert_eq!(spec.name, "республика");
        assert_eq!(spec.short_name, "респ.");
    }

    #[test]
    fn variant_spelling_of_short_name_is_enough() {
        let spec = normalize_level_spec(AbstractLevel::Street, "", "просп");
        assert_eq!(spec.name, "проспект");
        assert_eq!(spec.short_name, "пр-кт");
    }

    #[test]
    fn unmatched_pair_passes_through_trimmed() {
        let spec = normalize_level_spec(AbstractLevel::Street, " бродвей ", "брд");
        assert_eq!(spec.name, "бродвей");
        assert_eq!(spec.short_name, "брд");
        assert_eq!(spec.position, NamePosition::Before);
    }

    #[test]
    fn level_stamps_but_never_filters() {
        // "ул" belongs to street raw levels only, yet normalizes fine
        // under any requested level.
        let spec = normalize_level_spec(AbstractLevel::Region, "улица", "ул");
        assert_eq!(spec.name, "улица");
        assert_eq!(spec.level, AbstractLevel::Region);
    }

    #[test]
    fn higher_combined_score_beats_table_order() {
        // Full canonical pair (2.0) outranks any earlier half-match.
        let spec = normalize_level_spec(AbstractLevel::Settlement, "поселок", "п.");
        assert_eq!(spec.name, "поселок");
    }
}
