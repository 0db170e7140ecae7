//! Exact lookups from raw registry type values to canonical level specs.

use gar_model::{AbstractLevel, GarError, LevelSpec, NamePosition, RawLevel, Result};
use gar_standards::{apartment_type, house_block_type, house_type, object_types, room_type};

/// Case-insensitive key form shared by the resolver and the normalizer.
pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Whether `level` is reachable from raw level `code`.
///
/// Steads and car places fold through their relation kind rather than the
/// level table, so their codes are mapped here directly.
fn reachable(level: AbstractLevel, code: u8) -> bool {
    let Some(raw) = RawLevel::from_code(code) else {
        return false;
    };
    match raw {
        RawLevel::Stead => level == AbstractLevel::Stead,
        RawLevel::CarPlace => level == AbstractLevel::CarPlace,
        _ => raw.abstract_level() == Some(level),
    }
}

/// Resolve a raw object type value ("ул", "Г.", "поселок") into the
/// canonical spec for `level`.
///
/// A value equal to an entry's canonical name or abbreviation matches
/// regardless of level; alternate spellings match only where one of their
/// raw levels folds into `level`. Table order breaks ties. Levels keyed by
/// integer type codes (house, flat, room) are rejected outright.
pub fn resolve_object(level: AbstractLevel, value: &str) -> Result<LevelSpec> {
    if !level.is_object_level() {
        return Err(GarError::InvalidLevel { level });
    }
    let folded = fold(value);
    for entry in object_types() {
        if fold(entry.name) == folded || fold(entry.short_name) == folded {
            return Ok(entry.to_spec(level));
        }
        let applies = entry.groups.iter().any(|group| {
            group.names.iter().any(|name| *name == folded)
                && group.levels.iter().any(|&code| reachable(level, code))
        });
        if applies {
            return Ok(entry.to_spec(level));
        }
    }
    Err(GarError::not_found("object type", format!("{level}/{folded}")))
}

/// Resolve a building type code (HOUSETYPES dictionary).
pub fn resolve_house_type(code: u32) -> Result<LevelSpec> {
    house_type(code)
        .map(|t| LevelSpec::new(AbstractLevel::House, t.name, t.short_name, NamePosition::Before))
        .ok_or_else(|| GarError::not_found("house type", code.to_string()))
}

/// Resolve a building extension type code (ADDHOUSETYPES dictionary),
/// used for the block sub-fields.
pub fn resolve_house_block_type(code: u32) -> Result<LevelSpec> {
    house_block_type(code)
        .map(|t| LevelSpec::new(AbstractLevel::House, t.name, t.short_name, NamePosition::Before))
        .ok_or_else(|| GarError::not_found("house block type", code.to_string()))
}

/// Resolve a premises type code (APARTMENTTYPES dictionary).
pub fn resolve_apartment_type(code: u32) -> Result<LevelSpec> {
    apartment_type(code)
        .map(|t| LevelSpec::new(AbstractLevel::Flat, t.name, t.short_name, NamePosition::Before))
        .ok_or_else(|| GarError::not_found("apartment type", code.to_string()))
}

/// Resolve a room type code (ROOMTYPES dictionary).
pub fn resolve_room_type(code: u32) -> Result<LevelSpec> {
    room_type(code)
        .map(|t| LevelSpec::new(AbstractLevel::Room, t.name, t.short_name, NamePosition::Before))
        .ok_or_else(|| GarError::not_found("room type", code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_short_name_matches_any_object_level() {
        let spec = resolve_object(AbstractLevel::Street, "ул.").unwrap();
        assert_eq!(spec.name, "улица");
        assert_eq!(spec.level, AbstractLevel::Street);
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let spec = resolve_object(AbstractLevel::City, "  Г.  ").unwrap();
        assert_eq!(spec.name, "город");
    }

    #[test]
    fn unknown_value_is_not_found() {
        assert!(matches!(
            resolve_object(AbstractLevel::Street, "дом"),
            Err(GarError::NotFound { .. })
        ));
    }

    #[test]
    fn bare_p_is_level_sensitive() {
        let area = resolve_object(AbstractLevel::Area, "п").unwrap();
        assert_eq!(area.name, "поселение");
        let settlement = resolve_object(AbstractLevel::Settlement, "п").unwrap();
        assert_eq!(settlement.name, "поселок");
    }

    #[test]
    fn typed_levels_are_rejected() {
        for level in [AbstractLevel::House, AbstractLevel::Flat, AbstractLevel::Room] {
            assert!(matches!(
                resolve_object(level, "дом"),
                Err(GarError::InvalidLevel { .. })
            ));
        }
    }

    #[test]
    fn proseka_spans_settlement_and_street() {
        // Its match group lists locality, planning-structure and street
        // raw levels, so both abstract levels accept the variant forms.
        for level in [AbstractLevel::Settlement, AbstractLevel::Street] {
            let spec = resolve_object(level, "просек").unwrap();
            assert_eq!(spec.name, "просека");
            assert_eq!(spec.short_name, "пр-к");
        }
    }

    #[test]
    fn stead_and_carplace_resolve_through_their_codes() {
        let stead = resolve_object(AbstractLevel::Stead, "з/у").unwrap();
        assert_eq!(stead.name, "земельный участок");
        let carplace = resolve_object(AbstractLevel::CarPlace, "м/место").unwrap();
        assert_eq!(carplace.name, "машино-место");
    }

    #[test]
    fn code_resolvers_reject_unknown_codes() {
        assert!(resolve_house_type(50_000).is_err());
        assert!(resolve_apartment_type(0).is_err());
        assert!(resolve_room_type(99).is_err());
        assert!(resolve_house_block_type(9).is_err());
    }

    #[test]
    fn house_block_code_four_is_litera() {
        let spec = resolve_house_block_type(4).unwrap();
        assert_eq!(spec.name, "литера");
        assert_eq!(spec.short_name, "лит.");
    }
}
