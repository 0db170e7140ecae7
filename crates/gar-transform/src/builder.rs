//! Flattening of hierarchy ancestor chains into [`FlatAddress`] records.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use gar_model::{
    AbstractLevel, FlatAddress, GarError, LevelFields, LevelSpec, ParameterKind,
    RawHierarchyRelation, RawLevel, RawParameter, RelationKind, Result,
};
use gar_standards::synonyms_for;

use crate::resolve::{
    resolve_apartment_type, resolve_house_block_type, resolve_house_type, resolve_object,
    resolve_room_type,
};

/// The most temporally-valid value per parameter kind across one level
/// group.
#[derive(Debug, Clone, Default)]
struct ResolvedParams {
    postal_code: Option<String>,
    okato: Option<String>,
    oktmo: Option<String>,
    kladr: Option<String>,
}

/// Flattens hierarchy chains into denormalized address records.
///
/// Stateless apart from the reference date used to discard lapsed
/// parameters; inject one via [`FlatAddressBuilder::with_today`] for
/// reproducible batch runs.
#[derive(Debug, Clone)]
pub struct FlatAddressBuilder {
    today: NaiveDate,
}

impl Default for FlatAddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatAddressBuilder {
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Flatten one hierarchy chain, ordered root-first, into a record.
    ///
    /// Passing `existing` enriches a previously built record in place:
    /// levels absent from this chain keep their old values. The deepest
    /// level of the chain stamps the terminal metadata (identifiers,
    /// codes, synonyms).
    ///
    /// A fresh build must resolve a complete region (name, fias id,
    /// KLADR id); an enrichment pass relies on the existing record for
    /// levels its chain omits.
    pub fn build(
        &self,
        hierarchy_id: i64,
        chain: &[RawHierarchyRelation],
        existing: Option<FlatAddress>,
    ) -> Result<FlatAddress> {
        if chain.is_empty() {
            return Err(GarError::build_failed(hierarchy_id, "empty ancestor chain"));
        }

        let mut groups: BTreeMap<AbstractLevel, Vec<&RawHierarchyRelation>> = BTreeMap::new();
        for relation in chain {
            let level = classify(hierarchy_id, relation)?;
            groups.entry(level).or_default().push(relation);
        }

        let enriching = existing.is_some();
        let mut record = existing.unwrap_or_default();
        let mut terminal: Option<Terminal<'_>> = None;
        for (&level, relations) in &groups {
            let current = self.process_level(hierarchy_id, level, relations, &mut record)?;
            terminal = Some(current);
        }

        // BTreeMap iteration is ascending, so the last processed level is
        // the deepest one.
        let Some(terminal) = terminal else {
            return Err(GarError::build_failed(hierarchy_id, "no levels resolved"));
        };
        self.stamp_terminal(hierarchy_id, terminal, &mut record)?;

        if (!enriching || groups.contains_key(&AbstractLevel::Region))
            && (record.region.is_none()
                || record.region_fias_id.is_none()
                || record.region_kladr_id.is_none())
        {
            return Err(GarError::build_failed(
                hierarchy_id,
                "region name, fias id or kladr id unset",
            ));
        }

        Ok(record)
    }

    /// Resolve one level group and write its fields onto the record.
    fn process_level<'a>(
        &self,
        hierarchy_id: i64,
        level: AbstractLevel,
        relations: &[&'a RawHierarchyRelation],
        record: &mut FlatAddress,
    ) -> Result<Terminal<'a>> {
        let actual: Vec<&RawHierarchyRelation> = relations
            .iter()
            .copied()
            .filter(|r| r.is_active && r.is_actual)
            .collect();
        if actual.len() != 1 {
            warn!(
                hierarchy_id,
                level = %level,
                count = actual.len(),
                "expected exactly one actual relation per level"
            );
            return Err(GarError::build_failed(
                hierarchy_id,
                format!("{} actual relations at level {level}", actual.len()),
            ));
        }
        let current = actual[0];

        let raw_level = current
            .kind
            .implied_raw_level()
            .or(current.raw_level)
            .ok_or_else(|| {
                GarError::build_failed(hierarchy_id, "address object relation without raw level")
            })?;

        let spec = self
            .resolve_spec(level, current)
            .map_err(|e| GarError::build_failed(hierarchy_id, e.to_string()))?;
        debug!(hierarchy_id, level = %level, type_full = %spec.name, "resolved level type");

        let params = self.select_params(relations);
        record.assign_level(
            level,
            LevelFields {
                name: current.display_name().map(str::to_string),
                type_short: Some(spec.short_name),
                type_full: Some(spec.name),
                fias_id: current.object_guid().map(str::to_string),
                kladr_id: params.kladr.clone(),
            },
        );

        if current.kind == RelationKind::House {
            self.assign_house_blocks(hierarchy_id, current, record)?;
        }

        // Historical names, across every relation of the group including
        // inactive ones.
        let actual_name = current.display_name();
        let renamed: Vec<String> = relations
            .iter()
            .filter(|r| !(r.is_active && r.is_actual))
            .filter_map(|r| r.display_name())
            .filter(|name| Some(*name) != actual_name)
            .map(str::to_string)
            .collect();
        record.extend_renaming(renamed);

        Ok(Terminal {
            level,
            raw_level,
            relation: current,
            params,
        })
    }

    /// Resolve the canonical level spec for the group's actual relation.
    fn resolve_spec(
        &self,
        level: AbstractLevel,
        current: &RawHierarchyRelation,
    ) -> Result<LevelSpec> {
        match current.kind {
            RelationKind::AddrObj => {
                let type_name = current
                    .type_name()
                    .ok_or_else(|| GarError::not_found("type name field", level))?;
                resolve_object(level, type_name)
            }
            RelationKind::House => {
                let code = current
                    .int_field("housetype")
                    .ok_or_else(|| GarError::not_found("housetype field", level))?;
                resolve_house_type(code)
            }
            RelationKind::Apartment => {
                let code = current
                    .int_field("aparttype")
                    .ok_or_else(|| GarError::not_found("aparttype field", level))?;
                resolve_apartment_type(code)
            }
            RelationKind::Room => {
                let code = current
                    .int_field("roomtype")
                    .ok_or_else(|| GarError::not_found("roomtype field", level))?;
                resolve_room_type(code)
            }
            RelationKind::Stead => resolve_object(AbstractLevel::Stead, "з/у"),
            RelationKind::CarPlace => resolve_object(AbstractLevel::CarPlace, "м/место"),
        }
    }

    /// House relations may carry up to two typed block extensions
    /// (корпус 1, строение 2). Zero codes mean no extension.
    fn assign_house_blocks(
        &self,
        hierarchy_id: i64,
        current: &RawHierarchyRelation,
        record: &mut FlatAddress,
    ) -> Result<()> {
        if let Some(code) = current.int_field("addtype1").filter(|&c| c != 0) {
            let spec = resolve_house_block_type(code)
                .map_err(|e| GarError::build_failed(hierarchy_id, e.to_string()))?;
            assign(&mut record.block, current.field("addnum1").map(str::to_string));
            record.block_type = Some(spec.short_name);
            record.block_type_full = Some(spec.name);
        }
        if let Some(code) = current.int_field("addtype2").filter(|&c| c != 0) {
            let spec = resolve_house_block_type(code)
                .map_err(|e| GarError::build_failed(hierarchy_id, e.to_string()))?;
            assign(&mut record.block2, current.field("addnum2").map(str::to_string));
            record.block2_type = Some(spec.short_name);
            record.block2_type_full = Some(spec.name);
        }
        Ok(())
    }

    /// Pick the most temporally-valid non-lapsed value per parameter kind,
    /// searching every relation of the group, historical ones included.
    fn select_params(&self, relations: &[&RawHierarchyRelation]) -> ResolvedParams {
        let mut out = ResolvedParams::default();
        for kind in ParameterKind::ALL {
            let mut best: Option<&RawParameter> = None;
            for relation in relations {
                for param in &relation.params {
                    if param.kind != kind || param.lapsed(self.today) {
                        continue;
                    }
                    let replace = match best {
                        None => true,
                        Some(b) => {
                            crate::actuality::compare_actuality(
                                param.valid_from,
                                param.valid_to,
                                b.valid_from,
                                b.valid_to,
                            ) == Ordering::Greater
                        }
                    };
                    if replace {
                        best = Some(param);
                    }
                }
            }
            let value = best.map(|p| p.value.clone());
            match kind {
                ParameterKind::PostalCode => out.postal_code = value,
                ParameterKind::Okato => out.okato = value,
                ParameterKind::Oktmo => out.oktmo = value,
                ParameterKind::Kladr => out.kladr = value,
            }
        }
        out
    }

    /// Write the deepest level's metadata onto the record.
    fn stamp_terminal(
        &self,
        hierarchy_id: i64,
        terminal: Terminal<'_>,
        record: &mut FlatAddress,
    ) -> Result<()> {
        let fias_id = terminal.relation.object_guid().ok_or_else(|| {
            GarError::build_failed(hierarchy_id, "terminal relation without object guid")
        })?;

        record.hierarchy_id = Some(hierarchy_id);
        record.fias_id = Some(fias_id.to_string());
        record.raw_level = Some(terminal.raw_level.code());
        record.abstract_level = Some(terminal.level);

        let ResolvedParams {
            postal_code,
            okato,
            oktmo,
            kladr,
        } = terminal.params;
        assign(&mut record.postal_code, postal_code);
        assign(&mut record.okato, okato);
        assign(&mut record.oktmo, oktmo);
        assign(&mut record.kladr_id, kladr);

        let synonyms = synonyms_for(fias_id);
        if !synonyms.is_empty() {
            record.synonyms = synonyms.iter().map(|s| s.to_string()).collect();
        }
        Ok(())
    }
}

/// The deepest processed level, pending the terminal metadata stamp.
struct Terminal<'a> {
    level: AbstractLevel,
    raw_level: RawLevel,
    relation: &'a RawHierarchyRelation,
    params: ResolvedParams,
}

/// Fold a relation into its abstract level.
fn classify(hierarchy_id: i64, relation: &RawHierarchyRelation) -> Result<AbstractLevel> {
    if let Some(level) = relation.kind.implied_abstract_level() {
        return Ok(level);
    }
    let raw = relation.raw_level.ok_or_else(|| {
        GarError::build_failed(hierarchy_id, "address object relation without raw level")
    })?;
    raw.abstract_level().ok_or_else(|| {
        GarError::build_failed(
            hierarchy_id,
            format!("raw level {raw} needs a dedicated relation kind"),
        )
    })
}

fn assign(dst: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *dst = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn region() -> RawHierarchyRelation {
        RawHierarchyRelation::new(RelationKind::AddrObj, d("1900-01-01"), None)
            .with_raw_level(RawLevel::Region)
            .with_field("name", "Башкортостан")
            .with_field("typename", "респ")
            .with_field("objectguid", "6f2cbfd8-692a-4ee4-9b16-067210bde3fc")
            .with_param(RawParameter::new(
                ParameterKind::Kladr,
                "0200000000000",
                d("1900-01-01"),
                None,
            ))
    }

    #[test]
    fn empty_chain_is_rejected() {
        let builder = FlatAddressBuilder::with_today(d("2024-01-01"));
        assert!(matches!(
            builder.build(1, &[], None),
            Err(GarError::BuildFailed { hierarchy_id: 1, .. })
        ));
    }

    #[test]
    fn addr_obj_without_raw_level_fails() {
        let builder = FlatAddressBuilder::with_today(d("2024-01-01"));
        let rel = RawHierarchyRelation::new(RelationKind::AddrObj, d("1900-01-01"), None)
            .with_field("name", "Башкортостан")
            .with_field("typename", "респ");
        assert!(builder.build(7, &[rel], None).is_err());
    }

    #[test]
    fn two_actual_relations_at_one_level_fail() {
        let builder = FlatAddressBuilder::with_today(d("2024-01-01"));
        let err = builder.build(3, &[region(), region()], None).unwrap_err();
        assert!(err.to_string().contains("2 actual relations"));
    }

    #[test]
    fn missing_region_kladr_violates_the_region_invariant() {
        let builder = FlatAddressBuilder::with_today(d("2024-01-01"));
        let mut rel = region();
        rel.params.clear();
        assert!(builder.build(4, &[rel], None).is_err());
    }

    #[test]
    fn lapsed_parameters_are_discarded() {
        let builder = FlatAddressBuilder::with_today(d("2024-01-01"));
        let rel = region().with_param(RawParameter::new(
            ParameterKind::PostalCode,
            "450000",
            d("1900-01-01"),
            Some(d("2001-01-01")),
        ));
        let record = builder.build(5, &[rel], None).unwrap();
        assert_eq!(record.postal_code, None);
        assert_eq!(record.kladr_id.as_deref(), Some("0200000000000"));
    }
}
