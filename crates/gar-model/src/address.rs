//! The flat address record produced by the hierarchy builder.

use serde::{Deserialize, Serialize};

use crate::enums::AbstractLevel;

/// Per-level field values the builder writes onto a [`FlatAddress`].
///
/// `None` fields never clobber values already present on the record, so
/// multiple upstream builders can enrich one record incrementally.
#[derive(Debug, Clone, Default)]
pub struct LevelFields {
    pub name: Option<String>,
    pub type_short: Option<String>,
    pub type_full: Option<String>,
    pub fias_id: Option<String>,
    pub kladr_id: Option<String>,
}

/// One flat address record per hierarchy id, shaped for direct
/// serialization into a document store.
///
/// Each populated abstract level contributes a `{name, type, typeFull,
/// fiasId, kladrId}` field set; house levels additionally carry two
/// independently-typed block sub-fields. The terminal (deepest) level of
/// the chain stamps the technical metadata: identifiers, resolved levels,
/// codes, synonyms and historical renamings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block2_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block2_type_full: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_kladr_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_level: Option<AbstractLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kladr_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub okato: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oktmo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub renaming: Vec<String>,
}

fn set(dst: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *dst = value;
    }
}

impl FlatAddress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one level's field set onto the record.
    ///
    /// Stead relations land in the house-level fields and car places in
    /// the flat-level fields, matching the granularity they substitute.
    /// `None` values leave existing fields untouched.
    pub fn assign_level(&mut self, level: AbstractLevel, fields: LevelFields) {
        let LevelFields {
            name,
            type_short,
            type_full,
            fias_id,
            kladr_id,
        } = fields;
        match level {
            AbstractLevel::Region => {
                set(&mut self.region, name);
                set(&mut self.region_type, type_short);
                set(&mut self.region_type_full, type_full);
                set(&mut self.region_fias_id, fias_id);
                set(&mut self.region_kladr_id, kladr_id);
            }
            AbstractLevel::Area => {
                set(&mut self.area, name);
                set(&mut self.area_type, type_short);
                set(&mut self.area_type_full, type_full);
                set(&mut self.area_fias_id, fias_id);
                set(&mut self.area_kladr_id, kladr_id);
            }
            AbstractLevel::City => {
                set(&mut self.city, name);
                set(&mut self.city_type, type_short);
                set(&mut self.city_type_full, type_full);
                set(&mut self.city_fias_id, fias_id);
                set(&mut self.city_kladr_id, kladr_id);
            }
            AbstractLevel::Settlement => {
                set(&mut self.settlement, name);
                set(&mut self.settlement_type, type_short);
                set(&mut self.settlement_type_full, type_full);
                set(&mut self.settlement_fias_id, fias_id);
                set(&mut self.settlement_kladr_id, kladr_id);
            }
            AbstractLevel::Street => {
                set(&mut self.street, name);
                set(&mut self.street_type, type_short);
                set(&mut self.street_type_full, type_full);
                set(&mut self.street_fias_id, fias_id);
                set(&mut self.street_kladr_id, kladr_id);
            }
            AbstractLevel::House | AbstractLevel::Stead => {
                set(&mut self.house, name);
                set(&mut self.house_type, type_short);
                set(&mut self.house_type_full, type_full);
                set(&mut self.house_fias_id, fias_id);
                set(&mut self.house_kladr_id, kladr_id);
            }
            AbstractLevel::Flat | AbstractLevel::CarPlace => {
                set(&mut self.flat, name);
                set(&mut self.flat_type, type_short);
                set(&mut self.flat_type_full, type_full);
                set(&mut self.flat_fias_id, fias_id);
                set(&mut self.flat_kladr_id, kladr_id);
            }
            AbstractLevel::Room => {
                set(&mut self.room, name);
                set(&mut self.room_type, type_short);
                set(&mut self.room_type_full, type_full);
                set(&mut self.room_fias_id, fias_id);
                set(&mut self.room_kladr_id, kladr_id);
            }
        }
    }

    /// Append historical names, skipping duplicates.
    pub fn extend_renaming<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names {
            if !self.renaming.contains(&name) {
                self.renaming.push(name);
            }
        }
    }

    /// One-line display form, each populated level rendered as
    /// "type value" in hierarchy order.
    ///
    /// Presentation helper only; carries no business logic.
    pub fn full_address(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut push = |ty: &Option<String>, name: &Option<String>| {
            if let Some(name) = name {
                match ty {
                    Some(ty) => parts.push(format!("{ty} {name}")),
                    None => parts.push(name.clone()),
                }
            }
        };
        push(&self.region_type, &self.region);
        push(&self.area_type, &self.area);
        push(&self.city_type, &self.city);
        push(&self.settlement_type, &self.settlement);
        push(&self.street_type, &self.street);
        push(&self.house_type, &self.house);
        push(&self.block_type, &self.block);
        push(&self.block2_type, &self.block2);
        push(&self.flat_type, &self.flat);
        push(&self.room_type, &self.room);
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_level_routes_stead_to_house_fields() {
        let mut record = FlatAddress::new();
        record.assign_level(
            AbstractLevel::Stead,
            LevelFields {
                name: Some("17".into()),
                type_short: Some("з/у".into()),
                type_full: Some("земельный участок".into()),
                fias_id: Some("guid-1".into()),
                kladr_id: None,
            },
        );
        assert_eq!(record.house.as_deref(), Some("17"));
        assert_eq!(record.house_type.as_deref(), Some("з/у"));
    }

    #[test]
    fn none_values_do_not_clobber_existing_fields() {
        let mut record = FlatAddress::new();
        record.region_kladr_id = Some("0200000000000".into());
        record.assign_level(
            AbstractLevel::Region,
            LevelFields {
                name: Some("Башкортостан".into()),
                type_short: Some("респ.".into()),
                type_full: Some("республика".into()),
                fias_id: Some("guid-region".into()),
                kladr_id: None,
            },
        );
        assert_eq!(record.region_kladr_id.as_deref(), Some("0200000000000"));
        assert_eq!(record.region.as_deref(), Some("Башкортостан"));
    }

    #[test]
    fn renaming_deduplicates() {
        let mut record = FlatAddress::new();
        record.extend_renaming(vec!["Башкирия".to_string()]);
        record.extend_renaming(vec!["Башкирия".to_string(), "БАССР".to_string()]);
        assert_eq!(record.renaming, vec!["Башкирия", "БАССР"]);
    }

    #[test]
    fn serializes_to_camel_case_without_empty_fields() {
        let mut record = FlatAddress::new();
        record.region = Some("Башкортостан".into());
        record.region_fias_id = Some("6f2cbfd8-692a-4ee4-9b16-067210bde3fc".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["region"], "Башкортостан");
        assert_eq!(json["regionFiasId"], "6f2cbfd8-692a-4ee4-9b16-067210bde3fc");
        assert!(json.get("street").is_none());
        assert!(json.get("synonyms").is_none());
    }

    #[test]
    fn full_address_joins_populated_levels() {
        let mut record = FlatAddress::new();
        record.region = Some("Башкортостан".into());
        record.region_type = Some("респ.".into());
        record.city = Some("Уфа".into());
        record.city_type = Some("г.".into());
        record.street = Some("Ленина".into());
        record.street_type = Some("ул.".into());
        record.house = Some("12".into());
        record.house_type = Some("д.".into());
        assert_eq!(
            record.full_address(),
            "респ. Башкортостан, г. Уфа, ул. Ленина, д. 12"
        );
    }
}
