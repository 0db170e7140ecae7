//! Raw input records supplied by the data-access collaborator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ParameterKind, RawLevel, RelationKind};

/// A time-bounded attribute value attached to a hierarchy ancestor.
///
/// Parameters carry their own validity window, independent of the
/// relation's window: a historical relation may still hold the most
/// temporally-valid KLADR code or postal index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParameter {
    pub kind: ParameterKind,
    pub value: String,
    pub valid_from: NaiveDate,
    /// `None` means open-ended validity.
    pub valid_to: Option<NaiveDate>,
}

impl RawParameter {
    pub fn new(
        kind: ParameterKind,
        value: impl Into<String>,
        valid_from: NaiveDate,
        valid_to: Option<NaiveDate>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            valid_from,
            valid_to,
        }
    }

    /// Whether this parameter's validity already ended before `today`.
    pub fn lapsed(&self, today: NaiveDate) -> bool {
        matches!(self.valid_to, Some(end) if end < today)
    }
}

/// One ancestor link of a hierarchy chain.
///
/// `raw_level` is present only for [`RelationKind::AddrObj`]; the other
/// kinds imply a fixed raw level. `data` holds the registry's key-value
/// payload (names, type codes, numbers) unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHierarchyRelation {
    pub kind: RelationKind,
    pub raw_level: Option<RawLevel>,
    pub data: BTreeMap<String, String>,
    pub is_active: bool,
    pub is_actual: bool,
    pub valid_from: NaiveDate,
    /// `None` means open-ended validity.
    pub valid_to: Option<NaiveDate>,
    #[serde(default)]
    pub params: Vec<RawParameter>,
}

impl RawHierarchyRelation {
    /// A relation with empty payload, flagged active and actual.
    pub fn new(kind: RelationKind, valid_from: NaiveDate, valid_to: Option<NaiveDate>) -> Self {
        Self {
            kind,
            raw_level: None,
            data: BTreeMap::new(),
            is_active: true,
            is_actual: true,
            valid_from,
            valid_to,
            params: Vec::new(),
        }
    }

    pub fn with_raw_level(mut self, raw_level: RawLevel) -> Self {
        self.raw_level = Some(raw_level);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_param(mut self, param: RawParameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_flags(mut self, is_active: bool, is_actual: bool) -> Self {
        self.is_active = is_active;
        self.is_actual = is_actual;
        self
    }

    /// Look up a payload field, treating empty strings as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.data
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Registry object guid of this ancestor.
    pub fn object_guid(&self) -> Option<&str> {
        self.field("objectguid")
    }

    /// Display name of this ancestor: `name` for address objects,
    /// `housenum` for houses, `number` for everything else.
    pub fn display_name(&self) -> Option<&str> {
        match self.kind {
            RelationKind::AddrObj => self.field("name"),
            RelationKind::House => self.field("housenum"),
            _ => self.field("number"),
        }
    }

    /// The raw short type name of an address object (`typename` field).
    pub fn type_name(&self) -> Option<&str> {
        self.field("typename")
    }

    /// A payload field holding a small integer type code.
    pub fn int_field(&self, key: &str) -> Option<u32> {
        self.field(key).and_then(|v| v.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn parameter_lapse_uses_end_date_only() {
        let p = RawParameter::new(
            ParameterKind::Kladr,
            "0200000000000",
            date("1900-01-01"),
            Some(date("2020-01-01")),
        );
        assert!(p.lapsed(date("2020-01-02")));
        assert!(!p.lapsed(date("2020-01-01")));

        let open = RawParameter::new(ParameterKind::Kladr, "02", date("1900-01-01"), None);
        assert!(!open.lapsed(date("2999-12-31")));
    }

    #[test]
    fn display_name_depends_on_kind() {
        let obj = RawHierarchyRelation::new(RelationKind::AddrObj, date("1900-01-01"), None)
            .with_field("name", "Ленина")
            .with_field("typename", "ул.");
        assert_eq!(obj.display_name(), Some("Ленина"));

        let house = RawHierarchyRelation::new(RelationKind::House, date("1900-01-01"), None)
            .with_field("housenum", "12");
        assert_eq!(house.display_name(), Some("12"));

        let flat = RawHierarchyRelation::new(RelationKind::Apartment, date("1900-01-01"), None)
            .with_field("number", "45");
        assert_eq!(flat.display_name(), Some("45"));
    }

    #[test]
    fn empty_fields_read_as_absent() {
        let rel = RawHierarchyRelation::new(RelationKind::AddrObj, date("1900-01-01"), None)
            .with_field("name", "");
        assert_eq!(rel.field("name"), None);
        assert_eq!(rel.field("missing"), None);
    }
}
