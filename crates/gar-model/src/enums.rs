//! Type-safe enumerations for the GAR address hierarchy.
//!
//! These enums give compile-time names to vocabularies the registry
//! represents as small integers or table names:
//!
//! - [`AbstractLevel`]: the human-facing granularities all registry levels
//!   fold into (region through room, plus land parcels and parking spaces)
//! - [`RawLevel`]: the registry's own 17-value hierarchy classification
//! - [`RelationKind`]: the source table a hierarchy ancestor came from
//! - [`ParameterKind`]: time-bounded attribute kinds (KLADR, OKATO, ...)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized address-segment granularity.
///
/// Every [`RawLevel`] folds into one of these; the mapping loses
/// information by design (several raw levels collapse into one abstract
/// level), so no reverse mapping exists.
///
/// The derived ordering is the processing order of the flattening builder:
/// region first, room last. Stead sits at building granularity and
/// car place at premises granularity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AbstractLevel {
    /// Federal subject (республика, край, область, ...).
    Region,
    /// Administrative or municipal district.
    Area,
    /// City.
    City,
    /// Settlement (населенный пункт) or planning-structure element.
    Settlement,
    /// Street-network element.
    Street,
    /// Land parcel (земельный участок).
    Stead,
    /// Building.
    House,
    /// Parking space (машино-место).
    CarPlace,
    /// Premises within a building.
    Flat,
    /// Room within premises.
    Room,
}

impl AbstractLevel {
    /// Canonical lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AbstractLevel::Region => "region",
            AbstractLevel::Area => "area",
            AbstractLevel::City => "city",
            AbstractLevel::Settlement => "settlement",
            AbstractLevel::Street => "street",
            AbstractLevel::Stead => "stead",
            AbstractLevel::House => "house",
            AbstractLevel::CarPlace => "carplace",
            AbstractLevel::Flat => "flat",
            AbstractLevel::Room => "room",
        }
    }

    /// True for the levels served by the object-level variant table.
    ///
    /// House, flat and room types are keyed by registry integer codes
    /// instead and are rejected by the object-level resolver.
    pub fn is_object_level(&self) -> bool {
        matches!(
            self,
            AbstractLevel::Region
                | AbstractLevel::Area
                | AbstractLevel::City
                | AbstractLevel::Settlement
                | AbstractLevel::Street
                | AbstractLevel::Stead
                | AbstractLevel::CarPlace
        )
    }
}

impl fmt::Display for AbstractLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AbstractLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" => Ok(AbstractLevel::Region),
            "area" => Ok(AbstractLevel::Area),
            "city" => Ok(AbstractLevel::City),
            "settlement" => Ok(AbstractLevel::Settlement),
            "street" => Ok(AbstractLevel::Street),
            "stead" => Ok(AbstractLevel::Stead),
            "house" => Ok(AbstractLevel::House),
            "carplace" | "car_place" => Ok(AbstractLevel::CarPlace),
            "flat" | "apartment" => Ok(AbstractLevel::Flat),
            "room" => Ok(AbstractLevel::Room),
            _ => Err(format!("unknown abstract level: {s}")),
        }
    }
}

/// The registry's own hierarchy classification (OBJECTLEVELS dictionary).
///
/// Levels 9-12 and 17 never carry a type-name table; objects at those
/// levels arrive through dedicated relation kinds and are classified by
/// [`RelationKind`], not by level number. For them
/// [`RawLevel::abstract_level`] returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawLevel {
    /// 1 — субъект РФ.
    Region,
    /// 2 — административный район.
    AdministrativeArea,
    /// 3 — муниципальный район.
    MunicipalArea,
    /// 4 — сельское/городское поселение.
    RuralUrbanSettlement,
    /// 5 — город.
    City,
    /// 6 — населенный пункт.
    Locality,
    /// 7 — элемент планировочной структуры.
    PlanningStructure,
    /// 8 — элемент улично-дорожной сети.
    Street,
    /// 9 — земельный участок.
    Stead,
    /// 10 — здание (сооружение).
    Building,
    /// 11 — помещение.
    Premises,
    /// 12 — помещение в пределах помещения.
    PremisesWithinPremises,
    /// 13 — уровень автономного округа (устаревшее).
    AutonomousOkrug,
    /// 14 — уровень внутригородской территории (устаревшее).
    IntracityTerritory,
    /// 15 — уровень дополнительных территорий (устаревшее).
    AdditionalTerritory,
    /// 16 — уровень объектов на дополнительных территориях (устаревшее).
    AdditionalTerritoryObject,
    /// 17 — машино-место.
    CarPlace,
}

impl RawLevel {
    /// Decode a registry level number.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RawLevel::Region),
            2 => Some(RawLevel::AdministrativeArea),
            3 => Some(RawLevel::MunicipalArea),
            4 => Some(RawLevel::RuralUrbanSettlement),
            5 => Some(RawLevel::City),
            6 => Some(RawLevel::Locality),
            7 => Some(RawLevel::PlanningStructure),
            8 => Some(RawLevel::Street),
            9 => Some(RawLevel::Stead),
            10 => Some(RawLevel::Building),
            11 => Some(RawLevel::Premises),
            12 => Some(RawLevel::PremisesWithinPremises),
            13 => Some(RawLevel::AutonomousOkrug),
            14 => Some(RawLevel::IntracityTerritory),
            15 => Some(RawLevel::AdditionalTerritory),
            16 => Some(RawLevel::AdditionalTerritoryObject),
            17 => Some(RawLevel::CarPlace),
            _ => None,
        }
    }

    /// The registry level number.
    pub fn code(&self) -> u8 {
        match self {
            RawLevel::Region => 1,
            RawLevel::AdministrativeArea => 2,
            RawLevel::MunicipalArea => 3,
            RawLevel::RuralUrbanSettlement => 4,
            RawLevel::City => 5,
            RawLevel::Locality => 6,
            RawLevel::PlanningStructure => 7,
            RawLevel::Street => 8,
            RawLevel::Stead => 9,
            RawLevel::Building => 10,
            RawLevel::Premises => 11,
            RawLevel::PremisesWithinPremises => 12,
            RawLevel::AutonomousOkrug => 13,
            RawLevel::IntracityTerritory => 14,
            RawLevel::AdditionalTerritory => 15,
            RawLevel::AdditionalTerritoryObject => 16,
            RawLevel::CarPlace => 17,
        }
    }

    /// Fold this raw level into its abstract counterpart.
    ///
    /// Returns `None` for the five levels that are classified by relation
    /// kind instead of level number (stead, building, premises, rooms,
    /// parking).
    pub fn abstract_level(&self) -> Option<AbstractLevel> {
        match self {
            RawLevel::Region => Some(AbstractLevel::Region),
            RawLevel::AdministrativeArea
            | RawLevel::MunicipalArea
            | RawLevel::RuralUrbanSettlement
            | RawLevel::AutonomousOkrug
            | RawLevel::IntracityTerritory => Some(AbstractLevel::Area),
            RawLevel::City => Some(AbstractLevel::City),
            RawLevel::Locality | RawLevel::AdditionalTerritory => {
                Some(AbstractLevel::Settlement)
            }
            RawLevel::PlanningStructure
            | RawLevel::Street
            | RawLevel::AdditionalTerritoryObject => Some(AbstractLevel::Street),
            RawLevel::Stead
            | RawLevel::Building
            | RawLevel::Premises
            | RawLevel::PremisesWithinPremises
            | RawLevel::CarPlace => None,
        }
    }
}

impl fmt::Display for RawLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RawLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(RawLevel::from_code)
            .ok_or_else(|| format!("unknown raw level: {s}"))
    }
}

/// Source table a hierarchy relation came from.
///
/// Only `AddrObj` relations carry an explicit raw level; every other kind
/// implies a fixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Named address object (region through street).
    AddrObj,
    /// Building.
    House,
    /// Premises within a building.
    Apartment,
    /// Room within premises.
    Room,
    /// Parking space.
    CarPlace,
    /// Land parcel.
    Stead,
}

impl RelationKind {
    /// The raw level implied by this kind, `None` for `AddrObj`.
    pub fn implied_raw_level(&self) -> Option<RawLevel> {
        match self {
            RelationKind::AddrObj => None,
            RelationKind::House => Some(RawLevel::Building),
            RelationKind::Apartment => Some(RawLevel::Premises),
            RelationKind::Room => Some(RawLevel::PremisesWithinPremises),
            RelationKind::CarPlace => Some(RawLevel::CarPlace),
            RelationKind::Stead => Some(RawLevel::Stead),
        }
    }

    /// The abstract level implied by this kind, `None` for `AddrObj`.
    pub fn implied_abstract_level(&self) -> Option<AbstractLevel> {
        match self {
            RelationKind::AddrObj => None,
            RelationKind::House => Some(AbstractLevel::House),
            RelationKind::Apartment => Some(AbstractLevel::Flat),
            RelationKind::Room => Some(AbstractLevel::Room),
            RelationKind::CarPlace => Some(AbstractLevel::CarPlace),
            RelationKind::Stead => Some(AbstractLevel::Stead),
        }
    }

    /// Lowercase registry table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::AddrObj => "addr_obj",
            RelationKind::House => "house",
            RelationKind::Apartment => "apartment",
            RelationKind::Room => "room",
            RelationKind::CarPlace => "carplace",
            RelationKind::Stead => "stead",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addr_obj" | "addrobj" => Ok(RelationKind::AddrObj),
            "house" => Ok(RelationKind::House),
            "apartment" => Ok(RelationKind::Apartment),
            "room" => Ok(RelationKind::Room),
            "carplace" | "car_place" => Ok(RelationKind::CarPlace),
            "stead" => Ok(RelationKind::Stead),
            _ => Err(format!("unknown relation kind: {s}")),
        }
    }
}

/// Time-bounded attribute kinds attached to hierarchy ancestors.
///
/// Codes follow the registry's PARAMTYPES dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// 5 — почтовый индекс.
    PostalCode,
    /// 6 — код ОКАТО.
    Okato,
    /// 7 — код ОКТМО.
    Oktmo,
    /// 10 — код КЛАДР.
    Kladr,
}

impl ParameterKind {
    /// All kinds the builder resolves, in output order.
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::PostalCode,
        ParameterKind::Okato,
        ParameterKind::Oktmo,
        ParameterKind::Kladr,
    ];

    /// Decode a registry parameter type code.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            5 => Some(ParameterKind::PostalCode),
            6 => Some(ParameterKind::Okato),
            7 => Some(ParameterKind::Oktmo),
            10 => Some(ParameterKind::Kladr),
            _ => None,
        }
    }

    /// The registry parameter type code.
    pub fn code(&self) -> u16 {
        match self {
            ParameterKind::PostalCode => 5,
            ParameterKind::Okato => 6,
            ParameterKind::Oktmo => 7,
            ParameterKind::Kladr => 10,
        }
    }

    /// Canonical lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::PostalCode => "postal_code",
            ParameterKind::Okato => "okato",
            ParameterKind::Oktmo => "oktmo",
            ParameterKind::Kladr => "kladr",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParameterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postal_code" | "postalcode" => Ok(ParameterKind::PostalCode),
            "okato" => Ok(ParameterKind::Okato),
            "oktmo" => Ok(ParameterKind::Oktmo),
            "kladr" => Ok(ParameterKind::Kladr),
            _ => Err(format!("unknown parameter kind: {s}")),
        }
    }
}

/// Where the type name is rendered relative to the value.
///
/// "улица Ленина" is [`NamePosition::Before`]; "Московская область" is
/// [`NamePosition::After`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePosition {
    Before,
    After,
}

impl NamePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamePosition::Before => "before",
            NamePosition::After => "after",
        }
    }
}

impl fmt::Display for NamePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamePosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(NamePosition::Before),
            "after" => Ok(NamePosition::After),
            _ => Err(format!("unknown name position: {s}")),
        }
    }
}
