//! Data model for GAR address registry flattening.
//!
//! This crate defines the value types shared by the reference tables and
//! the transformation logic:
//!
//! - **enums**: abstract/raw hierarchy levels, relation kinds, parameter
//!   kinds, name positions
//! - **spec**: the canonical display form of an address-segment type and
//!   the reference-table row shape
//! - **hierarchy**: raw input records supplied per build call
//! - **address**: the flat output record
//! - **error**: the shared error type

pub mod address;
pub mod enums;
pub mod error;
pub mod hierarchy;
pub mod spec;

pub use address::{FlatAddress, LevelFields};
pub use enums::{AbstractLevel, NamePosition, ParameterKind, RawLevel, RelationKind};
pub use error::{GarError, Result};
pub use hierarchy::{RawHierarchyRelation, RawParameter};
pub use spec::{LevelSpec, MatchGroup, VariantEntry};
