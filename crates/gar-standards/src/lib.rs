//! Static reference dataset for GAR address type resolution.
//!
//! Everything in this crate is a fixed, versioned snapshot of the
//! registry's type dictionaries, built once behind [`std::sync::LazyLock`]
//! and shared read-only across threads:
//!
//! - **object_types**: the object-level variant table (region through
//!   street, plus land parcels and parking spaces); row order encodes
//!   match priority
//! - **house_types**: building type and building block (add-type) tables
//! - **apartment_types** / **room_types**: premises and room type tables
//! - **synonyms**: colloquial region aliases keyed by fias id

pub mod apartment_types;
pub mod house_types;
pub mod object_types;
pub mod room_types;
pub mod synonyms;

pub use apartment_types::apartment_type;
pub use house_types::{house_block_type, house_type};
pub use object_types::object_types;
pub use room_types::room_type;
pub use synonyms::synonyms_for;

/// A full-name/abbreviation pair from an integer-keyed type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName {
    pub name: &'static str,
    pub short_name: &'static str,
}
