//! Transformation of GAR hierarchy chains into flat address records.
//!
//! Three layers, used in order by the flattening pipeline:
//!
//! - **actuality**: temporal ordering of validity intervals
//! - **resolve** / **normalize**: raw type values to canonical
//!   [`LevelSpec`](gar_model::LevelSpec)s, exact and fuzzy
//! - **builder**: the chain-to-record flattening itself
//!
//! The builder is the only layer that logs; resolution failures surface
//! as [`GarError`](gar_model::GarError) values instead.

pub mod actuality;
pub mod builder;
pub mod normalize;
pub mod resolve;

pub use actuality::compare_actuality;
pub use builder::FlatAddressBuilder;
pub use normalize::normalize_level_spec;
pub use resolve::{
    resolve_apartment_type, resolve_house_block_type, resolve_house_type, resolve_object,
    resolve_room_type,
};
