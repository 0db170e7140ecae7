//! Room type table (ROOMTYPES dictionary).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::TypeName;

const ROOM: &[(u32, &str, &str)] = &[
    (1, "комната", "ком."),
    (2, "помещение", "помещ."),
];

static ROOM_TYPES: LazyLock<BTreeMap<u32, TypeName>> = LazyLock::new(|| {
    ROOM.iter()
        .map(|&(code, name, short_name)| (code, TypeName { name, short_name }))
        .collect()
});

/// Look up a room type code.
pub fn room_type(code: u32) -> Option<TypeName> {
    ROOM_TYPES.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn komnata_is_code_one() {
        assert_eq!(room_type(1).unwrap().short_name, "ком.");
    }

    #[test]
    fn unknown_code_is_absent() {
        assert!(room_type(3).is_none());
    }
}
