//! Building type tables (HOUSETYPES and ADDHOUSETYPES dictionaries).
//!
//! Two distinct integer vocabularies: the building's own type and the
//! add-type used for block sub-fields (корпус/строение/сооружение/литера).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::TypeName;

const HOUSE: &[(u32, &str, &str)] = &[
    (1, "владение", "влд."),
    (2, "дом", "д."),
    (3, "домовладение", "двлд."),
    (4, "гараж", "гар."),
    (5, "здание", "зд."),
    (6, "шахта", "шахта"),
    (7, "строение", "стр."),
    (8, "сооружение", "соор."),
    (9, "литера", "лит."),
    (10, "корпус", "к."),
    (11, "подвал", "подв."),
    (12, "котельная", "кот."),
    (13, "погреб", "п-б"),
    (14, "объект незавершенного строительства", "онс"),
];

const BLOCK: &[(u32, &str, &str)] = &[
    (1, "корпус", "к."),
    (2, "строение", "стр."),
    (3, "сооружение", "соор."),
    (4, "литера", "лит."),
];

fn build(rows: &'static [(u32, &'static str, &'static str)]) -> BTreeMap<u32, TypeName> {
    rows.iter()
        .map(|&(code, name, short_name)| (code, TypeName { name, short_name }))
        .collect()
}

static HOUSE_TYPES: LazyLock<BTreeMap<u32, TypeName>> = LazyLock::new(|| build(HOUSE));
static BLOCK_TYPES: LazyLock<BTreeMap<u32, TypeName>> = LazyLock::new(|| build(BLOCK));

/// Look up a building's own type code.
pub fn house_type(code: u32) -> Option<TypeName> {
    HOUSE_TYPES.get(&code).copied()
}

/// Look up a building block (add-type) code.
pub fn house_block_type(code: u32) -> Option<TypeName> {
    BLOCK_TYPES.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_type_four_is_litera() {
        let t = house_block_type(4).unwrap();
        assert_eq!(t.name, "литера");
        assert_eq!(t.short_name, "лит.");
    }

    #[test]
    fn unknown_codes_are_absent() {
        assert!(house_type(50_000).is_none());
        assert!(house_block_type(0).is_none());
    }

    #[test]
    fn house_type_two_is_dom() {
        assert_eq!(house_type(2).unwrap().short_name, "д.");
    }
}
