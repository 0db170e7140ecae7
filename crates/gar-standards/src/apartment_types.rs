//! Premises type table (APARTMENTTYPES dictionary).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::TypeName;

const APARTMENT: &[(u32, &str, &str)] = &[
    (1, "помещение", "помещ."),
    (2, "квартира", "кв."),
    (3, "офис", "офис"),
    (4, "комната", "ком."),
    (5, "рабочий участок", "раб.уч."),
    (6, "склад", "скл."),
    (7, "торговый зал", "торг.зал"),
    (8, "цех", "цех"),
    (9, "павильон", "пав."),
    (10, "подвал", "подв."),
    (11, "котельная", "кот."),
    (12, "погреб", "п-б"),
    (13, "гараж", "гар."),
];

static APARTMENT_TYPES: LazyLock<BTreeMap<u32, TypeName>> = LazyLock::new(|| {
    APARTMENT
        .iter()
        .map(|&(code, name, short_name)| (code, TypeName { name, short_name }))
        .collect()
});

/// Look up a premises type code.
pub fn apartment_type(code: u32) -> Option<TypeName> {
    APARTMENT_TYPES.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kvartira_is_code_two() {
        assert_eq!(apartment_type(2).unwrap().name, "квартира");
        assert_eq!(apartment_type(2).unwrap().short_name, "кв.");
    }

    #[test]
    fn unknown_code_is_absent() {
        assert!(apartment_type(99).is_none());
    }
}
