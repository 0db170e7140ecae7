//! The object-level variant table.
//!
//! One [`VariantEntry`] per canonical address-object type. Row order is
//! load-bearing: the resolver and the fuzzy normalizer both take the first
//! matching row, so entries whose spellings overlap (the single-letter
//! "п") are disambiguated by their position here. The administrative
//! "поселение" row precedes the settlement "поселок" row, matching the
//! source dictionary's ordering.
//!
//! Spellings are stored lowercase; the resolvers fold input before
//! comparing.

use std::sync::LazyLock;

use gar_model::enums::NamePosition;
use gar_model::spec::{MatchGroup, VariantEntry};

// Raw level codes (OBJECTLEVELS).
const REGION: u8 = 1;
const ADM_AREA: u8 = 2;
const MUN_AREA: u8 = 3;
const ADM_SETTLEMENT: u8 = 4;
const CITY: u8 = 5;
const LOCALITY: u8 = 6;
const PLAN_STRUCTURE: u8 = 7;
const STREET: u8 = 8;
const STEAD: u8 = 9;
const OKRUG: u8 = 13;
const INTRACITY: u8 = 14;
const ADD_TERRITORY: u8 = 15;
const ADD_TERRITORY_OBJ: u8 = 16;
const CARPLACE: u8 = 17;

fn grp(names: &[&'static str], levels: &[u8]) -> MatchGroup {
    MatchGroup {
        names: names.to_vec(),
        levels: levels.to_vec(),
    }
}

fn entry(
    name: &'static str,
    short_name: &'static str,
    position: NamePosition,
    groups: Vec<MatchGroup>,
) -> VariantEntry {
    VariantEntry {
        name,
        short_name,
        position,
        groups,
    }
}

static OBJECT_TYPES: LazyLock<Vec<VariantEntry>> = LazyLock::new(build_table);

/// The variant table in priority order.
pub fn object_types() -> &'static [VariantEntry] {
    &OBJECT_TYPES
}

fn build_table() -> Vec<VariantEntry> {
    use NamePosition::{After, Before};
    vec![
        // --- federal subjects -------------------------------------------------
        entry(
            "республика",
            "респ.",
            Before,
            vec![grp(&["респ", "республика", "рес"], &[REGION])],
        ),
        entry("край", "край", After, vec![grp(&["край"], &[REGION])]),
        entry(
            "область",
            "обл.",
            After,
            vec![grp(&["обл", "область"], &[REGION])],
        ),
        entry(
            "автономный округ",
            "а.окр.",
            After,
            vec![grp(
                &["ао", "а.окр", "авт. округ", "автономный округ"],
                &[REGION, OKRUG],
            )],
        ),
        entry(
            "автономная область",
            "а.обл.",
            After,
            vec![grp(&["аобл", "а.обл", "автономная область"], &[REGION])],
        ),
        // --- districts --------------------------------------------------------
        entry(
            "район",
            "р-н",
            After,
            vec![grp(
                &["р-н", "рн", "район"],
                &[ADM_AREA, MUN_AREA, INTRACITY],
            )],
        ),
        entry(
            "муниципальный округ",
            "м.о.",
            Before,
            vec![grp(&["м.о", "мо", "мун.округ", "муниципальный округ"], &[MUN_AREA])],
        ),
        entry(
            "городской округ",
            "г.о.",
            Before,
            vec![grp(&["г.о", "го", "гор.округ", "городской округ"], &[MUN_AREA])],
        ),
        entry("улус", "у.", After, vec![grp(&["у", "улус"], &[ADM_AREA])]),
        // Administrative "поселение" must stay ahead of the settlement
        // "поселок": both claim the bare token "п".
        entry(
            "поселение",
            "пос.",
            Before,
            vec![grp(
                &["п", "пос", "поселение"],
                &[ADM_SETTLEMENT, INTRACITY],
            )],
        ),
        entry(
            "сельсовет",
            "с/с",
            After,
            vec![grp(&["с/с", "сельсовет"], &[ADM_SETTLEMENT])],
        ),
        // --- cities -----------------------------------------------------------
        entry(
            "город",
            "г.",
            Before,
            vec![grp(&["г", "гор", "город"], &[REGION, CITY])],
        ),
        // --- settlements ------------------------------------------------------
        entry(
            "поселок",
            "п.",
            Before,
            vec![grp(
                &["п", "пос", "поселок", "посёлок"],
                &[LOCALITY, ADD_TERRITORY],
            )],
        ),
        entry(
            "поселок городского типа",
            "пгт",
            Before,
            vec![grp(&["пгт", "п.г.т", "поселок городского типа"], &[LOCALITY])],
        ),
        entry(
            "рабочий поселок",
            "рп",
            Before,
            vec![grp(&["рп", "р.п", "рабочий поселок"], &[LOCALITY])],
        ),
        entry(
            "дачный поселок",
            "дп",
            Before,
            vec![grp(&["дп", "д.п", "дачный поселок"], &[LOCALITY])],
        ),
        entry(
            "село",
            "с.",
            Before,
            vec![grp(&["с", "сел", "село"], &[LOCALITY])],
        ),
        entry(
            "деревня",
            "д.",
            Before,
            vec![grp(&["д", "дер", "деревня"], &[LOCALITY])],
        ),
        entry(
            "станица",
            "ст-ца",
            Before,
            vec![grp(&["ст-ца", "станица"], &[LOCALITY])],
        ),
        entry(
            "хутор",
            "х.",
            Before,
            vec![grp(&["х", "хут", "хутор"], &[LOCALITY])],
        ),
        entry("аул", "аул", Before, vec![grp(&["аул"], &[LOCALITY])]),
        entry(
            "слобода",
            "сл.",
            Before,
            vec![grp(&["сл", "слобода"], &[LOCALITY])],
        ),
        entry(
            "починок",
            "п-к",
            Before,
            vec![grp(&["п-к", "починок"], &[LOCALITY])],
        ),
        entry(
            "станция",
            "ст.",
            Before,
            vec![grp(&["ст", "станция"], &[LOCALITY, STREET])],
        ),
        entry(
            "железнодорожная станция",
            "ж/д ст.",
            Before,
            vec![grp(&["ж/д ст", "ж/д_ст", "жд станция"], &[LOCALITY])],
        ),
        // --- planning structure and mixed-level elements ----------------------
        entry(
            "микрорайон",
            "мкр.",
            Before,
            vec![grp(
                &["мкр", "мкрн", "микрорайон"],
                &[LOCALITY, PLAN_STRUCTURE],
            )],
        ),
        entry(
            "квартал",
            "кв-л",
            Before,
            vec![grp(&["кв-л", "квартал"], &[LOCALITY, PLAN_STRUCTURE])],
        ),
        entry(
            "территория",
            "тер.",
            Before,
            vec![grp(
                &["тер", "территория"],
                &[LOCALITY, PLAN_STRUCTURE, ADD_TERRITORY],
            )],
        ),
        entry(
            "жилой район",
            "ж/р",
            Before,
            vec![grp(&["ж/р", "жилрайон", "жилой район"], &[PLAN_STRUCTURE])],
        ),
        entry(
            "садовое неком-е товарищество",
            "снт",
            Before,
            vec![grp(
                &["снт", "с/т", "садовое товарищество"],
                &[LOCALITY, PLAN_STRUCTURE, ADD_TERRITORY],
            )],
        ),
        entry(
            "гаражно-строительный кооператив",
            "гск",
            Before,
            vec![grp(
                &["гск", "г-к", "гк", "гаражный кооператив"],
                &[PLAN_STRUCTURE, ADD_TERRITORY],
            )],
        ),
        entry(
            "зона",
            "зона",
            Before,
            vec![grp(&["зона"], &[PLAN_STRUCTURE])],
        ),
        entry(
            "массив",
            "массив",
            Before,
            vec![grp(&["массив"], &[LOCALITY, PLAN_STRUCTURE])],
        ),
        entry(
            "парк",
            "парк",
            Before,
            vec![grp(&["парк"], &[PLAN_STRUCTURE, STREET])],
        ),
        entry(
            "сад",
            "сад",
            Before,
            vec![grp(&["сад"], &[PLAN_STRUCTURE])],
        ),
        // --- street network ---------------------------------------------------
        entry(
            "улица",
            "ул.",
            Before,
            vec![grp(&["ул", "улица"], &[PLAN_STRUCTURE, STREET])],
        ),
        entry(
            "проспект",
            "пр-кт",
            Before,
            vec![grp(&["пр-кт", "пр-т", "просп", "проспект"], &[STREET])],
        ),
        entry(
            "переулок",
            "пер.",
            Before,
            vec![grp(&["пер", "переулок"], &[PLAN_STRUCTURE, STREET])],
        ),
        entry(
            "шоссе",
            "ш.",
            Before,
            vec![grp(&["ш", "шоссе"], &[PLAN_STRUCTURE, STREET])],
        ),
        entry(
            "бульвар",
            "б-р",
            Before,
            vec![grp(&["б-р", "бул", "бульвар"], &[STREET])],
        ),
        entry(
            "набережная",
            "наб.",
            Before,
            vec![grp(&["наб", "набережная"], &[STREET])],
        ),
        entry(
            "площадь",
            "пл.",
            Before,
            vec![grp(&["пл", "площадь"], &[PLAN_STRUCTURE, STREET])],
        ),
        entry(
            "проезд",
            "пр-д",
            Before,
            vec![grp(&["пр-д", "проезд"], &[STREET])],
        ),
        entry(
            "тупик",
            "туп.",
            Before,
            vec![grp(&["туп", "тупик"], &[STREET])],
        ),
        entry(
            "аллея",
            "ал.",
            Before,
            vec![grp(&["ал", "аллея"], &[STREET])],
        ),
        entry(
            "линия",
            "лн.",
            Before,
            vec![grp(&["лн", "линия"], &[STREET])],
        ),
        entry(
            "тракт",
            "тракт",
            Before,
            vec![grp(&["тракт"], &[STREET])],
        ),
        entry(
            "кольцо",
            "к-цо",
            Before,
            vec![grp(&["к-цо", "кольцо"], &[STREET])],
        ),
        entry(
            "съезд",
            "сзд.",
            Before,
            vec![grp(&["сзд", "съезд"], &[STREET])],
        ),
        entry(
            "спуск",
            "с-к",
            Before,
            vec![grp(&["с-к", "спуск"], &[STREET])],
        ),
        entry(
            "въезд",
            "взд.",
            Before,
            vec![grp(&["взд", "въезд"], &[STREET])],
        ),
        entry(
            "магистраль",
            "мгстр.",
            Before,
            vec![grp(&["мгстр", "магистраль"], &[STREET])],
        ),
        entry(
            "просека",
            "пр-к",
            Before,
            vec![grp(
                &["пр-к", "пр-ка", "просек", "просека"],
                &[LOCALITY, PLAN_STRUCTURE, STREET],
            )],
        ),
        entry("мост", "мост", Before, vec![grp(&["мост"], &[STREET])]),
        entry(
            "берег",
            "б-г",
            Before,
            vec![grp(&["б-г", "берег"], &[STREET])],
        ),
        entry(
            "дорога",
            "дор.",
            Before,
            vec![grp(
                &["дор", "дорога", "автодорога"],
                &[PLAN_STRUCTURE, STREET, ADD_TERRITORY_OBJ],
            )],
        ),
        entry(
            "километр",
            "км",
            Before,
            vec![grp(&["км", "километр"], &[STREET, ADD_TERRITORY_OBJ])],
        ),
        // --- parcels and parking ----------------------------------------------
        entry(
            "земельный участок",
            "з/у",
            Before,
            vec![grp(
                &["з/у", "зу", "уч", "уч-к", "участок", "земельный участок"],
                &[STEAD],
            )],
        ),
        entry(
            "машино-место",
            "м/место",
            Before,
            vec![grp(
                &["м/место", "мм", "машиноместо", "машино-место"],
                &[CARPLACE],
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_non_empty_and_stable() {
        let table = object_types();
        assert!(table.len() >= 50);
        // Same slice on repeated access.
        assert_eq!(table.as_ptr(), object_types().as_ptr());
    }

    #[test]
    fn poselenie_precedes_poselok() {
        let table = object_types();
        let poselenie = table.iter().position(|e| e.name == "поселение").unwrap();
        let poselok = table.iter().position(|e| e.name == "поселок").unwrap();
        assert!(poselenie < poselok);
    }

    #[test]
    fn spellings_are_lowercase() {
        for entry in object_types() {
            for name in entry.all_variant_names() {
                assert_eq!(name, name.to_lowercase(), "entry {}", entry.name);
            }
        }
    }
}
