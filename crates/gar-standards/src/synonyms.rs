//! Colloquial region aliases keyed by stable fias id.
//!
//! The flat record exposes these so consumers can match informal names
//! ("Башкирия") against the registry's formal ones ("Башкортостан").

use std::collections::HashMap;
use std::sync::LazyLock;

const SYNONYMS: &[(&str, &[&str])] = &[
    // Башкортостан
    ("6f2cbfd8-692a-4ee4-9b16-067210bde3fc", &["Башкирия"]),
    // Татарстан
    ("0c089b04-099e-4e0e-955a-6bf1ce525f1a", &["Татария"]),
    // Саха (Якутия)
    ("c225d3db-1db6-4063-ace0-b3fe9ea3805f", &["Якутия"]),
    // Удмуртская республика
    ("52618b9c-bcbb-47e7-8957-95c63f0b17cc", &["Удмуртия"]),
    // Чувашская республика
    ("878fc621-3708-46c7-a97f-5a13a4176b3e", &["Чувашия"]),
    // Северная Осетия — Алания
    ("de459e9c-2933-4923-83d1-9c64cfd7a817", &["Алания"]),
    // Санкт-Петербург
    ("c2deb16a-0330-4f05-821f-1d09c93331e6", &["СПб"]),
];

static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Aliases for a fias id; empty for ids without an entry.
pub fn synonyms_for(fias_id: &str) -> &'static [&'static str] {
    SYNONYM_MAP.get(fias_id).copied().unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bashkortostan_has_bashkiria_alias() {
        assert_eq!(
            synonyms_for("6f2cbfd8-692a-4ee4-9b16-067210bde3fc"),
            ["Башкирия"]
        );
    }

    #[test]
    fn unknown_id_has_no_aliases() {
        assert!(synonyms_for("00000000-0000-0000-0000-000000000000").is_empty());
    }
}
