//! Property checks for the comparator and the normalizer.

use std::cmp::Ordering;

use chrono::NaiveDate;
use proptest::prelude::*;

use gar_model::AbstractLevel;
use gar_standards::object_types;
use gar_transform::{compare_actuality, normalize_level_spec};

prop_compose! {
    fn any_date()(days in 693_596i32..767_009) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(days).unwrap()
    }
}

prop_compose! {
    fn any_end()(end in proptest::option::of(any_date())) -> Option<NaiveDate> {
        end
    }
}

proptest! {
    #[test]
    fn comparator_is_antisymmetric(
        sa in any_date(), ea in any_end(),
        sb in any_date(), eb in any_end(),
    ) {
        let forward = compare_actuality(sa, ea, sb, eb);
        let backward = compare_actuality(sb, eb, sa, ea);
        prop_assert_eq!(forward, backward.reverse());
    }

    #[test]
    fn comparator_is_reflexive(s in any_date(), e in any_end()) {
        prop_assert_eq!(compare_actuality(s, e, s, e), Ordering::Equal);
    }

    #[test]
    fn comparator_equal_means_identical_bounds(
        sa in any_date(), ea in any_end(),
        sb in any_date(), eb in any_end(),
    ) {
        if compare_actuality(sa, ea, sb, eb) == Ordering::Equal {
            prop_assert_eq!(sa, sb);
            prop_assert_eq!(ea, eb);
        }
    }

    #[test]
    fn normalization_is_idempotent(name in "\\PC{0,20}", short in "\\PC{0,10}") {
        let first = normalize_level_spec(AbstractLevel::Street, &name, &short);
        let second = normalize_level_spec(AbstractLevel::Street, &first.name, &first.short_name);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn every_canonical_pair_normalizes_to_itself() {
    for entry in object_types() {
        let spec = normalize_level_spec(AbstractLevel::Street, entry.name, entry.short_name);
        assert_eq!(spec.name, entry.name, "entry {}", entry.name);
        assert_eq!(spec.short_name, entry.short_name, "entry {}", entry.name);
    }
}
