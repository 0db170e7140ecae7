//! Temporal actuality ordering for validity intervals.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Order two validity intervals by recency.
///
/// The interval whose end date lies further in the future ranks higher;
/// among intervals ending on the same date, the one that became valid most
/// recently ranks higher. Two intervals compare equal only when both
/// bounds match exactly.
///
/// An absent end date means open-ended validity and sorts after every
/// bounded end date (assumption: the registry's sentinel "never expires").
pub fn compare_actuality(
    start_a: NaiveDate,
    end_a: Option<NaiveDate>,
    start_b: NaiveDate,
    end_b: Option<NaiveDate>,
) -> Ordering {
    let by_end = match (end_a, end_b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    };
    by_end.then_with(|| start_a.cmp(&start_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn equal_intervals_compare_equal() {
        assert_eq!(
            compare_actuality(d("1900-01-01"), Some(d("2079-06-06")), d("1900-01-01"), Some(d("2079-06-06"))),
            Ordering::Equal
        );
    }

    #[test]
    fn longer_lived_interval_wins() {
        assert_eq!(
            compare_actuality(d("1900-01-01"), Some(d("2079-06-06")), d("1900-01-01"), Some(d("1900-01-01"))),
            Ordering::Greater
        );
        assert_eq!(
            compare_actuality(d("1900-01-01"), Some(d("1970-01-01")), d("1900-01-01"), Some(d("2079-06-06"))),
            Ordering::Less
        );
    }

    #[test]
    fn equal_ends_fall_back_to_start() {
        assert_eq!(
            compare_actuality(d("2010-05-01"), Some(d("2079-06-06")), d("1991-01-01"), Some(d("2079-06-06"))),
            Ordering::Greater
        );
    }

    #[test]
    fn open_end_sorts_after_any_bounded_end() {
        assert_eq!(
            compare_actuality(d("1900-01-01"), None, d("1900-01-01"), Some(d("2999-12-31"))),
            Ordering::Greater
        );
        assert_eq!(
            compare_actuality(d("1900-01-01"), None, d("1950-01-01"), None),
            Ordering::Less
        );
    }
}
