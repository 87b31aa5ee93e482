use crate::*;
use chrono::{NaiveDate, NaiveDateTime};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn plain_instant_is_a_triangle() {
    let normalized = Normalization::resolved(
        NormalValue::Instant(dt(2010, 7, 1)),
        Uncertainty::Symmetric(CalendarDelta::YEAR),
        false,
        Resolver::Rule,
    );
    assert_eq!(
        normalized.envelope.map(|envelope| envelope.points()),
        Some(vec![dt(2009, 7, 1), dt(2010, 7, 1), dt(2011, 7, 1)])
    );
}

#[test]
fn fuzzy_instant_doubles_its_margin() {
    let normalized = Normalization::resolved(
        NormalValue::Instant(dt(2019, 12, 15)),
        Uncertainty::Symmetric(CalendarDelta::MONTH),
        true,
        Resolver::Rule,
    );
    assert_eq!(
        normalized.form,
        NormalizedForm::Instant {
            at: dt(2019, 12, 15),
            uncertainty: CalendarDelta::months(2),
        }
    );
    assert_eq!(
        normalized.envelope.map(|envelope| envelope.points()),
        Some(vec![dt(2019, 10, 15), dt(2019, 11, 15), dt(2020, 1, 15), dt(2020, 2, 15)])
    );
}

#[test]
fn interval_margins_are_independent() {
    let normalized = Normalization::resolved(
        NormalValue::Interval(dt(2010, 1, 31), dt(2010, 3, 31)),
        Uncertainty::Split {
            start: CalendarDelta::MONTH,
            end: CalendarDelta::DAY,
        },
        false,
        Resolver::NaturalLanguage,
    );
    assert_eq!(
        normalized.envelope,
        Some(Envelope::Trapezoid {
            low: dt(2009, 12, 31),
            start: dt(2010, 1, 31),
            end: dt(2010, 3, 31),
            high: dt(2010, 4, 1),
        })
    );
    assert_eq!(normalized.resolved_by, Some(Resolver::NaturalLanguage));
    assert!(normalized.form.is_resolved());
}

#[test]
fn envelope_out_of_range_is_dropped() {
    let far = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
    let normalized = Normalization::resolved(
        NormalValue::Instant(far),
        Uncertainty::Symmetric(CalendarDelta::YEAR),
        false,
        Resolver::Rule,
    );
    assert!(normalized.form.is_resolved());
    assert_eq!(normalized.envelope, None);
}

#[test]
fn unresolved_has_nothing_attached() {
    let unresolved = Normalization::unresolved();
    assert!(!unresolved.form.is_resolved());
    assert_eq!(unresolved.envelope, None);
    assert_eq!(unresolved.resolved_by, None);
}
