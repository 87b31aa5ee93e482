use crate::*;
use chrono::{NaiveDate, NaiveDateTime};
use layered_timex::{DependencyTree, Token};
use proptest::prelude::*;

const MONTHS: &[&str] = &[
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь",
    "ноябрь", "декабрь",
];

/// Words the grammar reacts to, mixed with words it ignores.
const VOCABULARY: &[(&str, &str, &str)] = &[
    ("с", "с", "ADP"),
    ("в", "в", "ADP"),
    ("около", "около", "ADP"),
    ("через", "через", "ADP"),
    ("3", "3", "NUM"),
    ("70", "70", "NUM"),
    ("2010", "2010", "NUM"),
    ("17.12.2010", "17.12.2010", "NUM"),
    ("12.2010", "12.2010", "NUM"),
    ("17.00", "17.00", "NUM"),
    ("1-2", "1-2", "NUM"),
    ("года", "год", "NOUN"),
    ("лет", "год", "NOUN"),
    ("месяца", "месяц", "NOUN"),
    ("мае", "май", "NOUN"),
    ("вечером", "вечер", "NOUN"),
    ("вчера", "вчера", "ADV"),
    ("назад", "назад", "ADV"),
    ("раза", "раз", "NOUN"),
    ("-", "-", "PUNCT"),
    ("болеет", "болеть", "VERB"),
    ("давление", "давление", "NOUN"),
];

fn sentence(words: &[(&str, &str, &str)]) -> DependencyTree {
    DependencyTree::from_tokens(
        words
            .iter()
            .enumerate()
            .map(|(idx, (text, lemma, pos))| Token::new(idx, text, lemma, pos, 0, "dep"))
            .collect(),
    )
    .unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn arb_words() -> impl Strategy<Value = Vec<(&'static str, &'static str, &'static str)>> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..16)
}

proptest! {
    #[test]
    fn a_year_points_at_its_middle(year in 1910i32..2100) {
        let text = year.to_string();
        let tree = sentence(&[("в", "в", "ADP"), (text.as_str(), text.as_str(), "NUM"), ("году", "год", "NOUN")]);
        let spans = SpanMatcher::standard().find_in(&tree);
        prop_assert_eq!(spans.len(), 1);

        let ctx = ReferenceContext::new(midnight(2020, 1, 1));
        let normalized = Normalizer::standard().normalize(&tree, &spans[0], &ctx);
        prop_assert_eq!(
            normalized.form,
            NormalizedForm::Instant { at: midnight(year, 7, 1), uncertainty: CalendarDelta::YEAR }
        );
    }

    #[test]
    fn a_month_points_at_the_fifteenth(month in 0usize..12, year in 1910i32..2100) {
        let text = year.to_string();
        let tree = sentence(&[
            ("в", "в", "ADP"),
            (MONTHS[month], MONTHS[month], "NOUN"),
            (text.as_str(), text.as_str(), "NUM"),
            ("года", "год", "NOUN"),
        ]);
        let spans = SpanMatcher::standard().find_in(&tree);
        prop_assert_eq!(spans.len(), 1);

        let ctx = ReferenceContext::new(midnight(2020, 1, 1));
        let normalized = Normalizer::standard().normalize(&tree, &spans[0], &ctx);
        prop_assert_eq!(
            normalized.form,
            NormalizedForm::Instant {
                at: midnight(year, month as u32 + 1, 15),
                uncertainty: CalendarDelta::MONTH,
            }
        );
    }

    #[test]
    fn spans_are_ordered_and_disjoint(words in arb_words()) {
        let tree = sentence(&words);
        let spans = SpanMatcher::standard().find_in(&tree);
        for span in &spans {
            prop_assert!(!span.range.is_empty());
            prop_assert!(span.range.end <= tree.len());
            prop_assert_eq!(span.stamp, span.rule.stamp());
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].range.end <= pair[1].range.start);
        }
    }

    #[test]
    fn normalization_respects_stamps(words in arb_words()) {
        let tree = sentence(&words);
        let ctx = ReferenceContext::new(midnight(2020, 6, 15));
        for span in SpanMatcher::standard().find_in(&tree) {
            let normalized = Normalizer::standard().normalize(&tree, &span, &ctx);
            if !span.stamp.is_resolvable() {
                prop_assert_eq!(normalized, Normalization::unresolved());
            }
            if normalized.form.is_resolved() {
                prop_assert!(normalized.resolved_by.is_some());
            }
        }
    }
}
