//! Frequencies: "2 раза в день", "ежедневно". Recognised so they are not
//! mistaken for dates, never placed on a calendar.

use super::*;
use crate::lexicon::{DASHES, NUMERAL_LEMMAS, REGULAR_LEMMAS, TIMES_WORDS, TIME_UNIT_WORDS, UNIT_LEMMAS};
use crate::pattern::*;

fn times() -> TokenPattern {
    text_in(TIMES_WORDS)
}

fn per() -> TokenPattern {
    text("в")
}

fn period() -> TokenPattern {
    lemma_in(TIME_UNIT_WORDS)
}

fn numeral() -> TokenPattern {
    lemma_in(NUMERAL_LEMMAS)
}

fn up_to() -> TokenPattern {
    lemma_in(&["до", "около"])
}

pub(super) fn rules() -> Vec<GrammarRule> {
    use crate::rule::RuleId::*;

    let table: Vec<(RuleId, Vec<TokenPattern>)> = vec![
        (IntTimesInUnit, vec![digit(), times(), per(), period()]),
        (NumTimesInUnit, vec![numeral(), times(), per(), period()]),
        (PrepIntTimesInUnit, vec![up_to(), digit(), times(), per(), period()]),
        (
            PrepIntTimesInUnitDashIntUnit,
            vec![
                up_to(),
                digit(),
                times(),
                per(),
                period(),
                text_in(DASHES),
                digit(),
                lemma_in(UNIT_LEMMAS),
            ],
        ),
        (PrepNumTimesInUnit, vec![up_to(), numeral(), times(), per(), period()]),
        (
            PrepIntTimesInRangeUnit,
            vec![up_to(), digit(), times(), per(), regex(&RANGE), period()],
        ),
        (IntTimesInRangeUnit, vec![digit(), times(), per(), regex(&RANGE), period()]),
        (NumTimesInRangeUnit, vec![numeral(), times(), per(), regex(&RANGE), period()]),
        (RangeTimesInUnit, vec![regex(&RANGE), times(), per(), period()]),
        (RangeInUnit, vec![regex(&RANGE), per(), lemma_in(UNIT_LEMMAS)]),
        (RangeTimesInIntUnit, vec![regex(&RANGE), times(), per(), digit(), period()]),
        (RangeTimesInNumUnit, vec![regex(&RANGE), times(), per(), numeral(), period()]),
        (IntTimesInIntUnit, vec![digit(), times(), per(), digit(), period()]),
        (NumTimesInIntUnit, vec![numeral(), times(), per(), digit(), period()]),
        (IntTimesInNumUnit, vec![digit(), times(), per(), numeral(), period()]),
        (NumTimesInNumUnit, vec![numeral(), times(), per(), numeral(), period()]),
        (
            IntTimesInIntUnitDashIntUnit,
            vec![
                digit(),
                times(),
                per(),
                digit(),
                period(),
                text_in(DASHES),
                digit(),
                period(),
            ],
        ),
        (BeforeIntInIntUnit, vec![lemma("до"), digit(), per(), digit(), period()]),
        (TimesInUnit, vec![times(), per(), period()]),
        (TimesInNumUnit, vec![times(), per(), numeral(), period()]),
        (TimesInIntUnit, vec![times(), per(), digit(), period()]),
        (
            PrepSevTimesInUnit,
            vec![
                pos_in(&["ADP"]).optional(),
                lemma("несколько"),
                times(),
                per(),
                period(),
            ],
        ),
        (Regular, vec![lemma_in(REGULAR_LEMMAS)]),
        (IntUnitInUnit, vec![digit(), period(), per(), period()]),
    ];

    table
        .into_iter()
        .map(|(id, pattern)| GrammarRule::repeatable(id, pattern))
        .collect()
}
