//! "до ..." (until): the named boundary itself is what gets placed.

use super::*;
use crate::lexicon::{MONTH_LEMMAS, PART_LEMMAS};
use crate::pattern::*;

fn month() -> TokenPattern {
    lemma_in(MONTH_LEMMAS)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::BeforeIntMonthYear4dYear,
            vec![lemma("до"), digit(), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(ymd(m.year(3), m.month(2), m.int(1))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::BeforeIntDashIntMonthYear4dYear,
            vec![lemma("до"), regex(&RANGE), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(ymd(m.year(3), m.month(2), m.leading_int(1))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(RuleId::BeforeMonth, vec![lemma("до"), month()])
            .normalized_by(|m, ctx| instant(mid_month(m.month(1), Some(ctx.year()))))
            .within(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::BeforeMonthYear,
            vec![lemma("до"), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(1), m.year(2))))
        .within(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::BeforeToday,
            vec![lemma("до"), text("сегодняшнего"), text("дня")],
        )
        .normalized_by(|_, ctx| instant(Some(ctx.observation)))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::BeforeIntYear4dYear,
            vec![lemma("до"), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_year(m.year(1))))
        .within(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::BeforeDate,
            vec![lemma("до"), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(day(m.date(1))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::BeforeShortdate,
            vec![lemma("до"), regex(&SHORT_DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(day(m.date(1))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::BeforeDayMonth,
            vec![lemma("к"), regex(&DAY_MONTH_LOOSE)],
        )
        .normalized_by(|m, ctx| instant(day_month_in(m.day_month(1), Some(ctx.year()))))
        .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::BeforeMonthpartMonthYear4d,
            vec![
                lemma("до"),
                lemma_in(PART_LEMMAS),
                month(),
                regex(&YEAR),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| instant(ymd(m.year(3), m.month(2), m.month_part(1))))
        .within(CalendarDelta::days(15)),
    ]
}
