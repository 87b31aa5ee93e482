//! Dates written in digits, alone or with a clock reading.

use super::*;
use crate::lexicon::FUZZY_LEMMAS;
use crate::pattern::*;

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(RuleId::Date, vec![regex(&DATE), year_word().optional()])
            .normalized_by(|m, _| instant(day(m.date(0))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(RuleId::DateB, vec![regex(&SHORT_DATE), year_word().optional()])
            .normalized_by(|m, _| instant(day(m.date(0))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(RuleId::DateMy4d, vec![regex(&MONTH_YEAR4), year_word().optional()])
            .normalized_by(|m, _| instant(month_of_year(m.month_year(0))))
            .within(CalendarDelta::MONTH),
        GrammarRule::once(RuleId::DateMy2d, vec![regex(&MONTH_YEAR2), year_word().optional()])
            .normalized_by(|m, _| instant(month_of_year(m.month_year(0))))
            .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::OtDateMy4d,
            vec![lemma("от"), regex(&MONTH_YEAR4), year_word().optional()],
        )
        .normalized_by(|m, _| instant(month_of_year(m.month_year(1))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::OtDateMy2d,
            vec![lemma("от"), regex(&MONTH_YEAR2), year_word().optional()],
        )
        .normalized_by(|m, _| instant(month_of_year(m.month_year(1))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::OtDate,
            vec![lemma("от"), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(day(m.date(1))))
        .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::OtDateB,
            vec![lemma("от"), regex(&SHORT_DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(day(m.date(1))))
        .within(CalendarDelta::DAY),
        // "13.01": the year is the observation's.
        GrammarRule::once(RuleId::DateShort, vec![regex(&DAY_MONTH)])
            .normalized_by(|m, ctx| instant(day_month_in(m.day_month(0), Some(ctx.year()))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(RuleId::OtDateShort, vec![lemma("от"), regex(&DAY_MONTH)])
            .normalized_by(|m, ctx| instant(day_month_in(m.day_month(1), Some(ctx.year()))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(RuleId::TimeDate, vec![regex(&TIME), regex(&DATE)])
            .normalized_by(|m, _| instant(clock_on(m.date(1), m.clock(0))))
            .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::TimeShortdate, vec![regex(&TIME), regex(&SHORT_DATE)])
            .normalized_by(|m, _| instant(clock_on(m.date(1), m.clock(0))))
            .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundTime,
            vec![lemma_in(FUZZY_LEMMAS), regex(&TIME), lemma("час").optional()],
        )
        .normalized_by(|m, ctx| instant(clock_on(Some(ctx.today()), m.clock(1))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
    ]
}
