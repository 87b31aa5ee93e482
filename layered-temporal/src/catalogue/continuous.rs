//! "с ..." (since): a stretch from a named start up to the observation.
//!
//! The end of every interval here is the observation itself, so only the
//! start carries a margin.

use super::*;
use crate::lexicon::{DAYTIME_LEMMAS, DAY_EVENT_LEMMAS, MONTH_LEMMAS, PART_LEMMAS, SEASON_LEMMAS};
use crate::pattern::*;

fn month() -> TokenPattern {
    lemma_in(MONTH_LEMMAS)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::FromMonthpartMonth,
            vec![lemma("с"), lemma_in(PART_LEMMAS), month()],
        )
        .normalized_by(|m, ctx| since(ymd(Some(ctx.year()), m.month(2), m.month_part(1)), ctx))
        .within_since(CalendarDelta::days(15)),
        GrammarRule::continuous(
            RuleId::FromIntMonthYear4dYear,
            vec![lemma("с"), digit(), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(ymd(m.year(3), m.month(2), m.int(1)), ctx))
        .within_since(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromRangeMonthYear4dYear,
            vec![lemma("с"), regex(&RANGE), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(ymd(m.year(3), m.month(2), m.leading_int(1)), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::FromYearpartYear4d,
            vec![lemma("с"), lemma_in(PART_LEMMAS), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(anchored(m.year(2), m.year_part(1)), ctx))
        .within_since(CalendarDelta::days(45)),
        GrammarRule::continuous(
            RuleId::FromMonthpartMonthYear4d,
            vec![
                lemma("с"),
                lemma_in(PART_LEMMAS),
                month(),
                regex(&YEAR),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, ctx| since(ymd(m.year(3), m.month(2), m.month_part(1)), ctx))
        .within_since(CalendarDelta::days(15)),
        GrammarRule::continuous(
            RuleId::FromDaytimeDate,
            vec![
                lemma("с"),
                lemma_in(DAYTIME_LEMMAS),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, ctx| since(hour_on(m.date(2), m.daytime_hour(1)), ctx))
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::FromTimeDateA,
            vec![lemma("с"), regex(&TIME_LOOSE), regex(&DATE)],
        )
        .normalized_by(|m, ctx| since(clock_on(m.date(2), m.clock(1)), ctx))
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::FromTimeShortdate,
            vec![lemma("с"), regex(&TIME_LOOSE), regex(&SHORT_DATE)],
        )
        .normalized_by(|m, ctx| since(clock_on(m.date(2), m.clock(1)), ctx))
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::FromTimeDateB,
            vec![lemma("с"), regex(&TIME_DASH), regex(&DATE)],
        )
        .normalized_by(|m, ctx| since(clock_on(m.date(2), m.clock(1)), ctx))
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::DateFromTime,
            vec![regex(&DATE), lemma("с"), regex(&TIME)],
        )
        .normalized_by(|m, ctx| since(clock_on(m.date(0), m.clock(2)), ctx))
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::FromDate,
            vec![lemma("с"), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(day(m.date(1)), ctx))
        .within_since(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromShortdate,
            vec![lemma("с"), regex(&SHORT_DATE), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(day(m.date(1)), ctx))
        .within_since(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromYear4dYear,
            vec![lemma("с"), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(mid_year(m.year(1)), ctx))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::FromShortdateYearA,
            vec![lemma("с"), regex(&MONTH_YEAR4_LOOSE), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(month_of_year(m.month_year(1)), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::FromShortdateYearB,
            vec![lemma("с"), regex(&MONTH_YEAR2_LOOSE), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(month_of_year(m.month_year(1)), ctx))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::FromMonthYear4dYear,
            vec![lemma("с"), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, ctx| since(mid_month(m.month(1), m.year(2)), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::FromSeasonYear4dYear,
            vec![
                lemma("с"),
                lemma_in(SEASON_LEMMAS),
                regex(&YEAR),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, ctx| since(anchored(m.year(2), m.season(1)), ctx))
        .within_since(CalendarDelta::days(60)),
        GrammarRule::continuous(RuleId::FromMonth, vec![lemma("с"), month()])
            .normalized_by(|m, ctx| since(mid_month(m.month(1), Some(ctx.year())), ctx))
            .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::EventFromTimeDaytimeA,
            vec![
                lemma_in(DAY_EVENT_LEMMAS),
                text("с"),
                digit(),
                lemma("час"),
                lemma_in(DAYTIME_LEMMAS),
            ],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(4));
            since(hour_on(event_day(ctx, m.days_back(0)), hour), ctx)
        })
        .within_since(CalendarDelta::HOUR),
        GrammarRule::continuous(
            RuleId::EventFromTimeDaytimeB,
            vec![
                lemma_in(DAY_EVENT_LEMMAS),
                text("с"),
                digit(),
                lemma_in(DAYTIME_LEMMAS),
            ],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(3));
            since(hour_on(event_day(ctx, m.days_back(0)), hour), ctx)
        })
        .within_since(CalendarDelta::HOUR),
    ]
}
