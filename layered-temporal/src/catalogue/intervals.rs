//! Closed intervals between two named points, and bare amounts of time
//! ("3 месяца", "около года") read as the last stretch of that length.

use chrono::Datelike;

use super::*;
use crate::lexicon::{
    DASHES, FUZZY_LEMMAS, MONTH_LEMMAS, NUMERAL_LEMMAS, SUB_YEAR_UNIT_LEMMAS, UNIT_LEMMAS,
};
use crate::pattern::*;

fn month() -> TokenPattern {
    lemma_in(MONTH_LEMMAS)
}

fn unit() -> TokenPattern {
    lemma_in(UNIT_LEMMAS)
}

fn dash() -> TokenPattern {
    text_in(DASHES)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    let mut rules = closed_rules();
    rules.extend(amount_rules());
    rules
}

fn closed_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::FromYear4dYearTillYear4dYear,
            vec![
                lemma("с"),
                regex(&YEAR),
                year_word(),
                text("по"),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| between(mid_year(m.year(1)), mid_year(m.year(4))))
        .within(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::FromMonthYear4dYearTillMonthYear4dYear,
            vec![
                lemma("с"),
                month(),
                regex(&YEAR),
                year_word(),
                text("по"),
                month(),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| {
            between(mid_month(m.month(1), m.year(2)), mid_month(m.month(5), m.year(6)))
        })
        .within(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::FromShortdateTillShortdate,
            vec![
                lemma("с"),
                regex(&SHORT_DATE),
                text("по"),
                regex(&SHORT_DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| between(day(m.date(1)), day(m.date(3))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromShortdateTillShortdateYear,
            vec![
                lemma("с"),
                regex(&SHORT_DATE),
                year_word(),
                text("по"),
                regex(&SHORT_DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| between(day(m.date(1)), day(m.date(4))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromDateTillDate,
            vec![
                lemma("с"),
                regex(&DATE),
                text("по"),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| between(day(m.date(1)), day(m.date(3))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromDateTillDateYear,
            vec![
                lemma("с"),
                regex(&DATE),
                year_word(),
                text("по"),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| between(day(m.date(1)), day(m.date(4))))
        .within(CalendarDelta::DAY),
        // "с 12.05 по 20.06.10": the first day borrows the second's year.
        GrammarRule::continuous(
            RuleId::FromDateMy2dTillDate,
            vec![
                lemma("с"),
                regex(&MONTH_YEAR2),
                text("по"),
                regex(&SHORT_DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            let end = m.date(3)?;
            between(day_month_in(m.day_month(1), Some(end.year())), day(Some(end)))
        })
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromDateDashDate,
            vec![lemma("с"), regex(&SHORT_DATE), dash(), regex(&SHORT_DATE)],
        )
        .normalized_by(|m, _| between(day(m.date(1)), day(m.date(3))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::DateDashDate,
            vec![regex(&SHORT_DATE), dash(), regex(&SHORT_DATE)],
        )
        .normalized_by(|m, _| between(day(m.date(0)), day(m.date(2))))
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromShortdateDashShortdate,
            vec![
                lemma("с"),
                regex(&DAY_MONTH_LOOSE),
                dash(),
                regex(&DAY_MONTH_LOOSE),
            ],
        )
        .normalized_by(|m, ctx| {
            let year = Some(ctx.year());
            between(day_month_in(m.day_month(1), year), day_month_in(m.day_month(3), year))
        })
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromShortdateDashDate,
            vec![
                lemma("с"),
                regex(&DAY_MONTH_LOOSE),
                dash(),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            let end = m.date(3)?;
            between(day_month_in(m.day_month(1), Some(end.year())), day(Some(end)))
        })
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::FromShortdateDashDateB,
            vec![
                lemma("с"),
                regex(&DAY_MONTH_LOOSE),
                dash(),
                regex(&SHORT_DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            let end = m.date(3)?;
            between(day_month_in(m.day_month(1), Some(end.year())), day(Some(end)))
        })
        .within(CalendarDelta::DAY),
        GrammarRule::continuous(
            RuleId::Year4dDashYear4dYear,
            vec![regex(&YEAR), dash(), regex(&YEAR), year_word()],
        )
        .normalized_by(|m, _| between(mid_year(m.year(0)), mid_year(m.year(2))))
        .within(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::FromMonthTillMonthYear4dYear,
            vec![
                lemma("с"),
                month(),
                text("по"),
                month(),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| {
            between(mid_month(m.month(1), m.year(4)), mid_month(m.month(3), m.year(4)))
        })
        .within(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::FromMonthYear4dTillMonthYear4dYear,
            vec![
                lemma("с"),
                month(),
                regex(&YEAR),
                text("по"),
                month(),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| {
            between(mid_month(m.month(1), m.year(2)), mid_month(m.month(4), m.year(5)))
        })
        .within(CalendarDelta::MONTH),
    ]
}

fn amount_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::InLastIntUnit,
            vec![lemma("в"), lemma("последний"), digit(), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(3), m.int(2)))
        .within_computed(|m| unit_margin_since(m.unit(3), 1)),
        GrammarRule::continuous(RuleId::LastUnit, vec![lemma("последний"), unit()])
            .normalized_by(|m, ctx| last_units(ctx, m.unit(1), Some(1)))
            .within_computed(|m| unit_margin_since(m.unit(1), 1)),
        // "последние 2-3 года" reaches back to the larger figure.
        GrammarRule::continuous(
            RuleId::LastIntDashIntUnit,
            vec![lemma("последний"), digit(), dash(), digit(), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(4), m.int(3)))
        .within_computed(|m| unit_margin_since(m.unit(4), 1)),
        GrammarRule::continuous(
            RuleId::LastRangeUnit,
            vec![lemma("последний"), regex(&RANGE), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(2), m.trailing_int(1)))
        .within_computed(|m| unit_margin_since(m.unit(2), 1)),
        GrammarRule::continuous(
            RuleId::MoreIntUnit,
            vec![lemma_in(&["более", "около"]), digit(), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(2), m.int(1)))
        .within_computed(|m| unit_margin_since(m.unit(2), 2)),
        GrammarRule::continuous(
            RuleId::MoreNumUnit,
            vec![lemma_in(&["более", "около"]), lemma_in(NUMERAL_LEMMAS), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(2), m.numeral(1)))
        .within_computed(|m| unit_margin_since(m.unit(2), 2)),
        GrammarRule::continuous(RuleId::AroundUnit, vec![lemma_in(FUZZY_LEMMAS), unit()])
            .normalized_by(|m, ctx| last_units(ctx, m.unit(1), Some(1)))
            .within_computed(|m| unit_margin_since(m.unit(1), 2)),
        GrammarRule::continuous(RuleId::UnitRange, vec![caseless("лет"), regex(&RANGE)])
            .normalized_by(|m, ctx| last_units(ctx, Some(CalendarUnit::Year), m.leading_int(1)))
            .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(RuleId::UnitInt, vec![caseless("лет"), digit()])
            .normalized_by(|m, ctx| last_units(ctx, Some(CalendarUnit::Year), m.int(1)))
            .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(RuleId::ZaUnit, vec![lemma("за"), unit()])
            .normalized_by(|m, ctx| last_units(ctx, m.unit(1), Some(1)))
            .within_computed(|m| unit_margin_since(m.unit(1), 1)),
        GrammarRule::continuous(RuleId::IntUnit, vec![digit(), lemma_in(SUB_YEAR_UNIT_LEMMAS)])
            .normalized_by(|m, ctx| last_units(ctx, m.unit(1), m.int(0)))
            .within_computed(|m| unit_margin_since(m.unit(1), 1)),
        GrammarRule::continuous(
            RuleId::NumUnit,
            vec![lemma_in(NUMERAL_LEMMAS), lemma_in(SUB_YEAR_UNIT_LEMMAS)],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(1), m.numeral(0)))
        .within_computed(|m| Some(Uncertainty::since(units(m.unit(1), m.numeral(0))?))),
        GrammarRule::continuous(RuleId::IntYear, vec![digit(), text_in(&["года", "лет"])])
            .normalized_by(|m, ctx| last_units(ctx, Some(CalendarUnit::Year), m.int(0)))
            .within_since(CalendarDelta::YEAR),
    ]
}
