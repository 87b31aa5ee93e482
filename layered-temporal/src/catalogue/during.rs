//! "в течение ..." (during the last ...): an interval that ends on the
//! observation and reaches back the named amount.

use super::*;
use crate::lexicon::{NUMERAL_LEMMAS, SEVERAL, UNIT_LEMMAS, UNIT_OR_MES_LEMMAS};
use crate::pattern::*;

fn during() -> Vec<TokenPattern> {
    vec![lemma_in(&["в", "на"]), lemma_in(&["течение", "протяжение"])]
}

fn during_with(rest: Vec<TokenPattern>) -> Vec<TokenPattern> {
    let mut pattern = during();
    pattern.extend(rest);
    pattern
}

fn unit() -> TokenPattern {
    lemma_in(UNIT_LEMMAS)
}

fn last() -> TokenPattern {
    lemma("последний")
}

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(RuleId::DurIntUnit, during_with(vec![digit(), unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(3), m.int(2)))
            .within_computed(|m| unit_margin_since(m.unit(3), 1)),
        GrammarRule::continuous(RuleId::DurRangeUnit, during_with(vec![regex(&RANGE), unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(3), m.leading_int(2)))
            .within_computed(|m| unit_margin_since(m.unit(3), 1)),
        GrammarRule::continuous(
            RuleId::DurNumUnit,
            during_with(vec![lemma_in(NUMERAL_LEMMAS), unit()]),
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(3), m.numeral(2)))
        .within_computed(|m| unit_margin_since(m.unit(3), 1)),
        GrammarRule::continuous(RuleId::DurUnit, during_with(vec![unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(2), Some(1)))
            .within_computed(|m| unit_margin_since(m.unit(2), 1)),
        GrammarRule::continuous(RuleId::DurLastIntUnit, during_with(vec![last(), digit(), unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(4), m.int(3)))
            .within_computed(|m| unit_margin_since(m.unit(4), 1)),
        GrammarRule::continuous(
            RuleId::DurLastNumUnit,
            during_with(vec![last(), lemma_in(NUMERAL_LEMMAS), unit()]),
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(4), m.numeral(3)))
        .within_computed(|m| unit_margin_since(m.unit(4), 1)),
        GrammarRule::continuous(
            RuleId::DurLastFloatMonth,
            during_with(vec![last(), regex(&FLOAT), lemma("месяц")]),
        )
        .normalized_by(|m, ctx| since(ago(ctx, fractional(CalendarUnit::Month, m.float(3))), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::DurLastFloatYear,
            during_with(vec![last(), regex(&FLOAT), lemma("год")]),
        )
        .normalized_by(|m, ctx| since(ago(ctx, fractional(CalendarUnit::Year, m.float(3))), ctx))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::DurLastSevYear,
            during_with(vec![last(), lemma("несколько"), lemma("год")]),
        )
        .normalized_by(|_, ctx| last_units(ctx, Some(CalendarUnit::Year), Some(SEVERAL)))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::DurLastSevYearAbbr,
            during_with(vec![text("посл"), text("неск"), lemma("год")]),
        )
        .normalized_by(|_, ctx| last_units(ctx, Some(CalendarUnit::Year), Some(SEVERAL)))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(RuleId::DurIntLastUnit, during_with(vec![digit(), last(), unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(4), m.int(2)))
            .within_computed(|m| unit_margin_since(m.unit(4), 1)),
        GrammarRule::continuous(
            RuleId::DurNumLastUnit,
            during_with(vec![lemma_in(NUMERAL_LEMMAS), last(), unit()]),
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(4), m.numeral(2)))
        .within_computed(|m| unit_margin_since(m.unit(4), 1)),
        GrammarRule::continuous(
            RuleId::DurFloatLastMonth,
            during_with(vec![regex(&FLOAT), last(), lemma("месяц")]),
        )
        .normalized_by(|m, ctx| since(ago(ctx, fractional(CalendarUnit::Month, m.float(2))), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(
            RuleId::DurFloatLastYear,
            during_with(vec![regex(&FLOAT), last(), lemma("год")]),
        )
        .normalized_by(|m, ctx| since(ago(ctx, fractional(CalendarUnit::Year, m.float(2))), ctx))
        .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::DurFloatMonth,
            during_with(vec![regex(&FLOAT), lemma("месяц")]),
        )
        .normalized_by(|m, ctx| since(ago(ctx, fractional(CalendarUnit::Month, m.float(2))), ctx))
        .within_since(CalendarDelta::MONTH),
        GrammarRule::continuous(RuleId::DurFloatYear, during_with(vec![regex(&FLOAT), lemma("год")]))
            .normalized_by(|m, ctx| {
                since(ago(ctx, fractional(CalendarUnit::Year, m.float(2))), ctx)
            })
            .within_since(CalendarDelta::YEAR),
        GrammarRule::continuous(
            RuleId::LastFloatUnit,
            vec![last(), regex(&FLOAT), lemma_in(&["неделя", "день"])],
        )
        .normalized_by(|m, ctx| since(ago(ctx, Some(m.unit(2)?.fractional(m.float(1)?))), ctx))
        .within_computed(|m| unit_margin_since(m.unit(2), 1)),
        GrammarRule::continuous(RuleId::DurLastUnit, during_with(vec![last(), unit()]))
            .normalized_by(|m, ctx| last_units(ctx, m.unit(3), Some(1)))
            .within_computed(|m| unit_margin_since(m.unit(3), 1)),
        GrammarRule::continuous(
            RuleId::DurSevUnit,
            during_with(vec![lemma_in(&["несколько", "много"]), unit()]),
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(3), Some(SEVERAL)))
        .within_computed(|m| unit_margin_since(m.unit(3), i64::from(SEVERAL))),
        GrammarRule::continuous(
            RuleId::DurLastSevUnit,
            vec![lemma("в"), last(), lemma("несколько"), unit()],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(3), Some(SEVERAL)))
        .within_computed(|m| unit_margin_since(m.unit(3), i64::from(SEVERAL))),
        GrammarRule::continuous(
            RuleId::LastIntUnit,
            vec![last(), digit(), lemma_in(UNIT_OR_MES_LEMMAS)],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(2), m.int(1)))
        .within_computed(|m| unit_margin_since(m.unit(2), 1)),
        GrammarRule::continuous(
            RuleId::LastNumUnit,
            vec![last(), lemma_in(NUMERAL_LEMMAS), lemma_in(UNIT_OR_MES_LEMMAS)],
        )
        .normalized_by(|m, ctx| last_units(ctx, m.unit(2), m.numeral(1)))
        .within_computed(|m| unit_margin_since(m.unit(2), 1)),
        GrammarRule::continuous(RuleId::DurHalfyear, during_with(vec![text("полугода")]))
            .normalized_by(|_, ctx| since(ago(ctx, Some(CalendarDelta::HALF_YEAR)), ctx))
            .within_since(CalendarDelta::MONTH),
        // Minutes of an unnamed activity, not a stretch of the history.
        GrammarRule::relative(
            RuleId::DurRangeMinute,
            during_with(vec![regex(&RANGE), lemma("минута")]),
        ),
    ]
}
