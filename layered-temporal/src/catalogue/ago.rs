//! "N units ago".

use super::*;
use crate::lexicon::{FUZZY_LEMMAS, NUMERAL_LEMMAS, SEVERAL, UNIT_LEMMAS, UNIT_OR_MINUTE_LEMMAS};
use crate::pattern::*;

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(
            RuleId::IntUnitAgo,
            vec![digit(), lemma_in(UNIT_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(1), m.int(0)))
        .within_computed(|m| unit_margin(m.unit(1))),
        GrammarRule::once(RuleId::UnitAgo, vec![lemma_in(UNIT_LEMMAS), text("назад")])
            .normalized_by(|m, ctx| units_ago(ctx, m.unit(0), Some(1)))
            .within_computed(|m| unit_margin(m.unit(0))),
        GrammarRule::once(
            RuleId::AroundUnitAgo,
            vec![lemma_in(FUZZY_LEMMAS), lemma_in(UNIT_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(1), Some(1)))
        .within_computed(|m| unit_margin(m.unit(1)))
        .fuzzy(),
        GrammarRule::once(
            RuleId::NumUnitAgo,
            vec![lemma_in(NUMERAL_LEMMAS), lemma_in(UNIT_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(1), m.numeral(0)))
        .within_computed(|m| unit_margin(m.unit(1))),
        GrammarRule::once(
            RuleId::FuzzyNumUnitAgo,
            vec![
                lemma_in(FUZZY_LEMMAS),
                lemma_in(NUMERAL_LEMMAS),
                lemma_in(UNIT_LEMMAS),
                text("назад"),
            ],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(2), m.numeral(1)))
        .within_computed(|m| unit_margin(m.unit(2)))
        .fuzzy(),
        GrammarRule::once(
            RuleId::FuzzyHalfyearAgo,
            vec![lemma_in(FUZZY_LEMMAS), text("полугода"), text("назад")],
        )
        .normalized_by(|_, ctx| instant(ago(ctx, Some(CalendarDelta::HALF_YEAR))))
        .within(CalendarDelta::MONTH)
        .fuzzy(),
        GrammarRule::once(
            RuleId::FuzzyIntUnitAgo,
            vec![
                lemma_in(FUZZY_LEMMAS),
                digit(),
                lemma_in(UNIT_OR_MINUTE_LEMMAS),
                text("назад"),
            ],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(2), m.int(1)))
        .within_computed(|m| unit_margin(m.unit(2)))
        .fuzzy(),
        GrammarRule::once(
            RuleId::MoreIntUnitAgo,
            vec![lemma("более"), digit(), lemma_in(UNIT_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(2), m.int(1)))
        .within_computed(|m| unit_margin(m.unit(2)))
        .fuzzy(),
        GrammarRule::once(
            RuleId::UnitIntAgo,
            vec![lemma_in(UNIT_LEMMAS), digit(), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(0), m.int(1)))
        .within_computed(|m| unit_margin(m.unit(0))),
        GrammarRule::once(
            RuleId::UnitNumAgo,
            vec![lemma_in(UNIT_LEMMAS), lemma_in(NUMERAL_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(0), m.numeral(1)))
        .within_computed(|m| unit_margin(m.unit(0))),
        GrammarRule::once(
            RuleId::SevUnitAgo,
            vec![lemma("несколько"), lemma_in(UNIT_LEMMAS), text("назад")],
        )
        .normalized_by(|m, ctx| units_ago(ctx, m.unit(1), Some(SEVERAL)))
        .within_computed(|m| Some(Uncertainty::Symmetric(units(m.unit(1), Some(SEVERAL))?))),
        GrammarRule::once(
            RuleId::FloatYearAgo,
            vec![regex(&FLOAT), lemma("год"), text("назад")],
        )
        .normalized_by(|m, ctx| instant(ago(ctx, fractional(CalendarUnit::Year, m.float(0)))))
        .within(CalendarDelta::YEAR),
        GrammarRule::once(
            RuleId::FloatMonthAgo,
            vec![regex(&FLOAT), lemma("месяц"), text("назад")],
        )
        .normalized_by(|m, ctx| instant(ago(ctx, fractional(CalendarUnit::Month, m.float(0)))))
        .within(CalendarDelta::MONTH),
    ]
}
