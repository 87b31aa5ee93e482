//! Ages: "с 12 лет", "в возрасте 70 лет". These count from the birth date
//! and resolve to nothing without one.

use super::*;
use crate::lexicon::DASHES;
use crate::pattern::*;

/// The patient's birthday at `years` of age.
fn aged(ctx: &ReferenceContext, years: Option<u32>) -> Option<NaiveDateTime> {
    CalendarDelta::years(i64::from(years?)).add_to(ctx.born()?)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::FromIntDashTiYear,
            vec![lemma("с"), digit(), text_in(DASHES), lemma("ти"), text("лет")],
        )
        .normalized_by(|m, ctx| since(aged(ctx, m.int(1)), ctx))
        .within_since(CalendarDelta::YEAR)
        .needs_birth_date(),
        GrammarRule::continuous(RuleId::FromIntDashYear, vec![lemma("с"), digit(), text("лет")])
            .normalized_by(|m, ctx| since(aged(ctx, m.int(1)), ctx))
            .within_since(CalendarDelta::YEAR)
            .needs_birth_date(),
        GrammarRule::once(
            RuleId::InAgeIntYear,
            vec![lemma("в"), lemma("возраст"), digit(), text("лет")],
        )
        .normalized_by(|m, ctx| instant(aged(ctx, m.int(2))))
        .within(CalendarDelta::YEAR)
        .needs_birth_date(),
        GrammarRule::continuous(
            RuleId::FromIntDashYearAge,
            vec![
                lemma("с"),
                digit(),
                text_in(DASHES),
                lemma("летний"),
                lemma("возраст"),
            ],
        )
        .normalized_by(|m, ctx| since(aged(ctx, m.int(1)), ctx))
        .within_since(CalendarDelta::YEAR)
        .needs_birth_date(),
        GrammarRule::once(
            RuleId::InIntYear,
            vec![lemma("в"), regex(&TWO_DIGITS), text_in(&["год", "л", "г", "лет"])],
        )
        .normalized_by(|m, ctx| instant(aged(ctx, m.int(1))))
        .within(CalendarDelta::YEAR)
        .needs_birth_date(),
    ]
}
