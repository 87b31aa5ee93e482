//! Expressions without a value of their own: the fallback parsers get a
//! chance at those.

use super::*;
use crate::lexicon::{PART_LEMMAS, TIME_UNIT_WORDS, UNIT_LEMMAS};
use crate::pattern::*;

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::continuous(
            RuleId::SevYears,
            vec![lemma("несколько"), lemma_in(TIME_UNIT_WORDS)],
        ),
        GrammarRule::continuous(RuleId::FromTime, vec![lemma("с"), regex(&TIME)]),
        GrammarRule::once(RuleId::InTime, vec![lemma("в"), regex(&TIME)]),
        GrammarRule::once(RuleId::OnIntUnit, vec![lemma("на"), digit(), text_in(UNIT_LEMMAS)]),
        // "в конце 2009, начале 2010 года": the later of the two.
        GrammarRule::once(
            RuleId::InPartYear4dPartYear4d,
            vec![
                lemma("в"),
                lemma_in(PART_LEMMAS),
                regex(&YEAR),
                text(","),
                lemma_in(PART_LEMMAS),
                regex(&YEAR),
            ],
        )
        .normalized_by(|m, _| instant(anchored(m.year(5), m.year_part(4))))
        .within(CalendarDelta::days(45)),
        GrammarRule::continuous(
            RuleId::Now,
            vec![lemma("в"), lemma("настоящий"), lemma("время")],
        )
        .normalized_by(|_, ctx| instant(Some(ctx.observation)))
        .within(CalendarDelta::DAY),
    ]
}
