//! "через ...", "спустя ...": offsets from an event the sentence does not
//! place. They are recognised but never resolved.

use super::*;
use crate::lexicon::{
    DASHES, NUMERAL_LEMMAS, SUB_YEAR_UNIT_LEMMAS, UNIT_LEMMAS, UNIT_OR_MES_LEMMAS,
    UNIT_OR_MINUTE_LEMMAS,
};
use crate::pattern::*;

fn after() -> TokenPattern {
    lemma_in(&["через", "спустя"])
}

fn unit() -> TokenPattern {
    lemma_in(UNIT_LEMMAS)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::relative(
            RuleId::ThrIntDashIntUnit,
            vec![after(), digit(), text_in(DASHES), digit(), unit()],
        ),
        GrammarRule::relative(RuleId::ThrRangeUnit, vec![after(), regex(&RANGE), unit()]),
        GrammarRule::relative(
            RuleId::ThrIntUnit,
            vec![after(), digit(), lemma_in(UNIT_OR_MES_LEMMAS)],
        ),
        GrammarRule::relative(
            RuleId::ThrIntMinute,
            vec![after(), digit(), lemma_in(&["минута", "мина"])],
        ),
        GrammarRule::relative(
            RuleId::ThrNumUnit,
            vec![after(), lemma_in(NUMERAL_LEMMAS), unit()],
        ),
        GrammarRule::relative(RuleId::ThrUnit, vec![after(), unit()]),
        GrammarRule::relative(
            RuleId::UnitBefore,
            vec![lemma("за"), unit(), lemma("до"), lemma("это")],
        ),
        GrammarRule::relative(
            RuleId::ThrSomeTime,
            vec![after(), lemma("некоторый"), lemma("время")],
        ),
        GrammarRule::relative(
            RuleId::ThrSomeUnit,
            vec![after(), lemma("несколько"), lemma_in(UNIT_OR_MINUTE_LEMMAS)],
        ),
        GrammarRule::relative(RuleId::ThrHalfUnit, vec![after(), text("пол"), unit()]),
        GrammarRule::relative(
            RuleId::ThisSameUnit,
            vec![lemma("с"), lemma_in(&["этот", "этого"]), text("же"), unit()],
        ),
        GrammarRule::relative(RuleId::ThisUnit, vec![lemma("с"), lemma("этот"), unit()]),
        GrammarRule::relative(
            RuleId::ZaIntUnit,
            vec![lemma("за"), digit(), lemma_in(SUB_YEAR_UNIT_LEMMAS)],
        ),
        GrammarRule::relative(RuleId::AfterIntUnit, vec![lemma("после"), digit(), unit()]),
    ]
}
