use crate::lexicon::MONTH_LEMMAS;
use crate::pattern::{lemma, lemma_in};
use crate::*;
use chrono::{NaiveDate, NaiveDateTime};
use layered_timex::{DependencyTree, Token, TokenRange, TreeDisplay};

/// A flat sentence hanging off its first token.
fn sentence(words: &[(&str, &str, &str)]) -> DependencyTree {
    DependencyTree::from_tokens(
        words
            .iter()
            .enumerate()
            .map(|(idx, (text, lemma, pos))| Token::new(idx, text, lemma, pos, 0, "dep"))
            .collect(),
    )
    .unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn observed(y: i32, m: u32, d: u32) -> ReferenceContext {
    ReferenceContext::new(at(y, m, d, 0, 0))
}

fn only_span(tree: &DependencyTree) -> TemporalSpan {
    let mut spans = SpanMatcher::standard().find_in(tree);
    assert_eq!(spans.len(), 1, "{:?}", spans);
    spans.remove(0)
}

#[test]
fn years_ago() {
    let tree = sentence(&[("3", "3", "NUM"), ("года", "год", "NOUN"), ("назад", "назад", "ADV")]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::IntUnitAgo);
    assert_eq!(span.stamp, Stamp::Once);
    assert_eq!(span.text(&tree), "3 года назад");

    let normalized = Normalizer::standard().normalize(&tree, &span, &observed(2020, 6, 15));
    assert_eq!(
        normalized.form,
        NormalizedForm::Instant {
            at: at(2017, 6, 15, 0, 0),
            uncertainty: CalendarDelta::YEAR,
        }
    );
    assert_eq!(
        normalized.envelope,
        Some(Envelope::Triangle {
            low: at(2016, 6, 15, 0, 0),
            peak: at(2017, 6, 15, 0, 0),
            high: at(2018, 6, 15, 0, 0),
        })
    );
    assert_eq!(normalized.resolved_by, Some(Resolver::Rule));
}

#[test]
fn since_a_year_runs_to_the_observation() {
    let tree = sentence(&[("с", "с", "ADP"), ("2010", "2010", "NUM"), ("года", "год", "NOUN")]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::FromYear4dYear);
    assert_eq!(span.stamp, Stamp::Continuous);

    let normalized = Normalizer::standard().normalize(&tree, &span, &observed(2020, 1, 1));
    assert_eq!(
        normalized.form,
        NormalizedForm::Interval {
            start: at(2010, 7, 1, 0, 0),
            end: at(2020, 1, 1, 0, 0),
            uncertainty_start: CalendarDelta::YEAR,
            uncertainty_end: CalendarDelta::ZERO,
        }
    );
    assert_eq!(
        normalized.envelope.map(|envelope| envelope.points()),
        Some(vec![
            at(2009, 7, 1, 0, 0),
            at(2010, 7, 1, 0, 0),
            at(2020, 1, 1, 0, 0),
            at(2020, 1, 1, 0, 0),
        ])
    );
}

#[test]
fn ages_need_a_birth_date() {
    let tree = sentence(&[
        ("в", "в", "ADP"),
        ("возрасте", "возраст", "NOUN"),
        ("70", "70", "NUM"),
        ("лет", "год", "NOUN"),
    ]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::InAgeIntYear);

    let ctx = observed(2021, 5, 1).with_birth_date(NaiveDate::from_ymd_opt(1950, 3, 1).unwrap());
    let normalized = Normalizer::standard().normalize(&tree, &span, &ctx);
    assert_eq!(
        normalized.form,
        NormalizedForm::Instant {
            at: at(2020, 3, 1, 0, 0),
            uncertainty: CalendarDelta::YEAR,
        }
    );

    // No fallback parser gets to guess an age.
    let normalized = Normalizer::standard().normalize(&tree, &span, &observed(2021, 5, 1));
    assert_eq!(normalized, Normalization::unresolved());
}

#[test]
fn absurd_counts_stay_unresolved() {
    let ctx = observed(2020, 6, 15);

    // Too long for a u32, so only the fallback parsers see it.
    let tree = sentence(&[
        ("999999999999", "999999999999", "NUM"),
        ("дней", "день", "NOUN"),
        ("назад", "назад", "ADV"),
    ]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::IntUnitAgo);
    assert_eq!(Normalizer::standard().normalize(&tree, &span, &ctx), Normalization::unresolved());

    let tree = sentence(&[
        ("4000000000", "4000000000", "NUM"),
        ("недель", "неделя", "NOUN"),
        ("назад", "назад", "ADV"),
    ]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::IntUnitAgo);
    assert_eq!(Normalizer::standard().normalize(&tree, &span, &ctx), Normalization::unresolved());
}

#[test]
fn fuzzy_clock_reading() {
    let tree = sentence(&[("около", "около", "ADP"), ("17.00", "17.00", "NUM")]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::AroundTime);

    let normalized = Normalizer::standard().normalize(&tree, &span, &observed(2020, 6, 15));
    assert_eq!(
        normalized.form,
        NormalizedForm::Instant {
            at: at(2020, 6, 15, 17, 0),
            uncertainty: CalendarDelta::hours(2),
        }
    );
    assert_eq!(
        normalized.envelope,
        Some(Envelope::Trapezoid {
            low: at(2020, 6, 15, 15, 0),
            start: at(2020, 6, 15, 16, 0),
            end: at(2020, 6, 15, 18, 0),
            high: at(2020, 6, 15, 19, 0),
        })
    );
}

#[test]
fn frequencies_and_offsets_stay_unresolved() {
    let ctx = observed(2020, 6, 15);

    let tree = sentence(&[("ежедневно", "ежедневно", "ADV")]);
    let span = only_span(&tree);
    assert_eq!(span.stamp, Stamp::Repeatable);
    assert_eq!(Normalizer::standard().normalize(&tree, &span, &ctx), Normalization::unresolved());

    let tree = sentence(&[("через", "через", "ADP"), ("2", "2", "NUM"), ("дня", "день", "NOUN")]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::ThrIntUnit);
    assert_eq!(span.stamp, Stamp::Relative);
    assert_eq!(Normalizer::standard().normalize(&tree, &span, &ctx), Normalization::unresolved());
}

#[test]
fn clock_without_a_date_falls_back() {
    let tree = sentence(&[("в", "в", "ADP"), ("9.00", "9.00", "NUM")]);
    let span = only_span(&tree);
    assert_eq!(span.rule, RuleId::InTime);

    let ctx = observed(2020, 6, 15);
    let normalized = Normalizer::standard().normalize(&tree, &span, &ctx);
    assert_eq!(
        normalized.form,
        NormalizedForm::Instant {
            at: at(2020, 6, 15, 9, 0),
            uncertainty: CalendarDelta::DAY,
        }
    );
    assert_eq!(normalized.resolved_by, Some(Resolver::DateSearch));

    let strict = Normalizer::standard().with_fallback(false);
    assert_eq!(strict.normalize(&tree, &span, &ctx), Normalization::unresolved());
}

#[test]
fn continuous_fallback_closes_on_the_observation() {
    let rules = RuleSet::new(vec![GrammarRule::continuous(
        RuleId::FromMonthpartMonth,
        vec![lemma("с"), lemma_in(MONTH_LEMMAS)],
    )
    .within_since(CalendarDelta::MONTH)]);
    let tree = sentence(&[("с", "с", "ADP"), ("марта", "март", "NOUN")]);
    let spans = SpanMatcher::new(&rules).find_in(&tree);
    assert_eq!(spans.len(), 1);

    let normalized = Normalizer::new(&rules).normalize(&tree, &spans[0], &observed(2020, 6, 15));
    assert_eq!(
        normalized.form,
        NormalizedForm::Interval {
            start: at(2020, 3, 1, 0, 0),
            end: at(2020, 6, 15, 0, 0),
            uncertainty_start: CalendarDelta::MONTH,
            uncertainty_end: CalendarDelta::ZERO,
        }
    );
    assert_eq!(normalized.resolved_by, Some(Resolver::NaturalLanguage));
}

#[test]
fn spans_in_a_sentence() {
    let tree = sentence(&[
        ("3", "3", "NUM"),
        ("года", "год", "NOUN"),
        ("назад", "назад", "ADV"),
        ("перенес", "перенести", "VERB"),
        ("инфаркт", "инфаркт", "NOUN"),
        (",", ",", "PUNCT"),
        ("с", "с", "ADP"),
        ("2010", "2010", "NUM"),
        ("года", "год", "NOUN"),
        ("болеет", "болеть", "VERB"),
        ("диабетом", "диабет", "NOUN"),
        (".", ".", "PUNCT"),
    ]);
    let spans = SpanMatcher::standard().find_in(&tree);
    assert_eq!(
        spans.iter().map(|span| span.range).collect::<Vec<_>>(),
        vec![TokenRange::new(0, 3), TokenRange::new(6, 9)]
    );

    let mut display = TreeDisplay::new(&tree);
    for span in &spans {
        display.include(span.range, &span.rule);
    }

    insta::assert_snapshot!(display, @r###"
    3  года  назад  перенес  инфаркт  ,  с  2010  года  болеет  диабетом  .
    ╰────────────╯ IntUnitAgo
                                         ╰───────────╯ FromYear4dYear
    "###);
}
