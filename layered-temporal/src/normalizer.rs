//! Turning a matched span into a calendar value.
//!
//! A span resolves through its rule's own normalization when the rule has
//! one and it succeeds. Otherwise, for the stamp classes that can be placed
//! on a calendar at all, the fallback parsers in [`crate::fallback`] get a
//! go at the span's text. Repeatable and relative spans never resolve.

use chrono::NaiveDateTime;
use layered_timex::DependencyTree;
use log::debug;
use serde::Serialize;

use crate::calendar::CalendarDelta;
use crate::catalogue::RuleSet;
use crate::context::ReferenceContext;
use crate::fallback;
use crate::matcher::TemporalSpan;
use crate::rule::{GrammarRule, NormalValue, Stamp, Uncertainty};

/// The calendar value of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedForm {
    Instant {
        at: NaiveDateTime,
        uncertainty: CalendarDelta,
    },
    Interval {
        start: NaiveDateTime,
        end: NaiveDateTime,
        uncertainty_start: CalendarDelta,
        uncertainty_end: CalendarDelta,
    },
    Unresolved,
}

impl NormalizedForm {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, NormalizedForm::Unresolved)
    }
}

/// Where an expression may plausibly lie, as the corner points of a
/// membership shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Envelope {
    Triangle {
        low: NaiveDateTime,
        peak: NaiveDateTime,
        high: NaiveDateTime,
    },
    Trapezoid {
        low: NaiveDateTime,
        start: NaiveDateTime,
        end: NaiveDateTime,
        high: NaiveDateTime,
    },
}

impl Envelope {
    pub fn points(&self) -> Vec<NaiveDateTime> {
        match *self {
            Envelope::Triangle { low, peak, high } => vec![low, peak, high],
            Envelope::Trapezoid {
                low,
                start,
                end,
                high,
            } => vec![low, start, end, high],
        }
    }
}

/// What produced a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolver {
    Rule,
    NaturalLanguage,
    DateSearch,
    RelativeDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Normalization {
    pub form: NormalizedForm,
    pub envelope: Option<Envelope>,
    pub resolved_by: Option<Resolver>,
}

impl Normalization {
    pub fn unresolved() -> Self {
        Normalization {
            form: NormalizedForm::Unresolved,
            envelope: None,
            resolved_by: None,
        }
    }

    /// Attaches `uncertainty` to `value`.
    ///
    /// Fuzzy instants double their margin and spread over four points
    /// instead of three.
    pub fn resolved(
        value: NormalValue,
        uncertainty: Uncertainty,
        fuzzy: bool,
        resolved_by: Resolver,
    ) -> Self {
        let (form, envelope) = match value {
            NormalValue::Instant(at) if fuzzy => {
                let margin = uncertainty.start();
                let wide = margin.scaled(2);
                let form = NormalizedForm::Instant {
                    at,
                    uncertainty: wide,
                };
                (form, plateau(at, margin))
            }
            NormalValue::Instant(at) => {
                let margin = uncertainty.start();
                let form = NormalizedForm::Instant {
                    at,
                    uncertainty: margin,
                };
                (form, triangle(at, margin))
            }
            NormalValue::Interval(start, end) => {
                let (before, after) = (uncertainty.start(), uncertainty.end());
                let form = NormalizedForm::Interval {
                    start,
                    end,
                    uncertainty_start: before,
                    uncertainty_end: after,
                };
                (form, trapezoid(start, end, before, after))
            }
        };
        Normalization {
            form,
            envelope,
            resolved_by: Some(resolved_by),
        }
    }
}

fn triangle(at: NaiveDateTime, margin: CalendarDelta) -> Option<Envelope> {
    Some(Envelope::Triangle {
        low: margin.sub_from(at)?,
        peak: at,
        high: margin.add_to(at)?,
    })
}

fn trapezoid(
    start: NaiveDateTime,
    end: NaiveDateTime,
    before: CalendarDelta,
    after: CalendarDelta,
) -> Option<Envelope> {
    Some(Envelope::Trapezoid {
        low: before.sub_from(start)?,
        start,
        end,
        high: after.add_to(end)?,
    })
}

/// `[at - 2u, at - u, at + u, at + 2u]`.
fn plateau(at: NaiveDateTime, margin: CalendarDelta) -> Option<Envelope> {
    trapezoid(margin.sub_from(at)?, margin.add_to(at)?, margin, margin)
}

/// Resolves spans found by a [`SpanMatcher`](crate::SpanMatcher) built on
/// the same rule set.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'r> {
    rules: &'r RuleSet,
    fallback: bool,
}

impl Normalizer<'static> {
    pub fn standard() -> Self {
        Normalizer::new(RuleSet::standard())
    }
}

impl<'r> Normalizer<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Normalizer {
            rules,
            fallback: true,
        }
    }

    /// Whether the fallback parsers are consulted.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn normalize(
        &self,
        tree: &DependencyTree,
        span: &TemporalSpan,
        ctx: &ReferenceContext,
    ) -> Normalization {
        let rule = match self.rules.get(span.rule) {
            Some(rule) => rule,
            None => return Normalization::unresolved(),
        };
        if !rule.stamp.is_resolvable() {
            return Normalization::unresolved();
        }
        if rule.needs_birth_date && ctx.birth_date.is_none() {
            debug!("{} counts from a birth date and none is known", rule.id);
            return Normalization::unresolved();
        }

        let matched = span.matched(tree);
        if let Some(normalize) = rule.normalize {
            if let Some(value) = normalize(&matched, ctx) {
                let uncertainty = rule
                    .uncertainty_for(&matched)
                    .unwrap_or(Uncertainty::Symmetric(CalendarDelta::ZERO));
                return Normalization::resolved(value, uncertainty, rule.fuzzy, Resolver::Rule);
            }
        }
        if rule.needs_birth_date || !self.fallback {
            return Normalization::unresolved();
        }

        let text = fallback::prepare(matched.tokens());
        debug!("{} gave no value, trying fallback parsers on {:?}", rule.id, text);
        match fallback::resolve(&text, ctx) {
            Some((found, resolver)) => {
                let margin = rule
                    .uncertainty_for(&matched)
                    .map(|uncertainty| uncertainty.start())
                    .unwrap_or(CalendarDelta::DAY);
                let (value, uncertainty) = fallback_value(rule, found, margin, ctx);
                Normalization::resolved(value, uncertainty, rule.fuzzy, resolver)
            }
            None => Normalization::unresolved(),
        }
    }
}

/// A continuous expression runs from what the fallback found up to the
/// observation.
fn fallback_value(
    rule: &GrammarRule,
    found: NaiveDateTime,
    margin: CalendarDelta,
    ctx: &ReferenceContext,
) -> (NormalValue, Uncertainty) {
    match rule.stamp {
        Stamp::Continuous if found < ctx.observation => (
            NormalValue::Interval(found, ctx.observation),
            Uncertainty::since(margin),
        ),
        _ => (NormalValue::Instant(found), Uncertainty::Symmetric(margin)),
    }
}
