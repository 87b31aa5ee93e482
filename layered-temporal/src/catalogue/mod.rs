//! The rule catalogue.
//!
//! Rules are grouped by what they describe, and the groups are concatenated
//! in a fixed order. That order is the priority the matcher uses to break
//! ties between equally long matches, so earlier groups win: a plain date
//! beats the event rules that could also claim it.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::calendar::{self, CalendarDelta, CalendarUnit};
use crate::context::ReferenceContext;
use crate::pattern::{lemma_in, TokenPattern};
use crate::rule::{GrammarRule, NormalValue, RuleId, RuleMatch, Stamp, Uncertainty};

mod age;
mod ago;
mod before;
mod continuous;
mod dates;
mod during;
mod intervals;
mod once;
mod other;
mod relative;
mod repeatable;

static STANDARD: Lazy<RuleSet> = Lazy::new(|| {
    let groups = [
        dates::rules(),
        ago::rules(),
        once::rules(),
        continuous::rules(),
        before::rules(),
        age::rules(),
        during::rules(),
        relative::rules(),
        intervals::rules(),
        repeatable::rules(),
        other::rules(),
    ];
    RuleSet::new(groups.iter().flatten().cloned().collect())
});

/// An ordered list of grammar rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<GrammarRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<GrammarRule>) -> Self {
        RuleSet { rules }
    }

    /// The full catalogue.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrammarRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: RuleId) -> Option<&GrammarRule> {
        // The standard set is laid out in identifier order.
        match self.rules.get(id as usize) {
            Some(rule) if rule.id == id => Some(rule),
            _ => self.rules.iter().find(|rule| rule.id == id),
        }
    }

    /// Catalogue position of a rule; lower is higher priority.
    pub fn priority(&self, id: RuleId) -> Option<usize> {
        self.rules.iter().position(|rule| rule.id == id)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a GrammarRule;
    type IntoIter = std::slice::Iter<'a, GrammarRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl RuleId {
    /// Stamp class the standard catalogue assigns to this rule.
    pub fn stamp(self) -> Stamp {
        RuleSet::standard()
            .get(self)
            .map(|rule| rule.stamp)
            .unwrap_or(Stamp::Once)
    }
}

// "год" after a year or a date, with its written abbreviations.
const YEAR_WORDS: &[&str] = &["год", "г", "гг"];

fn year_word() -> TokenPattern {
    lemma_in(YEAR_WORDS)
}

// Normalization helpers. Every one takes and returns `Option` so a missing
// slot or an impossible date simply yields no value.

fn instant(at: Option<NaiveDateTime>) -> Option<NormalValue> {
    at.map(NormalValue::Instant)
}

fn between(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<NormalValue> {
    Some(NormalValue::Interval(start?, end?))
}

/// From `start` up to the observation.
fn since(start: Option<NaiveDateTime>, ctx: &ReferenceContext) -> Option<NormalValue> {
    between(start, Some(ctx.observation))
}

fn day(date: Option<NaiveDate>) -> Option<NaiveDateTime> {
    date?.and_hms_opt(0, 0, 0)
}

fn ymd(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<NaiveDateTime> {
    calendar::midnight(year?, month?, day?)
}

/// 1 July: year-level expressions point mid-year.
fn mid_year(year: Option<i32>) -> Option<NaiveDateTime> {
    calendar::midnight(year?, 7, 1)
}

fn mid_month(month: Option<u32>, year: Option<i32>) -> Option<NaiveDateTime> {
    ymd(year, month, Some(15))
}

fn anchored(year: Option<i32>, anchor: Option<(u32, u32)>) -> Option<NaiveDateTime> {
    calendar::anchored(year?, anchor?)
}

fn month_of_year(month_year: Option<(u32, i32)>) -> Option<NaiveDateTime> {
    let (month, year) = month_year?;
    calendar::midnight(year, month, 15)
}

fn day_month_in(day_month: Option<(u32, u32)>, year: Option<i32>) -> Option<NaiveDateTime> {
    let (day, month) = day_month?;
    calendar::midnight(year?, month, day)
}

fn clock_on(date: Option<NaiveDate>, clock: Option<(u32, u32)>) -> Option<NaiveDateTime> {
    let (hour, minute) = clock?;
    calendar::at_time(date?, hour, minute)
}

fn hour_on(date: Option<NaiveDate>, hour: Option<u32>) -> Option<NaiveDateTime> {
    calendar::at_time(date?, hour?, 0)
}

/// An hour of a part of the day: "8 вечера" is 20.
fn shifted_hour(hour: Option<u32>, offset: Option<u32>) -> Option<u32> {
    hour?.checked_add(offset?)
}

/// The day named by "сегодня", "вчера", "позавчера".
fn event_day(ctx: &ReferenceContext, back: Option<i64>) -> Option<NaiveDate> {
    ctx.today().checked_sub_signed(Duration::days(back?))
}

fn ago(ctx: &ReferenceContext, delta: Option<CalendarDelta>) -> Option<NaiveDateTime> {
    delta?.sub_from(ctx.observation)
}

fn units(unit: Option<CalendarUnit>, n: Option<u32>) -> Option<CalendarDelta> {
    Some(unit?.times(i64::from(n?)))
}

fn fractional(unit: CalendarUnit, amount: Option<f64>) -> Option<CalendarDelta> {
    Some(unit.fractional(amount?))
}

/// `n` units before the observation, as an instant.
fn units_ago(ctx: &ReferenceContext, unit: Option<CalendarUnit>, n: Option<u32>) -> Option<NormalValue> {
    instant(ago(ctx, units(unit, n)))
}

/// The last `n` units, as an interval closing on the observation.
fn last_units(ctx: &ReferenceContext, unit: Option<CalendarUnit>, n: Option<u32>) -> Option<NormalValue> {
    since(ago(ctx, units(unit, n)), ctx)
}

fn unit_margin(unit: Option<CalendarUnit>) -> Option<Uncertainty> {
    Some(Uncertainty::Symmetric(unit?.delta()))
}

fn unit_margin_since(unit: Option<CalendarUnit>, factor: i64) -> Option<Uncertainty> {
    Some(Uncertainty::since(unit?.delta().scaled(factor)))
}

/// The date after the dash in `24-25.11.2010`.
fn range_end_date(matched: &RuleMatch<'_>, pos: usize) -> Option<NaiveDateTime> {
    match calendar::numbers_in(matched.text(pos)?).as_slice() {
        &[_, day, month, year] => calendar::midnight(calendar::full_year(year), month, day),
        _ => None,
    }
}
