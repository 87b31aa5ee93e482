//! Grammar rules: identifiers, stamp classes, and the data record each
//! catalogue entry is made of.

use chrono::{NaiveDate, NaiveDateTime};
use layered_timex::{DependencyTree, Token};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::calendar::{full_year, numbers_in, CalendarDelta, CalendarUnit};
use crate::context::ReferenceContext;
use crate::lexicon;
use crate::pattern::TokenPattern;

/// Temporal semantics of a matched expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stamp {
    /// A single point in time: "3 года назад", "в мае 2009 года".
    Once,
    /// A stretch reaching up to the observation: "с 2010 года", "в течение месяца".
    Continuous,
    /// A frequency: "2 раза в день".
    Repeatable,
    /// Anchored on another, unnamed event: "через 2 месяца".
    Relative,
}

impl Stamp {
    /// Numeric class, 1 through 4.
    pub fn code(self) -> u8 {
        match self {
            Stamp::Once => 1,
            Stamp::Continuous => 2,
            Stamp::Repeatable => 3,
            Stamp::Relative => 4,
        }
    }

    /// Whether expressions of this class can be placed on a calendar at all.
    pub fn is_resolvable(self) -> bool {
        matches!(self, Stamp::Once | Stamp::Continuous)
    }
}

macro_rules! rule_ids {
    ($($variant:ident => $name:literal,)*) => {
        /// Identifier of a catalogue rule.
        ///
        /// Variants are declared in catalogue order, which is also the
        /// priority order the matcher breaks ties with.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleId {
            $($variant,)*
        }

        impl RuleId {
            pub const ALL: &'static [RuleId] = &[$(RuleId::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(RuleId::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<RuleId> {
                match name {
                    $($name => Some(RuleId::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

rule_ids! {
    Date => "date",
    DateB => "date_b",
    DateMy4d => "date_my4d",
    DateMy2d => "date_my2d",
    OtDateMy4d => "ot_date_my4d",
    OtDateMy2d => "ot_date_my2d",
    OtDate => "ot_date",
    OtDateB => "ot_date_b",
    DateShort => "date_short",
    OtDateShort => "ot_date_short",
    TimeDate => "time_date",
    TimeShortdate => "time_shortdate",
    AroundTime => "around_time",
    IntUnitAgo => "int_unit_ago",
    UnitAgo => "unit_ago",
    AroundUnitAgo => "around_unit_ago",
    NumUnitAgo => "num_unit_ago",
    FuzzyNumUnitAgo => "fuzzy_num_unit_ago",
    FuzzyHalfyearAgo => "fuzzy_halfyear_ago",
    FuzzyIntUnitAgo => "fuzzy_int_unit_ago",
    MoreIntUnitAgo => "more_int_unit_ago",
    UnitIntAgo => "unit_int_ago",
    UnitNumAgo => "unit_num_ago",
    SevUnitAgo => "sev_unit_ago",
    FloatYearAgo => "float_year_ago",
    FloatMonthAgo => "float_month_ago",
    InTimeShortdate => "in_time_shortdate",
    ShortdateInTime => "shortdate_in_time",
    DateInTime => "date_in_time",
    ShortdateAroundTime => "shortdate_around_time",
    DateAroundTime => "date_around_time",
    DateYearAroundTime => "date_year_around_time",
    Year4dYear => "year4d_year",
    Year4dYearInTime => "year4d_year_in_time",
    InYear4dYear => "in_year4d_year",
    InYear4dYearA => "in_year4d_year_a",
    InYearpartYear4d => "in_yearpart_year4d",
    YearpartYear4d => "yearpart_year4d",
    MonthDashMonthYear4dYear => "month_dash_month_year4d_year",
    MonthAndMonthYear4dYear => "month_and_month_year4d_year",
    MonthYear4dYear => "month_year4d_year",
    InMonthYear4dYear => "in_month_year4d_year",
    RangeMonthYear4dYear => "range_month_year4d_year",
    OtMonthYear4dYear => "ot_month_year4d_year",
    SeasonYear4dYear => "season_year4d_year",
    IntMonthYear4dYear => "int_month_year4d_year",
    IntMonth => "int_month",
    InMonthpartMonthYear4d => "in_monthpart_month_year4d",
    MonthpartMonthYear4d => "monthpart_month_year4d",
    AroundIntHourDaytimeDate => "around_int_hour_daytime_date",
    IntHDaytimeDate => "int_h_daytime_date",
    AroundIntHDaytimeDate => "around_int_h_daytime_date",
    IntHourDaytimeDate => "int_hour_daytime_date",
    AroundIntDaytimeDate => "around_int_daytime_date",
    IntDaytimeDate => "int_daytime_date",
    InIntHDaytime => "in_int_h_daytime",
    IntHDaytime => "int_h_daytime",
    IntHourDaytime => "int_hour_daytime",
    DaytimeDate => "daytime_date",
    DateDaytime => "date_daytime",
    ShortdateDaytime => "shortdate_daytime",
    TimeDaytimeDate => "time_daytime_date",
    AroundTimeDaytimeDate => "around_time_daytime_date",
    DateInTimeDaytime => "date_in_time_daytime",
    EventTime => "event_time",
    EventAroundTime => "event_around_time",
    Event => "event",
    InMonth => "in_month",
    EventInTimeDaytime => "event_in_time_daytime",
    EventAroundTimeDaytime => "event_around_time_daytime",
    EventInTimeDaytimeA => "event_in_time_daytime_a",
    EventAroundTimeDaytimeA => "event_around_time_daytime_a",
    InTimeDaytime => "in_time_daytime",
    AroundTimeDaytime => "around_time_daytime",
    TimeHDate => "time_h_date",
    AroundTimeHDate => "around_time_h_date",
    Month => "month",
    OtDayDashDate => "ot_day_dash_date",
    OtDayDashShortdate => "ot_day_dash_shortdate",
    InDecade => "in_decade",
    InMonthYear => "in_month_year",
    DayMonth => "day_month",
    OtDayMonth => "ot_day_month",
    EventFromTime => "event_from_time",
    EventShortdateAroundTime => "event_shortdate_around_time",
    FromMonthpartMonth => "from_monthpart_month",
    FromIntMonthYear4dYear => "from_int_month_year4d_year",
    FromRangeMonthYear4dYear => "from_range_month_year4d_year",
    FromYearpartYear4d => "from_yearpart_year4d",
    FromMonthpartMonthYear4d => "from_monthpart_month_year4d",
    FromDaytimeDate => "from_daytime_date",
    FromTimeDateA => "from_time_date_a",
    FromTimeShortdate => "from_time_shortdate",
    FromTimeDateB => "from_time_date_b",
    DateFromTime => "date_from_time",
    FromDate => "from_date",
    FromShortdate => "from_shortdate",
    FromYear4dYear => "from_year4d_year",
    FromShortdateYearA => "from_shortdate_year_a",
    FromShortdateYearB => "from_shortdate_year_b",
    FromMonthYear4dYear => "from_month_year4d_year",
    FromSeasonYear4dYear => "from_season_year4d_year",
    FromMonth => "from_month",
    EventFromTimeDaytimeA => "event_from_time_daytime_a",
    EventFromTimeDaytimeB => "event_from_time_daytime_b",
    BeforeIntMonthYear4dYear => "before_int_month_year4d_year",
    BeforeIntDashIntMonthYear4dYear => "before_int_dash_int_month_year4d_year",
    BeforeMonth => "before_month",
    BeforeMonthYear => "before_month_year",
    BeforeToday => "before_today",
    BeforeIntYear4dYear => "before_int_year4d_year",
    BeforeDate => "before_date",
    BeforeShortdate => "before_shortdate",
    BeforeDayMonth => "before_day_month",
    BeforeMonthpartMonthYear4d => "before_monthpart_month_year4d",
    FromIntDashTiYear => "from_int_dash_ti_year",
    FromIntDashYear => "from_int_dash_year",
    InAgeIntYear => "in_age_int_year",
    FromIntDashYearAge => "from_int_dash_year_age",
    InIntYear => "in_int_year",
    DurIntUnit => "dur_int_unit",
    DurRangeUnit => "dur_range_unit",
    DurNumUnit => "dur_num_unit",
    DurUnit => "dur_unit",
    DurLastIntUnit => "dur_last_int_unit",
    DurLastNumUnit => "dur_last_num_unit",
    DurLastFloatMonth => "dur_last_float_month",
    DurLastFloatYear => "dur_last_float_year",
    DurLastSevYear => "dur_last_sev_year",
    DurLastSevYearAbbr => "dur_last_sev_year_abbr",
    DurIntLastUnit => "dur_int_last_unit",
    DurNumLastUnit => "dur_num_last_unit",
    DurFloatLastMonth => "dur_float_last_month",
    DurFloatLastYear => "dur_float_last_year",
    DurFloatMonth => "dur_float_month",
    DurFloatYear => "dur_float_year",
    LastFloatUnit => "last_float_unit",
    DurLastUnit => "dur_last_unit",
    DurSevUnit => "dur_sev_unit",
    DurLastSevUnit => "dur_last_sev_unit",
    LastIntUnit => "last_int_unit",
    LastNumUnit => "last_num_unit",
    DurHalfyear => "dur_halfyear",
    DurRangeMinute => "dur_range_minute",
    ThrIntDashIntUnit => "thr_int_dash_int_unit",
    ThrRangeUnit => "thr_range_unit",
    ThrIntUnit => "thr_int_unit",
    ThrIntMinute => "thr_int_minute",
    ThrNumUnit => "thr_num_unit",
    ThrUnit => "thr_unit",
    UnitBefore => "unit_before",
    ThrSomeTime => "thr_some_time",
    ThrSomeUnit => "thr_some_unit",
    ThrHalfUnit => "thr_half_unit",
    ThisSameUnit => "this_same_unit",
    ThisUnit => "this_unit",
    ZaIntUnit => "za_int_unit",
    AfterIntUnit => "after_int_unit",
    FromYear4dYearTillYear4dYear => "from_year4d_year_till_year4d_year",
    FromMonthYear4dYearTillMonthYear4dYear => "from_month_year4d_year_till_month_year4d_year",
    FromShortdateTillShortdate => "from_shortdate_till_shortdate",
    FromShortdateTillShortdateYear => "from_shortdate_till_shortdate_year",
    FromDateTillDate => "from_date_till_date",
    FromDateTillDateYear => "from_date_till_date_year",
    FromDateMy2dTillDate => "from_date_my2d_till_date",
    FromDateDashDate => "from_date_dash_date",
    DateDashDate => "date_dash_date",
    FromShortdateDashShortdate => "from_shortdate_dash_shortdate",
    FromShortdateDashDate => "from_shortdate_dash_date",
    FromShortdateDashDateB => "from_shortdate_dash_date_b",
    Year4dDashYear4dYear => "year4d_dash_year4d_year",
    FromMonthTillMonthYear4dYear => "from_month_till_month_year4d_year",
    FromMonthYear4dTillMonthYear4dYear => "from_month_year4d_till_month_year4d_year",
    InLastIntUnit => "in_last_int_unit",
    LastUnit => "last_unit",
    LastIntDashIntUnit => "last_int_dash_int_unit",
    LastRangeUnit => "last_range_unit",
    MoreIntUnit => "more_int_unit",
    MoreNumUnit => "more_num_unit",
    AroundUnit => "around_unit",
    UnitRange => "unit_range",
    UnitInt => "unit_int",
    ZaUnit => "za_unit",
    IntUnit => "int_unit",
    NumUnit => "num_unit",
    IntYear => "int_year",
    IntTimesInUnit => "int_times_in_unit",
    NumTimesInUnit => "num_times_in_unit",
    PrepIntTimesInUnit => "prep_int_times_in_unit",
    PrepIntTimesInUnitDashIntUnit => "prep_int_times_in_unit_dash_int_unit",
    PrepNumTimesInUnit => "prep_num_times_in_unit",
    PrepIntTimesInRangeUnit => "prep_int_times_in_range_unit",
    IntTimesInRangeUnit => "int_times_in_range_unit",
    NumTimesInRangeUnit => "num_times_in_range_unit",
    RangeTimesInUnit => "range_times_in_unit",
    RangeInUnit => "range_in_unit",
    RangeTimesInIntUnit => "range_times_in_int_unit",
    RangeTimesInNumUnit => "range_times_in_num_unit",
    IntTimesInIntUnit => "int_times_in_int_unit",
    NumTimesInIntUnit => "num_times_in_int_unit",
    IntTimesInNumUnit => "int_times_in_num_unit",
    NumTimesInNumUnit => "num_times_in_num_unit",
    IntTimesInIntUnitDashIntUnit => "int_times_in_int_unit_dash_int_unit",
    BeforeIntInIntUnit => "before_int_in_int_unit",
    TimesInUnit => "times_in_unit",
    TimesInNumUnit => "times_in_num_unit",
    TimesInIntUnit => "times_in_int_unit",
    PrepSevTimesInUnit => "prep_sev_times_in_unit",
    Regular => "regular",
    IntUnitInUnit => "int_unit_in_unit",
    SevYears => "sev_years",
    FromTime => "from_time",
    InTime => "in_time",
    OnIntUnit => "on_int_unit",
    InPartYear4dPartYear4d => "in_part_year4d_part_year4d",
    Now => "now",
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The tokens a rule matched, one slot per pattern position.
///
/// A skipped optional position leaves its slot empty, so position `i` of
/// the pattern is always slot `i` here.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    slots: Vec<Option<&'a Token>>,
}

impl<'a> RuleMatch<'a> {
    pub fn new(slots: Vec<Option<&'a Token>>) -> Self {
        RuleMatch { slots }
    }

    /// Resolves token indices from a span alignment against the tree.
    pub fn from_alignment(tree: &'a DependencyTree, alignment: &[Option<usize>]) -> Self {
        RuleMatch {
            slots: alignment
                .iter()
                .map(|slot| slot.map(|index| tree.token(index)))
                .collect(),
        }
    }

    pub fn token(&self, pos: usize) -> Option<&'a Token> {
        self.slots.get(pos).copied().flatten()
    }

    /// Matched tokens in sentence order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a Token> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn text(&self, pos: usize) -> Option<&'a str> {
        self.token(pos).map(|token| token.text.as_str())
    }

    pub fn lemma(&self, pos: usize) -> Option<&'a str> {
        self.token(pos).map(|token| token.lemma.as_str())
    }

    fn lookup<T>(&self, pos: usize, table: impl Fn(&str) -> Option<T>) -> Option<T> {
        let lemma = self.lemma(pos)?;
        table(lemma).or_else(|| table(&lemma.to_lowercase()))
    }

    /// A token written in digits.
    pub fn int(&self, pos: usize) -> Option<u32> {
        let token = self.token(pos)?;
        if token.is_digit() {
            token.text.parse().ok()
        } else {
            None
        }
    }

    /// A numeral written out as a word: "трех" is 3.
    pub fn numeral(&self, pos: usize) -> Option<u32> {
        self.lookup(pos, lexicon::numeral_value)
    }

    /// First number of a range token: `1` in `1-10`.
    pub fn leading_int(&self, pos: usize) -> Option<u32> {
        numbers_in(self.text(pos)?).first().copied()
    }

    /// Last number of a range token: `10` in `1-10`.
    pub fn trailing_int(&self, pos: usize) -> Option<u32> {
        numbers_in(self.text(pos)?).last().copied()
    }

    /// `1,5` or `1.5`.
    pub fn float(&self, pos: usize) -> Option<f64> {
        self.text(pos)?.replace(',', ".").parse().ok()
    }

    pub fn month(&self, pos: usize) -> Option<u32> {
        self.lookup(pos, lexicon::month_number)
    }

    pub fn season(&self, pos: usize) -> Option<(u32, u32)> {
        self.lookup(pos, lexicon::season_anchor)
    }

    pub fn year_part(&self, pos: usize) -> Option<(u32, u32)> {
        self.lookup(pos, lexicon::year_part_anchor)
    }

    pub fn month_part(&self, pos: usize) -> Option<u32> {
        self.lookup(pos, lexicon::month_part_day)
    }

    pub fn daytime_offset(&self, pos: usize) -> Option<u32> {
        self.lookup(pos, lexicon::daytime_offset)
    }

    pub fn daytime_hour(&self, pos: usize) -> Option<u32> {
        self.lookup(pos, lexicon::daytime_hour)
    }

    pub fn days_back(&self, pos: usize) -> Option<i64> {
        self.lookup(pos, lexicon::days_back)
    }

    pub fn unit(&self, pos: usize) -> Option<CalendarUnit> {
        self.lookup(pos, CalendarUnit::from_lemma)
            .or_else(|| CalendarUnit::from_lemma(self.text(pos)?))
    }

    /// A four-digit year token.
    pub fn year(&self, pos: usize) -> Option<i32> {
        self.int(pos).map(|year| year as i32)
    }

    /// `31.12.1997` or `31.12.97`.
    pub fn date(&self, pos: usize) -> Option<NaiveDate> {
        match numbers_in(self.text(pos)?).as_slice() {
            &[day, month, year] => NaiveDate::from_ymd_opt(full_year(year), month, day),
            _ => None,
        }
    }

    /// `17.00`, `17-00` as `(hour, minute)`.
    pub fn clock(&self, pos: usize) -> Option<(u32, u32)> {
        match numbers_in(self.text(pos)?).as_slice() {
            &[hour, minute] if hour < 24 && minute < 60 => Some((hour, minute)),
            _ => None,
        }
    }

    /// `12.1998` or `12.98` as `(month, year)`.
    pub fn month_year(&self, pos: usize) -> Option<(u32, i32)> {
        match numbers_in(self.text(pos)?).as_slice() {
            &[month, year] => Some((month, full_year(year))),
            _ => None,
        }
    }

    /// `13.01` or `28.08.` as `(day, month)`.
    pub fn day_month(&self, pos: usize) -> Option<(u32, u32)> {
        match numbers_in(self.text(pos)?).as_slice() {
            &[day, month] => Some((day, month)),
            _ => None,
        }
    }
}

/// What a normalization function produces before uncertainty is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalValue {
    Instant(NaiveDateTime),
    Interval(NaiveDateTime, NaiveDateTime),
}

/// Granularity margin around a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uncertainty {
    /// The same margin on every endpoint.
    Symmetric(CalendarDelta),
    /// Separate margins for the start and the end of an interval.
    Split {
        start: CalendarDelta,
        end: CalendarDelta,
    },
}

impl Uncertainty {
    /// Margin on the start only; the open end sits on the observation date.
    pub fn since(start: CalendarDelta) -> Self {
        Uncertainty::Split {
            start,
            end: CalendarDelta::ZERO,
        }
    }

    pub fn start(&self) -> CalendarDelta {
        match *self {
            Uncertainty::Symmetric(delta) => delta,
            Uncertainty::Split { start, .. } => start,
        }
    }

    pub fn end(&self) -> CalendarDelta {
        match *self {
            Uncertainty::Symmetric(delta) => delta,
            Uncertainty::Split { end, .. } => end,
        }
    }
}

pub type NormalizeFn = fn(&RuleMatch<'_>, &ReferenceContext) -> Option<NormalValue>;
pub type UncertaintyFn = fn(&RuleMatch<'_>) -> Option<Uncertainty>;

#[derive(Clone, Copy)]
pub enum UncertaintyRule {
    None,
    Fixed(Uncertainty),
    /// Depends on the matched tokens, typically on the unit named.
    Computed(UncertaintyFn),
}

impl fmt::Debug for UncertaintyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncertaintyRule::None => f.write_str("None"),
            UncertaintyRule::Fixed(uncertainty) => f.debug_tuple("Fixed").field(uncertainty).finish(),
            UncertaintyRule::Computed(_) => f.write_str("Computed"),
        }
    }
}

/// One catalogue entry.
#[derive(Clone)]
pub struct GrammarRule {
    pub id: RuleId,
    pub stamp: Stamp,
    pub pattern: Vec<TokenPattern>,
    pub normalize: Option<NormalizeFn>,
    pub uncertainty: UncertaintyRule,
    /// Qualified by "около", "примерно", "более"...: the envelope widens.
    pub fuzzy: bool,
    /// Counts from the patient's birth date.
    pub needs_birth_date: bool,
}

impl fmt::Debug for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarRule")
            .field("id", &self.id)
            .field("stamp", &self.stamp)
            .field("pattern", &self.pattern)
            .field("normalize", &self.normalize.is_some())
            .field("uncertainty", &self.uncertainty)
            .field("fuzzy", &self.fuzzy)
            .field("needs_birth_date", &self.needs_birth_date)
            .finish()
    }
}

impl GrammarRule {
    pub fn new(id: RuleId, stamp: Stamp, pattern: Vec<TokenPattern>) -> Self {
        GrammarRule {
            id,
            stamp,
            pattern,
            normalize: None,
            uncertainty: UncertaintyRule::None,
            fuzzy: false,
            needs_birth_date: false,
        }
    }

    pub fn once(id: RuleId, pattern: Vec<TokenPattern>) -> Self {
        GrammarRule::new(id, Stamp::Once, pattern)
    }

    pub fn continuous(id: RuleId, pattern: Vec<TokenPattern>) -> Self {
        GrammarRule::new(id, Stamp::Continuous, pattern)
    }

    pub fn repeatable(id: RuleId, pattern: Vec<TokenPattern>) -> Self {
        GrammarRule::new(id, Stamp::Repeatable, pattern)
    }

    pub fn relative(id: RuleId, pattern: Vec<TokenPattern>) -> Self {
        GrammarRule::new(id, Stamp::Relative, pattern)
    }

    pub fn normalized_by(mut self, normalize: NormalizeFn) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Same margin on every endpoint.
    pub fn within(mut self, delta: CalendarDelta) -> Self {
        self.uncertainty = UncertaintyRule::Fixed(Uncertainty::Symmetric(delta));
        self
    }

    /// Margin on the start of a "since" interval, none on its end.
    pub fn within_since(mut self, start: CalendarDelta) -> Self {
        self.uncertainty = UncertaintyRule::Fixed(Uncertainty::since(start));
        self
    }

    pub fn within_computed(mut self, uncertainty: UncertaintyFn) -> Self {
        self.uncertainty = UncertaintyRule::Computed(uncertainty);
        self
    }

    pub fn fuzzy(mut self) -> Self {
        self.fuzzy = true;
        self
    }

    pub fn needs_birth_date(mut self) -> Self {
        self.needs_birth_date = true;
        self
    }

    pub fn uncertainty_for(&self, matched: &RuleMatch<'_>) -> Option<Uncertainty> {
        match self.uncertainty {
            UncertaintyRule::None => None,
            UncertaintyRule::Fixed(uncertainty) => Some(uncertainty),
            UncertaintyRule::Computed(compute) => compute(matched),
        }
    }

    /// Fewest tokens the pattern can match.
    pub fn min_len(&self) -> usize {
        self.pattern.iter().filter(|p| !p.optional).count()
    }

    pub fn max_len(&self) -> usize {
        self.pattern.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &id in RuleId::ALL {
            assert_eq!(RuleId::from_name(id.name()), Some(id));
        }
        assert_eq!(RuleId::from_name("r_date"), None);
    }

    #[test]
    fn names_are_snake_case() {
        for &id in RuleId::ALL {
            let name = id.name();
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{}",
                name
            );
            assert!(!name.ends_with('_') && !name.contains("__"), "{}", name);
        }
    }

    #[test]
    fn stamp_codes() {
        assert_eq!(Stamp::Once.code(), 1);
        assert_eq!(Stamp::Relative.code(), 4);
        assert!(Stamp::Continuous.is_resolvable());
        assert!(!Stamp::Repeatable.is_resolvable());
    }

    #[test]
    fn match_accessors() {
        let tokens = vec![
            Token::new(0, "1-10", "1-10", "NUM", 1, "nummod"),
            Token::new(1, "марта", "март", "NOUN", 1, "ROOT"),
            Token::new(2, "24.12.10", "24.12.10", "NUM", 1, "nmod"),
            Token::new(3, "1,5", "1,5", "NUM", 1, "nummod"),
        ];
        let matched = RuleMatch::new(vec![
            Some(&tokens[0]),
            Some(&tokens[1]),
            Some(&tokens[2]),
            None,
            Some(&tokens[3]),
        ]);

        assert_eq!(matched.leading_int(0), Some(1));
        assert_eq!(matched.trailing_int(0), Some(10));
        assert_eq!(matched.month(1), Some(3));
        assert_eq!(matched.date(2), NaiveDate::from_ymd_opt(2010, 12, 24));
        assert_eq!(matched.token(3), None);
        assert_eq!(matched.float(4), Some(1.5));
        assert_eq!(matched.tokens().count(), 4);
    }
}
