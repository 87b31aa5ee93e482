//! Single points in time named by words: months, seasons, years, parts of
//! the day, "сегодня" and "вчера".

use super::*;
use crate::lexicon::{
    DASHES, DAYTIME_LEMMAS, DAY_EVENT_LEMMAS, FUZZY_LEMMAS, MONTH_LEMMAS, PART_LEMMAS,
    SEASON_LEMMAS,
};
use crate::pattern::*;
use std::convert::TryFrom;

const HALF_SEASON: CalendarDelta = CalendarDelta::days(45);
const HALF_MONTH: CalendarDelta = CalendarDelta::days(15);

fn month() -> TokenPattern {
    lemma_in(MONTH_LEMMAS)
}

fn daytime() -> TokenPattern {
    lemma_in(DAYTIME_LEMMAS)
}

fn event() -> TokenPattern {
    lemma_in(DAY_EVENT_LEMMAS)
}

pub(super) fn rules() -> Vec<GrammarRule> {
    let mut rules = clock_rules();
    rules.extend(calendar_rules());
    rules.extend(daytime_rules());
    rules.extend(event_rules());
    rules
}

fn clock_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(
            RuleId::InTimeShortdate,
            vec![lemma("в"), regex(&TIME), regex(&SHORT_DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(2), m.clock(1))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::ShortdateInTime,
            vec![regex(&SHORT_DATE), lemma("в"), regex(&TIME)],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(0), m.clock(2))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::DateInTime, vec![regex(&DATE), lemma("в"), regex(&TIME)])
            .normalized_by(|m, _| instant(clock_on(m.date(0), m.clock(2))))
            .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::ShortdateAroundTime,
            vec![regex(&SHORT_DATE), lemma("около"), regex(&TIME)],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(0), m.clock(2))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::DateAroundTime,
            vec![regex(&DATE), lemma("около"), regex(&TIME)],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(0), m.clock(2))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::DateYearAroundTime,
            vec![
                regex(&DATE),
                year_word(),
                lemma_in(FUZZY_LEMMAS),
                lemma("в"),
                regex(&TIME),
            ],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(0), m.clock(4))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
    ]
}

fn calendar_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(RuleId::Year4dYear, vec![regex(&YEAR), year_word().optional()])
            .normalized_by(|m, _| instant(mid_year(m.year(0))))
            .within(CalendarDelta::YEAR),
        // The clock reading is too fine for a whole year and is dropped.
        GrammarRule::once(
            RuleId::Year4dYearInTime,
            vec![
                regex(&YEAR),
                year_word(),
                lemma("в"),
                regex(&TIME),
                lemma("час").optional(),
            ],
        )
        .normalized_by(|m, _| instant(mid_year(m.year(0))))
        .within(CalendarDelta::YEAR),
        GrammarRule::once(
            RuleId::InYear4dYear,
            vec![lemma_in(&["в", "от"]), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_year(m.year(1))))
        .within(CalendarDelta::YEAR),
        GrammarRule::once(
            RuleId::InYear4dYearA,
            vec![lemma("в"), regex(&YEAR), text("г")],
        )
        .normalized_by(|m, _| instant(mid_year(m.year(1))))
        .within(CalendarDelta::YEAR),
        GrammarRule::once(
            RuleId::InYearpartYear4d,
            vec![lemma("в"), lemma_in(PART_LEMMAS), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(anchored(m.year(2), m.year_part(1))))
        .within(HALF_SEASON),
        GrammarRule::once(
            RuleId::YearpartYear4d,
            vec![lemma_in(PART_LEMMAS), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(anchored(m.year(1), m.year_part(0))))
        .within(HALF_SEASON),
        // "в марте-апреле 2010 года" points at the later month.
        GrammarRule::once(
            RuleId::MonthDashMonthYear4dYear,
            vec![
                lemma("в"),
                month(),
                text_in(DASHES),
                month(),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(3), m.year(4))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::MonthAndMonthYear4dYear,
            vec![
                lemma("в"),
                month(),
                text("и"),
                month(),
                regex(&YEAR),
                year_word(),
            ],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(3), m.year(4))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::MonthYear4dYear,
            vec![month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(0), m.year(1))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::InMonthYear4dYear,
            vec![lemma("в"), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(1), m.year(2))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::RangeMonthYear4dYear,
            vec![regex(&RANGE), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(ymd(m.year(2), m.month(1), m.leading_int(0))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::OtMonthYear4dYear,
            vec![lemma("от"), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(mid_month(m.month(1), m.year(2))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::SeasonYear4dYear,
            vec![lemma_in(SEASON_LEMMAS), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(anchored(m.year(1), m.season(0))))
        .within(HALF_SEASON),
        GrammarRule::once(
            RuleId::IntMonthYear4dYear,
            vec![digit(), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(ymd(m.year(2), m.month(1), m.int(0))))
        .within(CalendarDelta::DAY),
        GrammarRule::once(RuleId::IntMonth, vec![digit(), month()])
            .normalized_by(|m, ctx| instant(ymd(Some(ctx.year()), m.month(1), m.int(0))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::InMonthpartMonthYear4d,
            vec![
                lemma("в"),
                lemma_in(PART_LEMMAS),
                month(),
                regex(&YEAR),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| instant(ymd(m.year(3), m.month(2), m.month_part(1))))
        .within(HALF_MONTH),
        GrammarRule::once(
            RuleId::MonthpartMonthYear4d,
            vec![lemma_in(PART_LEMMAS), month(), regex(&YEAR), year_word().optional()],
        )
        .normalized_by(|m, _| instant(ymd(m.year(2), m.month(1), m.month_part(0))))
        .within(HALF_MONTH),
    ]
}

fn daytime_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(
            RuleId::AroundIntHourDaytimeDate,
            vec![
                lemma("около"),
                digit(),
                lemma("час"),
                daytime(),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(4), shifted_hour(m.int(1), m.daytime_offset(3))))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::IntHDaytimeDate,
            vec![digit(), text("ч"), daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(3), shifted_hour(m.int(0), m.daytime_offset(2))))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundIntHDaytimeDate,
            vec![
                lemma("около"),
                digit(),
                text("ч"),
                daytime(),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(4), shifted_hour(m.int(1), m.daytime_offset(3))))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::IntHourDaytimeDate,
            vec![digit(), lemma("час"), daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(3), shifted_hour(m.int(0), m.daytime_offset(2))))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundIntDaytimeDate,
            vec![lemma("около"), digit(), daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(3), shifted_hour(m.int(1), m.daytime_offset(2))))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::IntDaytimeDate,
            vec![digit(), daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(2), shifted_hour(m.int(0), m.daytime_offset(1))))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::InIntHDaytime,
            vec![lemma("в"), digit(), text("ч"), daytime()],
        )
        .normalized_by(|m, ctx| {
            instant(hour_on(Some(ctx.today()), shifted_hour(m.int(1), m.daytime_offset(3))))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::IntHDaytime, vec![digit(), text("ч"), daytime()])
            .normalized_by(|m, ctx| {
                instant(hour_on(Some(ctx.today()), shifted_hour(m.int(0), m.daytime_offset(2))))
            })
            .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::IntHourDaytime, vec![digit(), lemma("час"), daytime()])
            .normalized_by(|m, ctx| {
                instant(hour_on(Some(ctx.today()), shifted_hour(m.int(0), m.daytime_offset(2))))
            })
            .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::DaytimeDate,
            vec![daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(hour_on(m.date(1), m.daytime_hour(0))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::DateDaytime, vec![regex(&DATE), daytime()])
            .normalized_by(|m, _| instant(hour_on(m.date(0), m.daytime_hour(1))))
            .within(CalendarDelta::HOUR),
        GrammarRule::once(RuleId::ShortdateDaytime, vec![regex(&SHORT_DATE), daytime()])
            .normalized_by(|m, _| instant(hour_on(m.date(0), m.daytime_hour(1))))
            .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::TimeDaytimeDate,
            vec![regex(&TIME), daytime(), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| {
            let offset = i64::from(m.daytime_offset(1)?);
            instant(CalendarDelta::hours(offset).add_to(clock_on(m.date(2), m.clock(0))?))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundTimeDaytimeDate,
            vec![
                lemma("около"),
                regex(&TIME),
                daytime(),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| {
            let offset = i64::from(m.daytime_offset(2)?);
            instant(CalendarDelta::hours(offset).add_to(clock_on(m.date(3), m.clock(1))?))
        })
        .within(CalendarDelta::hours(2))
        .fuzzy(),
        GrammarRule::once(
            RuleId::DateInTimeDaytime,
            vec![
                regex(&DATE),
                year_word(),
                text("в"),
                digit(),
                lemma("час"),
                daytime(),
            ],
        )
        .normalized_by(|m, _| {
            instant(hour_on(m.date(0), shifted_hour(m.int(3), m.daytime_offset(5))))
        })
        .within(CalendarDelta::HOUR),
    ]
}

fn event_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::once(
            RuleId::EventTime,
            vec![event(), text("в"), regex(&TIME_LOOSE)],
        )
        .normalized_by(|m, ctx| instant(clock_on(event_day(ctx, m.days_back(0)), m.clock(2))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::EventAroundTime,
            vec![event(), text("около"), regex(&TIME), lemma("час").optional()],
        )
        .normalized_by(|m, ctx| instant(clock_on(event_day(ctx, m.days_back(0)), m.clock(2))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        // "вчера" alone: midday of that day.
        GrammarRule::once(RuleId::Event, vec![event()])
            .normalized_by(|m, ctx| instant(hour_on(event_day(ctx, m.days_back(0)), Some(12))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::InMonth,
            vec![lemma("в"), month(), lemma("месяц").optional()],
        )
        .normalized_by(|m, ctx| instant(mid_month(m.month(1), Some(ctx.year()))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::EventInTimeDaytime,
            vec![event(), text("в"), digit(), lemma("час"), daytime()],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(4));
            instant(hour_on(event_day(ctx, m.days_back(0)), hour))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::EventAroundTimeDaytime,
            vec![event(), text("около"), digit(), lemma("час"), daytime()],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(4));
            instant(hour_on(event_day(ctx, m.days_back(0)), hour))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::EventInTimeDaytimeA,
            vec![event(), text("в"), digit(), text("ч"), daytime()],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(4));
            instant(hour_on(event_day(ctx, m.days_back(0)), hour))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::EventAroundTimeDaytimeA,
            vec![event(), text("около"), digit(), text("ч"), daytime()],
        )
        .normalized_by(|m, ctx| {
            let hour = shifted_hour(m.int(2), m.daytime_offset(4));
            instant(hour_on(event_day(ctx, m.days_back(0)), hour))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::InTimeDaytime,
            vec![lemma("в"), digit(), lemma("час"), daytime()],
        )
        .normalized_by(|m, ctx| {
            instant(hour_on(Some(ctx.today()), shifted_hour(m.int(1), m.daytime_offset(3))))
        })
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundTimeDaytime,
            vec![lemma("около"), digit(), lemma("час"), daytime()],
        )
        .normalized_by(|m, ctx| {
            instant(hour_on(Some(ctx.today()), shifted_hour(m.int(1), m.daytime_offset(3))))
        })
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(
            RuleId::TimeHDate,
            vec![regex(&TIME), lemma("час"), regex(&DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(2), m.clock(0))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::AroundTimeHDate,
            vec![
                lemma("около"),
                regex(&TIME),
                lemma("час"),
                regex(&DATE),
                year_word().optional(),
            ],
        )
        .normalized_by(|m, _| instant(clock_on(m.date(3), m.clock(1))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
        GrammarRule::once(RuleId::Month, vec![month()])
            .normalized_by(|m, ctx| instant(mid_month(m.month(0), Some(ctx.year()))))
            .within(CalendarDelta::MONTH),
        GrammarRule::once(
            RuleId::OtDayDashDate,
            vec![lemma("от"), regex(&DAY_RANGE_DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(range_end_date(m, 1)))
        .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::OtDayDashShortdate,
            vec![lemma("от"), regex(&DAY_RANGE_SHORT_DATE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(range_end_date(m, 1)))
        .within(CalendarDelta::DAY),
        // "в 90 годах": the middle of the decade.
        GrammarRule::once(
            RuleId::InDecade,
            vec![lemma("в"), digit(), text_in(&["годах", "годы"])],
        )
        .normalized_by(|m, _| {
            let decade = i32::try_from(m.int(1)?).ok()?;
            let start = if decade < 100 { 1900 + decade } else { decade };
            instant(mid_year(start.checked_add(5)))
        })
        .within(CalendarDelta::years(5)),
        GrammarRule::once(
            RuleId::InMonthYear,
            vec![lemma("в"), regex(&MONTH_YEAR4_LOOSE), year_word().optional()],
        )
        .normalized_by(|m, _| instant(month_of_year(m.month_year(1))))
        .within(CalendarDelta::MONTH),
        GrammarRule::once(RuleId::DayMonth, vec![regex(&DAY_MONTH_TRAILING)])
            .normalized_by(|m, ctx| instant(day_month_in(m.day_month(0), Some(ctx.year()))))
            .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::OtDayMonth,
            vec![lemma("от"), regex(&DAY_MONTH_TRAILING)],
        )
        .normalized_by(|m, ctx| instant(day_month_in(m.day_month(1), Some(ctx.year()))))
        .within(CalendarDelta::DAY),
        GrammarRule::once(
            RuleId::EventFromTime,
            vec![event(), text("с"), regex(&TIME_LOOSE)],
        )
        .normalized_by(|m, ctx| instant(clock_on(event_day(ctx, m.days_back(0)), m.clock(2))))
        .within(CalendarDelta::HOUR),
        GrammarRule::once(
            RuleId::EventShortdateAroundTime,
            vec![
                event(),
                regex(&SHORT_DATE),
                lemma("около"),
                digit(),
                lemma_in(&["час", "часть"]).optional(),
            ],
        )
        .normalized_by(|m, _| instant(hour_on(m.date(1), m.int(3))))
        .within(CalendarDelta::HOUR)
        .fuzzy(),
    ]
}
