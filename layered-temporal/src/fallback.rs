//! Generic parsers for expressions no rule could place.
//!
//! They work on the text of a span after [`prepare`] has reduced it to the
//! words that carry a date, and are tried in a fixed order by [`resolve`]:
//! a natural-language reader, a scanner for dates written in digits, then a
//! reader for "N units" taken as "N units ago".

use chrono::{Duration, NaiveDate, NaiveDateTime};
use layered_timex::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::calendar::{self, full_year, CalendarDelta, CalendarUnit};
use crate::context::ReferenceContext;
use crate::lexicon;
use crate::normalizer::Resolver;
use crate::pattern::compile;

/// Prepositions and verbs carry no date.
const SKIPPED_POS: &[&str] = &["ADP", "VERB", "AUX"];
/// Dropped unless a number precedes them: "2010 года" reads as "2010".
const STOP_LEMMAS: &[&str] = &["год", "месяц", "день"];
/// Parts of the day kept in their written form ("вечером").
const SURFACE_DAYTIMES: &[&str] = &["утро", "вечер", "ночь"];

/// Reduces span tokens to the text the fallback parsers read.
///
/// Numbers keep their written form, parts of the day keep their inflected
/// form, and every other word is replaced by its lemma.
pub fn prepare<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut words = Vec::new();
    let mut after_number = false;

    for token in tokens {
        let lemma = token.lemma.to_lowercase();
        let number = token.is_digit() || token.has_pos(&["NUM"]);
        let keep = if token.has_pos(SKIPPED_POS) {
            false
        } else if STOP_LEMMAS.contains(&lemma.as_str()) {
            after_number
        } else {
            true
        };
        after_number = number;
        if !keep {
            continue;
        }

        if token.text.chars().any(|c| c.is_ascii_digit())
            || SURFACE_DAYTIMES.contains(&lemma.as_str())
        {
            words.push(token.text.to_lowercase());
        } else {
            words.push(lemma);
        }
    }

    words.join(" ")
}

/// The first parser to find something wins.
pub fn resolve(text: &str, ctx: &ReferenceContext) -> Option<(NaiveDateTime, Resolver)> {
    if text.trim().is_empty() {
        return None;
    }
    natural_language(text, ctx)
        .map(|at| (at, Resolver::NaturalLanguage))
        .or_else(|| date_search(text, ctx).map(|at| (at, Resolver::DateSearch)))
        .or_else(|| relative_duration(text, ctx).map(|at| (at, Resolver::RelativeDuration)))
}

/// Named days and months: "вчера вечером", "5 май 2010", "март".
///
/// A month without a day means its first day; without a year, the
/// observation's year.
pub fn natural_language(text: &str, ctx: &ReferenceContext) -> Option<NaiveDateTime> {
    let words: Vec<&str> = text.unicode_words().collect();
    let mut named_day = None;
    let mut month = None;
    let mut hour = None;

    for (i, word) in words.iter().enumerate() {
        if let Some(back) = days_back(word) {
            named_day = ctx.today().checked_sub_signed(Duration::days(back));
        } else if let Some(number) = lexicon::month_number(word) {
            month = Some((i, number));
        } else if let Some(at) = daytime_hour(word) {
            hour = Some(at);
        }
    }

    let date = match month {
        Some((i, number)) => {
            let day = i
                .checked_sub(1)
                .and_then(|before| words[before].parse::<u32>().ok())
                .filter(|day| (1..=31).contains(day))
                .unwrap_or(1);
            let year = words
                .get(i + 1)
                .and_then(|after| after.parse::<u32>().ok())
                .map(full_year)
                .unwrap_or_else(|| ctx.year());
            NaiveDate::from_ymd_opt(year, number, day)?
        }
        None => named_day?,
    };
    date.and_hms_opt(hour.unwrap_or(0), 0, 0)
}

fn days_back(word: &str) -> Option<i64> {
    match word {
        "завтра" => Some(-1),
        "сегодняшний" => Some(0),
        _ => lexicon::days_back(word),
    }
}

fn daytime_hour(word: &str) -> Option<u32> {
    const STEMS: &[(&str, &str)] = &[("утр", "утро"), ("веч", "вечер"), ("ноч", "ночь"), ("дн", "день")];
    STEMS
        .iter()
        .find(|(stem, _)| word.starts_with(stem))
        .and_then(|(_, lemma)| lexicon::daytime_hour(lemma))
}

static FULL_DATE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(\d{1,2})[./](\d{1,2})[./](\d{4}|\d{2})\b".to_string(),
        "FULL_DATE",
    )
});
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(\d{1,2})[./](\d{4})\b".to_string(), "MONTH_YEAR"));
static CLOCK: Lazy<Regex> =
    Lazy::new(|| compile(r"\b([01]?\d|2[0-3])[.:]([0-5]\d)\b".to_string(), "CLOCK"));
static BARE_YEAR: Lazy<Regex> =
    Lazy::new(|| compile(r"\b((?:19|20)\d{2})\b".to_string(), "BARE_YEAR"));

/// Dates written in digits anywhere in the text.
///
/// Tried from the most to the least specific shape: `d.m.y`, `m.yyyy` (its
/// first day), a clock reading on the observation date, a bare year (its
/// 1 July).
pub fn date_search(text: &str, ctx: &ReferenceContext) -> Option<NaiveDateTime> {
    if let Some(found) = FULL_DATE.captures(text) {
        let (day, month, year) = (number(&found, 1)?, number(&found, 2)?, number(&found, 3)?);
        return calendar::midnight(full_year(year), month, day);
    }
    if let Some(found) = MONTH_YEAR.captures(text) {
        return calendar::midnight(number(&found, 2)? as i32, number(&found, 1)?, 1);
    }
    if let Some(found) = CLOCK.captures(text) {
        return calendar::at_time(ctx.today(), number(&found, 1)?, number(&found, 2)?);
    }
    let found = BARE_YEAR.captures(text)?;
    calendar::midnight(number(&found, 1)? as i32, 7, 1)
}

fn number(captures: &regex::Captures<'_>, group: usize) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

/// No look-back in a clinical history runs to more units than this.
const MAX_AMOUNT: f64 = 10_000.0;

/// "N units", read as that long before the observation.
pub fn relative_duration(text: &str, ctx: &ReferenceContext) -> Option<NaiveDateTime> {
    let words: Vec<&str> = text.unicode_words().collect();
    for (i, word) in words.iter().enumerate() {
        if matches!(*word, "полгода" | "полугод") {
            return CalendarDelta::HALF_YEAR.sub_from(ctx.observation);
        }
        let unit = match CalendarUnit::from_lemma(word) {
            Some(unit) => unit,
            None => continue,
        };
        let count = match i.checked_sub(1).and_then(|before| amount(words[before])) {
            Some(count) if count > MAX_AMOUNT => return None,
            Some(count) => count,
            None => 1.0,
        };
        return unit.fractional(count).sub_from(ctx.observation);
    }
    None
}

fn amount(word: &str) -> Option<f64> {
    let value = match word {
        "несколько" => f64::from(lexicon::SEVERAL),
        "пол" => 0.5,
        _ => match word.replace(',', ".").parse::<f64>() {
            Ok(value) => value,
            Err(_) => f64::from(lexicon::numeral_value(word)?),
        },
    };
    Some(value).filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ReferenceContext {
        ReferenceContext::new(calendar::midnight(2020, 6, 15).unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn token(text: &str, lemma: &str, pos: &str) -> Token {
        Token::new(0, text, lemma, pos, 0, "dep")
    }

    #[test]
    fn preparation() {
        let tokens = vec![
            token("с", "с", "ADP"),
            token("вечера", "вечер", "NOUN"),
            token("17.12.2010", "17.12.2010", "NUM"),
            token("года", "год", "NOUN"),
            token("было", "быть", "AUX"),
        ];
        assert_eq!(prepare(&tokens), "вечера 17.12.2010 год");

        let tokens = vec![token("в", "в", "ADP"), token("мае", "май", "NOUN"), token("месяце", "месяц", "NOUN")];
        assert_eq!(prepare(&tokens), "май");

        let tokens = vec![token("трех", "три", "NUM"), token("лет", "год", "NOUN")];
        assert_eq!(prepare(&tokens), "три год");
    }

    #[test]
    fn natural_language_prefers_first_day() {
        assert_eq!(natural_language("март", &ctx()), Some(at(2020, 3, 1, 0, 0)));
        assert_eq!(natural_language("5 май 2010", &ctx()), Some(at(2010, 5, 5, 0, 0)));
        assert_eq!(natural_language("вчера вечером", &ctx()), Some(at(2020, 6, 14, 18, 0)));
        assert_eq!(natural_language("несколько год", &ctx()), None);
    }

    #[test]
    fn date_search_shapes() {
        assert_eq!(date_search("17.12.2010 года", &ctx()), Some(at(2010, 12, 17, 0, 0)));
        assert_eq!(date_search("1/2/98", &ctx()), Some(at(1998, 2, 1, 0, 0)));
        assert_eq!(date_search("12.2010", &ctx()), Some(at(2010, 12, 1, 0, 0)));
        assert_eq!(date_search("17.30", &ctx()), Some(at(2020, 6, 15, 17, 30)));
        assert_eq!(date_search("зима 1999", &ctx()), Some(at(1999, 7, 1, 0, 0)));
        assert_eq!(date_search("давно", &ctx()), None);
    }

    #[test]
    fn relative_durations_look_back() {
        assert_eq!(relative_duration("три год", &ctx()), Some(at(2017, 6, 15, 0, 0)));
        assert_eq!(relative_duration("несколько месяц", &ctx()), Some(at(2020, 3, 15, 0, 0)));
        assert_eq!(relative_duration("1,5 год", &ctx()), Some(at(2018, 12, 15, 0, 0)));
        assert_eq!(relative_duration("неделя", &ctx()), Some(at(2020, 6, 8, 0, 0)));
        assert_eq!(relative_duration("полгода", &ctx()), Some(at(2019, 12, 15, 0, 0)));
    }

    #[test]
    fn absurd_counts_find_nothing() {
        assert_eq!(relative_duration("999999999999 день назад", &ctx()), None);
        assert_eq!(relative_duration("1e300 неделя", &ctx()), None);
        assert_eq!(resolve("999999999999 день назад", &ctx()), None);
    }

    #[test]
    fn resolution_order() {
        assert_eq!(
            resolve("вчера 17.12.2010", &ctx()),
            Some((at(2020, 6, 14, 0, 0), Resolver::NaturalLanguage))
        );
        assert_eq!(
            resolve("9.00", &ctx()),
            Some((at(2020, 6, 15, 9, 0), Resolver::DateSearch))
        );
        assert_eq!(
            resolve("два неделя", &ctx()),
            Some((at(2020, 6, 1, 0, 0), Resolver::RelativeDuration))
        );
        assert_eq!(resolve("", &ctx()), None);
    }
}
