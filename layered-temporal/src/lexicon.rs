//! Closed word lists the grammar is built from.
//!
//! Lists are lemma-keyed: the parsing collaborator has already reduced
//! "марта" to "март" and "лет" to "год". A handful of abbreviations the
//! lemmatizer leaves alone ("мес", "ин", "ил") are listed verbatim.

pub const MONTH_LEMMAS: &[&str] = &[
    "январь", "февраль", "март", "апрель", "мая", "июнь", "июль", "август", "сентябрь", "октябрь",
    "ноябрь", "декабрь", "янв", "фев", "мар", "апр", "май", "ин", "ил", "авг", "сен", "окт",
    "нояб", "дек",
];

pub fn month_number(lemma: &str) -> Option<u32> {
    let month = match lemma {
        "январь" | "янв" => 1,
        "февраль" | "фев" => 2,
        "март" | "мар" => 3,
        "апрель" | "апр" => 4,
        "мая" | "май" => 5,
        "июнь" | "ин" => 6,
        "июль" | "ил" => 7,
        "август" | "авг" => 8,
        "сентябрь" | "сен" => 9,
        "октябрь" | "окт" => 10,
        "ноябрь" | "нояб" => 11,
        "декабрь" | "дек" => 12,
        _ => return None,
    };
    Some(month)
}

pub const SEASON_LEMMAS: &[&str] = &["лето", "зима", "весна", "осень"];

/// Mid-season `(month, day)`.
pub fn season_anchor(lemma: &str) -> Option<(u32, u32)> {
    match lemma {
        "зима" => Some((1, 15)),
        "весна" => Some((4, 15)),
        "лето" => Some((7, 15)),
        "осень" => Some((10, 15)),
        _ => None,
    }
}

/// "конец", "начало", "середина": end, beginning, middle.
pub const PART_LEMMAS: &[&str] = &["конец", "начало", "середина"];

/// `(month, day)` a part of a year points at.
pub fn year_part_anchor(lemma: &str) -> Option<(u32, u32)> {
    match lemma {
        "начало" => Some((2, 15)),
        "середина" => Some((7, 1)),
        "конец" => Some((11, 15)),
        _ => None,
    }
}

/// Day of month a part of a month points at.
pub fn month_part_day(lemma: &str) -> Option<u32> {
    match lemma {
        "начало" => Some(1),
        "середина" => Some(15),
        "конец" => Some(28),
        _ => None,
    }
}

pub const DAYTIME_LEMMAS: &[&str] = &["день", "утро", "вечер", "ночь"];

/// Hours added to a clock reading qualified by a part of the day
/// ("8 вечера" is 20:00).
pub fn daytime_offset(lemma: &str) -> Option<u32> {
    match lemma {
        "день" | "утро" | "ночь" => Some(0),
        "вечер" => Some(12),
        _ => None,
    }
}

/// Typical hour of a part of the day when no clock reading is given.
pub fn daytime_hour(lemma: &str) -> Option<u32> {
    match lemma {
        "утро" => Some(7),
        "день" => Some(12),
        "вечер" => Some(18),
        "ночь" => Some(3),
        _ => None,
    }
}

/// "сегодня", "вчера", "позавчера".
pub const DAY_EVENT_LEMMAS: &[&str] = &["сегодня", "вчера", "позавчера"];

/// Days between the observation date and the named day.
pub fn days_back(lemma: &str) -> Option<i64> {
    match lemma {
        "сегодня" => Some(0),
        "вчера" => Some(1),
        "позавчера" => Some(2),
        _ => None,
    }
}

pub const REGULAR_LEMMAS: &[&str] = &["ежедневно", "ежемесячно", "еженедельно", "ежегодно"];

pub const UNIT_LEMMAS: &[&str] = &["день", "час", "неделя", "год", "месяц", "сутки"];
pub const UNIT_OR_MINUTE_LEMMAS: &[&str] = &["день", "час", "неделя", "год", "месяц", "сутки", "минута"];
pub const UNIT_OR_MES_LEMMAS: &[&str] = &["день", "час", "неделя", "год", "месяц", "сутки", "мес"];
pub const SUB_YEAR_UNIT_LEMMAS: &[&str] = &["день", "час", "неделя", "месяц", "сутки"];

/// Every spelling of a unit seen after "раз в".
pub const TIME_UNIT_WORDS: &[&str] = &[
    "год", "месяц", "неделя", "день", "час", "полугод", "сутки", "мин", "лет", "г", "мес", "ч",
    "л", "г.", "полгода", "минута",
];

pub const NUMERAL_LEMMAS: &[&str] = &[
    "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять", "десять",
];

/// Value of a numeral written out as a word.
pub fn numeral_value(lemma: &str) -> Option<u32> {
    NUMERAL_LEMMAS
        .iter()
        .position(|&word| word == lemma)
        .map(|pos| pos as u32 + 1)
}

/// Qualifiers that make an expression approximate.
pub const FUZZY_LEMMAS: &[&str] = &["около", "примерно", "приблизительно", "почти", "где-то"];

/// Spellings of "times" in "2 раза в день".
pub const TIMES_WORDS: &[&str] = &["раза", "раз", "р"];

pub const DASHES: &[&str] = &["–", "-"];

/// "несколько" (several) counts as three.
pub const SEVERAL: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_lemma_resolves() {
        assert!(MONTH_LEMMAS.iter().all(|m| month_number(m).is_some()));
        assert!(SEASON_LEMMAS.iter().all(|s| season_anchor(s).is_some()));
        assert!(PART_LEMMAS.iter().all(|p| year_part_anchor(p).is_some() && month_part_day(p).is_some()));
        assert!(DAYTIME_LEMMAS.iter().all(|d| daytime_offset(d).is_some() && daytime_hour(d).is_some()));
        assert!(DAY_EVENT_LEMMAS.iter().all(|e| days_back(e).is_some()));
    }

    #[test]
    fn numerals() {
        assert_eq!(numeral_value("один"), Some(1));
        assert_eq!(numeral_value("семь"), Some(7));
        assert_eq!(numeral_value("десять"), Some(10));
        assert_eq!(numeral_value("много"), None);
    }

    #[test]
    fn month_spellings() {
        assert_eq!(month_number("мая"), Some(5));
        assert_eq!(month_number("май"), Some(5));
        assert_eq!(month_number("ин"), Some(6));
        assert_eq!(month_number("нояб"), Some(11));
        assert_eq!(month_number("год"), None);
    }
}
