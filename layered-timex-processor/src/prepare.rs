//! Tidying raw sentence text before it goes to the dependency parser.
//!
//! Clinical notes glue numbers to words, mix date separators and run date
//! ranges together ("6.12-10.12.2010"). The parser tokenizes such text badly,
//! and the grammar only recognises dates and clock times written with dots,
//! so the text is rewritten into that shape first.

use once_cell::sync::Lazy;
use regex::Regex;

const DAY: &str = r"(?:[12][0-9]|3[01]|0?[1-9])";
const MONTH: &str = r"(?:10|11|12|0[1-9])";
const YEAR4: &str = r"(?:19[1-9][0-9]|20[0-9][0-9])";
const YEAR2: &str = r"(?:\d\d)";
const HOUR: &str = r"(?:[01][0-9]|2[0-3]|[0-9])";
const MINUTE: &str = r"(?:[0-5][0-9])";

struct Rewrite {
    regex: Regex,
    replacement: String,
}

fn rewrite(pattern: String, replacement: &str) -> Rewrite {
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("rewrite {:?} is invalid: {}", pattern, err),
    };
    Rewrite {
        regex,
        replacement: replacement.to_string(),
    }
}

/// Applied in order; later rewrites rely on the spacing earlier ones leave.
static REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    let year = format!("(?:{}|{})", YEAR4, YEAR2);
    vec![
        // Runs of separators
        rewrite(r"-+".into(), "-"),
        rewrite(r"\s+".into(), " "),
        rewrite(r",+".into(), ","),
        rewrite(r"\.+".into(), "."),
        rewrite(r":+".into(), ":"),
        // Glued words and numbers
        rewrite(r"([А-Яа-яЁё\d])([-–,])([А-Яа-яЁё])".into(), "${1} ${2} ${3}"),
        rewrite(r"([А-Яа-яЁё])(\d)".into(), "${1} ${2}"),
        rewrite(r"(\d)([А-Яа-яЁё])".into(), "${1} ${2}"),
        rewrite(r"г\.(\w)".into(), "г ${1}"),
        // "90-х годах": the decade suffix
        rewrite(r"- х".into(), ""),
        rewrite(r" х ".into(), " "),
        rewrite(r"((?:19|20)\d\d),".into(), "${1} , "),
        rewrite(r"([А-Яа-яЁё])\.([А-Яа-яЁё\d])".into(), "${1} . ${2}"),
        // A patient's age is not a date
        rewrite(r"([Пп]ациент(?:ка)?) \d+ лет".into(), "${1}"),
        // Dashes and punctuation pairs
        rewrite(r"–".into(), "-"),
        rewrite(r"\.:".into(), ". :"),
        rewrite(r"\.-".into(), "-"),
        rewrite(r"\.,".into(), ". , "),
        rewrite(r"(\w)- ".into(), "${1} - "),
        rewrite(r" -(\w)".into(), " - ${1}"),
        rewrite(format!(r"({}[./-]{}[./-]{})-", DAY, MONTH, YEAR4), "${1} "),
        rewrite(r"(\D),(\d)".into(), "${1} , ${2}"),
        rewrite(r"\sг\.,\s".into(), " г , "),
        rewrite(r"г\.([\s\w])".into(), "г ${1}"),
        // Date ranges: "6.12-10.12.2010", "16.07.12-23.07.2012", "10-13.09.2011"
        rewrite(
            format!(r"({d}[./]{m})\.?[-–]({d}[./]{m}[./]{y})", d = DAY, m = MONTH, y = year),
            "${1} - ${2}",
        ),
        rewrite(
            format!(
                r"({d}[./,-]{m}[./,-]{y2})[-–]({d}[./,-]{m}[./,-]{y})",
                d = DAY,
                m = MONTH,
                y2 = YEAR2,
                y = year
            ),
            "${1} - ${2}",
        ),
        rewrite(
            format!(r"({d})[-–]({d}[./,-]{m}[./,-]{y})", d = DAY, m = MONTH, y = year),
            "${1} - ${2}",
        ),
        // Dots as the only date and clock separator
        rewrite(format!(r"({})[-./,]({})[-./,]({})", DAY, MONTH, YEAR4), "${1}.${2}.${3}"),
        rewrite(format!(r"({})[-./,]({})[-./,]({})", DAY, MONTH, YEAR2), "${1}.${2}.${3}"),
        rewrite(format!(r"({})[./]({})", MONTH, YEAR4), "${1}.${2}"),
        rewrite(format!(r"({}):({})", HOUR, MINUTE), "${1}.${2}"),
        rewrite(r"\s+".into(), " "),
    ]
});

/// Rewrites `sentence` into the shape the parser and grammar expect, ending
/// with a full stop.
pub fn prepare_sentence(sentence: &str) -> String {
    let mut text = sentence.to_string();
    for rewrite in REWRITES.iter() {
        text = rewrite
            .regex
            .replace_all(&text, rewrite.replacement.as_str())
            .into_owned();
    }
    ensure_final_period(text.trim())
}

/// Appends ` .` unless the sentence already ends with a full stop.
pub fn ensure_final_period(sentence: &str) -> String {
    let sentence = sentence.trim_end();
    if sentence.is_empty() || sentence.ends_with('.') {
        sentence.to_string()
    } else {
        format!("{} .", sentence)
    }
}
