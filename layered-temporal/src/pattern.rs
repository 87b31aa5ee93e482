//! Token constraints a grammar rule is assembled from.
//!
//! A rule pattern is a sequence of [`TokenPattern`]s. Each one tests a single
//! token; an optional one may also be skipped without consuming a token.

use layered_timex::Token;
use once_cell::sync::Lazy;
use regex::Regex;

// Building blocks shared by the token regexes below. Inside `^X.Y$` shapes
// the `.` is deliberately any character: parsers split "24.12" and "24-12"
// alike, and both spellings are dates.
const DAY: &str = r"(?:[12][0-9]|3[01]|0?[1-9])";
const MONTH: &str = r"(?:10|11|12|0[1-9])";
const YEAR4: &str = r"(?:19[1-9][0-9]|20[0-9][0-9])";
const YEAR2: &str = r"(?:\d\d)";
const HOUR: &str = r"(?:[01][0-9]|2[0-3]|[0-9])";
const MINUTE: &str = r"(?:[0-5][0-9])";

pub(crate) fn compile(pattern: String, name: &str) -> Regex {
    match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("{} regex is invalid: {}", name, err),
    }
}

/// `31.12.1997`, `31/12/1997`
pub static DATE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[./,]{}[./,]{}$", DAY, MONTH, YEAR4), "DATE"));
/// `31.12.97`
pub static SHORT_DATE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[./,]{}[./,]{}$", DAY, MONTH, YEAR2), "SHORT_DATE"));
/// `12.1998`
pub static MONTH_YEAR4: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[./]{}$", MONTH, YEAR4), "MONTH_YEAR4"));
/// `12.98`
pub static MONTH_YEAR2: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[./]{}$", MONTH, YEAR2), "MONTH_YEAR2"));
/// `12.2013` with any separator.
pub static MONTH_YEAR4_LOOSE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}.{}$", MONTH, YEAR4), "MONTH_YEAR4_LOOSE"));
/// `02.98` with any separator.
pub static MONTH_YEAR2_LOOSE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}.{}$", MONTH, YEAR2), "MONTH_YEAR2_LOOSE"));
/// `13.01`
pub static DAY_MONTH: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[.]{}$", DAY, MONTH), "DAY_MONTH"));
/// `29.12` with any separator.
pub static DAY_MONTH_LOOSE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}.{}$", DAY, MONTH), "DAY_MONTH_LOOSE"));
/// `28.08.`
pub static DAY_MONTH_TRAILING: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}.{}.$", DAY, MONTH), "DAY_MONTH_TRAILING"));
/// `12.00`, `17-00`, `7:30`
pub static TIME: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}[-.:]{}$", HOUR, MINUTE), "TIME"));
/// `16.00` with any separator.
pub static TIME_LOOSE: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}.{}$", HOUR, MINUTE), "TIME_LOOSE"));
/// `23-00`
pub static TIME_DASH: Lazy<Regex> =
    Lazy::new(|| compile(format!(r"^{}-{}$", HOUR, MINUTE), "TIME_DASH"));
/// `2005`
pub static YEAR: Lazy<Regex> = Lazy::new(|| compile(format!(r"^{}$", YEAR4), "YEAR"));
/// `24-25.11.2010`
pub static DAY_RANGE_DATE: Lazy<Regex> = Lazy::new(|| {
    compile(
        format!(r"^{}[-–]{}.{}.{}$", DAY, DAY, MONTH, YEAR4),
        "DAY_RANGE_DATE",
    )
});
/// `10-13.09.11`
pub static DAY_RANGE_SHORT_DATE: Lazy<Regex> = Lazy::new(|| {
    compile(
        format!(r"^{}[-–]{}.{}.{}$", DAY, DAY, MONTH, YEAR2),
        "DAY_RANGE_SHORT_DATE",
    )
});
/// A digit, a dash, a digit, anywhere in the token: `1-10`, `2–3`.
pub static RANGE: Lazy<Regex> = Lazy::new(|| compile(r"\d[-–]\d".to_string(), "RANGE"));
/// `1,5`, `1.5`
pub static FLOAT: Lazy<Regex> = Lazy::new(|| compile(r"^\d[.,]\d$".to_string(), "FLOAT"));
/// Exactly two digits, an age like `71`.
pub static TWO_DIGITS: Lazy<Regex> = Lazy::new(|| compile(r"^\d\d$".to_string(), "TWO_DIGITS"));

/// A test applied to one token.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Surface text, exactly.
    Text(&'static str),
    TextIn(&'static [&'static str]),
    /// Surface text, ignoring case.
    Caseless(&'static str),
    Lemma(&'static str),
    LemmaIn(&'static [&'static str]),
    /// Coarse part of speech.
    PosIn(&'static [&'static str]),
    Regex(&'static Lazy<Regex>),
    /// All ASCII digits.
    Digit,
}

impl Constraint {
    pub fn matches(&self, token: &Token) -> bool {
        match *self {
            Constraint::Text(text) => token.text == text,
            Constraint::TextIn(texts) => texts.contains(&token.text.as_str()),
            Constraint::Caseless(text) => token.text.to_lowercase() == text,
            Constraint::Lemma(lemma) => lemma_is(token, lemma),
            Constraint::LemmaIn(lemmas) => lemmas.iter().any(|lemma| lemma_is(token, lemma)),
            Constraint::PosIn(tags) => token.has_pos(tags),
            Constraint::Regex(regex) => regex.is_match(&token.text),
            Constraint::Digit => token.is_digit(),
        }
    }
}

/// Lemmas are compared lowercased: a sentence-initial "С" may come back
/// from the parser with its capital intact.
fn lemma_is(token: &Token, lemma: &str) -> bool {
    token.lemma == lemma || token.lemma.to_lowercase() == lemma
}

/// One position of a rule pattern.
#[derive(Debug, Clone, Copy)]
pub struct TokenPattern {
    pub constraint: Constraint,
    /// Matches zero or one token.
    pub optional: bool,
}

impl TokenPattern {
    pub fn optional(self) -> Self {
        TokenPattern {
            optional: true,
            ..self
        }
    }

    pub fn matches(&self, token: &Token) -> bool {
        self.constraint.matches(token)
    }
}

fn required(constraint: Constraint) -> TokenPattern {
    TokenPattern {
        constraint,
        optional: false,
    }
}

pub fn text(text: &'static str) -> TokenPattern {
    required(Constraint::Text(text))
}

pub fn text_in(texts: &'static [&'static str]) -> TokenPattern {
    required(Constraint::TextIn(texts))
}

pub fn caseless(text: &'static str) -> TokenPattern {
    required(Constraint::Caseless(text))
}

pub fn lemma(lemma: &'static str) -> TokenPattern {
    required(Constraint::Lemma(lemma))
}

pub fn lemma_in(lemmas: &'static [&'static str]) -> TokenPattern {
    required(Constraint::LemmaIn(lemmas))
}

pub fn pos_in(tags: &'static [&'static str]) -> TokenPattern {
    required(Constraint::PosIn(tags))
}

pub fn regex(regex: &'static Lazy<Regex>) -> TokenPattern {
    required(Constraint::Regex(regex))
}

pub fn digit() -> TokenPattern {
    required(Constraint::Digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, lemma: &str) -> Token {
        Token::new(0, text, lemma, "X", 0, "ROOT")
    }

    #[test]
    fn date_shapes() {
        assert!(DATE.is_match("31.12.1997"));
        assert!(!DATE.is_match("1/2/2010"), "month needs two digits");
        assert!(DATE.is_match("1/02/2010"));
        assert!(!DATE.is_match("31-12-1997"), "dash is not a date separator");
        assert!(SHORT_DATE.is_match("31.12.97"));
        assert!(!SHORT_DATE.is_match("31.12.1997"));
        assert!(MONTH_YEAR4.is_match("12.1998"));
        assert!(DAY_MONTH_TRAILING.is_match("28.08."));
        assert!(DAY_RANGE_DATE.is_match("24-25.11.2010"));
        assert!(YEAR.is_match("2005"));
        assert!(!YEAR.is_match("1905"));
    }

    #[test]
    fn time_shapes() {
        assert!(TIME.is_match("12.00"));
        assert!(TIME.is_match("17-00"));
        assert!(TIME.is_match("7:30"));
        assert!(!TIME.is_match("24.00"));
        assert!(TIME_LOOSE.is_match("16/00"));
        assert!(TIME_DASH.is_match("23-00"));
        assert!(!TIME_DASH.is_match("23.00"));
    }

    #[test]
    fn ranges_and_floats() {
        assert!(RANGE.is_match("1-10"));
        assert!(RANGE.is_match("2–3"));
        assert!(RANGE.is_match("с1-2"), "ranges are searched, not anchored");
        assert!(FLOAT.is_match("1,5"));
        assert!(!FLOAT.is_match("15"));
    }

    #[test]
    fn constraints() {
        let year = word("года", "год");
        assert!(lemma("год").matches(&year));
        assert!(!text("год").matches(&year));
        assert!(text_in(&["годах", "года"]).matches(&year));

        let from = word("С", "С");
        assert!(lemma("с").matches(&from));
        assert!(caseless("с").matches(&from));
        assert!(!text("с").matches(&from));

        assert!(digit().matches(&word("2010", "2010")));
        assert!(!digit().matches(&word("20.10", "20.10")));
        assert!(regex(&YEAR).matches(&word("2010", "2010")));
        assert!(lemma("год").optional().optional);
    }
}
