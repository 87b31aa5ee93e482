use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::{ProcessError, ProcessResult};

const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// A reference or birth date as the caller has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Not known for this sentence.
    Missing,
    /// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// The moment this input names, at midnight when it has no time of day.
    pub fn datetime(&self) -> ProcessResult<Option<NaiveDateTime>> {
        match self {
            DateInput::Missing => Ok(None),
            DateInput::DateTime(at) => Ok(Some(*at)),
            DateInput::Date(date) => Ok(date.and_hms_opt(0, 0, 0)),
            DateInput::Text(text) => parse_text(text).map(Some),
        }
    }

    /// The calendar day this input names.
    pub fn date(&self) -> ProcessResult<Option<NaiveDate>> {
        Ok(self.datetime()?.map(|at| at.date()))
    }
}

impl Default for DateInput {
    fn default() -> Self {
        DateInput::Missing
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(at: NaiveDateTime) -> Self {
        DateInput::DateTime(at)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

fn parse_text(text: &str) -> ProcessResult<NaiveDateTime> {
    let trimmed = text.trim();
    for layout in DATETIME_LAYOUTS {
        if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(at);
        }
    }
    NaiveDate::parse_from_str(trimmed, DATE_LAYOUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ProcessError::InvalidDate {
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn accepted_layouts() {
        let full = DateInput::from("2020-06-15 10:30:45");
        assert_eq!(full.datetime().unwrap(), Some(at(2020, 6, 15, 10, 30, 45)));

        let minutes = DateInput::from("2020-06-15 10:30");
        assert_eq!(minutes.datetime().unwrap(), Some(at(2020, 6, 15, 10, 30, 0)));

        let day = DateInput::from("1950-03-01");
        assert_eq!(day.datetime().unwrap(), Some(at(1950, 3, 1, 0, 0, 0)));
        assert_eq!(day.date().unwrap(), NaiveDate::from_ymd_opt(1950, 3, 1));
    }

    #[test]
    fn chrono_values_and_missing() {
        let date = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        assert_eq!(DateInput::from(date).datetime().unwrap(), Some(at(2021, 5, 1, 0, 0, 0)));
        assert_eq!(DateInput::Missing.datetime().unwrap(), None);
        assert_eq!(DateInput::from(None::<&str>), DateInput::Missing);
    }

    #[test]
    fn rejects_other_layouts() {
        let err = DateInput::from("15.06.2020").datetime().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date \"15.06.2020\": expected YYYY-MM-DD, optionally followed by HH:MM or HH:MM:SS"
        );
        assert!(DateInput::from("2020-13-01").date().is_err());
    }
}
