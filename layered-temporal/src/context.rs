use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// What relative and age-anchored expressions are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceContext {
    /// "Now" for the sentence: the date of the observation it was written in.
    pub observation: NaiveDateTime,
    /// Patient birth date, when known.
    pub birth_date: Option<NaiveDate>,
}

impl ReferenceContext {
    pub fn new(observation: NaiveDateTime) -> Self {
        ReferenceContext {
            observation,
            birth_date: None,
        }
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.observation.date()
    }

    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.observation.year()
    }

    /// Birth date at midnight.
    pub fn born(&self) -> Option<NaiveDateTime> {
        self.birth_date?.and_hms_opt(0, 0, 0)
    }
}
