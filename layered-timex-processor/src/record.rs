use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use layered_event_anchor::AnchorStep;
use layered_temporal::{Envelope, NormalizedForm, Resolver, RuleId, Stamp};
use layered_timex::TokenRange;

use crate::errors::ProcessResult;

/// One temporal expression of a sentence and the event it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionRecord {
    pub expression_text: String,
    /// Empty when no event was found or event extraction is off.
    pub event_text: String,
    /// Carries the uncertainty along with the value.
    pub normalized_form: NormalizedForm,
    pub envelope: Option<Envelope>,
    pub stamp: Stamp,
    pub rule: RuleId,
    pub resolved_by: Option<Resolver>,
    pub range: TokenRange,
    pub event_tokens: Vec<usize>,
    pub event_step: Option<AnchorStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentenceStatus {
    Processed,
    /// Nothing was extracted from the sentence.
    Skipped { reason: String },
}

/// Everything extracted from one input sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceResult {
    /// The sentence as given, or as rebuilt from its parse.
    pub text: String,
    /// The text handed to the parser.
    pub prepared: String,
    pub reference_date: Option<NaiveDateTime>,
    pub birth_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub status: SentenceStatus,
    pub expressions: Vec<ExpressionRecord>,
}

impl SentenceResult {
    pub(crate) fn skipped(text: &str, reason: String) -> Self {
        SentenceResult {
            text: text.to_string(),
            prepared: String::new(),
            reference_date: None,
            birth_date: None,
            status: SentenceStatus::Skipped { reason },
            expressions: Vec::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, SentenceStatus::Skipped { .. })
    }

    pub fn to_json(&self) -> ProcessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
