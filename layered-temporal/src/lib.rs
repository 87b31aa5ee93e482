#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Temporal expression grammar for layered-timex.
//!
//! This crate recognises Russian temporal expressions in a parsed sentence
//! ("3 года назад", "с 2010 года", "в возрасте 70 лет") and places them on a
//! calendar relative to the observation the sentence was written in.
//!
//! ## Usage
//!
//! ```
//! use layered_temporal::{NormalizedForm, Normalizer, ReferenceContext, RuleId, SpanMatcher};
//! use layered_timex::{DependencyTree, Token};
//! use chrono::NaiveDate;
//!
//! let tree = DependencyTree::from_tokens(vec![
//!     Token::new(0, "3", "3", "NUM", 1, "nummod"),
//!     Token::new(1, "года", "год", "NOUN", 2, "obl"),
//!     Token::new(2, "назад", "назад", "ADV", 2, "ROOT"),
//! ])
//! .unwrap();
//! let ctx = ReferenceContext::new(
//!     NaiveDate::from_ymd_opt(2020, 6, 15).unwrap().and_hms_opt(0, 0, 0).unwrap(),
//! );
//!
//! let spans = SpanMatcher::standard().find_in(&tree);
//! assert_eq!(spans[0].rule, RuleId::IntUnitAgo);
//!
//! let normalized = Normalizer::standard().normalize(&tree, &spans[0], &ctx);
//! match normalized.form {
//!     NormalizedForm::Instant { at, .. } => assert_eq!(at.to_string(), "2017-06-15 00:00:00"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`pattern`] holds the token constraints rules are written in.
//! - [`GrammarRule`] pairs a pattern with a [`Stamp`] class, an optional
//!   normalization and an uncertainty. The [`RuleSet::standard`] catalogue
//!   holds every rule in priority order.
//! - [`SpanMatcher`] scans a sentence for the longest match at each token,
//!   producing non-overlapping [`TemporalSpan`]s.
//! - [`Normalizer`] turns a span into a [`NormalizedForm`] with an
//!   [`Envelope`], falling back to the generic parsers in [`fallback`] when
//!   a rule cannot place its match.

mod calendar;
mod catalogue;
mod context;
pub mod fallback;
pub mod lexicon;
mod matcher;
mod normalizer;
pub mod pattern;
mod rule;

pub use calendar::{expand_two_digit_year, full_year, CalendarDelta, CalendarUnit};
pub use catalogue::RuleSet;
pub use context::ReferenceContext;
pub use matcher::{SpanMatcher, TemporalSpan};
pub use normalizer::{Envelope, Normalization, NormalizedForm, Normalizer, Resolver};
pub use pattern::{Constraint, TokenPattern};
pub use rule::{
    GrammarRule, NormalValue, NormalizeFn, RuleId, RuleMatch, Stamp, Uncertainty, UncertaintyFn,
    UncertaintyRule,
};
