#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Batch processing of clinical sentences.
//!
//! For every sentence the processor finds the temporal expressions, places
//! each one on the calendar relative to the date the note was written, and
//! extracts the event it describes. Dependency parsing itself happens
//! outside this crate behind the [`DependencyParser`] trait.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_timex_processor::{DateInput, PreParsed, TimexProcessor};
//!
//! let mut parser = PreParsed::from_conllu(&conllu);
//! let results = TimexProcessor::standard().process(
//!     &mut parser,
//!     &["3 года назад перенес инфаркт"],
//!     &[DateInput::from("2020-06-15")],
//!     &[],
//! )?;
//!
//! for expression in &results[0].expressions {
//!     println!("{} -> {:?} ({})", expression.expression_text, expression.normalized_form, expression.event_text);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`prepare_sentence`] tidies raw text before it is parsed.
//! - [`TimexProcessor`] hands sentences to the parser in batches, then runs
//!   the span matcher, the normalizer and the event anchor resolver over
//!   each parse.
//! - [`SentenceResult`] and [`ExpressionRecord`] are the serializable
//!   output; a sentence that failed carries its reason instead.
//! - [`ProcessorConfig`] holds the knobs, loadable from TOML.

mod config;
mod errors;
mod input;
mod parser;
mod prepare;
mod processor;
mod record;

pub use config::ProcessorConfig;
pub use errors::{ProcessError, ProcessResult};
pub use input::DateInput;
pub use parser::{DependencyParser, PreParsed};
pub use prepare::{ensure_final_period, prepare_sentence};
pub use processor::TimexProcessor;
pub use record::{ExpressionRecord, SentenceResult, SentenceStatus};

#[cfg(test)]
mod tests {
    mod processing;
}
