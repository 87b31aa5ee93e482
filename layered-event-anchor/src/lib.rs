#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Event anchoring for layered-timex.
//!
//! Given a parsed sentence and a temporal expression found in it, this crate
//! picks out the words describing the clinical event the expression is
//! about: "перенес инфаркт" for "3 года назад перенес инфаркт".
//!
//! ## Usage
//!
//! ```ignore
//! use layered_event_anchor::EventAnchorResolver;
//!
//! let spans: Vec<TokenRange> = temporal_spans.iter().map(|span| span.range).collect();
//! for &span in &spans {
//!     let event = EventAnchorResolver::standard().event(&tree, span, &spans);
//!     println!("{} -> {}", tree.range_text(span), event.text(&tree));
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`LocalTree`] is a sub-sentence view: clauses and subtrees cut out of
//!   a sentence are searched as sentences of their own.
//! - [`EventAnchorResolver`] runs a fixed cascade of tree heuristics over a
//!   worklist of shrinking views, capped by [`AnchorConfig`].
//! - [`PostProcessor`] trims connectives and embedded clauses from the
//!   result.

mod local_tree;
mod postprocess;
mod resolver;

pub use local_tree::LocalTree;
pub use postprocess::PostProcessor;
pub use resolver::{AnchorConfig, AnchorStep, EventAnchor, EventAnchorResolver, Narrowing};

#[cfg(test)]
mod tests {
    mod cascade;
    mod properties;
}
