//! Finding rule matches in a sentence.

use layered_timex::{DependencyTree, Token, TokenRange};
use log::trace;
use serde::Serialize;

use crate::catalogue::RuleSet;
use crate::pattern::TokenPattern;
use crate::rule::{GrammarRule, RuleId, RuleMatch, Stamp};

/// A recognised temporal expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalSpan {
    pub range: TokenRange,
    pub rule: RuleId,
    pub stamp: Stamp,
    /// Token matched at each pattern position, `None` where an optional
    /// position was skipped.
    #[serde(skip)]
    pub alignment: Vec<Option<usize>>,
}

impl TemporalSpan {
    pub fn matched<'t>(&self, tree: &'t DependencyTree) -> RuleMatch<'t> {
        RuleMatch::from_alignment(tree, &self.alignment)
    }

    pub fn text(&self, tree: &DependencyTree) -> String {
        tree.range_text(self.range)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(index)
    }
}

/// Scans a sentence left to right for the longest rule match at each
/// position.
///
/// Of several equally long matches starting at the same token, the rule
/// that comes first in the [`RuleSet`] wins. Once a span is taken, scanning
/// resumes after it, so spans never overlap.
#[derive(Debug, Clone, Copy)]
pub struct SpanMatcher<'r> {
    rules: &'r RuleSet,
}

impl SpanMatcher<'static> {
    pub fn standard() -> Self {
        SpanMatcher::new(RuleSet::standard())
    }
}

impl<'r> SpanMatcher<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        SpanMatcher { rules }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    pub fn find_spans(&self, tokens: &[Token]) -> Vec<TemporalSpan> {
        let mut spans = Vec::new();
        let mut start = 0;
        while start < tokens.len() {
            match self.longest_at(tokens, start) {
                Some(span) => {
                    trace!(
                        "{} matched tokens {}..{}",
                        span.rule,
                        span.range.start,
                        span.range.end
                    );
                    start = span.range.end;
                    spans.push(span);
                }
                None => start += 1,
            }
        }
        spans
    }

    pub fn find_in(&self, tree: &DependencyTree) -> Vec<TemporalSpan> {
        self.find_spans(tree.tokens())
    }

    fn longest_at(&self, tokens: &[Token], start: usize) -> Option<TemporalSpan> {
        let remaining = tokens.len() - start;
        let mut best: Option<(usize, &GrammarRule, Vec<Option<usize>>)> = None;

        for rule in self.rules.iter().filter(|rule| rule.min_len() <= remaining) {
            let (end, alignment) = match align(&rule.pattern, tokens, start) {
                Some(found) => found,
                None => continue,
            };
            let longer = match &best {
                Some((best_end, _, _)) => end > *best_end,
                None => true,
            };
            if longer && end > start {
                best = Some((end, rule, alignment));
            }
        }

        best.map(|(end, rule, alignment)| TemporalSpan {
            range: TokenRange::new(start, end),
            rule: rule.id,
            stamp: rule.stamp,
            alignment,
        })
    }
}

/// The longest way `pattern` lines up with `tokens` from `start`, as the end
/// of the match and the token taken by each position.
fn align(
    pattern: &[TokenPattern],
    tokens: &[Token],
    start: usize,
) -> Option<(usize, Vec<Option<usize>>)> {
    let mut slots = Vec::with_capacity(pattern.len());
    let mut best = None;
    extend(pattern, tokens, start, &mut slots, &mut best);
    best
}

fn extend(
    pattern: &[TokenPattern],
    tokens: &[Token],
    next: usize,
    slots: &mut Vec<Option<usize>>,
    best: &mut Option<(usize, Vec<Option<usize>>)>,
) {
    let position = slots.len();
    let wanted = match pattern.get(position) {
        Some(wanted) => wanted,
        None => {
            let longer = match best {
                Some((end, _)) => next > *end,
                None => true,
            };
            if longer {
                *best = Some((next, slots.clone()));
            }
            return;
        }
    };

    if let Some(token) = tokens.get(next) {
        if wanted.matches(token) {
            slots.push(Some(next));
            extend(pattern, tokens, next + 1, slots, best);
            slots.pop();
        }
    }
    if wanted.optional {
        slots.push(None);
        extend(pattern, tokens, next, slots, best);
        slots.pop();
    }
}
