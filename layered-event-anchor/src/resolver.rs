//! The event anchor cascade.
//!
//! Each step of the cascade is tried only when the previous ones found
//! nothing. Three steps move the search onto a smaller sub-sentence instead
//! of answering: the clause the expression sits in, a large subject, or the
//! subtree of the expression's head. These moves go through a worklist, and
//! every move must shrink the sub-sentence, so the search ends after at most
//! as many rounds as the sentence has tokens. [`AnchorConfig::max_iterations`]
//! caps it independently of that.

use std::collections::HashSet;

use layered_timex::{DependencyTree, Token, TokenRange};
use log::debug;
use serde::Serialize;

use crate::local_tree::LocalTree;
use crate::postprocess::PostProcessor;

/// Tags dropped from every collected event.
const STRUCTURAL_TAGS: &[&str] = &["CCONJ", "SCONJ", "PUNCT", "ADP"];
/// Also dropped inside the expression's own subtree.
const MODIFIER_TAGS: &[&str] = &["CCONJ", "SCONJ", "PUNCT", "ADP", "PART", "ADV"];
const SUBJECT_RELATIONS: &[&str] = &["nsubj", "nsubj:pass"];
/// Subjects that name the patient rather than an event.
const PATIENT_LEMMAS: &[&str] = &["пациент", "пациентка"];
/// "принимать": a subject phrase after it is the drug, which stands alone.
const TAKE_LEMMA: &str = "принимать";
const YEAR_LEMMA: &str = "год";

const LARGE_SUBJECT: usize = 8;
const SHORT_EVENT: usize = 3;
const FEW_BRANCHES: usize = 3;
const FINAL_CHILD_TOKENS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorConfig {
    /// Rounds of the worklist before the search gives up with no event.
    pub max_iterations: usize,
}

impl AnchorConfig {
    pub fn standard() -> Self {
        AnchorConfig { max_iterations: 32 }
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        AnchorConfig::standard()
    }
}

/// The cascade step an anchor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStep {
    ExpressionSubtree,
    ShallowSentence,
    VerbalComplement,
    Subject,
    ShortSentence,
    FewBranches,
    RootAndNeighbour,
}

/// A move of the search onto a smaller sub-sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Narrowing {
    /// Into the clause holding the expression.
    Clause,
    /// Onto a subject phrase too large to be the event itself.
    Subject,
    /// Onto the subtree of the word the expression hangs off.
    ExpressionHead,
}

/// Tokens describing the event an expression modifies, in sentence order.
/// Empty when no event was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EventAnchor {
    pub tokens: Vec<usize>,
    pub step: Option<AnchorStep>,
    /// The sub-sentences the search moved through before `step` answered.
    pub narrowed: Vec<Narrowing>,
}

impl EventAnchor {
    pub fn empty() -> Self {
        EventAnchor::default()
    }

    fn found(mut tokens: Vec<usize>, step: AnchorStep) -> Self {
        tokens.sort_unstable();
        tokens.dedup();
        EventAnchor {
            tokens,
            step: Some(step),
            narrowed: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn text(&self, tree: &DependencyTree) -> String {
        self.tokens
            .iter()
            .map(|&idx| tree.token(idx).text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Finds the event a temporal expression modifies.
///
/// ```
/// use layered_event_anchor::EventAnchorResolver;
/// use layered_timex::{DependencyTree, Token, TokenRange};
///
/// // "3 года назад перенес инфаркт ."
/// let tree = DependencyTree::from_tokens(vec![
///     Token::new(0, "3", "3", "NUM", 1, "nummod"),
///     Token::new(1, "года", "год", "NOUN", 2, "obl"),
///     Token::new(2, "назад", "назад", "ADV", 3, "advmod"),
///     Token::new(3, "перенес", "перенести", "VERB", 3, "ROOT"),
///     Token::new(4, "инфаркт", "инфаркт", "NOUN", 3, "obj"),
///     Token::new(5, ".", ".", "PUNCT", 3, "punct"),
/// ])
/// .unwrap();
///
/// let expression = TokenRange::new(0, 3);
/// let event = EventAnchorResolver::standard().event(&tree, expression, &[expression]);
/// assert_eq!(event.text(&tree), "перенес инфаркт");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EventAnchorResolver {
    config: AnchorConfig,
}

impl EventAnchorResolver {
    pub fn new(config: AnchorConfig) -> Self {
        EventAnchorResolver { config }
    }

    pub fn standard() -> Self {
        EventAnchorResolver::new(AnchorConfig::standard())
    }

    pub fn config(&self) -> AnchorConfig {
        self.config
    }

    /// The event for `span`, cleaned up by the [`PostProcessor`].
    ///
    /// `spans` are all expressions recognised in the sentence; none of their
    /// words end up in an event.
    pub fn event(&self, tree: &DependencyTree, span: TokenRange, spans: &[TokenRange]) -> EventAnchor {
        let mut anchor = self.resolve(tree, span, spans);
        anchor.tokens = PostProcessor::apply(tree, &anchor.tokens);
        if anchor.tokens.is_empty() {
            anchor = EventAnchor::empty();
        }
        anchor
    }

    /// The raw cascade result, before post-processing.
    pub fn resolve(&self, tree: &DependencyTree, span: TokenRange, spans: &[TokenRange]) -> EventAnchor {
        let sentence = Sentence::new(tree, span, spans);
        let mut worklist = vec![Search::new(LocalTree::whole(tree))];
        let mut iterations = 0;

        while let Some(search) = worklist.pop() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                debug!(
                    "event search for {:?} gave up after {} rounds",
                    tree.range_text(span),
                    self.config.max_iterations
                );
                return EventAnchor::empty();
            }

            let size = search.view.len();
            match sentence.step(&search) {
                Outcome::Found(mut anchor) => {
                    anchor.narrowed = search.path;
                    return anchor;
                }
                Outcome::Narrow(next) if next.view.len() < size => worklist.push(next),
                Outcome::Narrow(_) | Outcome::Nothing => break,
            }
        }
        EventAnchor::empty()
    }
}

/// One round of the search: a sub-sentence and the moves made on the way
/// to it.
#[derive(Debug, Clone)]
struct Search<'t> {
    view: LocalTree<'t>,
    path: Vec<Narrowing>,
}

impl<'t> Search<'t> {
    fn new(view: LocalTree<'t>) -> Self {
        Search {
            view,
            path: Vec::new(),
        }
    }

    fn onto(&self, view: LocalTree<'t>, narrowing: Narrowing) -> Self {
        let mut path = self.path.clone();
        path.push(narrowing);
        Search { view, path }
    }

    /// Moved onto the subtree of the expression's head.
    fn redirected(&self) -> bool {
        self.path.contains(&Narrowing::ExpressionHead)
    }

    /// Moved onto a large subject.
    fn cut(&self) -> bool {
        self.path.contains(&Narrowing::Subject)
    }
}

enum Outcome<'t> {
    Found(EventAnchor),
    Narrow(Search<'t>),
    Nothing,
}

/// The sentence-wide facts every round consults.
struct Sentence<'t, 's> {
    tree: &'t DependencyTree,
    span: TokenRange,
    spans: &'s [TokenRange],
    /// Surface forms of every expression token in the sentence.
    expression_words: HashSet<&'t str>,
}

impl<'t, 's> Sentence<'t, 's> {
    fn new(tree: &'t DependencyTree, span: TokenRange, spans: &'s [TokenRange]) -> Self {
        let expression_words = spans
            .iter()
            .chain(std::iter::once(&span))
            .flat_map(|range| range.indices())
            .filter(|&idx| idx < tree.len())
            .map(|idx| tree.token(idx).text.as_str())
            .collect();
        Sentence {
            tree,
            span,
            spans,
            expression_words,
        }
    }

    fn in_any_span(&self, idx: usize) -> bool {
        self.span.contains(idx) || self.spans.iter().any(|range| range.contains(idx))
    }

    fn is_expression_word(&self, idx: usize) -> bool {
        self.expression_words.contains(self.tree.token(idx).text.as_str())
    }

    /// The expression token whose head lies outside the expression.
    fn span_root(&self, view: &LocalTree<'_>) -> Option<usize> {
        self.span
            .indices()
            .filter(|&idx| view.contains(idx))
            .find(|&idx| {
                let head = self.tree.token(idx).head;
                head == idx || !self.span.contains(head)
            })
    }

    fn inside(&self, view: &LocalTree<'_>, range: TokenRange) -> bool {
        !range.is_empty() && range.indices().all(|idx| view.contains(idx))
    }

    /// Keeps the content words of `tokens`.
    fn structural_filter(&self, tokens: impl IntoIterator<Item = usize>) -> Vec<usize> {
        tokens
            .into_iter()
            .filter(|&idx| {
                let token = self.tree.token(idx);
                !self.is_expression_word(idx)
                    && !tagged(token, STRUCTURAL_TAGS)
                    && token.lemma != YEAR_LEMMA
            })
            .collect()
    }

    /// Stricter than [`Sentence::structural_filter`]: modifiers of the
    /// expression itself ("уже", "не") go too.
    fn modifier_filter(&self, tokens: impl IntoIterator<Item = usize>) -> Vec<usize> {
        tokens
            .into_iter()
            .filter(|&idx| {
                let token = self.tree.token(idx);
                !self.is_expression_word(idx)
                    && !tagged(token, MODIFIER_TAGS)
                    && token.lemma != YEAR_LEMMA
                    && token.lemma != "."
            })
            .collect()
    }

    fn step(&self, search: &Search<'t>) -> Outcome<'t> {
        let whole = &search.view;
        let sentence_root = match whole.root() {
            Some(root) => root,
            None => return Outcome::Nothing,
        };
        let span_root = self.span_root(whole);

        // Clause descent: the expression sits in a clause hanging off the root.
        let mut clauses = Vec::new();
        if span_root != Some(sentence_root) {
            let trimmed = whole.without_final_punct();
            for child in whole.children(sentence_root) {
                if !whole.token(child).is_clause_head() {
                    continue;
                }
                match whole.children(child).first() {
                    Some(&first) if !whole.token(first).is_bracket() => {}
                    _ => continue,
                }
                let clause = whole.narrowed_to(child);
                let covers_more = clause.tokens() != self.span.indices().collect::<Vec<_>>().as_slice();
                if self.inside(&clause, self.span) && covers_more && clause.tokens() != trimmed.tokens() {
                    return Outcome::Narrow(search.onto(clause, Narrowing::Clause));
                }
                clauses.push(clause);
            }
        }
        let complex = !clauses.is_empty();

        // Boundary: the final full stop never belongs to an event.
        let view = whole.without_final_punct();
        let mut root = match view.root() {
            Some(root) => root,
            None => return Outcome::Nothing,
        };

        // A root with a single dependent is a shell around it.
        let children = view.children(root);
        if let [only] = children.as_slice() {
            if !self.in_any_span(*only) {
                root = *only;
            }
        }
        let span_root = self.span_root(&view);
        let children = view.children(root);
        let root_token = view.token(root);

        if let Some(expression_root) = span_root.filter(|&idx| idx != root) {
            let found = self.modifier_filter(view.subtree(expression_root));
            if !found.is_empty() {
                return Outcome::Found(EventAnchor::found(found, AnchorStep::ExpressionSubtree));
            }
        }

        if children.len() <= 2 {
            let found = self.modifier_filter(view.subtree(root));
            if !found.is_empty() {
                return Outcome::Found(EventAnchor::found(found, AnchorStep::ShallowSentence));
            }
        }

        if root_token.has_pos(&["VERB"]) {
            let complement = children
                .iter()
                .copied()
                .find(|&child| view.token(child).deprel == "xcomp");
            if let Some(complement) = complement {
                let mut found = vec![root];
                found.extend(view.subtree(complement));
                return Outcome::Found(EventAnchor::found(found, AnchorStep::VerbalComplement));
            }
        }

        let mut found = Vec::new();
        for &child in &children {
            let token = view.token(child);
            if !token.has_deprel(SUBJECT_RELATIONS) || self.span.contains(child) {
                continue;
            }
            let subtree = view.subtree(child);
            if !search.cut() && subtree.len() > LARGE_SUBJECT && view.children(child).len() > 1 {
                return Outcome::Narrow(search.onto(view.narrowed_to(child), Narrowing::Subject));
            }
            // The first subject that yields words settles the step.
            if subtree.len() == 1 {
                if root_token.has_pos(&["VERB"]) && !token.has_lemma(PATIENT_LEMMAS) {
                    found = vec![root, child];
                    break;
                }
                continue;
            }
            if !root_token.has_pos(&["NOUN"]) && root_token.lemma != TAKE_LEMMA {
                found.push(root);
            }
            found.extend(self.structural_filter(subtree));
            break;
        }
        if !found.is_empty() && found != [root] {
            return Outcome::Found(EventAnchor::found(found, AnchorStep::Subject));
        }

        let found = self.structural_filter(view.subtree(root));
        if !found.is_empty() && found.len() <= SHORT_EVENT {
            return Outcome::Found(EventAnchor::found(found, AnchorStep::ShortSentence));
        }

        if children.len() <= FEW_BRANCHES + complex as usize {
            let clause_holds_expression = clauses
                .iter()
                .any(|clause| self.spans.iter().any(|&range| self.inside(clause, range)));
            let excluded: HashSet<usize> = if clause_holds_expression || children.len() == FEW_BRANCHES + 1 {
                clauses.iter().flat_map(|clause| clause.tokens().iter().copied()).collect()
            } else {
                HashSet::new()
            };
            let found: Vec<usize> = self
                .structural_filter(view.subtree(root))
                .into_iter()
                .filter(|idx| !excluded.contains(idx))
                .collect();
            if !found.is_empty() {
                return Outcome::Found(EventAnchor::found(found, AnchorStep::FewBranches));
            }
        }

        if let Some(expression_root) = span_root {
            let head = self.tree.token(expression_root).head;
            if !search.redirected()
                && !search.cut()
                && head != root
                && view.contains(head)
                && view.children(head).len() > 1
            {
                return Outcome::Narrow(search.onto(view.narrowed_to(head), Narrowing::ExpressionHead));
            }
        }

        let mut found = Vec::new();
        if !self.span.contains(root) {
            found.push(root);
        }
        let neighbour = view
            .rights(root)
            .first()
            .copied()
            .filter(|&child| !self.is_expression_word(child))
            .or_else(|| {
                view.lefts(root)
                    .last()
                    .copied()
                    .filter(|&child| !self.is_expression_word(child))
            });
        if let Some(neighbour) = neighbour {
            let nearest = view.subtree(neighbour).into_iter().take(FINAL_CHILD_TOKENS);
            found.extend(self.structural_filter(nearest));
        }
        Outcome::Found(EventAnchor::found(found, AnchorStep::RootAndNeighbour))
    }
}

/// Matches the coarse or the fine-grained tag.
fn tagged(token: &Token, tags: &[&str]) -> bool {
    token.has_pos(tags) || tags.contains(&token.tag.as_str())
}
