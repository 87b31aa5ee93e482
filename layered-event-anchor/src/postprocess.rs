use layered_timex::{DependencyTree, Token};

/// Words that only introduce an event: "по", "от", "после", "около".
const LEADING_LEMMAS: &[&str] = &["по", "от", "после", "около"];
const LEADING_TAGS: &[&str] = &["CCONJ", "PUNCT", "PRON", "ADP"];
/// Words that only lead on to something else: "где", "когда", "диагноз".
const TRAILING_LEMMAS: &[&str] = &["где", "когда", "диагноз"];
const TRAILING_TAGS: &[&str] = &["CCONJ", "PUNCT", "ADP"];

/// Cleans up the tokens of an event anchor.
///
/// Connectives and punctuation are trimmed from both ends, and a clause
/// that hangs inside the event is cut out so that two clauses never run
/// together in one event.
pub struct PostProcessor;

impl PostProcessor {
    /// Returns the kept tokens in sentence order.
    pub fn apply(tree: &DependencyTree, tokens: &[usize]) -> Vec<usize> {
        let mut kept: Vec<usize> = tokens.iter().copied().filter(|&idx| idx < tree.len()).collect();
        kept.sort_unstable();
        kept.dedup();

        trim(tree, &mut kept);
        for idx in kept.clone() {
            if !kept.contains(&idx) || !tree.token(idx).is_clause_head() {
                continue;
            }
            let clause = tree.subtree(idx);
            if kept.len() > clause.len() {
                kept.retain(|kept_idx| clause.binary_search(kept_idx).is_err());
            }
        }
        trim(tree, &mut kept);
        kept
    }
}

fn trim(tree: &DependencyTree, kept: &mut Vec<usize>) {
    let leading = kept
        .iter()
        .take_while(|&&idx| opens_nothing(tree.token(idx)))
        .count();
    kept.drain(..leading);

    while let Some(&last) = kept.last() {
        if !closes_nothing(tree.token(last)) {
            break;
        }
        kept.pop();
    }
}

fn opens_nothing(token: &Token) -> bool {
    token.has_pos(LEADING_TAGS) || token.has_lemma(LEADING_LEMMAS)
}

fn closes_nothing(token: &Token) -> bool {
    token.has_pos(TRAILING_TAGS) || token.has_lemma(TRAILING_LEMMAS) || token.is_clause_head()
}
