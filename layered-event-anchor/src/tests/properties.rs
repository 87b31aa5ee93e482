use crate::*;
use layered_timex::{DependencyTree, Token, TokenRange};
use proptest::prelude::*;

const WORDS: &[(&str, &str)] = &[
    ("с", "ADP"),
    ("2010", "NUM"),
    ("года", "NOUN"),
    ("назад", "ADV"),
    ("и", "CCONJ"),
    (",", "PUNCT"),
    ("(", "PUNCT"),
    ("когда", "SCONJ"),
    ("болеет", "VERB"),
    ("принимать", "VERB"),
    ("пациент", "NOUN"),
    ("инфаркт", "NOUN"),
    ("острый", "ADJ"),
    ("он", "PRON"),
    ("не", "PART"),
];

const RELATIONS: &[&str] = &[
    "nsubj", "obj", "obl", "conj", "advcl", "acl:relcl", "parataxis", "xcomp", "punct", "case",
    "amod",
];

const BOUNDARY_TAGS: &[&str] = &["PUNCT", "CCONJ", "ADP"];

/// A random tree in which every token hangs off an earlier one, and a
/// random expression inside it.
fn arb_sentence() -> impl Strategy<Value = (DependencyTree, TokenRange)> {
    (1usize..20)
        .prop_flat_map(|len| {
            let heads = (0..len)
                .map(|idx| if idx == 0 { Just(0).boxed() } else { (0..idx).boxed() })
                .collect::<Vec<_>>();
            let words = prop::collection::vec(
                (prop::sample::select(WORDS), prop::sample::select(RELATIONS)),
                len,
            );
            (heads, words, 0..len, 1..=len)
        })
        .prop_map(|(heads, words, start, width)| {
            let tokens = heads
                .iter()
                .zip(&words)
                .enumerate()
                .map(|(idx, (&head, &((text, pos), deprel)))| {
                    let deprel = if idx == 0 { "ROOT" } else { deprel };
                    Token::new(idx, text, text, pos, head, deprel)
                })
                .collect();
            let tree = DependencyTree::from_tokens(tokens).unwrap();
            let end = (start + width).min(tree.len());
            (tree, TokenRange::new(start, end))
        })
}

proptest! {
    #[test]
    fn events_are_ordered_sentence_tokens((tree, span) in arb_sentence()) {
        let event = EventAnchorResolver::standard().event(&tree, span, &[span]);

        prop_assert_eq!(event.step.is_some(), !event.is_empty());
        for pair in event.tokens.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &idx in &event.tokens {
            prop_assert!(idx < tree.len());
        }
    }

    #[test]
    fn events_have_clean_edges((tree, span) in arb_sentence()) {
        let event = EventAnchorResolver::standard().event(&tree, span, &[span]);
        if let (Some(&first), Some(&last)) = (event.tokens.first(), event.tokens.last()) {
            prop_assert!(!tree.token(first).has_pos(BOUNDARY_TAGS));
            prop_assert!(!tree.token(last).has_pos(BOUNDARY_TAGS));
            prop_assert!(!tree.token(last).is_clause_head());
        }
    }

    #[test]
    fn no_rounds_no_event((tree, span) in arb_sentence()) {
        let resolver = EventAnchorResolver::new(AnchorConfig { max_iterations: 0 });
        prop_assert!(resolver.resolve(&tree, span, &[span]).is_empty());
    }

    #[test]
    fn post_processing_is_idempotent(
        (tree, _) in arb_sentence(),
        picks in prop::collection::vec(0usize..20, 0..12),
    ) {
        let once = PostProcessor::apply(&tree, &picks);
        for &idx in &once {
            prop_assert!(picks.contains(&idx));
        }
        let twice = PostProcessor::apply(&tree, &once);
        prop_assert_eq!(twice, once);
    }
}
