use crate::{DependencyTree, Token, TokenRange, TreeDisplay};
use proptest::prelude::*;

/// "3 года назад перенес инфаркт ."
fn three_years_ago() -> DependencyTree {
    DependencyTree::from_tokens(vec![
        Token::new(0, "3", "3", "NUM", 1, "nummod"),
        Token::new(1, "года", "год", "NOUN", 2, "obl"),
        Token::new(2, "назад", "назад", "ADV", 3, "advmod"),
        Token::new(3, "перенес", "перенести", "VERB", 3, "ROOT"),
        Token::new(4, "инфаркт", "инфаркт", "NOUN", 3, "obj"),
        Token::new(5, ".", ".", "PUNCT", 3, "punct"),
    ])
    .unwrap()
}

#[derive(Debug)]
struct Ago;

#[test]
fn navigation() {
    let tree = three_years_ago();

    assert_eq!(tree.root(), 3);
    assert_eq!(tree.children(3).collect::<Vec<_>>(), vec![2, 4, 5]);
    assert_eq!(tree.lefts(3).collect::<Vec<_>>(), vec![2]);
    assert_eq!(tree.rights(3).collect::<Vec<_>>(), vec![4, 5]);
    assert_eq!(tree.subtree(2), vec![0, 1, 2]);
    assert_eq!(tree.subtree_range(2), TokenRange::new(0, 3));
    assert_eq!(tree.subtree(3).len(), 6);
    assert_eq!(tree.depth(0), 3);
    assert_eq!(tree.depth(3), 0);
}

#[test]
fn range_text() {
    let tree = three_years_ago();
    assert_eq!(tree.range_text(TokenRange::new(0, 3)), "3 года назад");
    assert_eq!(tree.range_text(TokenRange::at(4)), "инфаркт");
}

#[test]
fn token_ranges() {
    let span = TokenRange::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(span.contains(2));
    assert!(!span.contains(5));
    assert!(span.covers(&TokenRange::new(3, 5)));
    assert!(!span.covers(&TokenRange::new(1, 3)));
    assert!(span.overlaps(&TokenRange::new(4, 9)));
    assert!(!span.overlaps(&TokenRange::new(5, 9)));
}

#[test]
fn display_marks() {
    let tree = three_years_ago();
    let display = TreeDisplay::new(&tree)
        .with(TokenRange::new(0, 3), &Ago)
        .with_tokens(&[4, 3], "event");

    insta::assert_snapshot!(display, @r###"
    3  года  назад  перенес  инфаркт  .
    ╰────────────╯ Ago
                    ╰        ╰event
    "###);
}

/// Random head vectors where every token points at an earlier one, so the
/// result is always a tree rooted at token 0.
fn arb_heads() -> impl Strategy<Value = Vec<usize>> {
    (1usize..24).prop_flat_map(|len| {
        (0..len)
            .map(|idx| if idx == 0 { Just(0).boxed() } else { (0..idx).boxed() })
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn subtrees_partition_children(heads in arb_heads()) {
        let tokens = heads
            .iter()
            .enumerate()
            .map(|(idx, &head)| Token::new(idx, "w", "w", "X", head, "dep"))
            .collect();
        let tree = DependencyTree::from_tokens(tokens).unwrap();

        prop_assert_eq!(tree.root(), 0);
        prop_assert_eq!(tree.subtree(0).len(), tree.len());
        for idx in 0..tree.len() {
            let below: usize = tree.children(idx).map(|child| tree.subtree(child).len()).sum();
            prop_assert_eq!(tree.subtree(idx).len(), below + 1);
        }
    }
}
