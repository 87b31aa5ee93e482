use layered_timex::{DependencyTree, Token};

/// A sub-sentence of a [`DependencyTree`], read as a sentence of its own.
///
/// Only the tokens in the view take part in navigation. A token whose head
/// lies outside the view becomes a root of the view, the way a clause cut
/// out of a sentence has its own root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTree<'t> {
    tree: &'t DependencyTree,
    /// Sorted, without duplicates.
    tokens: Vec<usize>,
}

impl<'t> LocalTree<'t> {
    pub fn whole(tree: &'t DependencyTree) -> Self {
        LocalTree {
            tree,
            tokens: tree.full_range().indices().collect(),
        }
    }

    pub fn from_indices(tree: &'t DependencyTree, mut tokens: Vec<usize>) -> Self {
        tokens.retain(|&idx| idx < tree.len());
        tokens.sort_unstable();
        tokens.dedup();
        LocalTree { tree, tokens }
    }

    pub fn tree(&self) -> &'t DependencyTree {
        self.tree
    }

    pub fn tokens(&self) -> &[usize] {
        &self.tokens
    }

    pub fn token(&self, idx: usize) -> &'t Token {
        self.tree.token(idx)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.tokens.binary_search(&idx).is_ok()
    }

    /// The first token of the view that is its own head or hangs off a token
    /// outside the view.
    pub fn root(&self) -> Option<usize> {
        self.tokens.iter().copied().find(|&idx| {
            let head = self.tree.token(idx).head;
            head == idx || !self.contains(head)
        })
    }

    /// Dependents of `idx` inside the view, in sentence order.
    pub fn children(&self, idx: usize) -> Vec<usize> {
        self.tree
            .children(idx)
            .filter(|&child| self.contains(child))
            .collect()
    }

    pub fn lefts(&self, idx: usize) -> Vec<usize> {
        self.children(idx).into_iter().filter(|&child| child < idx).collect()
    }

    pub fn rights(&self, idx: usize) -> Vec<usize> {
        self.children(idx).into_iter().filter(|&child| child > idx).collect()
    }

    /// `idx` and its descendants inside the view, in sentence order.
    pub fn subtree(&self, idx: usize) -> Vec<usize> {
        let mut collected = vec![idx];
        let mut pending = vec![idx];
        while let Some(node) = pending.pop() {
            for child in self.children(node) {
                collected.push(child);
                pending.push(child);
            }
        }
        collected.sort_unstable();
        collected
    }

    /// The view restricted to the subtree of `idx`.
    pub fn narrowed_to(&self, idx: usize) -> LocalTree<'t> {
        LocalTree {
            tree: self.tree,
            tokens: self.subtree(idx),
        }
    }

    /// The view without its last token when that token is punctuation.
    pub fn without_final_punct(&self) -> LocalTree<'t> {
        let mut tokens = self.tokens.clone();
        if let Some(&last) = tokens.last() {
            if self.tree.token(last).has_pos(&["PUNCT"]) {
                tokens.pop();
            }
        }
        LocalTree {
            tree: self.tree,
            tokens,
        }
    }

    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|&idx| self.tree.token(idx).text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
