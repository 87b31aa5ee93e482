use serde::Serialize;

use crate::conllu::parse_conllu_row;
use crate::errors::{ConlluError, ConlluResult};
use crate::token::Token;

mod display;

pub use display::TreeDisplay;

/// Half-open token interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted range {}..{}", start, end);
        TokenRange { start, end }
    }

    /// The single-token range at `index`.
    pub fn at(index: usize) -> Self {
        TokenRange::new(index, index + 1)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// `other` lies entirely within `self`.
    pub fn covers(&self, other: &TokenRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &TokenRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// An immutable parsed sentence.
///
/// Construction validates that the head graph is a tree: exactly one token
/// is its own head, every other token reaches it by following heads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    tokens: Vec<Token>,
    children: Vec<Vec<usize>>,
    root: usize,
}

impl DependencyTree {
    /// Reads one sentence block of CoNLL-U.
    pub fn from_conllu(block: &str) -> ConlluResult<Self> {
        let mut tokens = Vec::new();

        for (line_idx, line) in block.lines().enumerate() {
            let row = match parse_conllu_row(line, line_idx + 1)? {
                Some(row) => row,
                None => continue,
            };
            let index = tokens.len();
            if row.id != index + 1 {
                return Err(ConlluError::InvalidId {
                    line: line_idx + 1,
                    value: row.id.to_string(),
                });
            }

            tokens.push(Token {
                index,
                tag: if row.xpos == "_" {
                    row.upos.clone()
                } else {
                    row.xpos
                },
                pos: row.upos,
                text: row.form,
                lemma: row.lemma,
                feats: if row.feats == "_" {
                    String::new()
                } else {
                    row.feats
                },
                head: row.head.map_or(index, |head| head - 1),
                deprel: if row.deprel == "root" {
                    "ROOT".to_string()
                } else {
                    row.deprel
                },
                space_after: !row.misc.contains("SpaceAfter=No"),
            });
        }

        DependencyTree::from_tokens(tokens)
    }

    /// Validates hand-built or externally produced tokens.
    ///
    /// Token indices are reassigned from their position.
    pub fn from_tokens(mut tokens: Vec<Token>) -> ConlluResult<Self> {
        if tokens.is_empty() {
            return Err(ConlluError::Empty);
        }
        let len = tokens.len();
        for (index, token) in tokens.iter_mut().enumerate() {
            token.index = index;
            if token.head >= len {
                return Err(ConlluError::HeadOutOfRange {
                    index,
                    head: token.head,
                    len,
                });
            }
        }

        let roots: Vec<usize> = tokens.iter().filter(|t| t.is_root()).map(|t| t.index).collect();
        let root = match roots.as_slice() {
            [] => return Err(ConlluError::NoRoot),
            [root] => *root,
            many => return Err(ConlluError::MultipleRoots { count: many.len() }),
        };

        // With a single self-headed token, a chain longer than the sentence
        // can only be a cycle.
        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while current != root {
                current = tokens[current].head;
                steps += 1;
                if steps > len {
                    return Err(ConlluError::Cycle { index: start });
                }
            }
        }

        let mut children = vec![Vec::new(); len];
        for token in &tokens {
            if !token.is_root() {
                children[token.head].push(token.index);
            }
        }

        Ok(DependencyTree {
            tokens,
            children,
            root,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The range covering the whole sentence.
    pub fn full_range(&self) -> TokenRange {
        TokenRange::new(0, self.tokens.len())
    }

    /// Index of the token that is its own head.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Direct dependents of `index`, in sentence order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.children[index].iter().copied()
    }

    /// Dependents preceding `index`, in sentence order.
    pub fn lefts(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.children(index).filter(move |&child| child < index)
    }

    /// Dependents following `index`, in sentence order.
    pub fn rights(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.children(index).filter(move |&child| child > index)
    }

    /// `index` and all of its descendants, in sentence order.
    pub fn subtree(&self, index: usize) -> Vec<usize> {
        let mut collected = vec![index];
        let mut pending = vec![index];
        while let Some(node) = pending.pop() {
            for child in self.children(node) {
                collected.push(child);
                pending.push(child);
            }
        }
        collected.sort_unstable();
        collected
    }

    /// The smallest range covering the subtree of `index`.
    pub fn subtree_range(&self, index: usize) -> TokenRange {
        let subtree = self.subtree(index);
        let start = subtree.first().copied().unwrap_or(index);
        let end = subtree.last().copied().unwrap_or(index) + 1;
        TokenRange::new(start, end)
    }

    /// Number of head links between `index` and the root.
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = index;
        while current != self.root {
            current = self.tokens[current].head;
            depth += 1;
        }
        depth
    }

    /// Reconstructed sentence text.
    pub fn text(&self) -> String {
        self.range_text(self.full_range())
    }

    /// Reconstructed text of a token range, honoring `SpaceAfter=No`.
    pub fn range_text(&self, range: TokenRange) -> String {
        let mut text = String::new();
        for index in range.indices() {
            let token = &self.tokens[index];
            text.push_str(&token.text);
            if token.space_after && index + 1 < range.end {
                text.push(' ');
            }
        }
        text
    }
}
