use super::{DependencyTree, TokenRange};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

enum Mark {
    /// A contiguous range, underlined.
    Range { range: TokenRange, label: String },
    /// A scattered token set, one marker per token.
    Tokens { indices: Vec<usize>, label: String },
}

/// Snapshot-friendly rendering of a sentence with marked token sets.
///
/// ```text
/// 3  года  назад  болел  .
/// ╰────────────╯ IntUnitAgo
///                 ╰event
/// ```
pub struct TreeDisplay<'a> {
    tree: &'a DependencyTree,
    marks: Vec<Mark>,
}

impl<'a> std::fmt::Display for TreeDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut starts = Vec::with_capacity(self.tree.len());
        let mut ends = Vec::with_capacity(self.tree.len());

        let mut opening_line = String::new();
        for (idx, token) in self.tree.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            ends.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        for mark in &self.marks {
            f.write_char('\n')?;
            match mark {
                Mark::Range { range, label } if !range.is_empty() => {
                    let start_col = starts[range.start];
                    let end_col = ends[range.end - 1];
                    for _ in 0..start_col {
                        f.write_char(' ')?;
                    }
                    f.write_char('╰')?;
                    for _ in (start_col + 1)..end_col.saturating_sub(1) {
                        f.write_char('─')?;
                    }
                    if end_col - start_col > 1 {
                        f.write_char('╯')?;
                    }
                    write!(f, " {}", label)?;
                }
                Mark::Range { label, .. } => {
                    write!(f, "∅ {}", label)?;
                }
                Mark::Tokens { indices, label } => {
                    let mut line = String::new();
                    for &idx in indices {
                        let col = starts[idx];
                        let width = UnicodeWidthStr::width(&*line);
                        line.extend(std::iter::repeat(' ').take(col.saturating_sub(width)));
                        line.push('╰');
                    }
                    if indices.is_empty() {
                        line.push('∅');
                    }
                    write!(f, "{}{}", line, label)?;
                }
            }
        }

        Ok(())
    }
}

impl<'a> TreeDisplay<'a> {
    pub fn new(tree: &'a DependencyTree) -> Self {
        TreeDisplay {
            tree,
            marks: Vec::new(),
        }
    }

    /// Underlines `range` and prints `value` after it.
    pub fn include<T: std::fmt::Debug>(&mut self, range: TokenRange, value: &T) {
        self.marks.push(Mark::Range {
            range,
            label: format!("{:?}", value),
        });
    }

    /// Marks each token in `indices` and prints `label` after the last one.
    pub fn include_tokens(&mut self, indices: &[usize], label: &str) {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();
        self.marks.push(Mark::Tokens {
            indices,
            label: label.to_string(),
        });
    }

    /// Takes self
    pub fn with<T: std::fmt::Debug>(mut self, range: TokenRange, value: &T) -> Self {
        self.include(range, value);
        self
    }

    /// Takes self
    pub fn with_tokens(mut self, indices: &[usize], label: &str) -> Self {
        self.include_tokens(indices, label);
        self
    }
}
