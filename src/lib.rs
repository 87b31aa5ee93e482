#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Sentence model for layered temporal expression analysis.
//!
//! A sentence arrives from an external parsing collaborator as a block of
//! CoNLL-U rows. This crate turns it into an immutable [`DependencyTree`]
//! of [`Token`]s and answers the structural questions the rest of the
//! workspace asks of it: children, subtrees, left/right dependents.
//!
//! ## Usage
//!
//! ```
//! use layered_timex::DependencyTree;
//!
//! let conllu = "1\tБолеет\tболеть\tVERB\t_\t_\t0\troot\t_\t_\n\
//!               2\tдавно\tдавно\tADV\t_\t_\t1\tadvmod\t_\tSpaceAfter=No\n\
//!               3\t.\t.\tPUNCT\t_\t_\t1\tpunct\t_\t_";
//! let tree = DependencyTree::from_conllu(conllu).unwrap();
//!
//! assert_eq!(tree.root(), 0);
//! assert_eq!(tree.text(), "Болеет давно.");
//! assert_eq!(tree.children(0).collect::<Vec<_>>(), vec![1, 2]);
//! ```
//!
//! ## Architecture
//!
//! - [`Token`] carries the ten CoNLL-U columns the analysis needs, with
//!   `HEAD` already converted to a 0-based index.
//! - [`DependencyTree`] validates the head graph once (single root, no
//!   cycles, in-range heads) so that every later traversal can assume a tree.
//! - [`TokenRange`] is the half-open token interval used for spans and
//!   sub-sentence views.
//! - [`TreeDisplay`] renders a tree with underlined ranges for snapshot tests.

mod conllu;
mod errors;
mod token;
mod tree;

pub use conllu::{parse_conllu_row, split_conllu_blocks, ConlluRow};
pub use errors::{ConlluError, ConlluResult};
pub use token::{Token, CLAUSE_RELATIONS};
pub use tree::{DependencyTree, TokenRange, TreeDisplay};

#[cfg(test)]
mod tests {
    mod conllu;
    mod tree;
}
