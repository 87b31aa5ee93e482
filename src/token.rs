use serde::Serialize;

/// Dependency relations that introduce a coordinate, paratactic, relative or
/// adverbial clause.
pub const CLAUSE_RELATIONS: &[&str] = &["conj", "parataxis", "acl:relcl", "advcl"];

const BRACKETS: &[&str] = &["(", ")", "[", "]", "{", "}", "«", "»", "<", ">"];

/// One word of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Position in the sentence, 0-based.
    pub index: usize,
    /// Surface form (FORM).
    pub text: String,
    /// Dictionary form (LEMMA).
    pub lemma: String,
    /// Coarse universal tag (UPOS).
    pub pos: String,
    /// Fine-grained tag (XPOS, or UPOS when XPOS is absent).
    pub tag: String,
    /// Morphological features (FEATS), empty when absent.
    pub feats: String,
    /// Index of the syntactic head; equal to `index` for the root.
    pub head: usize,
    /// Dependency relation, with `root` spelled `ROOT`.
    pub deprel: String,
    /// Whether whitespace follows the token in the original text.
    pub space_after: bool,
}

impl Token {
    /// Builds a token with the tag mirroring `pos` and whitespace after it.
    ///
    /// Handy for assembling trees by hand; readers of real parser output go
    /// through [`DependencyTree::from_conllu`](crate::DependencyTree::from_conllu).
    pub fn new(index: usize, text: &str, lemma: &str, pos: &str, head: usize, deprel: &str) -> Self {
        Token {
            index,
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            tag: pos.to_string(),
            feats: String::new(),
            head,
            deprel: deprel.to_string(),
            space_after: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.head == self.index
    }

    pub fn has_pos(&self, tags: &[&str]) -> bool {
        tags.contains(&self.pos.as_str())
    }

    pub fn has_lemma(&self, lemmas: &[&str]) -> bool {
        lemmas.contains(&self.lemma.as_str())
    }

    pub fn has_deprel(&self, relations: &[&str]) -> bool {
        relations.contains(&self.deprel.as_str())
    }

    /// True when the token attaches a whole clause to its head.
    pub fn is_clause_head(&self) -> bool {
        self.has_deprel(CLAUSE_RELATIONS)
    }

    pub fn is_bracket(&self) -> bool {
        BRACKETS.contains(&self.text.as_str())
    }

    /// Digits only, like `1998` or `3`.
    pub fn is_digit(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_digit())
    }
}
