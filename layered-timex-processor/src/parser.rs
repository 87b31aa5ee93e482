use std::collections::VecDeque;

use layered_timex::split_conllu_blocks;

use crate::errors::{ProcessError, ProcessResult};

/// The outside dependency parser.
///
/// Receives prepared sentence texts and answers with one CoNLL-U block per
/// sentence, in the same order.
pub trait DependencyParser {
    fn parse_batch(&mut self, sentences: &[String]) -> ProcessResult<Vec<String>>;
}

/// Serves parses computed ahead of time, in order.
#[derive(Debug, Clone, Default)]
pub struct PreParsed {
    blocks: VecDeque<String>,
    batches: Vec<usize>,
}

impl PreParsed {
    pub fn new(blocks: Vec<String>) -> Self {
        PreParsed {
            blocks: blocks.into(),
            batches: Vec::new(),
        }
    }

    /// One block per sentence of a CoNLL-U document.
    pub fn from_conllu(document: &str) -> Self {
        PreParsed::new(split_conllu_blocks(document))
    }

    /// Blocks not yet handed out.
    pub fn remaining(&self) -> usize {
        self.blocks.len()
    }

    /// Sizes of the batches asked for so far.
    pub fn batches(&self) -> &[usize] {
        &self.batches
    }
}

impl DependencyParser for PreParsed {
    fn parse_batch(&mut self, sentences: &[String]) -> ProcessResult<Vec<String>> {
        self.batches.push(sentences.len());
        if self.blocks.len() < sentences.len() {
            return Err(ProcessError::Parser {
                message: format!(
                    "{} sentences asked for, {} parses left",
                    sentences.len(),
                    self.blocks.len()
                ),
            });
        }
        Ok(self.blocks.drain(..sentences.len()).collect())
    }
}
