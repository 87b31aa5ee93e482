//! CoNLL-U reading.
//!
//! Only the subset of the format produced by the parsing collaborator is
//! understood: ten tab-separated columns per word, `#` comment lines, and
//! blank lines between sentences. Multiword (`1-2`) and empty (`1.1`) nodes
//! are skipped.

use crate::errors::{ConlluError, ConlluResult};

const COLUMNS: usize = 10;

/// One word row, still in CoNLL-U terms (1-based ids and heads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluRow {
    pub id: usize,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
    /// `None` for `0` or `_`, meaning the row is the root.
    pub head: Option<usize>,
    pub deprel: String,
    pub misc: String,
}

/// Parses a single row.
///
/// Returns `Ok(None)` for rows that carry no word of their own: comments,
/// blank lines, multiword ranges and empty nodes. `line` is the 1-based line
/// number reported in errors.
pub fn parse_conllu_row(row: &str, line: usize) -> ConlluResult<Option<ConlluRow>> {
    let row = row.trim_end_matches('\r');
    if row.trim().is_empty() || row.starts_with('#') {
        return Ok(None);
    }

    let columns: Vec<&str> = row.split('\t').collect();
    if columns.len() != COLUMNS {
        return Err(ConlluError::ColumnCount {
            line,
            found: columns.len(),
        });
    }

    let raw_id = columns[0];
    if raw_id.contains('.') || raw_id.contains('-') {
        return Ok(None);
    }
    let id = match raw_id.parse::<usize>() {
        Ok(id) if id > 0 => id,
        _ => {
            return Err(ConlluError::InvalidId {
                line,
                value: raw_id.to_string(),
            })
        }
    };

    let head = match columns[6] {
        "0" | "_" => None,
        raw => match raw.parse::<usize>() {
            Ok(head) if head > 0 => Some(head),
            _ => {
                return Err(ConlluError::InvalidHead {
                    line,
                    value: raw.to_string(),
                })
            }
        },
    };

    Ok(Some(ConlluRow {
        id,
        form: columns[1].to_string(),
        lemma: columns[2].to_string(),
        upos: columns[3].to_string(),
        xpos: columns[4].to_string(),
        feats: columns[5].to_string(),
        head,
        deprel: columns[7].to_string(),
        misc: columns[9].to_string(),
    }))
}

/// Splits a multi-sentence CoNLL-U document on blank lines.
pub fn split_conllu_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
