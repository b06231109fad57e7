// ============================================================================
// Row Index
// Flat and hierarchical row labels
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row's hierarchical label; `None` marks a missing component.
pub type LabelTuple = SmallVec<[Option<String>; 4]>;

/// Row labels of a series or table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Index {
    /// One label per row
    Flat(Vec<String>),
    /// One tuple of level components per row
    Multi(Vec<LabelTuple>),
}

impl Index {
    /// Positional labels `"0"`, `"1"`, ... for `len` rows.
    pub fn range(len: usize) -> Self {
        Index::Flat((0..len).map(|i| i.to_string()).collect())
    }

    /// Flat index from anything string-like.
    pub fn flat<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Index::Flat(labels.into_iter().map(Into::into).collect())
    }

    /// Hierarchical index from per-row component lists.
    pub fn multi<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<String>>,
    {
        Index::Multi(rows.into_iter().map(|row| row.into_iter().collect()).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Index::Flat(labels) => labels.len(),
            Index::Multi(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Index::Multi(_))
    }

    /// Flat label of row `i`; hierarchical rows are shown compressed.
    pub fn label(&self, i: usize) -> Option<String> {
        match self {
            Index::Flat(labels) => labels.get(i).cloned(),
            Index::Multi(rows) => rows.get(i).map(|row| compress_tuple(row)),
        }
    }

    /// All row labels in order, compressed where hierarchical.
    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.label(i)).collect()
    }

    /// Position of the first row whose (compressed) label equals `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        match self {
            Index::Flat(labels) => labels.iter().position(|label| label == key),
            Index::Multi(rows) => rows.iter().position(|row| compress_tuple(row) == key),
        }
    }

    /// Keep only the innermost level, dropping outer levels one at a time.
    ///
    /// Missing innermost components become empty labels.
    pub fn innermost(&self) -> Index {
        match self {
            Index::Flat(_) => self.clone(),
            Index::Multi(rows) => Index::Flat(
                rows.iter()
                    .map(|row| row.last().cloned().flatten().unwrap_or_default())
                    .collect(),
            ),
        }
    }
}

/// Flatten a hierarchical index into one string label per row.
///
/// Each row's non-missing components are concatenated with no separator.
/// A flat index is returned unchanged.
pub fn compress_labels(index: &Index) -> Index {
    match index {
        Index::Flat(_) => index.clone(),
        Index::Multi(rows) => Index::Flat(rows.iter().map(|row| compress_tuple(row)).collect()),
    }
}

fn compress_tuple(row: &[Option<String>]) -> String {
    row.iter().flatten().map(String::as_str).collect()
}
