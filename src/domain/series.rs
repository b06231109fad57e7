// ============================================================================
// Labeled Series
// Ordered one-dimensional sequence of values with row labels
// ============================================================================

use super::index::Index;
use crate::numeric::{NumericError, NumericResult, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered values paired 1:1 with row labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    name: Option<String>,
    index: Index,
    values: Vec<Value>,
}

impl Series {
    /// Create a series, checking that every value has a label.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `index` and `values` differ in length.
    pub fn new(index: Index, values: Vec<Value>) -> NumericResult<Self> {
        if index.len() != values.len() {
            return Err(NumericError::LengthMismatch {
                expected: index.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            name: None,
            index,
            values,
        })
    }

    /// Series with positional labels `"0"`, `"1"`, ...
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self {
            name: None,
            index: Index::range(values.len()),
            values,
        }
    }

    /// Series from `(label, value)` pairs.
    pub fn from_pairs<I, S, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        let (labels, values): (Vec<String>, Vec<Value>) = pairs
            .into_iter()
            .map(|(label, value)| (label.into(), value.into()))
            .unzip();
        Self {
            name: None,
            index: Index::Flat(labels),
            values,
        }
    }

    /// Builder method: Set the series name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at the row labelled `label`.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.index.position(label).and_then(|i| self.values.get(i))
    }

    /// Value at row position `i`.
    pub fn iloc(&self, i: usize) -> Option<&Value> {
        self.values.get(i)
    }

    /// `(label, value)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> + '_ {
        self.index.labels().into_iter().zip(self.values.iter())
    }

    /// Transform every value, keeping labels, order and name.
    pub fn map<F>(&self, f: F) -> Series
    where
        F: FnMut(&Value) -> Value,
    {
        Series {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.iter().map(f).collect(),
        }
    }

    /// Replace the row labels.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the new index has a different length.
    pub fn with_index(mut self, index: Index) -> NumericResult<Self> {
        if index.len() != self.values.len() {
            return Err(NumericError::LengthMismatch {
                expected: self.values.len(),
                found: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_uses_positions() {
        let s = Series::from_values([1.0, 2.0]);
        assert_eq!(s.index(), &Index::range(2));
        assert_eq!(s.get("1"), Some(&Value::Number(2.0)));
        assert_eq!(s.get("2"), None);
    }

    #[test]
    fn test_new_checks_length() {
        let result = Series::new(Index::flat(["a"]), vec![Value::Missing, Value::Missing]);
        assert_eq!(
            result,
            Err(NumericError::LengthMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_map_preserves_labels() {
        let s = Series::from_pairs([("x", 1.0), ("y", 2.0)]).with_name("score");
        let doubled = s.map(|v| Value::from(v.as_f64().unwrap_or(0.0) * 2.0));

        assert_eq!(doubled.name(), Some("score"));
        assert_eq!(doubled.index(), s.index());
        assert_eq!(doubled.get("y"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn test_iter_pairs() {
        let s = Series::from_pairs([("a", "1"), ("b", "2")]);
        let pairs: Vec<(String, String)> = s.iter().map(|(l, v)| (l, v.to_string())).collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }
}
