// ============================================================================
// Labeled Table
// Rows x named columns of report values
// ============================================================================

use super::index::Index;
use super::series::Series;
use crate::numeric::{NumericError, NumericResult, Value};
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-dimensional table stored column by column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    index: Index,
    columns: Vec<String>,
    data: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from a row index and named columns.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if any column's length differs from the index.
    pub fn new<S>(index: Index, columns: Vec<(S, Vec<Value>)>) -> NumericResult<Self>
    where
        S: Into<String>,
    {
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            if values.len() != index.len() {
                return Err(NumericError::LengthMismatch {
                    expected: index.len(),
                    found: values.len(),
                });
            }
            names.push(name.into());
            data.push(values);
        }

        Ok(Self {
            index,
            columns: names,
            data,
        })
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn nrows(&self) -> usize {
        self.index.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of column `name`, in row order.
    pub fn column_values(&self, name: &str) -> Option<&[Value]> {
        self.column_position(name).map(|i| self.data[i].as_slice())
    }

    /// Column `name` as a series sharing the table's row labels.
    pub fn column(&self, name: &str) -> Option<Series> {
        let values = self.column_values(name)?.to_vec();
        Series::new(self.index.clone(), values)
            .ok()
            .map(|s| s.with_name(name))
    }

    /// Replace an existing column or append a new one.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `values` does not have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> NumericResult<()> {
        if values.len() != self.nrows() {
            return Err(NumericError::LengthMismatch {
                expected: self.nrows(),
                found: values.len(),
            });
        }
        match self.column_position(name) {
            Some(i) => self.data[i] = values,
            None => {
                self.columns.push(name.to_string());
                self.data.push(values);
            }
        }
        Ok(())
    }

    pub(crate) fn column_at_mut(&mut self, position: usize) -> Option<&mut Vec<Value>> {
        self.data.get_mut(position)
    }

    pub(crate) fn position_of(&self, name: &str) -> NumericResult<usize> {
        self.column_position(name)
            .ok_or_else(|| NumericError::UnknownColumn(name.to_string()))
    }

    /// Cell at row label `row` and column `column`.
    pub fn get(&self, row: &str, column: &str) -> Option<&Value> {
        let r = self.index.position(row)?;
        self.column_values(column)?.get(r)
    }

    /// Row `row` as a series labelled by column name.
    pub fn row(&self, row: &str) -> Option<Series> {
        let r = self.index.position(row)?;
        let values = self.data.iter().map(|col| col[r].clone()).collect();
        Series::new(Index::Flat(self.columns.clone()), values)
            .ok()
            .map(|s| s.with_name(row))
    }

    /// Copy of the table with hierarchical row labels reduced to their
    /// innermost level.
    pub fn with_innermost_index(&self) -> Table {
        Table {
            index: self.index.innermost(),
            columns: self.columns.clone(),
            data: self.data.clone(),
        }
    }
}

// ============================================================================
// Place Selection
// ============================================================================

/// How many decimal places to keep per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Places {
    /// Same count for every column
    All(u32),
    /// Counts applied to columns by position; later columns are untouched
    Positional(Vec<u32>),
    /// Counts applied to columns by name; other columns are untouched
    ByName(Vec<(String, u32)>),
}

impl Places {
    /// Resolve to `(column position, places)` pairs for `table`.
    ///
    /// # Errors
    /// - `ColumnOutOfRange` if more positional counts than columns are given
    /// - `UnknownColumn` if a named column does not exist
    pub fn resolve(&self, table: &Table) -> NumericResult<Vec<(usize, u32)>> {
        match self {
            Places::All(places) => Ok((0..table.ncols()).map(|i| (i, *places)).collect()),
            Places::Positional(counts) => counts
                .iter()
                .enumerate()
                .map(|(i, places)| {
                    if i < table.ncols() {
                        Ok((i, *places))
                    } else {
                        Err(NumericError::ColumnOutOfRange(i))
                    }
                })
                .collect(),
            Places::ByName(pairs) => pairs
                .iter()
                .map(|(name, places)| table.position_of(name).map(|i| (i, *places)))
                .collect(),
        }
    }
}

impl From<u32> for Places {
    fn from(places: u32) -> Self {
        Places::All(places)
    }
}

impl From<Vec<u32>> for Places {
    fn from(places: Vec<u32>) -> Self {
        Places::Positional(places)
    }
}

impl From<&[u32]> for Places {
    fn from(places: &[u32]) -> Self {
        Places::Positional(places.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Places {
    fn from(places: [u32; N]) -> Self {
        Places::Positional(places.to_vec())
    }
}

impl From<BTreeMap<String, u32>> for Places {
    fn from(places: BTreeMap<String, u32>) -> Self {
        Places::ByName(places.into_iter().collect())
    }
}

impl From<HashMap<String, u32>> for Places {
    fn from(places: HashMap<String, u32>) -> Self {
        Places::ByName(places.into_iter().collect())
    }
}

impl From<Vec<(&str, u32)>> for Places {
    fn from(places: Vec<(&str, u32)>) -> Self {
        Places::ByName(
            places
                .into_iter()
                .map(|(name, p)| (name.to_string(), p))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            Index::flat(["r1", "r2"]),
            vec![
                ("mean", vec![Value::from(1.234), Value::from(2.5)]),
                ("sd", vec![Value::from(0.1), Value::Missing]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_lookup() {
        let t = sample();
        assert_eq!(t.nrows(), 2);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t.get("r2", "mean"), Some(&Value::Number(2.5)));
        assert_eq!(t.get("r3", "mean"), None);
        assert_eq!(t.column("sd").unwrap().name(), Some("sd"));

        let row = t.row("r1").unwrap();
        assert_eq!(row.get("sd"), Some(&Value::Number(0.1)));
    }

    #[test]
    fn test_table_length_check() {
        let result = Table::new(Index::range(2), vec![("a", vec![Value::Missing])]);
        assert!(matches!(result, Err(NumericError::LengthMismatch { .. })));
    }

    #[test]
    fn test_set_column() {
        let mut t = sample();
        t.set_column("n", vec![Value::from(10), Value::from(12)])
            .unwrap();
        assert_eq!(t.columns(), &["mean", "sd", "n"]);
        assert!(t.set_column("n", vec![]).is_err());
    }

    #[test]
    fn test_places_resolution() {
        let t = sample();
        assert_eq!(Places::from(2u32).resolve(&t).unwrap(), vec![(0, 2), (1, 2)]);
        assert_eq!(Places::from([3u32]).resolve(&t).unwrap(), vec![(0, 3)]);
        assert_eq!(
            Places::from(vec![("sd", 1u32)]).resolve(&t).unwrap(),
            vec![(1, 1)]
        );
        assert_eq!(
            Places::from([1u32, 2, 3]).resolve(&t),
            Err(NumericError::ColumnOutOfRange(2))
        );
        assert_eq!(
            Places::from(vec![("median", 1u32)]).resolve(&t),
            Err(NumericError::UnknownColumn("median".to_string()))
        );
    }

    #[test]
    fn test_innermost_index() {
        let index = Index::multi(vec![
            vec![Some("A".to_string()), Some("x".to_string())],
            vec![Some("A".to_string()), Some("y".to_string())],
        ]);
        let t = Table::new(index, vec![("v", vec![Value::from(1), Value::from(2)])]).unwrap();
        let flat = t.with_innermost_index();
        assert_eq!(flat.index(), &Index::flat(["x", "y"]));
        assert_eq!(flat.get("y", "v"), Some(&Value::from(2)));
    }
}
