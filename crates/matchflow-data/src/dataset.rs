use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::DataError;

/// An in-memory table: named columns over rows of JSON cells.
///
/// Rows are rectangular (every row has one cell per column). Cells start out
/// as strings when loaded from CSV; [`Dataset::coerce_numeric`] reparses a
/// column in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
  columns: Vec<String>,
  rows: Vec<Vec<Value>>,
}

impl Dataset {
  /// Build a dataset from columns and rows, rejecting ragged rows.
  pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, DataError> {
    for (i, row) in rows.iter().enumerate() {
      if row.len() != columns.len() {
        return Err(DataError::RaggedRow {
          row: i,
          expected: columns.len(),
          actual: row.len(),
        });
      }
    }
    Ok(Self { columns, rows })
  }

  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  pub fn rows(&self) -> &[Vec<Value>] {
    &self.rows
  }

  /// (row count, column count).
  pub fn shape(&self) -> (usize, usize) {
    (self.rows.len(), self.columns.len())
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
    self
      .columns
      .iter()
      .position(|c| c == name)
      .ok_or_else(|| DataError::MissingColumn(name.to_string()))
  }

  /// All cells of a column, top to bottom.
  pub fn column(&self, name: &str) -> Result<Vec<&Value>, DataError> {
    let idx = self.column_index(name)?;
    Ok(self.rows.iter().map(|row| &row[idx]).collect())
  }

  /// The first `n` rows as a new dataset.
  pub fn head(&self, n: usize) -> Dataset {
    Dataset {
      columns: self.columns.clone(),
      rows: self.rows.iter().take(n).cloned().collect(),
    }
  }

  /// Reparse a column's cells as numbers, in place.
  ///
  /// Cells that are already numbers are kept; strings are trimmed and parsed
  /// as f64. Anything unparseable becomes null rather than an error.
  pub fn coerce_numeric(&mut self, name: &str) -> Result<(), DataError> {
    let idx = self.column_index(name)?;
    let mut nulled = 0usize;

    for row in &mut self.rows {
      let coerced = match &row[idx] {
        Value::Number(_) => continue,
        Value::String(s) => s
          .trim()
          .parse::<f64>()
          .ok()
          .and_then(serde_json::Number::from_f64)
          .map(Value::Number),
        _ => None,
      };
      if coerced.is_none() {
        nulled += 1;
      }
      row[idx] = coerced.unwrap_or(Value::Null);
    }

    if nulled > 0 {
      debug!(column = %name, cells = nulled, "non_numeric_cells_nulled");
    }
    Ok(())
  }

  /// A column's cells as f64, null and non-numeric cells as None.
  pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DataError> {
    let idx = self.column_index(name)?;
    Ok(self.rows.iter().map(|row| row[idx].as_f64()).collect())
  }

  /// Append a derived column.
  pub fn push_column(&mut self, name: &str, values: Vec<Value>) -> Result<(), DataError> {
    if self.columns.iter().any(|c| c == name) {
      return Err(DataError::DuplicateColumn(name.to_string()));
    }
    if values.len() != self.rows.len() {
      return Err(DataError::ShapeMismatch {
        column: name.to_string(),
        expected: self.rows.len(),
        actual: values.len(),
      });
    }

    self.columns.push(name.to_string());
    for (row, value) in self.rows.iter_mut().zip(values) {
      row.push(value);
    }
    Ok(())
  }

  /// Rows whose cell in `name` is the string `value`; all columns preserved.
  pub fn filter_eq(&self, name: &str, value: &str) -> Result<Dataset, DataError> {
    let idx = self.column_index(name)?;
    Ok(Dataset {
      columns: self.columns.clone(),
      rows: self
        .rows
        .iter()
        .filter(|row| row[idx].as_str() == Some(value))
        .cloned()
        .collect(),
    })
  }

  /// Distinct values of a column with their occurrence counts, most frequent
  /// first (ties broken by label).
  pub fn value_counts(&self, name: &str) -> Result<Vec<(String, usize)>, DataError> {
    let idx = self.column_index(name)?;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &self.rows {
      *counts.entry(cell_text(&row[idx])).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(counts)
  }

  /// Grouped counts over a pair of columns, most frequent first.
  pub fn pair_counts(
    &self,
    left: &str,
    right: &str,
  ) -> Result<Vec<(String, String, usize)>, DataError> {
    let left_idx = self.column_index(left)?;
    let right_idx = self.column_index(right)?;

    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    for row in &self.rows {
      let key = (cell_text(&row[left_idx]), cell_text(&row[right_idx]));
      *counts.entry(key).or_default() += 1;
    }

    let mut counts: Vec<(String, String, usize)> = counts
      .into_iter()
      .map(|((l, r), n)| (l, r, n))
      .collect();
    counts.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| (&a.0, &a.1).cmp(&(&b.0, &b.1))));
    Ok(counts)
  }

  /// Inferred type of each column, from its non-null cells.
  pub fn column_types(&self) -> Vec<(String, &'static str)> {
    self
      .columns
      .iter()
      .enumerate()
      .map(|(idx, name)| {
        let mut ty: Option<&'static str> = None;
        for row in &self.rows {
          let cell_ty = match &row[idx] {
            Value::Null => continue,
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            _ => "other",
          };
          match ty {
            None => ty = Some(cell_ty),
            Some(t) if t == cell_ty => {}
            Some(_) => {
              ty = Some("mixed");
              break;
            }
          }
        }
        (name.clone(), ty.unwrap_or("null"))
      })
      .collect()
  }
}

/// Plain-text rendering of a cell: strings unquoted, everything else as JSON.
pub fn cell_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
