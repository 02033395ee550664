//! Column-oriented view over flattened query results.
//!
//! A [`Frame`] keeps ordered column names and rows of JSON cells. Subgraphs
//! return `BigInt` and `BigDecimal` fields as strings, so numeric accessors
//! coerce both JSON numbers and numeric strings.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::error::{PolygraphError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with `null`, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PolygraphError::MissingColumn(name.to_string()))
    }

    pub fn cell(&self, row: usize, column: &str) -> Result<&Value> {
        let idx = self.column_index(column)?;
        Ok(self
            .rows
            .get(row)
            .and_then(|r| r.get(idx))
            .unwrap_or(&Value::Null))
    }

    /// All cells of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// A column coerced to `f64`. Null or non-numeric cells become `0.0`.
    pub fn f64_column(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self
            .column(name)?
            .into_iter()
            .map(|v| as_f64(v).unwrap_or(0.0))
            .collect())
    }

    /// A column rendered as display strings (`null` becomes empty).
    pub fn str_column(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.column(name)?.into_iter().map(display).collect())
    }

    /// Rename every column through `f`.
    pub fn rename_columns<F>(&mut self, f: F)
    where
        F: Fn(&str) -> String,
    {
        self.columns = self.columns.iter().map(|c| f(c.as_str())).collect();
    }

    /// Strip `prefix` from every column that carries it.
    pub fn strip_prefix(&mut self, prefix: &str) {
        self.rename_columns(|c| c.strip_prefix(prefix).unwrap_or(c).to_string());
    }

    /// Keep rows for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Value]) -> bool,
    {
        self.rows.retain(|r| keep(r.as_slice()));
    }

    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Stable sort by the display string of one column, descending.
    pub fn sort_desc_by(&mut self, column: &str) -> Result<()> {
        let idx = self.column_index(column)?;
        self.rows
            .sort_by(|a, b| compare_display(&b[idx], &a[idx]));
        Ok(())
    }

    /// Render as a pipe table with a leading index column.
    pub fn to_markdown(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let mut header = vec![String::new()];
        header.extend(self.columns.iter().cloned());
        lines.push(format!("| {} |", header.join(" | ")));

        let mut rule = vec!["---:".to_string()];
        rule.extend(self.columns.iter().map(|_| ":---".to_string()));
        lines.push(format!("|{}|", rule.join("|")));

        for (i, row) in self.rows.iter().enumerate() {
            let mut cells = vec![i.to_string()];
            cells.extend(row.iter().map(|v| display(v).replace('|', "\\|")));
            lines.push(format!("| {} |", cells.join(" | ")));
        }

        lines.join("\n")
    }
}

/// Coerce a JSON number or numeric string to `f64`.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a JSON number or integer string to `i64`.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_display(a: &Value, b: &Value) -> Ordering {
    display(a).cmp(&display(b))
}
