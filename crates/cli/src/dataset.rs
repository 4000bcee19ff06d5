use std::path::Path;

use anyhow::{bail, Context, Result};
use cellsense_classify::FieldDescriptor;
use cellsense_core::{FieldValue, MAX_SAMPLE_LIMIT};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

/// One data row: field name → value, in file order.
pub type Row = IndexMap<String, FieldValue>;

#[derive(Debug, Deserialize)]
struct RawDataset {
    fields: Vec<FieldDescriptor>,
    #[serde(default)]
    rows: Vec<IndexMap<String, serde_json::Value>>,
}

/// Field descriptors plus rows read from a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub fields: Vec<FieldDescriptor>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid dataset: {}", path.display()))
    }

    pub fn parse(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json).context("failed to parse JSON")?;
        if raw.fields.is_empty() {
            bail!("dataset declares no fields");
        }

        let rows = raw
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                    .collect()
            })
            .collect();
        let dataset = Self {
            fields: raw.fields,
            rows,
        };
        debug!(
            fields = dataset.fields.len(),
            rows = dataset.rows.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Leading values of `field`, at most [`MAX_SAMPLE_LIMIT`]. Rows without
    /// the field contribute nothing.
    pub fn samples(&self, field: &str) -> Vec<FieldValue> {
        self.rows
            .iter()
            .filter_map(|row| row.get(field).cloned())
            .take(MAX_SAMPLE_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = r#"{
        "fields": [
            { "name": "Status", "type": "string" },
            { "name": "Amount", "type": "decimal" }
        ],
        "rows": [
            { "Status": "Active", "Amount": 12.5 },
            { "Status": "Pending" },
            { "Status": null, "Amount": 3 }
        ]
    }"#;

    #[test]
    fn test_parse_rows_and_samples() {
        let data = Dataset::parse(ORDERS).unwrap();
        assert_eq!(data.fields.len(), 2);
        assert_eq!(data.rows.len(), 3);
        assert_eq!(
            data.samples("Amount"),
            vec![FieldValue::Float(12.5), FieldValue::Integer(3)]
        );
        assert_eq!(data.samples("Status")[2], FieldValue::Null);
        assert_eq!(data.field("status").map(|f| f.name.as_str()), Some("Status"));
    }

    #[test]
    fn test_samples_are_capped() {
        let rows: Vec<String> = (0..25).map(|i| format!(r#"{{ "n": {} }}"#, i)).collect();
        let json = format!(r#"{{ "fields": [{{ "name": "n" }}], "rows": [{}] }}"#, rows.join(","));
        let data = Dataset::parse(&json).unwrap();
        assert_eq!(data.samples("n").len(), MAX_SAMPLE_LIMIT);
    }

    #[test]
    fn test_rejects_empty_field_list() {
        let err = Dataset::parse(r#"{ "fields": [] }"#).unwrap_err();
        assert!(err.to_string().contains("no fields"));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Dataset::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }
}
