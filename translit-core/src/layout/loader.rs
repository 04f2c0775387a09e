use std::collections::HashMap;

use serde_json::Value;

use super::error::{LayoutError, Result};
use crate::types::{ConversionEntry, Layout, LayoutSummary};

/// A record for one layout, still holding the raw table JSON.
#[derive(Debug, Default, Clone)]
struct LayoutRecord {
    description: Option<String>,
    case_sensitive: Option<String>,
    table_json: Option<String>,
}

/// A parsed layout data file.
///
/// Parsing splits the file into per-layout records; table JSON is validated
/// lazily when a layout is requested, so one broken layout does not poison
/// the rest of the file.
#[derive(Debug, Default)]
pub struct LayoutFile {
    records: HashMap<String, LayoutRecord>,
}

impl LayoutFile {
    /// Parse the line-oriented layout data format.
    pub fn parse(text: &str) -> Self {
        let mut records: HashMap<String, LayoutRecord> = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(eq) = line.find('=') else { continue };
            let (lhs, value) = (&line[..eq], &line[eq + 1..]);
            let Some(dot) = lhs.find('.') else { continue };
            let (name, key) = (&lhs[..dot], &lhs[dot + 1..]);
            if name.is_empty() {
                continue;
            }

            let record = records.entry(name.to_string()).or_default();
            // First occurrence of each key wins, matching table entry policy
            match key {
                "description" if record.description.is_none() => {
                    record.description = Some(value.to_string());
                }
                "case_sensitive" if record.case_sensitive.is_none() => {
                    record.case_sensitive = Some(value.to_string());
                }
                "layout" if record.table_json.is_none() => {
                    record.table_json = Some(value.to_string());
                }
                _ => {}
            }
        }

        Self { records }
    }

    /// Resolve one layout by name, validating its table.
    pub fn layout(&self, name: &str) -> Result<Layout> {
        let record = self
            .records
            .get(name)
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))?;

        let missing = |key| LayoutError::MissingKey {
            layout: name.to_string(),
            key,
        };
        let description = record.description.clone().ok_or_else(|| missing("description"))?;
        let case_flag = record
            .case_sensitive
            .as_deref()
            .ok_or_else(|| missing("case_sensitive"))?;
        let table_json = record.table_json.as_deref().ok_or_else(|| missing("layout"))?;

        let case_sensitive = match case_flag.trim() {
            "true" => true,
            "false" => false,
            other => {
                return Err(LayoutError::BadCaseFlag {
                    layout: name.to_string(),
                    value: other.to_string(),
                })
            }
        };

        let table = parse_table_json(table_json)?;
        log::debug!("loaded layout '{}' with {} entries", name, table.len());

        Ok(Layout {
            name: name.to_string(),
            description,
            case_sensitive,
            table,
        })
    }

    /// List every layout that carries a description, sorted by description.
    pub fn list(&self) -> Vec<LayoutSummary> {
        let mut result: Vec<LayoutSummary> = self
            .records
            .iter()
            .filter_map(|(name, record)| {
                record.description.as_ref().map(|description| LayoutSummary {
                    name: name.clone(),
                    description: description.clone(),
                })
            })
            .collect();
        result.sort_by(|a, b| a.description.cmp(&b.description));
        result
    }
}

/// Parse and validate a JSON conversion table.
///
/// Each row must be `[source, target]` or `[source, target, special]`;
/// anything else fails the whole table, never producing a partial one.
pub fn parse_table_json(json: &str) -> Result<Vec<ConversionEntry>> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let mut table = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let entry = parse_row(row).map_err(|reason| LayoutError::InvalidEntry { index, reason })?;
        table.push(entry);
    }

    Ok(table)
}

fn parse_row(row: &Value) -> std::result::Result<ConversionEntry, String> {
    let items = row.as_array().ok_or_else(|| "entry is not an array".to_string())?;
    if items.len() < 2 || items.len() > 3 {
        return Err(format!("expected 2 or 3 elements, got {}", items.len()));
    }

    let source = items[0]
        .as_str()
        .ok_or_else(|| "source is not a string".to_string())?;
    let target = items[1]
        .as_str()
        .ok_or_else(|| "target is not a string".to_string())?;
    let special_case = match items.get(2) {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err("special flag is not a boolean".to_string()),
    };

    Ok(ConversionEntry {
        source: source.to_string(),
        target: target.to_string(),
        special_case,
    })
}
