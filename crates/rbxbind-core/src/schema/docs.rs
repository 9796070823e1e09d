//! Documentation payload.
//!
//! Keys are composed strings such as `@roblox/globaltype/Part` or
//! `@roblox/globaltype/Part.Anchored`. Every lookup is optional: callers
//! synthesize fallback text when an entry is missing or empty.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// Documentation for one class, member, or enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocEntry {
    #[serde(default)]
    pub documentation: String,

    #[serde(default)]
    pub learn_more_link: Option<String>,

    #[serde(default)]
    pub params: Vec<DocParam>,

    #[serde(default, deserialize_with = "deserialize_returns")]
    pub returns: Vec<DocReturn>,
}

impl DocEntry {
    pub fn new(documentation: impl Into<String>) -> Self {
        Self {
            documentation: documentation.into(),
            ..Default::default()
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, documentation: impl Into<String>) -> Self {
        self.params.push(DocParam {
            name: name.into(),
            documentation: documentation.into(),
        });
        self
    }

    pub fn with_return(mut self, documentation: impl Into<String>) -> Self {
        self.returns.push(DocReturn {
            documentation: documentation.into(),
            name: None,
        });
        self
    }

    /// Summary text, if non-blank.
    pub fn summary(&self) -> Option<&str> {
        let text = self.documentation.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocParam {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub documentation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocReturn {
    pub documentation: String,
    pub name: Option<String>,
}

/// Returns are either documentation-key strings or
/// `{"documentation": .., "name": ..}` objects.
fn deserialize_returns<'de, D>(deserializer: D) -> std::result::Result<Vec<DocReturn>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(DocReturn {
                documentation: s.clone(),
                name: None,
            }),
            Value::Object(map) => Some(DocReturn {
                documentation: map
                    .get("documentation")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                name: map.get("name").and_then(Value::as_str).map(String::from),
            }),
            _ => None,
        })
        .collect())
}

/// All documentation entries, keyed by composed string.
#[derive(Debug, Clone, Default)]
pub struct DocMap {
    entries: HashMap<String, DocEntry>,
}

impl DocMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the documentation JSON. Entries that do not have the expected
    /// shape are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Value> = serde_json::from_str(json)?;
        let mut skipped = 0usize;
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<DocEntry>(value) {
                Ok(entry) => Some((key, entry)),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect::<HashMap<_, _>>();

        if skipped > 0 {
            tracing::debug!(skipped, "Skipped malformed documentation entries");
        }

        Ok(Self { entries })
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: DocEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&DocEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doc_map() {
        let json = r#"{
            "@roblox/globaltype/Part": {"documentation": "A physical brick."},
            "@roblox/globaltype/Part.Resize": {
                "documentation": "Grows the part.",
                "params": [{"name": "normalId", "documentation": "Face to grow."}],
                "returns": ["@roblox/globaltype/Part.Resize/return/0", {"documentation": "Whether it grew.", "name": "ok"}]
            },
            "@roblox/globaltype/Broken": 12
        }"#;

        let docs = DocMap::from_json(json).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(
            docs.get("@roblox/globaltype/Part").and_then(DocEntry::summary),
            Some("A physical brick.")
        );

        let resize = docs.get("@roblox/globaltype/Part.Resize").unwrap();
        assert_eq!(resize.params[0].name, "normalId");
        assert_eq!(resize.returns.len(), 2);
        assert_eq!(resize.returns[1].name.as_deref(), Some("ok"));
    }

    #[test]
    fn test_blank_summary_is_none() {
        assert_eq!(DocEntry::new("   ").summary(), None);
    }
}
