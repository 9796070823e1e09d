//! Tag normalization.
//!
//! The dump stores tags as a heterogeneous list: most entries are plain
//! strings, a few are single-level objects such as
//! `{"PreferredDescriptorName": "Foo"}`. Object entries contribute their key
//! names; values are discarded. Anything else is skipped.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEPRECATED: &str = "Deprecated";
pub const NOT_SCRIPTABLE: &str = "NotScriptable";
pub const HIDDEN: &str = "Hidden";
pub const READ_ONLY: &str = "ReadOnly";
pub const WRITE_ONLY: &str = "WriteOnly";
pub const CAN_YIELD: &str = "CanYield";
pub const YIELDS: &str = "Yields";
pub const NO_YIELD: &str = "NoYield";

/// A normalized, immutable set of tag names.
///
/// Built once when the owning descriptor is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Normalize a raw tag list.
    pub fn from_raw(raw: &[Value]) -> Self {
        let mut tags = BTreeSet::new();
        for entry in raw {
            match entry {
                Value::String(s) => {
                    tags.insert(s.clone());
                }
                Value::Object(map) => {
                    tags.extend(map.keys().cloned());
                }
                _ => {}
            }
        }
        Self(tags)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A non-list value is as malformed as a bad entry: treat it as empty.
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(entries) => TagSet::from_raw(&entries),
            _ => TagSet::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_object_tags_normalize_identically() {
        let plain = TagSet::from_raw(&[json!("Deprecated")]);
        let object = TagSet::from_raw(&[json!({"Deprecated": true})]);
        assert_eq!(plain, object);
        assert_eq!(plain.len(), 1);
        assert!(plain.contains(DEPRECATED));
    }

    #[test]
    fn test_object_tag_contributes_every_key() {
        let tags = TagSet::from_raw(&[
            json!("ReadOnly"),
            json!({"PreferredDescriptorName": "Size", "ThreadSafe": false}),
        ]);
        let names: Vec<_> = tags.iter().collect();
        assert_eq!(names, vec!["PreferredDescriptorName", "ReadOnly", "ThreadSafe"]);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let tags = TagSet::from_raw(&[json!(7), json!(null), json!(["Hidden"]), json!("Hidden")]);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Hidden"]);
    }

    #[test]
    fn test_deserialize_non_list_is_empty() {
        let tags: TagSet = serde_json::from_value(json!("NotAList")).unwrap();
        assert!(tags.is_empty());

        let tags: TagSet = serde_json::from_value(json!(["Hidden", {"NoYield": 1}])).unwrap();
        assert!(tags.contains(HIDDEN));
        assert!(tags.contains(NO_YIELD));
    }
}
