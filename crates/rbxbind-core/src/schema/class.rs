use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::member::MemberDescriptor;
use super::tags::{self, TagSet};

/// A class in the API dump.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassDescriptor {
    pub name: String,

    /// Superclass name, or the root sentinel.
    #[serde(default)]
    pub superclass: String,

    #[serde(default)]
    pub memory_category: String,

    #[serde(default)]
    pub tags: TagSet,

    #[serde(default, deserialize_with = "deserialize_members")]
    pub members: Vec<MemberDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, superclass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: superclass.into(),
            memory_category: String::new(),
            tags: TagSet::default(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.tags.contains(tags::DEPRECATED)
    }
}

/// Members that do not parse (an unknown `MemberType`, a missing name) are
/// dropped rather than failing the whole dump.
fn deserialize_members<'de, D>(deserializer: D) -> Result<Vec<MemberDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<MemberDescriptor>(value) {
            Ok(member) => Some(member),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable member");
                None
            }
        })
        .collect())
}
