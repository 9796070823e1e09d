use std::collections::BTreeMap;

use serde::Deserialize;

use super::class::ClassDescriptor;
use super::enums::EnumDescriptor;
use crate::error::Result;

/// The loaded API dump.
///
/// Classes live in an arena indexed by name; superclass links stay name keys
/// and are resolved through the index. Nothing here is mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    classes: Vec<ClassDescriptor>,
    index: BTreeMap<String, usize>,
    enums: Vec<EnumDescriptor>,
    version: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDump {
    #[serde(default)]
    classes: Vec<ClassDescriptor>,
    #[serde(default)]
    enums: Vec<EnumDescriptor>,
    #[serde(default)]
    version: i64,
}

impl Schema {
    /// Build a schema from already-parsed descriptors.
    ///
    /// Class names are assumed unique; if a name repeats, the first
    /// occurrence wins.
    pub fn new(classes: Vec<ClassDescriptor>, enums: Vec<EnumDescriptor>, version: i64) -> Self {
        let mut index = BTreeMap::new();
        for (i, class) in classes.iter().enumerate() {
            if index.contains_key(&class.name) {
                tracing::warn!(class = %class.name, "Duplicate class name in dump");
                continue;
            }
            index.insert(class.name.clone(), i);
        }

        Self {
            classes,
            index,
            enums,
            version,
        }
    }

    /// Parse the API dump JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDump = serde_json::from_str(json)?;
        let schema = Self::new(raw.classes, raw.enums, raw.version);
        tracing::debug!(
            classes = schema.class_count(),
            enums = schema.enums.len(),
            version = schema.version,
            "Loaded API dump"
        );
        Ok(schema)
    }

    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.index.get(name).map(|&i| &self.classes[i])
    }

    /// Check whether a name refers to a real class in the dump.
    pub fn contains_class(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The superclass of a class, if it names a real class.
    pub fn superclass_of(&self, class: &ClassDescriptor) -> Option<&ClassDescriptor> {
        self.class(&class.superclass)
    }

    /// All classes, ordered by name.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.index.values().map(|&i| &self.classes[i])
    }

    pub fn class_count(&self) -> usize {
        self.index.len()
    }

    /// All enums, in dump order.
    pub fn enums(&self) -> &[EnumDescriptor] {
        &self.enums
    }

    pub fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Zebra", "Instance"),
                ClassDescriptor::new("Instance", "<<<ROOT>>>"),
                ClassDescriptor::new("Apple", "Instance"),
            ],
            vec![],
            1,
        );

        assert!(schema.contains_class("Apple"));
        assert!(!schema.contains_class("<<<ROOT>>>"));

        let names: Vec<_> = schema.classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Instance", "Zebra"]);

        let zebra = schema.class("Zebra").unwrap();
        assert_eq!(schema.superclass_of(zebra).map(|c| c.name.as_str()), Some("Instance"));
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Dup", "A"),
                ClassDescriptor::new("Dup", "B"),
            ],
            vec![],
            0,
        );
        assert_eq!(schema.class_count(), 1);
        assert_eq!(schema.class("Dup").unwrap().superclass, "A");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "Version": 1,
            "Classes": [
                {"Name": "Instance", "Superclass": "<<<ROOT>>>", "Members": [
                    {"MemberType": "Property", "Name": "Name",
                     "ValueType": {"Category": "Primitive", "Name": "string"},
                     "Security": {"Read": "None", "Write": "None"}, "Tags": []}
                ]}
            ],
            "Enums": [{"Name": "Axis", "Items": [{"Name": "X", "Value": 0}]}]
        }"#;

        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.version(), 1);
        assert_eq!(schema.class("Instance").unwrap().members.len(), 1);
        assert_eq!(schema.enums()[0].name, "Axis");
    }

    #[test]
    fn test_from_json_rejects_non_json() {
        assert!(Schema::from_json("not json").is_err());
    }
}
