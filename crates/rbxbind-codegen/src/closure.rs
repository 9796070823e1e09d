//! Stub closure over the Base tier.
//!
//! Only classes with Base-visible members get full declarations. Any real
//! class those declarations inherit from or mention, and that would otherwise
//! be missing from the output, gets an empty stub declaration instead.

use std::collections::BTreeSet;

use rbxbind_core::config::GeneratorConfig;
use rbxbind_core::visibility::{has_visible_members, is_member_visible, Tier};
use rbxbind_core::Schema;
use tracing::debug;

/// Result of closure resolution: the generated set and the stub set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    generated: BTreeSet<String>,
    stubs: BTreeSet<String>,
}

impl Closure {
    pub fn resolve(schema: &Schema, config: &GeneratorConfig) -> Self {
        let generated: BTreeSet<String> = schema
            .classes()
            .filter(|c| !config.is_root_sentinel(&c.name) && !config.is_hand_authored(&c.name))
            .filter(|c| has_visible_members(c, Tier::Base))
            .map(|c| c.name.clone())
            .collect();

        let mut stubs = BTreeSet::new();

        let eligible = |name: &str, stubs: &BTreeSet<String>| {
            !config.is_root_sentinel(name)
                && schema.contains_class(name)
                && !generated.contains(name)
                && !stubs.contains(name)
                && !config.is_hand_authored(name)
        };

        for name in &generated {
            let Some(class) = schema.class(name) else {
                continue;
            };

            let candidates = std::iter::once(class.superclass.as_str()).chain(
                class
                    .members
                    .iter()
                    .filter(|m| is_member_visible(m, Tier::Base))
                    .flat_map(|m| m.referenced_types())
                    .filter_map(|t| t.class_name()),
            );

            for candidate in candidates {
                if eligible(candidate, &stubs) {
                    debug!(class = %candidate, referenced_by = %name, "Adding stub");
                    stubs.insert(candidate.to_string());
                }
            }
        }

        // Close over superclass links until nothing new is added.
        loop {
            let additions: BTreeSet<String> = stubs
                .iter()
                .filter_map(|name| schema.class(name))
                .map(|class| class.superclass.as_str())
                .filter(|superclass| eligible(*superclass, &stubs))
                .map(str::to_string)
                .collect();

            if additions.is_empty() {
                break;
            }

            for name in additions {
                debug!(class = %name, "Adding ancestor stub");
                stubs.insert(name);
            }
        }

        Self { generated, stubs }
    }

    /// Classes with their own Base-visible members.
    pub fn generated(&self) -> &BTreeSet<String> {
        &self.generated
    }

    /// Classes that receive a stub, sorted by name.
    pub fn stubs(&self) -> &BTreeSet<String> {
        &self.stubs
    }

    pub fn is_generated(&self, name: &str) -> bool {
        self.generated.contains(name)
    }

    pub fn is_stub(&self, name: &str) -> bool {
        self.stubs.contains(name)
    }

    /// Whether the Base tier has any declaration, full or stub, for a class.
    pub fn has_base_declaration(&self, name: &str) -> bool {
        self.is_generated(name) || self.is_stub(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbxbind_core::schema::{ClassDescriptor, MemberDescriptor, Parameter, Security, SecurityToken, ValueTypeRef};

    const ROOT: &str = "<<<ROOT>>>";

    fn open_prop(name: &str) -> MemberDescriptor {
        MemberDescriptor::property(name, ValueTypeRef::primitive("int"))
    }

    fn engine_prop(name: &str) -> MemberDescriptor {
        open_prop(name).with_security(Security::uniform(SecurityToken::EngineOnly))
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            hand_authored: vec!["Instance".to_string()],
            ..Default::default()
        }
    }

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_superclass_without_members_becomes_stub() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Base", ROOT).with_member(engine_prop("Secret")),
                ClassDescriptor::new("Derived", "Base").with_member(open_prop("Speed")),
            ],
            vec![],
            1,
        );

        let closure = Closure::resolve(&schema, &config());
        assert_eq!(names(closure.generated()), vec!["Derived"]);
        assert_eq!(names(closure.stubs()), vec!["Base"]);
    }

    #[test]
    fn test_member_referenced_classes_become_stubs() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Instance", ROOT),
                ClassDescriptor::new("Camera", "Instance"),
                ClassDescriptor::new("Attachment", "Instance"),
                ClassDescriptor::new("Hidden", "Instance"),
                ClassDescriptor::new("Viewer", "Instance")
                    .with_member(MemberDescriptor::property("Target", ValueTypeRef::class("Camera?")))
                    .with_member(
                        MemberDescriptor::function("Attach")
                            .with_param(Parameter::new("to", ValueTypeRef::class("Attachment"))),
                    )
                    .with_member(
                        MemberDescriptor::property("Secret", ValueTypeRef::class("Hidden"))
                            .with_security(Security::uniform(SecurityToken::EngineOnly)),
                    )
                    .with_member(MemberDescriptor::property("Ghost", ValueTypeRef::class("NotInDump"))),
            ],
            vec![],
            1,
        );

        let closure = Closure::resolve(&schema, &config());
        // Instance is hand-authored; Hidden is only referenced by an
        // invisible member; NotInDump is external.
        assert_eq!(names(closure.stubs()), vec!["Attachment", "Camera"]);
    }

    #[test]
    fn test_multi_level_chain_reaches_fixed_point() {
        // Leaf -> Mid2 -> Mid1 -> Top -> Instance, only Leaf has members.
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Instance", ROOT),
                ClassDescriptor::new("Top", "Instance"),
                ClassDescriptor::new("Mid1", "Top").with_member(engine_prop("x")),
                ClassDescriptor::new("Mid2", "Mid1"),
                ClassDescriptor::new("Leaf", "Mid2").with_member(open_prop("Value")),
            ],
            vec![],
            1,
        );

        let closure = Closure::resolve(&schema, &config());
        assert_eq!(names(closure.stubs()), vec!["Mid1", "Mid2", "Top"]);
        assert!(!closure.is_stub("Instance"));
        assert!(closure.has_base_declaration("Leaf"));
    }

    #[test]
    fn test_chain_stops_at_generated_class() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Top", ROOT).with_member(open_prop("a")),
                ClassDescriptor::new("Gap", "Top"),
                ClassDescriptor::new("Leaf", "Gap").with_member(open_prop("b")),
            ],
            vec![],
            1,
        );

        let closure = Closure::resolve(&schema, &config());
        assert_eq!(names(closure.generated()), vec!["Leaf", "Top"]);
        assert_eq!(names(closure.stubs()), vec!["Gap"]);
    }

    #[test]
    fn test_hand_authored_classes_are_never_generated_or_stubbed() {
        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Instance", ROOT).with_member(open_prop("Name")),
                ClassDescriptor::new("Part", "Instance").with_member(open_prop("Size")),
            ],
            vec![],
            1,
        );

        let closure = Closure::resolve(&schema, &config());
        assert_eq!(names(closure.generated()), vec!["Part"]);
        assert!(closure.stubs().is_empty());
    }
}
