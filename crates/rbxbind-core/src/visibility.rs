//! Per-tier member visibility.
//!
//! A member is emitted into a tier when its security tokens pass that tier's
//! test and, for property and callback members, at least one accessor is
//! reachable at that tier.

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::schema::{ClassDescriptor, MemberDescriptor, Schema, SecurityToken};

/// Access tier a generation pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    /// Ordinary game scripts.
    Base,
    /// Plugins. Emitted as a separate, optional artifact.
    Elevated,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Base => "base",
            Tier::Elevated => "elevated",
        }
    }

    /// Whether a single accessor secured by `token` is reachable at this tier.
    pub fn allows(&self, token: SecurityToken) -> bool {
        match self {
            Tier::Base => token == SecurityToken::Open,
            Tier::Elevated => matches!(token, SecurityToken::Open | SecurityToken::Elevated),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if a member passes a tier's security test.
///
/// Base: either token is open. Elevated: either token is elevated and
/// neither is engine-only or forbidden. Not-scriptable and hidden members are
/// never visible.
pub fn is_member_visible(member: &MemberDescriptor, tier: Tier) -> bool {
    if member.is_not_scriptable() || member.is_hidden() {
        return false;
    }

    let read = member.security.read;
    let write = member.security.write;

    match tier {
        Tier::Base => read == SecurityToken::Open || write == SecurityToken::Open,
        Tier::Elevated => {
            (read == SecurityToken::Elevated || write == SecurityToken::Elevated)
                && !read.is_restricted()
                && !write.is_restricted()
        }
    }
}

/// Accessors of a property or callback reachable at a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accessors {
    pub read: bool,
    pub write: bool,
}

impl Accessors {
    pub fn is_empty(&self) -> bool {
        !self.read && !self.write
    }
}

/// Compute accessors independently: a `WriteOnly` tag suppresses the read
/// accessor and a `ReadOnly` tag suppresses the write accessor.
pub fn accessors(member: &MemberDescriptor, tier: Tier) -> Accessors {
    Accessors {
        read: !member.is_write_only() && tier.allows(member.security.read),
        write: !member.is_read_only() && tier.allows(member.security.write),
    }
}

/// Check if a member produces output at a tier.
pub fn is_member_emitted(member: &MemberDescriptor, tier: Tier) -> bool {
    is_member_visible(member, tier) && (!member.kind.has_accessors() || !accessors(member, tier).is_empty())
}

/// Check if a class has at least one member visible at a tier.
pub fn has_visible_members(class: &ClassDescriptor, tier: Tier) -> bool {
    class.members.iter().any(|m| is_member_visible(m, tier))
}

/// Members of a class emitted at a tier, ordered by (kind, name).
pub fn emitted_members(class: &ClassDescriptor, tier: Tier) -> Vec<&MemberDescriptor> {
    let mut members: Vec<_> = class
        .members
        .iter()
        .filter(|m| is_member_emitted(m, tier))
        .collect();
    members.sort_by(|a, b| (a.kind, &a.name).cmp(&(b.kind, &b.name)));
    members
}

/// A member as seen by one tier.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredMember<'a> {
    pub member: &'a MemberDescriptor,
    /// Present for property and callback members.
    pub accessors: Option<Accessors>,
}

/// A class and its members as seen by one tier.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredClass<'a> {
    pub name: &'a str,
    pub superclass: &'a str,
    pub members: Vec<FilteredMember<'a>>,
}

/// The (class, member, tier) view shared by the declaration generator and
/// any descriptor emitter for the runtime back-end.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredModel<'a> {
    pub tier: Tier,
    pub classes: Vec<FilteredClass<'a>>,
}

impl<'a> FilteredModel<'a> {
    /// Build the filtered view of a schema, classes ordered by name.
    ///
    /// Hand-authored classes are left out of the Base tier, since their
    /// Base-tier surface is declared elsewhere.
    pub fn build(schema: &'a Schema, tier: Tier, config: &GeneratorConfig) -> Self {
        let classes = schema
            .classes()
            .filter(|c| !config.is_root_sentinel(&c.name))
            .filter(|c| tier == Tier::Elevated || !config.is_hand_authored(&c.name))
            .filter_map(|class| {
                let members: Vec<_> = emitted_members(class, tier)
                    .into_iter()
                    .map(|member| FilteredMember {
                        member,
                        accessors: member.kind.has_accessors().then(|| accessors(member, tier)),
                    })
                    .collect();

                (!members.is_empty()).then_some(FilteredClass {
                    name: &class.name,
                    superclass: &class.superclass,
                    members,
                })
            })
            .collect();

        Self { tier, classes }
    }

    pub fn member_count(&self) -> usize {
        self.classes.iter().map(|c| c.members.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MemberKind, Security, ValueTypeRef};

    fn prop(name: &str, read: SecurityToken, write: SecurityToken) -> MemberDescriptor {
        MemberDescriptor::property(name, ValueTypeRef::primitive("int"))
            .with_security(Security::new(read, write))
    }

    use SecurityToken::{Elevated, EngineOnly, Forbidden, Open, Privileged};

    #[test]
    fn test_base_tier_needs_an_open_token() {
        assert!(is_member_visible(&prop("a", Open, Open), Tier::Base));
        assert!(is_member_visible(&prop("b", Open, EngineOnly), Tier::Base));
        assert!(is_member_visible(&prop("c", Elevated, Open), Tier::Base));
        assert!(!is_member_visible(&prop("d", Elevated, Elevated), Tier::Base));
    }

    #[test]
    fn test_elevated_tier_rules() {
        assert!(is_member_visible(&prop("a", Elevated, Elevated), Tier::Elevated));
        assert!(is_member_visible(&prop("b", Open, Elevated), Tier::Elevated));
        assert!(!is_member_visible(&prop("c", Open, Open), Tier::Elevated));
        assert!(!is_member_visible(&prop("d", Elevated, EngineOnly), Tier::Elevated));
        assert!(!is_member_visible(&prop("e", Forbidden, Elevated), Tier::Elevated));
        // Open read with an engine-only write is a Base-tier member only.
        assert!(!is_member_visible(&prop("f", Open, EngineOnly), Tier::Elevated));
    }

    #[test]
    fn test_privileged_write_keeps_elevated_getter() {
        let member = prop("Grid", Elevated, Privileged);
        assert!(is_member_visible(&member, Tier::Elevated));
        assert!(is_member_emitted(&member, Tier::Elevated));
        assert_eq!(accessors(&member, Tier::Elevated), Accessors { read: true, write: false });
        assert!(!is_member_visible(&member, Tier::Base));

        assert!(!is_member_visible(&prop("p", Privileged, Privileged), Tier::Elevated));
    }

    #[test]
    fn test_hidden_and_not_scriptable_never_visible() {
        for tag in ["Hidden", "NotScriptable"] {
            let open = prop("x", Open, Open).with_tags([tag]);
            let elevated = prop("y", Elevated, Elevated).with_tags([tag]);
            for tier in [Tier::Base, Tier::Elevated] {
                assert!(!is_member_visible(&open, tier));
                assert!(!is_member_visible(&elevated, tier));
                assert!(!is_member_emitted(&open, tier));
                assert!(!is_member_emitted(&elevated, tier));
            }
        }
    }

    #[test]
    fn test_accessors_are_independent() {
        let member = prop("x", Open, Elevated);
        assert_eq!(accessors(&member, Tier::Base), Accessors { read: true, write: false });
        assert_eq!(accessors(&member, Tier::Elevated), Accessors { read: true, write: true });
    }

    #[test]
    fn test_read_only_tag_drops_setter() {
        let member = prop("x", Open, Open).with_tags(["ReadOnly"]);
        assert_eq!(accessors(&member, Tier::Base), Accessors { read: true, write: false });
    }

    #[test]
    fn test_member_without_accessors_is_not_emitted() {
        // Visible through the open read token, but the read accessor is
        // suppressed and the write accessor is elevated.
        let member = prop("x", Open, Elevated).with_tags(["WriteOnly"]);
        assert!(is_member_visible(&member, Tier::Base));
        assert!(!is_member_emitted(&member, Tier::Base));
    }

    #[test]
    fn test_functions_have_no_accessor_gate() {
        let member = MemberDescriptor::function("Run").with_tags(["WriteOnly"]);
        assert!(is_member_emitted(&member, Tier::Base));
    }

    #[test]
    fn test_emitted_members_sorted_by_kind_then_name() {
        let class = ClassDescriptor::new("Thing", "Instance")
            .with_member(prop("Zed", Open, Open))
            .with_member(MemberDescriptor::function("Alpha"))
            .with_member(prop("Able", Open, Open))
            .with_member(MemberDescriptor::event("Changed"));

        let order: Vec<_> = emitted_members(&class, Tier::Base)
            .iter()
            .map(|m| (m.kind, m.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (MemberKind::Event, "Changed"),
                (MemberKind::Function, "Alpha"),
                (MemberKind::Property, "Able"),
                (MemberKind::Property, "Zed"),
            ]
        );
    }

    #[test]
    fn test_filtered_model() {
        let mut config = GeneratorConfig::default();
        config.hand_authored = vec!["Core".to_string()];

        let schema = Schema::new(
            vec![
                ClassDescriptor::new("Core", "<<<ROOT>>>")
                    .with_member(prop("Open", Open, Open))
                    .with_member(prop("Tool", Elevated, Elevated)),
                ClassDescriptor::new("Widget", "Core")
                    .with_member(prop("w1", Open, EngineOnly))
                    .with_member(prop("w2", Elevated, Elevated)),
                ClassDescriptor::new("Sealed", "Core").with_member(prop("s", EngineOnly, EngineOnly)),
            ],
            vec![],
            0,
        );

        let base = FilteredModel::build(&schema, Tier::Base, &config);
        let names: Vec<_> = base.classes.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Widget"]);
        assert_eq!(base.member_count(), 1);
        assert_eq!(
            base.classes[0].members[0].accessors,
            Some(Accessors { read: true, write: false })
        );

        let elevated = FilteredModel::build(&schema, Tier::Elevated, &config);
        let names: Vec<_> = elevated.classes.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Core", "Widget"]);
        assert_eq!(elevated.member_count(), 2);
    }
}
