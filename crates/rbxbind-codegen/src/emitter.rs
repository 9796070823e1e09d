//! Declaration emitter.
//!
//! Turns schema classes into [`Declaration`]s for one tier at a time. Member
//! emission dispatches on [`MemberKind`] with one function per variant.

use rbxbind_core::config::GeneratorConfig;
use rbxbind_core::schema::{ClassDescriptor, DocMap, MemberDescriptor, MemberKind};
use rbxbind_core::visibility::{accessors, emitted_members, has_visible_members, Tier};
use rbxbind_core::Schema;
use tracing::debug;

use crate::closure::Closure;
use crate::decl::{DeclShape, Declaration, MemberDecl, ParamDecl, Signature, Supertype};
use crate::docs::{extension_doc, member_deprecation, stub_doc, DocSynthesizer, CLASS_DEPRECATED};
use crate::ident::safe_identifier;
use crate::types::{callback_type, map_type, signal_type};

pub struct DeclarationEmitter<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    docs: DocSynthesizer<'a>,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(schema: &'a Schema, docs: &'a DocMap, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            docs: DocSynthesizer::new(docs, &config.doc_key_prefix, &config.enum_doc_key_prefix),
        }
    }

    /// Base tier: stubs (name-sorted) followed by full declarations
    /// (name-sorted).
    pub fn base_pass(&self, closure: &Closure) -> Vec<Declaration> {
        let stubs = closure
            .stubs()
            .iter()
            .filter_map(|name| self.schema.class(name))
            .map(|class| self.stub(class));

        let full = closure
            .generated()
            .iter()
            .filter_map(|name| self.schema.class(name))
            .map(|class| self.full(class));

        stubs.chain(full).collect()
    }

    /// Elevated tier: extension and plugin-only declarations, name-sorted.
    ///
    /// A class gets an extension when the Base tier already declares it
    /// (full or stub) or it is hand-authored; otherwise it is plugin-only.
    pub fn elevated_pass(&self, closure: &Closure) -> Vec<Declaration> {
        self.schema
            .classes()
            .filter(|class| !self.config.is_root_sentinel(&class.name))
            .filter_map(|class| {
                let members = emitted_members(class, Tier::Elevated);
                if members.is_empty() {
                    return None;
                }

                let extends = has_visible_members(class, Tier::Base)
                    || self.config.is_hand_authored(&class.name)
                    || closure.has_base_declaration(&class.name);

                let declaration = if extends {
                    self.extension(class, &members)
                } else {
                    self.plugin_only(class, &members)
                };
                debug!(class = %class.name, shape = ?declaration.shape, "Elevated declaration");
                Some(declaration)
            })
            .collect()
    }

    pub fn stub(&self, class: &ClassDescriptor) -> Declaration {
        Declaration {
            class_name: class.name.clone(),
            name: safe_identifier(&class.name),
            shape: DeclShape::Stub,
            supertype: self.supertype(class),
            doc: stub_doc(&class.name),
            deprecation: class_deprecation(class),
            members: Vec::new(),
        }
    }

    pub fn full(&self, class: &ClassDescriptor) -> Declaration {
        Declaration {
            class_name: class.name.clone(),
            name: safe_identifier(&class.name),
            shape: DeclShape::Full,
            supertype: self.supertype(class),
            doc: self.docs.class_doc(class),
            deprecation: class_deprecation(class),
            members: self.members(class, &emitted_members(class, Tier::Base), Tier::Base),
        }
    }

    fn extension(&self, class: &ClassDescriptor, members: &[&MemberDescriptor]) -> Declaration {
        let base_name = safe_identifier(&class.name);
        Declaration {
            class_name: class.name.clone(),
            name: format!("{}{}", base_name, self.config.extension_suffix),
            shape: DeclShape::Extension,
            supertype: Some(Supertype::BaseTier(base_name)),
            doc: extension_doc(&class.name),
            deprecation: class_deprecation(class),
            members: self.members(class, members, Tier::Elevated),
        }
    }

    fn plugin_only(&self, class: &ClassDescriptor, members: &[&MemberDescriptor]) -> Declaration {
        Declaration {
            class_name: class.name.clone(),
            name: safe_identifier(&class.name),
            shape: DeclShape::PluginOnly,
            supertype: Some(Supertype::Root),
            doc: self.docs.class_doc(class),
            deprecation: class_deprecation(class),
            members: self.members(class, members, Tier::Elevated),
        }
    }

    /// Superclass link of a Base-tier declaration. Falls back to the root
    /// type unless the class is the root type itself.
    fn supertype(&self, class: &ClassDescriptor) -> Option<Supertype> {
        let superclass = class.superclass.as_str();
        if !self.config.is_root_sentinel(superclass) && self.schema.contains_class(superclass) {
            Some(Supertype::Class(safe_identifier(superclass)))
        } else if class.name != self.config.root_type {
            Some(Supertype::Root)
        } else {
            None
        }
    }

    fn members(
        &self,
        class: &ClassDescriptor,
        members: &[&MemberDescriptor],
        tier: Tier,
    ) -> Vec<MemberDecl> {
        members
            .iter()
            .map(|member| self.member(&class.name, member, tier))
            .collect()
    }

    fn member(&self, class_name: &str, member: &MemberDescriptor, tier: Tier) -> MemberDecl {
        let signature = match member.kind {
            MemberKind::Property => property_signature(member, tier),
            MemberKind::Function => method_signature(member),
            MemberKind::Event => event_signature(member),
            MemberKind::Callback => callback_signature(member, tier),
        };

        MemberDecl {
            name: safe_identifier(&member.name),
            signature,
            doc: self.docs.member_doc(class_name, member),
            deprecation: member.is_deprecated().then(|| member_deprecation(member.kind)),
        }
    }
}

fn class_deprecation(class: &ClassDescriptor) -> Option<&'static str> {
    class.is_deprecated().then_some(CLASS_DEPRECATED)
}

/// Class-typed properties may be unset, so they are always nullable.
fn property_signature(member: &MemberDescriptor, tier: Tier) -> Signature {
    let mut ty = map_type(member.value_type.as_ref());
    if member.value_type.as_ref().and_then(|t| t.class_name()).is_some() {
        ty = ty.nullable();
    }

    let access = accessors(member, tier);
    Signature::Property {
        ty,
        get: access.read,
        set: access.write,
    }
}

fn method_signature(member: &MemberDescriptor) -> Signature {
    Signature::Method {
        returns: map_type(member.return_type.as_ref()),
        params: member
            .parameters
            .iter()
            .map(|param| ParamDecl {
                name: safe_identifier(&param.name),
                ty: map_type(Some(&param.value_type)),
            })
            .collect(),
    }
}

fn event_signature(member: &MemberDescriptor) -> Signature {
    Signature::Event {
        ty: signal_type(&member.parameters),
    }
}

fn callback_signature(member: &MemberDescriptor, tier: Tier) -> Signature {
    let access = accessors(member, tier);
    Signature::Callback {
        ty: callback_type(&member.parameters, member.return_type.as_ref()),
        get: access.read,
        set: access.write,
    }
}
