//! Documentation synthesis.
//!
//! Summaries come from the documentation map when an entry exists and is
//! non-blank; otherwise a canned sentence for the declaration's kind is used.

use rbxbind_core::schema::{ClassDescriptor, DocEntry, DocMap, EnumDescriptor, MemberDescriptor, MemberKind};

use crate::decl::Doc;

const YIELD_REMARK: &str = "This method can yield.";

/// Builds [`Doc`] values from a documentation map.
pub struct DocSynthesizer<'a> {
    docs: &'a DocMap,
    class_prefix: &'a str,
    enum_prefix: &'a str,
}

impl<'a> DocSynthesizer<'a> {
    pub fn new(docs: &'a DocMap, class_prefix: &'a str, enum_prefix: &'a str) -> Self {
        Self {
            docs,
            class_prefix,
            enum_prefix,
        }
    }

    fn entry(&self, key: &str) -> Option<&'a DocEntry> {
        self.docs.get(key)
    }

    fn class_key(&self, class: &str) -> String {
        format!("{}{}", self.class_prefix, class)
    }

    fn member_key(&self, class: &str, member: &str) -> String {
        format!("{}{}.{}", self.class_prefix, class, member)
    }

    /// Documentation of a full or plugin-only class declaration.
    pub fn class_doc(&self, class: &ClassDescriptor) -> Doc {
        let summary = self
            .entry(&self.class_key(&class.name))
            .and_then(DocEntry::summary)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Represents the {} class.", class.name));
        Doc::summary(summary)
    }

    pub fn member_doc(&self, class_name: &str, member: &MemberDescriptor) -> Doc {
        let entry = self.entry(&self.member_key(class_name, &member.name));

        let summary = entry
            .and_then(DocEntry::summary)
            .map(str::to_string)
            .unwrap_or_else(|| fallback_member_summary(member));

        let mut doc = Doc::summary(summary);

        if member.kind == MemberKind::Function {
            if let Some(entry) = entry {
                doc.params = member
                    .parameters
                    .iter()
                    .filter_map(|param| {
                        entry
                            .params
                            .iter()
                            .find(|p| p.name == param.name)
                            .map(|p| p.documentation.trim())
                            .filter(|text| !text.is_empty())
                            .map(|text| (param.name.clone(), text.to_string()))
                    })
                    .collect();

                doc.returns = entry
                    .returns
                    .first()
                    .map(|r| r.documentation.trim())
                    .filter(|text| !text.is_empty())
                    .map(str::to_string);
            }
        }

        doc.remarks = member_remarks(member);
        doc
    }

    pub fn enum_doc(&self, descriptor: &EnumDescriptor) -> Doc {
        let key = format!("{}{}", self.enum_prefix, descriptor.name);
        let summary = self
            .entry(&key)
            .and_then(DocEntry::summary)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Represents the {} enum.", descriptor.name));
        Doc::summary(summary)
    }
}

/// Documentation of a stub. Never taken from the documentation map.
pub fn stub_doc(class_name: &str) -> Doc {
    Doc::summary(format!("Base type for {} hierarchy.", class_name))
}

pub fn extension_doc(class_name: &str) -> Doc {
    Doc::summary(format!(
        "Plugin extension for {}. Provides plugin-only members.",
        class_name
    ))
}

fn fallback_member_summary(member: &MemberDescriptor) -> String {
    match member.kind {
        MemberKind::Property => format!("Gets or sets the {} property.", member.name),
        MemberKind::Function => format!("{} method.", member.name),
        MemberKind::Event => format!("The {} event.", member.name),
        MemberKind::Callback => format!("The {} callback.", member.name),
    }
}

/// Remark sentence for a thread-safety token. Unknown tokens have none.
pub fn thread_safety_remark(token: &str) -> Option<&'static str> {
    match token {
        "Safe" => Some("Thread-safe for read and write."),
        "ReadSafe" => Some("Thread-safe for reading only."),
        "Unsafe" => Some("Main thread only."),
        _ => None,
    }
}

fn member_remarks(member: &MemberDescriptor) -> Option<String> {
    let mut remarks = Vec::new();

    // Events and callbacks carry a summary only.
    if matches!(member.kind, MemberKind::Property | MemberKind::Function) {
        if let Some(remark) = thread_safety_remark(&member.thread_safety) {
            remarks.push(remark);
        }
    }
    if member.kind == MemberKind::Function && member.can_yield() {
        remarks.push(YIELD_REMARK);
    }

    (!remarks.is_empty()).then(|| remarks.join(" "))
}

pub const CLASS_DEPRECATED: &str = "This class is deprecated.";
pub const ENUM_DEPRECATED: &str = "This enum is deprecated.";
pub const ENUM_ITEM_DEPRECATED: &str = "This enum item is deprecated.";

/// Deprecation message for a member kind.
pub fn member_deprecation(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Property => "This property is deprecated.",
        MemberKind::Function => "This method is deprecated.",
        MemberKind::Event => "This event is deprecated.",
        MemberKind::Callback => "This callback is deprecated.",
    }
}
