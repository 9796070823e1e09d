//! Generated declaration model.
//!
//! Declarations are plain data; the C# printer turns them into source text.

use serde::Serialize;

use crate::types::TargetType;

/// Shape of a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclShape {
    /// All members visible at the tier.
    Full,
    /// Empty body, kept only to connect an inheritance chain.
    Stub,
    /// Elevated-only members layered on the class's Base-tier declaration.
    Extension,
    /// Elevated-only class with no Base-tier declaration to extend.
    PluginOnly,
}

/// What a declaration inherits from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Supertype {
    /// The generic root type.
    Root,
    /// Another declaration in the same namespace.
    Class(String),
    /// The Base-tier declaration of the same class.
    BaseTier(String),
}

/// Synthesized documentation. Text is raw; escaping is the printer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Doc {
    pub summary: String,
    pub params: Vec<(String, String)>,
    pub returns: Option<String>,
    pub remarks: Option<String>,
}

impl Doc {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }
}

/// A generated class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Schema class this declaration was generated from.
    pub class_name: String,
    /// Identifier of the declaration itself.
    pub name: String,
    pub shape: DeclShape,
    pub supertype: Option<Supertype>,
    pub doc: Doc,
    pub deprecation: Option<&'static str>,
    pub members: Vec<MemberDecl>,
}

/// A generated member signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDecl {
    pub name: String,
    pub signature: Signature,
    pub doc: Doc,
    pub deprecation: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TargetType,
}

/// Member signature, one variant per member kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Signature {
    Property {
        ty: TargetType,
        get: bool,
        set: bool,
    },
    Method {
        returns: TargetType,
        params: Vec<ParamDecl>,
    },
    /// Always get-only.
    Event { ty: TargetType },
    Callback {
        ty: TargetType,
        get: bool,
        set: bool,
    },
}

impl Signature {
    /// Type shown for the member: property/event/callback type, or the
    /// method's return type.
    pub fn ty(&self) -> &TargetType {
        match self {
            Signature::Property { ty, .. }
            | Signature::Event { ty }
            | Signature::Callback { ty, .. } => ty,
            Signature::Method { returns, .. } => returns,
        }
    }
}

/// A generated enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub doc: Doc,
    pub deprecation: Option<&'static str>,
    pub items: Vec<EnumItemDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumItemDecl {
    pub name: String,
    pub value: i64,
    pub deprecation: Option<&'static str>,
}
