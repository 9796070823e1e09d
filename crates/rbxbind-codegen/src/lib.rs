//! Declaration generation for rbxbind.
//!
//! A generation run maps a [`rbxbind_core::Schema`] and its documentation to
//! per-tier [`Artifact`]s, which [`CSharpGenerator`] writes out as C#.

pub mod closure;
pub mod compose;
pub mod csharp;
pub mod decl;
pub mod docs;
pub mod emitter;
pub mod enums;
pub mod ident;
pub mod types;

pub use closure::Closure;
pub use compose::{Artifact, Bindings, EnumArtifact};
pub use csharp::{CSharpGenerator, CSharpPrinter, Error};
pub use decl::{DeclShape, Declaration, MemberDecl, Signature, Supertype};
pub use emitter::DeclarationEmitter;
pub use ident::safe_identifier;
pub use types::{map_type, TargetType};
