mod class;
mod docs;
mod enums;
mod member;
mod registry;
mod security;
pub mod tags;
mod types;

pub use class::ClassDescriptor;
pub use docs::{DocEntry, DocMap, DocParam, DocReturn};
pub use enums::{EnumDescriptor, EnumItem};
pub use member::{MemberDescriptor, MemberKind, Parameter};
pub use registry::Schema;
pub use security::{Security, SecurityToken};
pub use tags::TagSet;
pub use types::{TypeCategory, ValueTypeRef, NULLABLE_MARKER};
