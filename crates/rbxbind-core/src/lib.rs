//! Schema model, tier visibility, and configuration for rbxbind.

pub mod config;
pub mod error;
pub mod schema;
pub mod visibility;

pub use config::BindConfig;
pub use error::{BindError, Result};
pub use schema::{ClassDescriptor, DocMap, EnumDescriptor, MemberDescriptor, MemberKind, Schema};
pub use visibility::{FilteredModel, Tier};
