//! Output composer: one generation run over a schema.

use serde::Serialize;
use tracing::info;

use rbxbind_core::config::GeneratorConfig;
use rbxbind_core::schema::DocMap;
use rbxbind_core::visibility::Tier;
use rbxbind_core::Schema;

use crate::closure::Closure;
use crate::csharp::Error;
use crate::decl::{DeclShape, Declaration, EnumDecl};
use crate::emitter::DeclarationEmitter;
use crate::enums::emit_enums;

/// All declarations of one tier, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub tier: Tier,
    pub namespace: String,
    pub declarations: Vec<Declaration>,
}

impl Artifact {
    pub fn count(&self, shape: DeclShape) -> usize {
        self.declarations.iter().filter(|d| d.shape == shape).count()
    }

    pub fn member_count(&self) -> usize {
        self.declarations.iter().map(|d| d.members.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumArtifact {
    pub namespace: String,
    pub enums: Vec<EnumDecl>,
}

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bindings {
    pub base: Artifact,
    /// Absent when the Elevated tier is disabled.
    pub elevated: Option<Artifact>,
    pub enums: EnumArtifact,
    pub version: i64,
}

impl Bindings {
    /// Run the generator. Never fails: malformed or unknown input degrades
    /// to opaque types and fallback documentation.
    pub fn generate(schema: &Schema, docs: &DocMap, config: &GeneratorConfig) -> Self {
        let closure = Closure::resolve(schema, config);
        let emitter = DeclarationEmitter::new(schema, docs, config);

        let base = Artifact {
            tier: Tier::Base,
            namespace: config.namespace.clone(),
            declarations: emitter.base_pass(&closure),
        };
        info!(
            full = base.count(DeclShape::Full),
            stubs = base.count(DeclShape::Stub),
            members = base.member_count(),
            "Generated base tier"
        );

        let elevated = config.elevated.then(|| {
            let artifact = Artifact {
                tier: Tier::Elevated,
                namespace: config.elevated_namespace.clone(),
                declarations: emitter.elevated_pass(&closure),
            };
            info!(
                extensions = artifact.count(DeclShape::Extension),
                plugin_only = artifact.count(DeclShape::PluginOnly),
                members = artifact.member_count(),
                "Generated elevated tier"
            );
            artifact
        });

        let enums = EnumArtifact {
            namespace: config.namespace.clone(),
            enums: emit_enums(
                schema.enums(),
                docs,
                &config.doc_key_prefix,
                &config.enum_doc_key_prefix,
            ),
        };
        info!(enums = enums.enums.len(), "Generated enums");

        Self {
            base,
            elevated,
            enums,
            version: schema.version(),
        }
    }

    /// Parse a dump and an optional documentation map, then generate.
    pub fn from_json(dump: &str, docs: Option<&str>, config: &GeneratorConfig) -> Result<Self, Error> {
        let schema = Schema::from_json(dump)?;
        let docs = match docs {
            Some(json) => DocMap::from_json(json)?,
            None => DocMap::new(),
        };
        info!(
            classes = schema.class_count(),
            enums = schema.enums().len(),
            docs = docs.len(),
            version = schema.version(),
            "Loaded schema"
        );
        Ok(Self::generate(&schema, &docs, config))
    }
}
