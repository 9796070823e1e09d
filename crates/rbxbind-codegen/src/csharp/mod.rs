mod printer;

pub use printer::{escape_xml, CSharpPrinter};

use std::fs;
use std::path::{Path, PathBuf};

use rbxbind_core::config::{GeneratorConfig, OutputConfig};
use tracing::debug;

use crate::compose::Bindings;

/// C# code generator for rbxbind.
///
/// Writes the Base, Elevated, and enum artifacts into one output directory.
pub struct CSharpGenerator {
    /// Output directory for generated files.
    output_dir: PathBuf,
    printer: CSharpPrinter,
}

impl CSharpGenerator {
    /// Create a new C# generator.
    pub fn new(output_dir: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            printer: CSharpPrinter::new(&config.namespace, &config.root_type),
        }
    }

    /// Write all artifacts, returning the paths written.
    pub fn generate(&self, bindings: &Bindings, output: &OutputConfig) -> Result<Vec<PathBuf>, Error> {
        fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::new();

        written.push(self.write(&output.classes_file, &self.printer.print_artifact(&bindings.base))?);

        if let Some(elevated) = &bindings.elevated {
            written.push(self.write(&output.elevated_classes_file, &self.printer.print_artifact(elevated))?);
        }

        written.push(self.write(&output.enums_file, &self.printer.print_enums(&bindings.enums))?);

        Ok(written)
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf, Error> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote artifact");
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] rbxbind_core::BindError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbxbind_core::schema::{ClassDescriptor, DocMap, MemberDescriptor, Security, SecurityToken, ValueTypeRef};
    use rbxbind_core::Schema;
    use tempfile::tempdir;

    fn bindings(config: &GeneratorConfig) -> Bindings {
        let schema = Schema::new(
            vec![ClassDescriptor::new("Widget", "Instance")
                .with_member(MemberDescriptor::property("Size", ValueTypeRef::data_type("Vector3")))
                .with_member(
                    MemberDescriptor::function("Inspect")
                        .with_security(Security::uniform(SecurityToken::Elevated)),
                )],
            vec![],
            1,
        );
        Bindings::generate(&schema, &DocMap::new(), config)
    }

    #[test]
    fn test_generate_writes_all_artifacts() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default();
        let generator = CSharpGenerator::new(dir.path().join("Generated"), &config);

        let written = generator.generate(&bindings(&config), &OutputConfig::default()).unwrap();
        assert_eq!(written.len(), 3);

        let classes = fs::read_to_string(dir.path().join("Generated/Classes.cs")).unwrap();
        assert!(classes.contains("public partial interface Widget : Instance"));
        assert!(classes.contains("Vector3 Size { get; set; }"));

        let plugin = fs::read_to_string(dir.path().join("Generated/PluginClasses.cs")).unwrap();
        assert!(plugin.contains("public partial interface WidgetPlugin : global::Roblox.Widget"));
        assert!(plugin.contains("void Inspect();"));

        assert!(dir.path().join("Generated/Enums.cs").exists());
    }

    #[test]
    fn test_generate_without_elevated_tier() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            elevated: false,
            ..Default::default()
        };
        let generator = CSharpGenerator::new(dir.path(), &config);

        let written = generator.generate(&bindings(&config), &OutputConfig::default()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(!dir.path().join("PluginClasses.cs").exists());
    }
}
