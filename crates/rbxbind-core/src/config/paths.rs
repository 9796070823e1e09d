use serde::{Deserialize, Serialize};

/// Input payload locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the API dump JSON.
    #[serde(default = "default_dump")]
    pub dump: String,

    /// Path to the documentation JSON. Generation falls back to canned
    /// summaries when this is absent.
    #[serde(default = "default_docs")]
    pub docs: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dump: default_dump(),
            docs: default_docs(),
        }
    }
}

fn default_dump() -> String {
    "api-dump.json".to_string()
}

fn default_docs() -> Option<String> {
    Some("api-docs.json".to_string())
}

/// Output artifact locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory all artifacts are written into.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Base-tier class declarations.
    #[serde(default = "default_classes_file")]
    pub classes_file: String,

    /// Elevated-tier extension and plugin-only declarations.
    #[serde(default = "default_elevated_classes_file")]
    pub elevated_classes_file: String,

    /// Enum declarations.
    #[serde(default = "default_enums_file")]
    pub enums_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            classes_file: default_classes_file(),
            elevated_classes_file: default_elevated_classes_file(),
            enums_file: default_enums_file(),
        }
    }
}

fn default_dir() -> String {
    "Generated".to_string()
}

fn default_classes_file() -> String {
    "Classes.cs".to_string()
}

fn default_elevated_classes_file() -> String {
    "PluginClasses.cs".to_string()
}

fn default_enums_file() -> String {
    "Enums.cs".to_string()
}
