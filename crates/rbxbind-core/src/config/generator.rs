use serde::{Deserialize, Serialize};

/// Declaration generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Namespace of the Base-tier and enum artifacts.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Namespace of the Elevated-tier artifact.
    #[serde(default = "default_elevated_namespace")]
    pub elevated_namespace: String,

    /// Generic root type every object declaration ultimately derives from.
    #[serde(default = "default_root_type")]
    pub root_type: String,

    /// The dump's "no superclass" marker.
    #[serde(default = "default_root_sentinel")]
    pub root_sentinel: String,

    /// Appended to a class name to form its Elevated-tier extension.
    #[serde(default = "default_extension_suffix")]
    pub extension_suffix: String,

    /// Prefix of class and member documentation keys.
    #[serde(default = "default_doc_key_prefix")]
    pub doc_key_prefix: String,

    /// Prefix of enum documentation keys.
    #[serde(default = "default_enum_doc_key_prefix")]
    pub enum_doc_key_prefix: String,

    /// Whether the Elevated tier is emitted at all.
    #[serde(default = "default_true")]
    pub elevated: bool,

    /// Classes declared by hand elsewhere. They never receive Base-tier or
    /// stub declarations, but can still be extended at the Elevated tier.
    #[serde(default = "default_hand_authored")]
    pub hand_authored: Vec<String>,
}

impl GeneratorConfig {
    /// Check whether a class is declared by hand.
    pub fn is_hand_authored(&self, name: &str) -> bool {
        self.hand_authored.iter().any(|n| n == name)
    }

    /// Check whether a superclass name is the dump's root marker.
    pub fn is_root_sentinel(&self, name: &str) -> bool {
        name.is_empty() || name == self.root_sentinel
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            elevated_namespace: default_elevated_namespace(),
            root_type: default_root_type(),
            root_sentinel: default_root_sentinel(),
            extension_suffix: default_extension_suffix(),
            doc_key_prefix: default_doc_key_prefix(),
            enum_doc_key_prefix: default_enum_doc_key_prefix(),
            elevated: default_true(),
            hand_authored: default_hand_authored(),
        }
    }
}

fn default_namespace() -> String {
    "Roblox".to_string()
}

fn default_elevated_namespace() -> String {
    "Roblox.Plugin".to_string()
}

fn default_root_type() -> String {
    "Instance".to_string()
}

fn default_root_sentinel() -> String {
    "<<<ROOT>>>".to_string()
}

fn default_extension_suffix() -> String {
    "Plugin".to_string()
}

fn default_doc_key_prefix() -> String {
    "@roblox/globaltype/".to_string()
}

fn default_enum_doc_key_prefix() -> String {
    "@roblox/enum/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_hand_authored() -> Vec<String> {
    [
        // Core object model
        "Instance",
        "DataModel",
        // Services
        "Players",
        "Player",
        "Workspace",
        "ReplicatedStorage",
        "ServerStorage",
        "ServerScriptService",
        "StarterGui",
        "StarterPlayer",
        "Lighting",
        "SoundService",
        "TweenService",
        "RunService",
        "UserInputService",
        "HttpService",
        "Camera",
        "Tween",
        "InputObject",
        // Parts and physics
        "PVInstance",
        "BasePart",
        "Part",
        "WedgePart",
        "CornerWedgePart",
        "TrussPart",
        "MeshPart",
        "UnionOperation",
        "Model",
        "Humanoid",
        "JointInstance",
        "Weld",
        "WeldConstraint",
        "Motor6D",
        // Scripts
        "LuaSourceContainer",
        "BaseScript",
        "Script",
        "LocalScript",
        "ModuleScript",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
