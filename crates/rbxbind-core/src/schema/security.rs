use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Access level required to read or write a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityToken {
    /// Accessible from ordinary game scripts.
    #[default]
    Open,
    /// Accessible from plugins and the command bar.
    Elevated,
    /// Reserved for engine-internal scripts.
    EngineOnly,
    /// Above the plugin level (core scripts, local user) but not engine-only.
    /// No tier reaches it, yet it does not hide the member's other accessor.
    Privileged,
    /// Not accessible from any script.
    Forbidden,
}

impl SecurityToken {
    /// Parse a dump security string. Unknown levels are treated as privileged.
    pub fn parse(s: &str) -> Self {
        match s {
            "None" => SecurityToken::Open,
            "PluginSecurity" => SecurityToken::Elevated,
            "RobloxSecurity" => SecurityToken::EngineOnly,
            "NotAccessibleSecurity" => SecurityToken::Forbidden,
            _ => SecurityToken::Privileged,
        }
    }

    /// Get the dump spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityToken::Open => "None",
            SecurityToken::Elevated => "PluginSecurity",
            SecurityToken::EngineOnly => "RobloxSecurity",
            SecurityToken::Privileged => "RobloxScriptSecurity",
            SecurityToken::Forbidden => "NotAccessibleSecurity",
        }
    }

    /// Engine-only and forbidden tokens block a member from every script tier.
    pub fn is_restricted(&self) -> bool {
        matches!(self, SecurityToken::EngineOnly | SecurityToken::Forbidden)
    }
}

impl std::fmt::Display for SecurityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read and write security of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Security {
    pub read: SecurityToken,
    pub write: SecurityToken,
}

impl Security {
    pub fn new(read: SecurityToken, write: SecurityToken) -> Self {
        Self { read, write }
    }

    /// Same token for both accessors.
    pub fn uniform(token: SecurityToken) -> Self {
        Self::new(token, token)
    }

    /// Read the dump's `Security` field: either a single string or a
    /// `{"Read": .., "Write": ..}` object. Anything missing is open.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::uniform(SecurityToken::parse(s)),
            Value::Object(map) => {
                let token = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .map(SecurityToken::parse)
                        .unwrap_or_default()
                };
                Self::new(token("Read"), token("Write"))
            }
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for Security {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Security::from_value(&value))
    }
}
