//! C# identifier safety.

/// C# reserved keywords, escaped with `@` when used as identifiers.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Make a valid C# identifier from a dump name.
///
/// Characters other than letters, digits, and `_` become `_`; a leading
/// numeric character gets a `_` prefix; keywords are escaped with `@`.
pub fn safe_identifier(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }

    let mut result: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if result.starts_with(|c: char| c.is_numeric()) {
        result.insert(0, '_');
    }

    if is_keyword(&result) {
        result.insert(0, '@');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(safe_identifier("BasePart"), "BasePart");
        assert_eq!(safe_identifier("snake_case_1"), "snake_case_1");
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(safe_identifier("Humanoid.Jump"), "Humanoid_Jump");
        assert_eq!(safe_identifier("two words"), "two_words");
        assert_eq!(safe_identifier("a-b/c"), "a_b_c");
    }

    #[test]
    fn test_leading_numeric() {
        assert_eq!(safe_identifier("3DText"), "_3DText");
        assert_eq!(safe_identifier("²D"), "_²D");
    }

    #[test]
    fn test_keywords_escaped() {
        assert_eq!(safe_identifier("string"), "@string");
        assert_eq!(safe_identifier("event"), "@event");
        assert_eq!(safe_identifier("Event"), "Event");
    }

    #[test]
    fn test_empty() {
        assert_eq!(safe_identifier(""), "_");
    }
}
