//! Language identification
//!
//! Maps snippet language tags to language IDs and provides language metadata.

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Java,
    JavaScript,
    TypeScript,
    /// Recognized for mock-response blocks; rendered without highlighting
    Json,
}

impl LanguageId {
    /// Detect language from a snippet tag (e.g. "java", "typescript")
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "java" => LanguageId::Java,
            "javascript" | "js" => LanguageId::JavaScript,
            "typescript" | "ts" => LanguageId::TypeScript,
            "json" => LanguageId::Json,
            _ => LanguageId::PlainText,
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Java => "Java",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Json => "JSON",
        }
    }

    /// Check if this language has syntax highlighting rules
    pub fn has_highlighting(&self) -> bool {
        matches!(
            self,
            LanguageId::Java | LanguageId::JavaScript | LanguageId::TypeScript
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(LanguageId::from_tag("java"), LanguageId::Java);
        assert_eq!(LanguageId::from_tag("JAVA"), LanguageId::Java);
        assert_eq!(LanguageId::from_tag("javascript"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_tag("ts"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_tag("json"), LanguageId::Json);
        assert_eq!(LanguageId::from_tag("ruby"), LanguageId::PlainText);
        assert_eq!(LanguageId::from_tag(""), LanguageId::PlainText);
    }

    #[test]
    fn test_has_highlighting() {
        assert!(LanguageId::Java.has_highlighting());
        assert!(LanguageId::TypeScript.has_highlighting());
        assert!(!LanguageId::Json.has_highlighting());
        assert!(!LanguageId::PlainText.has_highlighting());
    }
}
