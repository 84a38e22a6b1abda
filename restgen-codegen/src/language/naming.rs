//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how document names become type, function and field names, and
/// how reserved words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a definition name to a type name (e.g., "apiAccount" -> "ApiAccount")
    pub definition_to_type: fn(&str) -> String,
    /// Transform an operation id to a function name (e.g., "GetAccount" -> "get_account")
    pub operation_to_fn: fn(&str) -> String,
    /// Transform a property or parameter name to a field or argument name
    pub property_to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "type_" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.definition_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a function name.
    pub fn fn_name(&self, name: &str) -> String {
        let transformed = (self.operation_to_fn)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field or argument name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.property_to_field)(name);
        self.safe_name(&transformed)
    }
}

/// Check that a name is a plain ASCII identifier.
///
/// A leading `r#` is accepted so escaped reserved words pass. A lone `_`
/// is not an identifier.
pub fn is_identifier(name: &str) -> bool {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if name.len() > 1 => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
