//! Rust-specific naming conventions.

use restgen_codegen::NamingConvention;
use restgen_core::{to_camel_case, to_snake_case, to_title_case};

/// Reserved words get a trailing underscore. Raw identifiers are avoided
/// because `nanoserde` derives cannot parse them, and `self`, `Self`,
/// `crate` and `super` have no raw form at all.
fn escape_rust_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Operation ids are camel-cased first so `GetAccount` and `getAccount`
/// both become `get_account`.
fn operation_to_fn(name: &str) -> String {
    to_snake_case(&to_camel_case(name))
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    definition_to_type: to_title_case,
    operation_to_fn,
    property_to_field: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_type() {
        assert_eq!(RUST_NAMING.type_name("apiAccount"), "ApiAccount");
        assert_eq!(RUST_NAMING.type_name("Account"), "Account");
    }

    #[test]
    fn test_rust_naming_fn() {
        assert_eq!(RUST_NAMING.fn_name("GetAccount"), "get_account");
        assert_eq!(RUST_NAMING.fn_name("AuthenticateEmail"), "authenticate_email");
        assert_eq!(RUST_NAMING.fn_name("Healthcheck"), "healthcheck");
        assert_eq!(RUST_NAMING.fn_name("Match"), "match_");
    }

    #[test]
    fn test_rust_naming_field() {
        assert_eq!(RUST_NAMING.field_name("createTime"), "create_time");
        assert_eq!(RUST_NAMING.field_name("display_name"), "display_name");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("async"));
        assert!(!RUST_NAMING.is_reserved("wallet"));
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.field_name("type"), "type_");
        assert_eq!(RUST_NAMING.field_name("async"), "async_");
        assert_eq!(RUST_NAMING.field_name("self"), "self_");
        assert_eq!(RUST_NAMING.type_name("Self"), "Self_");
    }
}
