//! Identifier normalization shared by every generator stage.
//!
//! All functions are pure and total: any input string produces an output,
//! and validity of the result as an identifier is checked later by the
//! validate phase.

/// Convert a string to snake_case (e.g., "displayName" -> "display_name").
///
/// A string with no uppercase letters and no dashes is classified as already
/// snake_case and returned unchanged. Otherwise an underscore is inserted
/// before every uppercase letter except a leading one, letters are lowercased
/// and dashes become underscores. Digits never gain a separator.
pub fn to_snake_case(s: &str) -> String {
    if !s.chars().any(|c| c.is_uppercase() || c == '-') {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c == '-' {
            result.push('_');
        } else if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to camelCase (e.g., "get_account" -> "getAccount").
pub fn to_camel_case(s: &str) -> String {
    join_segments(s, false)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    join_segments(s, true)
}

/// Shared camel/pascal walk.
///
/// Leading underscores are copied verbatim. An underscore followed by an
/// ASCII letter is dropped and the letter uppercased; any other underscore
/// is kept so that `to_snake_case` can restore it.
fn join_segments(s: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(&'_') = chars.peek() {
        result.push('_');
        chars.next();
    }

    if let Some(first) = chars.next() {
        if upper_first {
            result.extend(first.to_uppercase());
        } else {
            result.extend(first.to_lowercase());
        }
    }

    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_alphabetic() => {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => result.push('_'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Title-case a word list: uppercase the first letter of every word.
///
/// Words are separated by anything that is neither alphanumeric nor an
/// underscore, so "apiAccount" becomes "ApiAccount" and "api_account"
/// becomes "Api_account".
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    result
}

/// Replace newlines with spaces so text fits on one doc-comment line.
pub fn strip_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace('\n', " ")
}
