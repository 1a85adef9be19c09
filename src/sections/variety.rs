//! Character variety - recommends the built-in categories a password lacks.

use crate::types::{Charset, Charsets};

fn recommendation(charset: Charset) -> &'static str {
    match charset {
        Charset::Lowercase => "Add lowercase letters",
        Charset::Uppercase => "Add uppercase letters",
        Charset::Digit => "Add numbers",
        Charset::Symbol => "Add symbols",
        Charset::Unicode => "Add other characters",
    }
}

/// One recommendation per missing built-in category.
///
/// Nothing is recommended for an empty password.
pub fn missing_charset_recommendations(charsets: &Charsets) -> Vec<String> {
    if charsets.is_empty() {
        return Vec::new();
    }

    Charset::BUILT_IN
        .iter()
        .filter(|&&c| !charsets.contains(&c))
        .map(|&c| recommendation(c).to_string())
        .collect()
}
