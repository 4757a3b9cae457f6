//! Inline style translation.
//!
//! A `style="font-size:12px; color:red"` attribute becomes a JSX object
//! literal source fragment, `{ fontSize: '12px', color: 'red' }`, suitable
//! for embedding as `style={...}`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Hyphen-letter pairs inside a CSS property name.
    static ref HYPHEN_LETTER_RE: Regex = Regex::new(r"-(.)").unwrap();
}

/// Integer-like values are emitted without quotes. Unit-suffixed strings
/// such as `12px` are not integer-like.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Convert a CSS declaration list into a JSX object literal source string.
/// Declarations without a colon or with an empty property name are
/// dropped; an empty declaration list yields `{  }`.
pub fn translate_inline_style(css_text: &str) -> String {
    let mut pairs = Vec::new();

    for declaration in css_text.split(';') {
        let Some(colon) = declaration.find(':') else {
            continue;
        };
        let property = declaration[..colon].trim();
        if property.is_empty() {
            continue;
        }
        let value = declaration[colon + 1..].trim().to_lowercase();

        pairs.push(format!(
            "{}: {}",
            jsx_style_property(property),
            jsx_style_value(&value)
        ));
    }

    format!("{{ {} }}", pairs.join(", "))
}

/// `-ms-` drops only its leading hyphen (`msTransform`, not `MsTransform`);
/// every remaining hyphen-letter pair camelCases, so other vendor prefixes
/// keep their capital (`-webkit-` → `Webkit...`).
fn jsx_style_property(property: &str) -> String {
    let normalized = if property.starts_with("-ms-") {
        &property[1..]
    } else {
        property
    };
    HYPHEN_LETTER_RE
        .replace_all(normalized, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

fn jsx_style_value(value: &str) -> String {
    if is_numeric(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "\""))
    }
}
