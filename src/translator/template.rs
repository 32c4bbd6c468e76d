//! Placeholder rendering for message templates.
//!
//! A template is plain text with `{name}` placeholders. Rendering looks each
//! name up in a map of string values and substitutes a sentinel when the name
//! is absent, so a malformed failure record can never make the handler panic
//! mid-response.

use std::collections::HashMap;

use serde_json::Value;

/// Substituted for placeholders whose value is absent.
pub(crate) const MISSING_VALUE_SENTINEL: &str = "?";

/// Fill `{name}` placeholders in `template` from `vars`.
///
/// Names not present in `vars` render as `sentinel`. A `{` with no closing
/// `}` is copied verbatim. Rendering never fails.
pub(crate) fn render(template: &str, vars: &HashMap<String, String>, sentinel: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(sentinel),
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unmatched '{': literal text, nothing left to scan
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render a context value for interpolation into a message.
///
/// Strings are used as-is (no JSON quoting); everything else uses its JSON
/// text form.
pub(crate) fn context_value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
