//! Cypher literal and identifier rendering.

use graph_schema::GraphValue;

/// Convert a GraphValue to a Cypher literal string.
pub fn to_cypher_literal(value: &GraphValue) -> String {
    match value {
        GraphValue::Null => "null".to_string(),
        GraphValue::Bool(b) => b.to_string(),
        GraphValue::Int(i) => i.to_string(),
        GraphValue::Float(f) => {
            if !f.is_finite() {
                // Neo4j has no NaN/Infinity literal
                "null".to_string()
            } else if f.fract() == 0.0 {
                // Keep floats floats: `3` would be read back as an integer
                format!("{f:.1}")
            } else {
                f.to_string()
            }
        }
        GraphValue::String(s) => escape_cypher_string(s),
        GraphValue::List(elements) => {
            let element_strs: Vec<String> = elements.iter().map(to_cypher_literal).collect();
            format!("[{}]", element_strs.join(", "))
        }
    }
}

/// Escape a string for Cypher and wrap it in single quotes.
pub fn escape_cypher_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("'{escaped}'")
}

/// Render a label, relationship type or property key.
///
/// Plain identifiers pass through; anything else is backtick-quoted with
/// embedded backticks doubled.
pub fn escape_identifier(name: &str) -> String {
    let mut chars = name.chars();
    let is_plain = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if is_plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}
