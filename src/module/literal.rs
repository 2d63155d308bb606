//! Synthetic module source generation.
//!
//! Compiled CSS is embedded as a JavaScript template literal. Anything the
//! literal would interpret must be escaped, so evaluating the literal gives
//! back the CSS byte-for-byte:
//!
//! - `\`  → `\\`  (selector escapes such as `.hover\:bg-red`)
//! - `` ` `` → `` \` `` (would close the literal)
//! - `${` → `\${` (would start a substitution)
//! - CR → `\r` (raw CR and CRLF are read back as LF)

/// Encode `text` as a template literal, including the surrounding backticks.
pub fn template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('`');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out.push('`');
    out
}

/// Module source with a single default export of `css`.
pub fn default_export(css: &str) -> String {
    format!("export default {};", template_literal(css))
}
