//! # String Helpers
//!
//! Literal splitting and LaTeX escaping shared by the patterns and the
//! converter.

/// Split `text` on every occurrence of the literal `separator`, trimming
/// surrounding whitespace from each piece.
///
/// Blank input yields no pieces. A trailing separator yields a trailing
/// empty piece, which the caller's element pattern then has to accept.
///
/// `separator` must be non-empty; List and Map reject empty separators at
/// construction.
pub fn split_list<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(separator).map(str::trim).collect()
}

/// Escape the characters LaTeX treats specially.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '^' => out.push_str("\\^{}"),
            '~' => out.push_str("\\~{}"),
            '_' | '%' | '#' | '$' | '&' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
