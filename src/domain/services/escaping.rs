//! PHP string-literal escaping
//!
//! Everything that ends up inside a single-quoted PHP literal in the
//! bootstrap script passes through [`escape_single_quoted`] exactly once,
//! from the template filter. Inside `'...'` PHP only interprets `\\` and
//! `\'`, so doubling backslashes before escaping quotes is enough to keep
//! any text inside the literal.

/// Escape text for a PHP single-quoted literal (without the quotes)
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Wrap text in a PHP single-quoted literal
pub fn quote_single(s: &str) -> String {
    format!("'{}'", escape_single_quoted(s))
}

/// Decode the body of a PHP single-quoted literal
///
/// Mirrors PHP: `\\` and `\'` are escapes, any other backslash is literal.
pub fn unescape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('\\') | Some('\'') => {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                }
                _ => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Extract the bodies of every single-quoted literal in a line of PHP
///
/// Used to read generated code back; handles escaped quotes inside literals.
pub fn single_quoted_literals(line: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut raw = String::new();
        let mut closed = false;
        while let Some(inner) = chars.next() {
            match inner {
                '\\' => {
                    raw.push(inner);
                    if let Some(escaped) = chars.next() {
                        raw.push(escaped);
                    }
                }
                '\'' => {
                    closed = true;
                    break;
                }
                _ => raw.push(inner),
            }
        }
        if closed {
            literals.push(unescape_single_quoted(&raw));
        }
    }
    literals
}
