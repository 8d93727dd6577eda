//! Whitespace helpers shared by the string-table pass and text emission.

/// Collapses every run of whitespace into a single space.
pub fn shrink_blanks(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_blank = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_blank {
                out.push(' ');
            }
            in_blank = true;
        } else {
            out.push(ch);
            in_blank = false;
        }
    }
    out
}

pub fn strip_non_alphanumerics(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_alphanumeric())
}
