//! Filesystem-safe tokens from free-text labels.

/// Slugifies a label.
///
/// - Drops every character that is not alphanumeric, `_`, `-` or whitespace
/// - Trims surrounding whitespace
/// - Replaces each inner whitespace run with a single `_`
pub fn slugify(label: &str) -> String {
    let kept: String = label
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
