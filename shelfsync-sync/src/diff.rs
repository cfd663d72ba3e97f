//! Unified diff rendering for dry runs and `shelfsync diff`.

use std::path::Path;

use similar::TextDiff;

/// Unified diff between the current and updated document, with `a/`/`b/`
/// headers naming the document path.
pub fn unified(original: &str, updated: &str, path: &Path) -> String {
    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    TextDiff::from_lines(original, updated)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn diff_carries_headers_and_hunks() {
        let path = PathBuf::from("README.md");
        let out = unified("a\nb\nc\n", "a\nB\nc\n", &path);
        assert!(out.contains("--- a/README.md"), "diff was: {out}");
        assert!(out.contains("+++ b/README.md"), "diff was: {out}");
        assert!(out.contains("@@"), "diff was: {out}");
        assert!(out.contains("-b"), "diff was: {out}");
        assert!(out.contains("+B"), "diff was: {out}");
    }
}
