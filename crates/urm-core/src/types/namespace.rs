//! Namespace and binary-name helpers.
//!
//! Names are dotted binary names as the JVM reports them: nested types keep
//! their `$` separator (`a.b.Outer$Inner`), anonymous types end in a number
//! (`a.b.Outer$1`).

use crate::constants::{NAMESPACE_SEPARATOR, NESTED_SEPARATOR};

/// True when `name` equals `prefix` or lies strictly below it.
///
/// Segment-aware: `a.b` covers `a.b` and `a.b.X`, never `a.bc.X`.
/// The empty prefix is the root namespace and covers everything.
pub fn is_under(name: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match name.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with(NAMESPACE_SEPARATOR),
        None => false,
    }
}

/// Owning namespace of a binary name; empty for the root namespace.
pub fn namespace_of(name: &str) -> &str {
    name.rsplit_once(NAMESPACE_SEPARATOR)
        .map(|(namespace, _)| namespace)
        .unwrap_or("")
}

/// Simple name of a binary name.
///
/// The last dotted segment, narrowed to the innermost nested type. Anonymous
/// types (`Outer$1`) have an empty simple name; local types (`Outer$1Local`)
/// drop their numeric prefix.
pub fn simple_name_of(name: &str) -> &str {
    let segment = name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map(|(_, segment)| segment)
        .unwrap_or(name);
    match segment.rsplit_once(NESTED_SEPARATOR) {
        Some((_, nested)) => nested.trim_start_matches(|c: char| c.is_ascii_digit()),
        None => segment,
    }
}

/// Convert an internal name (`a/b/C`) or class entry path (`a/b/C.class`)
/// to a dotted binary name.
pub fn binary_name_from_internal(internal: &str) -> String {
    internal
        .strip_suffix(".class")
        .unwrap_or(internal)
        .replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_segment_aware() {
        assert!(is_under("a.b.X", "a.b"));
        assert!(is_under("a.b", "a.b"));
        assert!(is_under("a.b.c.Y", "a.b"));
        assert!(!is_under("a.bc.X", "a.b"));
        assert!(!is_under("a", "a.b"));
        assert!(is_under("anything", ""));
    }

    #[test]
    fn namespace_of_top_level_and_nested() {
        assert_eq!(namespace_of("com.example.shapes.Circle"), "com.example.shapes");
        assert_eq!(namespace_of("com.example.Outer$Inner"), "com.example");
        assert_eq!(namespace_of("Bare"), "");
    }

    #[test]
    fn simple_names_follow_nesting_rules() {
        assert_eq!(simple_name_of("com.example.shapes.Circle"), "Circle");
        assert_eq!(simple_name_of("com.example.Outer$Inner"), "Inner");
        assert_eq!(simple_name_of("com.example.Outer$1"), "");
        assert_eq!(simple_name_of("com.example.Outer$1Local"), "Local");
        assert_eq!(simple_name_of("com.example.package-info"), "package-info");
        assert_eq!(simple_name_of("Bare"), "Bare");
    }

    #[test]
    fn internal_names_become_dotted() {
        assert_eq!(binary_name_from_internal("a/b/C"), "a.b.C");
        assert_eq!(binary_name_from_internal("a/b/C$D.class"), "a.b.C$D");
    }
}
