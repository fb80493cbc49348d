/// True if `prefix` is an ancestor of `path` or equal to it.
///
/// Comparison is by whole segments, so `["do"]` is not a prefix of
/// `["docs"]`. The empty path (the root) is a prefix of everything.
#[must_use]
pub fn has_prefix(path: &[String], prefix: &[String]) -> bool {
    path.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhcache_test::test_path;

    #[test]
    fn test_ancestor_and_self() {
        let path = test_path("a/b/c");
        assert!(has_prefix(&path, &test_path("a")));
        assert!(has_prefix(&path, &test_path("a/b")));
        assert!(has_prefix(&path, &path));
        assert!(has_prefix(&path, &[]));
    }

    #[test]
    fn test_not_prefix() {
        let path = test_path("a/b");
        assert!(!has_prefix(&path, &test_path("a/b/c")));
        assert!(!has_prefix(&path, &test_path("a/x")));
        assert!(!has_prefix(&test_path("docs"), &test_path("do")));
        assert!(!has_prefix(&[], &test_path("a")));
    }
}
