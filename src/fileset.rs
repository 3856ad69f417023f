use crate::pattern::Pattern;

/// An include list and an exclude list of glob patterns, applied together
/// to select paths. Excludes always win; an empty include list selects
/// everything not explicitly excluded.
pub struct FileSet {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl FileSet {
    pub fn new(includes: &[String], excludes: &[String], ignore_case: bool) -> FileSet {
        let compile = |p: &String| {
            if ignore_case {
                Pattern::ignoring_case(p)
            } else {
                Pattern::new(p)
            }
        };

        let compiled_includes: Vec<Pattern> = includes.iter().map(compile).collect();
        let compiled_excludes: Vec<Pattern> = excludes.iter().map(compile).collect();

        for pattern in &compiled_includes {
            debug!("Adding include: {}", pattern);
        }

        for pattern in &compiled_excludes {
            debug!("Adding exclude: {}", pattern);
        }

        FileSet {
            includes: compiled_includes,
            excludes: compiled_excludes,
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        for pattern in &self.excludes {
            if pattern.matches(path) {
                debug!("Excluding {:?}: matched exclude pattern {}", path, pattern);
                return true;
            }
        }

        for pattern in &self.includes {
            if pattern.matches(path) {
                return false;
            }
        }

        if !self.includes.is_empty() {
            debug!("Excluding {:?}: did not match any include pattern", path);
        }

        !self.includes.is_empty()
    }

    pub fn selects(&self, path: &str) -> bool {
        !self.is_excluded(path)
    }
}

#[cfg(test)]
mod tests {
    use super::FileSet;

    fn strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| String::from(*p)).collect()
    }

    #[test]
    fn test_selects_everything_by_default() {
        let set = FileSet::new(&[], &[], false);

        assert!(set.selects("foo"));
        assert!(set.selects("deep/down/bar.txt"));
    }

    #[test]
    fn test_multiple_includes() {
        let set = FileSet::new(&strings(&["**/*.rs", "**/*.toml"]), &[], false);

        assert!(set.selects("hello.rs"));
        assert!(set.selects("src/Cargo.toml"));
        assert!(set.is_excluded("README.md"));
    }

    #[test]
    fn test_multiple_excludes() {
        let set = FileSet::new(&[], &strings(&["**/*.rs", "**/*.toml"]), false);

        assert!(set.is_excluded("hello.rs"));
        assert!(set.is_excluded("src/Cargo.toml"));
        assert!(set.selects("README.md"));
    }

    #[test]
    fn test_excludes_take_precedence() {
        let patterns = strings(&["**/*.rs", "**/*.toml"]);
        let set = FileSet::new(&patterns, &patterns, false);

        assert!(set.is_excluded("hello.rs"));
        assert!(set.is_excluded("src/Cargo.toml"));
        assert!(set.is_excluded("README.md"));
    }

    #[test]
    fn test_double_star_excludes_whole_trees() {
        let set = FileSet::new(&[], &strings(&["**/.git/**"]), false);

        assert!(set.is_excluded(".git/config"));
        assert!(set.is_excluded("sub/.git/hooks/pre-commit"));
        assert!(set.selects("src/main.rs"));
    }

    #[test]
    fn test_ignore_case_applies_to_both_lists() {
        let set = FileSet::new(&strings(&["SRC/**"]), &strings(&["**/*.BAK"]), true);

        assert!(set.selects("src/lib.rs"));
        assert!(set.is_excluded("src/lib.rs.bak"));
    }

    #[test]
    fn test_windows_separators_in_candidates() {
        let set = FileSet::new(&strings(&["src/**/*.rs"]), &[], false);

        assert!(set.selects("src\\deep\\mod.rs"));
    }
}
