//! NAnt-style glob matching for path strings.
//!
//! Patterns are `/`-delimited. Within a segment, `*` matches a run of
//! non-separator characters and `?` matches exactly one character that is
//! neither `.` nor `/`. A whole segment of `**` matches any number of path
//! segments, including none. Back-slashes are treated as forward slashes,
//! so Windows-style paths can be matched by Unix-style patterns.
//!
//! Matching works by translating the pattern to a regular expression and
//! searching the normalized path with it. The search is not anchored at
//! the start of the path; only the end of the pattern anchors. Patterns
//! are never rejected: text that is not valid glob syntax still translates
//! to *some* regex, which may match more or less than intended.

use regex::Regex;
use std::fmt;

lazy_static! {
    static ref STARS_SLASHES_DOTS: Regex =
        Regex::new(r"^[*/.]*$").expect("fast-path regex is valid");
}

/// Regex for `*.*`: any single path segment, separators disallowed.
const SINGLE_SEGMENT: &str = r"^[^/]*$";

/// One `/`-delimited component of a pattern.
enum Segment<'a> {
    /// `**`: any number of path segments, including none.
    AnySegments,
    /// Literal text, possibly containing `*` and `?` wildcards.
    Plain(&'a str),
}

impl<'a> Segment<'a> {
    fn parse(text: &'a str) -> Self {
        if text == "**" {
            Segment::AnySegments
        } else {
            Segment::Plain(text)
        }
    }
}

/// Replaces every back-slash with a forward slash.
pub fn forwardify_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Reports whether `path` is matched by `pattern`.
pub fn matches(pattern: &str, path: &str) -> bool {
    let pattern = forwardify_slashes(pattern);
    if matches_everything(&pattern) {
        return true;
    }

    compile(&build_regex(&pattern)).is_match(&forwardify_slashes(path))
}

/// Like [`matches`], but lowercases both operands first when `ignore_case`
/// is set. Lowercasing is Unicode default casing, independent of the
/// process locale.
pub fn matches_ignore_case(pattern: &str, path: &str, ignore_case: bool) -> bool {
    if ignore_case {
        matches(&pattern.to_lowercase(), &path.to_lowercase())
    } else {
        matches(pattern, path)
    }
}

/// Translates a glob pattern to regex text. Pure: the same pattern always
/// yields the same regex.
pub fn build_regex(pattern: &str) -> String {
    let pattern = forwardify_slashes(pattern);

    // Handled here, not by the fast path: `*.*` must not cross a separator.
    if pattern == "*.*" {
        return String::from(SINGLE_SEGMENT);
    }

    let segments: Vec<Segment> = pattern.split('/').map(Segment::parse).collect();
    let last = segments.len() - 1;

    let mut regex = String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::AnySegments if i == last => regex.push_str("(?:$|(?:.*?/)*)"),
            Segment::AnySegments => regex.push_str("(?:.*?/)*"),
            Segment::Plain(text) => {
                push_plain(text, &mut regex);
                regex.push_str(if i == last { "$" } else { "/?" });
            }
        }
    }

    regex
}

// Patterns of only stars, slashes and dots match everything, except the
// literal `*.*`, which stays a single-segment match.
fn matches_everything(pattern: &str) -> bool {
    pattern != "*.*" && STARS_SLASHES_DOTS.is_match(pattern)
}

// Only `.`, `*` and `?` are rewritten; any other character passes through
// into the regex untouched, metacharacter or not.
fn push_plain(segment: &str, regex: &mut String) {
    for c in segment.chars() {
        match c {
            '.' => regex.push_str(r"\."),
            '*' => regex.push_str("[^/]*"),
            '?' => regex.push_str("[^./]"),
            other => regex.push(other),
        }
    }
}

fn compile(regex: &str) -> Regex {
    Regex::new(regex)
        .unwrap_or_else(|err| panic!("translated glob is not a valid regex {:?}: {}", regex, err))
}

/// A pattern translated and compiled once, for matching many paths.
pub struct Pattern {
    text: String,
    regex: Option<Regex>,
    lowercase: bool,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        Self::build(forwardify_slashes(pattern), false)
    }

    /// Compiles a pattern that disregards case when matching.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::build(forwardify_slashes(pattern).to_lowercase(), true)
    }

    fn build(text: String, lowercase: bool) -> Self {
        let regex = if matches_everything(&text) {
            None
        } else {
            Some(compile(&build_regex(&text)))
        };

        Self {
            text,
            regex,
            lowercase,
        }
    }

    /// The normalized pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, path: &str) -> bool {
        let regex = match &self.regex {
            None => return true,
            Some(regex) => regex,
        };

        let path = forwardify_slashes(path);
        if self.lowercase {
            regex.is_match(&path.to_lowercase())
        } else {
            regex.is_match(&path)
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{build_regex, forwardify_slashes, matches, matches_ignore_case, Pattern};

    #[test]
    fn test_all_wildcard_patterns_match_everything() {
        for pattern in &["*", "**", "*/", "/", ".", "**/*", "*.", "...", "*/**/."] {
            assert!(matches(pattern, "any/old/path.txt"), "pattern {:?}", pattern);
            assert!(matches(pattern, ""), "pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert!(matches("", "foo/bar"));
    }

    #[test]
    fn test_star_dot_star_is_single_segment() {
        assert!(matches("*.*", "foo"));
        assert!(matches("*.*", "foo.txt"));
        assert!(!matches("*.*", "foo/bar"));
    }

    #[test]
    fn test_backslashes_are_normalized() {
        assert!(matches("c:/*.bat", "c:\\autoexec.bat"));
        assert!(matches("c:\\*.bat", "c:/autoexec.bat"));
    }

    #[test]
    fn test_star_within_segment() {
        assert!(matches("c:/fo*/*.bat", "c:/foobar/autoexec.bat"));
        assert!(!matches("c:/fo*/*.bat", "c:/bar/autoexec.bat"));
    }

    #[test]
    fn test_question_mark_matches_exactly_one_character() {
        assert!(matches("c:/fo?/*.bat", "c:/foo/autoexec.bat"));
        assert!(!matches("c:/fo?/*.bat", "c:/fo/autoexec.bat"));
        assert!(!matches("c:/fo?/*.bat", "c:/fooo/autoexec.bat"));
    }

    #[test]
    fn test_question_mark_rejects_dot() {
        assert!(!matches("fo?", "fo."));
        assert!(matches("fo?", "fob"));
    }

    #[test]
    fn test_double_star_spans_segments() {
        assert!(matches("a/**/b", "a/b"));
        assert!(matches("a/**/b", "a/x/b"));
        assert!(matches("a/**/b", "a/x/y/b"));
        assert!(!matches("a/**/b", "a/x/c"));
    }

    #[test]
    fn test_trailing_double_star_matches_tail() {
        assert!(matches("foo/**", "foo"));
        assert!(matches("foo/**", "foo/bar"));
        assert!(matches("foo/**", "foo/bar/baz.txt"));
        assert!(!matches("foo/**", "fob"));
    }

    #[test]
    fn test_case_sensitive_by_default() {
        assert!(!matches("ABC", "abc"));
        assert!(matches_ignore_case("ABC", "abc", true));
        assert!(!matches_ignore_case("ABC", "abc", false));
    }

    #[test]
    fn test_search_is_not_anchored_at_start() {
        // Long-standing looseness: the translated regex only anchors its
        // end, so a pattern may match a suffix of the path.
        assert!(matches("a", "ba"));
    }

    #[test]
    fn test_forwardify_is_idempotent() {
        let once = forwardify_slashes("a\\b\\c");
        let twice = forwardify_slashes(&once);
        assert_eq!(once, "a/b/c");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_translated_regex_text() {
        assert_eq!(build_regex("*.*"), "^[^/]*$");
        assert_eq!(build_regex("c:/*.bat"), "c:/?[^/]*\\.bat$");
        assert_eq!(build_regex("a/**/b"), "a/?(?:.*?/)*b$");
        assert_eq!(build_regex("foo/**"), "foo/?(?:$|(?:.*?/)*)");
    }

    #[test]
    fn test_build_regex_is_pure() {
        assert_eq!(build_regex("src/**/*.rs"), build_regex("src/**/*.rs"));
    }

    #[test]
    fn test_compiled_pattern_agrees_with_free_function() {
        let pattern = Pattern::new("src/**/*.rs");
        assert!(pattern.matches("src/lib.rs"));
        assert!(pattern.matches("src/a/b/mod.rs"));
        assert!(!pattern.matches("tests/lib.rs"));
    }

    #[test]
    fn test_compiled_pattern_normalizes_text() {
        let pattern = Pattern::new("a\\b");
        assert_eq!(pattern.as_str(), "a/b");
        assert_eq!(format!("{}", pattern), "a/b");
    }

    #[test]
    fn test_compiled_pattern_ignoring_case() {
        let pattern = Pattern::ignoring_case("SRC/*.RS");
        assert!(pattern.matches("src/lib.rs"));
        assert!(pattern.matches("SRC/LIB.RS"));
    }

    #[test]
    fn test_compiled_match_all_pattern() {
        let pattern = Pattern::new("**");
        assert!(pattern.matches("anything/at/all"));
    }
}
