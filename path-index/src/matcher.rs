use crate::PathRecord;
use path_segmentation::{CompiledAlternative, MatchMode, MatchSpec, SegmentRole};
use regex::Regex;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Folds ASCII letters only, the way SQL `LIKE` does.
    pub case_insensitive: bool,
}

#[derive(Clone, Debug)]
pub(crate) enum SpecMatcher {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
    Regex(Regex),
}

impl SpecMatcher {
    pub(crate) fn matches(&self, candidate: &str) -> bool {
        match self {
            SpecMatcher::Exact(needle) => candidate == needle,
            SpecMatcher::Prefix(needle) => candidate.starts_with(needle.as_str()),
            SpecMatcher::Suffix(needle) => candidate.ends_with(needle.as_str()),
            SpecMatcher::Contains(needle) => candidate.contains(needle.as_str()),
            SpecMatcher::Regex(regex) => regex.is_match(candidate),
        }
    }
}

fn fragments_to_regex(mode: MatchMode, fragments: &[String]) -> String {
    let mut regex = String::from("(?s)");
    if mode.anchored_start() {
        regex.push('^');
    }
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            regex.push_str(".*");
        }
        regex.push_str(&regex::escape(fragment));
    }
    if mode.anchored_end() {
        regex.push('$');
    }
    regex
}

/// Single-fragment specs become plain string checks, everything with an
/// interior wildcard goes through a regex. Fragments are expected to be
/// folded already when the search is case-insensitive.
pub(crate) fn build_spec_matcher(
    mode: MatchMode,
    fragments: &[String],
) -> Result<SpecMatcher, regex::Error> {
    let single = match fragments {
        [] => Some(String::new()),
        [only] => Some(only.clone()),
        _ => None,
    };
    Ok(match (mode, single) {
        (MatchMode::Exact, Some(needle)) => SpecMatcher::Exact(needle),
        (MatchMode::Prefix, Some(needle)) => SpecMatcher::Prefix(needle),
        (MatchMode::Suffix, Some(needle)) => SpecMatcher::Suffix(needle),
        (MatchMode::Any, Some(needle)) => SpecMatcher::Contains(needle),
        _ => SpecMatcher::Regex(Regex::new(&fragments_to_regex(mode, fragments))?),
    })
}

fn spec_matcher(spec: &MatchSpec, fold_ascii: bool) -> Result<SpecMatcher, regex::Error> {
    if fold_ascii {
        let folded: Vec<String> = spec
            .fragments
            .iter()
            .map(|fragment| fragment.to_ascii_lowercase())
            .collect();
        build_spec_matcher(spec.mode, &folded)
    } else {
        build_spec_matcher(spec.mode, &spec.fragments)
    }
}

/// All segment matchers of one alternative, ready to test stored paths.
#[derive(Clone, Debug)]
pub struct AlternativeMatcher {
    matchers: Vec<(SegmentRole, SpecMatcher)>,
    fold_ascii: bool,
}

impl AlternativeMatcher {
    pub fn new(
        alternative: &CompiledAlternative,
        options: SearchOptions,
    ) -> Result<Self, regex::Error> {
        let fold_ascii = options.case_insensitive;
        let matchers = alternative
            .segments
            .iter()
            .map(|spec| spec_matcher(spec, fold_ascii).map(|matcher| (spec.role, matcher)))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            matchers,
            fold_ascii,
        })
    }

    pub fn matches(&self, record: &PathRecord) -> bool {
        if self.matchers.is_empty() {
            return false;
        }
        self.matchers.iter().all(|(role, matcher)| {
            let candidate = match role {
                SegmentRole::Whole => Some(record.path.as_str()),
                SegmentRole::Parent => record.parent(),
                SegmentRole::Leaf => record.leaf(),
            };
            candidate.is_some_and(|candidate| {
                if self.fold_ascii {
                    matcher.matches(&candidate.to_ascii_lowercase())
                } else {
                    matcher.matches(candidate)
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_segmentation::{Segment, compile_alternative, compile_segment};

    fn spec(text: &str) -> MatchSpec {
        compile_segment(Segment {
            role: SegmentRole::Whole,
            text,
        })
    }

    fn matcher(text: &str) -> SpecMatcher {
        let spec = spec(text);
        build_spec_matcher(spec.mode, &spec.fragments).expect("ok")
    }

    fn regex_of(text: &str) -> String {
        let spec = spec(text);
        fragments_to_regex(spec.mode, &spec.fragments)
    }

    fn alternative(raw: &str, case_insensitive: bool) -> AlternativeMatcher {
        AlternativeMatcher::new(&compile_alternative(raw), SearchOptions { case_insensitive })
            .unwrap()
    }

    fn record(path: &str) -> PathRecord {
        PathRecord::new("p", "f", path)
    }

    // --- fragments_to_regex ---

    #[test]
    fn regex_follows_mode_anchoring() {
        assert_eq!(regex_of("abc"), "(?s)^abc$");
        assert_eq!(regex_of("abc*"), "(?s)^abc");
        assert_eq!(regex_of("*abc"), "(?s)abc$");
        assert_eq!(regex_of("a*c"), "(?s)^a.*c$");
        assert_eq!(regex_of("*b*"), "(?s)b");
        assert_eq!(regex_of("*"), "(?s)");
    }

    #[test]
    fn regex_escapes_fragments() {
        assert_eq!(regex_of("a.b*(1)"), "(?s)^a\\.b.*\\(1\\)$");
    }

    // --- plain vs regex selection ---

    #[test]
    fn single_fragment_specs_are_plain() {
        assert!(matches!(matcher("abc"), SpecMatcher::Exact(n) if n == "abc"));
        assert!(matches!(matcher("abc*"), SpecMatcher::Prefix(n) if n == "abc"));
        assert!(matches!(matcher("*abc"), SpecMatcher::Suffix(n) if n == "abc"));
        assert!(matches!(matcher("*abc*"), SpecMatcher::Contains(n) if n == "abc"));
        assert!(matches!(matcher("*"), SpecMatcher::Contains(n) if n.is_empty()));
    }

    #[test]
    fn interior_wildcards_need_a_regex() {
        assert!(matches!(matcher("a*b"), SpecMatcher::Regex(_)));
        assert!(matches!(matcher("a*b*"), SpecMatcher::Regex(_)));
        assert!(matches!(matcher("*a*b*"), SpecMatcher::Regex(_)));
    }

    // --- matching ---

    #[test]
    fn wildcard_placement_law() {
        let suffix = matcher("*X");
        assert!(suffix.matches("fooX") && suffix.matches("X") && !suffix.matches("Xfoo"));
        let prefix = matcher("X*");
        assert!(prefix.matches("Xfoo") && prefix.matches("X") && !prefix.matches("fooX"));
        let contains = matcher("*X*");
        assert!(contains.matches("aXb") && !contains.matches("ab"));
        let any = matcher("*");
        assert!(any.matches("") && any.matches("anything"));
    }

    #[test]
    fn interior_wildcard_needs_prefix_and_suffix() {
        let m = matcher("202*3");
        assert!(m.matches("2023"));
        assert!(m.matches("202-xyz-3"));
        assert!(!m.matches("2020"));
        assert!(!m.matches("x2023"));
        // Prefix and suffix may not overlap.
        assert!(!matcher("ab*bc").matches("abc"));
    }

    #[test]
    fn storage_wildcards_are_literal() {
        let m = matcher("%abc");
        assert!(m.matches("%abc"));
        assert!(!m.matches("&abc"));
        assert!(!m.matches("xabc"));
        assert!(alternative("ab_c*", true).matches(&record("AB_Cdef")));
        assert!(!alternative("ab_c*", true).matches(&record("abxc")));
    }

    #[test]
    fn case_insensitive_matching() {
        assert!(alternative("london", true).matches(&record("London")));
        assert!(!alternative("london", false).matches(&record("London")));
        assert!(alternative("2*/V*ON", true).matches(&record("2023/vacation")));
    }

    #[test]
    fn only_ascii_letters_fold() {
        assert!(alternative("ÉMILE/X", true).matches(&record("Émile/x")));
        assert!(!alternative("émile/x", true).matches(&record("Émile/x")));
        assert!(!alternative("*É*", true).matches(&record("école")));
    }

    #[test]
    fn alternative_matches_parent_and_leaf() {
        let alt = alternative("2000/02", false);
        assert!(alt.matches(&record("2000/02")));
        assert!(!alt.matches(&record("2000/022")));
        assert!(!alt.matches(&record("2000")));
        assert!(!alt.matches(&record("x2000/02")));
    }

    #[test]
    fn two_segments_never_match_single_level_paths() {
        let alt = alternative("*/*", false);
        assert!(alt.matches(&record("a/b")));
        assert!(alt.matches(&record("/")));
        assert!(!alt.matches(&record("London")));
    }

    #[test]
    fn whole_role_sees_the_full_path() {
        let alt = alternative("2790*", false);
        assert!(alt.matches(&record("2790/07")));
        assert!(!alt.matches(&record("x2790")));
    }

    #[test]
    fn empty_alternative_matches_nothing() {
        let alt = alternative("", false);
        assert!(!alt.matches(&record("")));
        assert!(!alt.matches(&record("London")));
    }
}
