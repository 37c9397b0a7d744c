use crate::{
    CharClass, Segment, SegmentRole, USER_WILDCARD, escape::push_escaped, split_alternatives,
    split_segments,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the user wildcards sit inside a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// No `*`: the stored value equals the literal.
    Exact,
    /// Trailing `*` only: the stored value starts with the first fragment.
    Prefix,
    /// Leading `*` only: the stored value ends with the last fragment.
    Suffix,
    /// Interior `*` only: first fragment is a prefix, last fragment a suffix,
    /// anything in between.
    Substring,
    /// Leading and trailing `*` (or a bare `*`): the fragments appear anywhere.
    Any,
}

impl MatchMode {
    /// Whether the first fragment has to start the stored value.
    pub fn anchored_start(self) -> bool {
        matches!(
            self,
            MatchMode::Exact | MatchMode::Prefix | MatchMode::Substring
        )
    }

    /// Whether the last fragment has to end the stored value.
    pub fn anchored_end(self) -> bool {
        matches!(
            self,
            MatchMode::Exact | MatchMode::Suffix | MatchMode::Substring
        )
    }
}

/// Compiled form of one segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpec {
    pub role: SegmentRole,
    pub mode: MatchMode,
    /// Literal text between runs of `*`, unescaped, in order.
    pub fragments: Vec<String>,
    /// LIKE pattern for a bound parameter with `ESCAPE '\'`.
    pub pattern: String,
}

/// One OR branch: every spec has to match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompiledAlternative {
    /// The alternative as written by the user.
    pub source: String,
    pub segments: Vec<MatchSpec>,
}

impl CompiledAlternative {
    /// An alternative without segments (the empty string) matches nothing.
    pub fn never_matches(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Compiles the raw path field (or an extracted `path:` value).
pub fn compile_path_query(raw: &str) -> Vec<CompiledAlternative> {
    let alternatives: Vec<_> = split_alternatives(raw)
        .into_iter()
        .map(compile_alternative)
        .collect();
    debug!(
        query = raw,
        alternatives = alternatives.len(),
        empty = alternatives.iter().filter(|alt| alt.never_matches()).count(),
        "compiled path query"
    );
    alternatives
}

pub fn compile_alternative(alternative: &str) -> CompiledAlternative {
    CompiledAlternative {
        source: alternative.to_string(),
        segments: split_segments(alternative)
            .into_iter()
            .map(compile_segment)
            .collect(),
    }
}

pub fn compile_segment(segment: Segment<'_>) -> MatchSpec {
    let text = segment.text;
    let leading = text.starts_with(USER_WILDCARD);
    let trailing = text.ends_with(USER_WILDCARD);
    let has_wildcard = text.contains(USER_WILDCARD);

    let mode = match (has_wildcard, leading, trailing) {
        (false, _, _) => MatchMode::Exact,
        (true, true, true) => MatchMode::Any,
        (true, true, false) => MatchMode::Suffix,
        (true, false, true) => MatchMode::Prefix,
        (true, false, false) => MatchMode::Substring,
    };

    let fragments = literal_fragments(text);

    let mut pattern = String::with_capacity(text.len() + 4);
    if leading {
        pattern.push('%');
    }
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            pattern.push('%');
        }
        push_escaped(&mut pattern, fragment);
    }
    // A bare `*` already produced its single `%`.
    if trailing && !(leading && fragments.is_empty()) {
        pattern.push('%');
    }

    MatchSpec {
        role: segment.role,
        mode,
        fragments,
        pattern,
    }
}

// Runs of `*` collapse, so `a**b` has the fragments of `a*b`.
fn literal_fragments(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut has_wildcard = false;
    for ch in text.chars() {
        if CharClass::of(ch).is_literal_data() {
            current.push(ch);
        } else {
            has_wildcard = true;
            if !current.is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
        }
    }
    // An exact segment keeps its (possibly empty) literal as the only fragment.
    if !current.is_empty() || !has_wildcard {
        fragments.push(current);
    }
    fragments
}
