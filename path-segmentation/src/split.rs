use serde::{Deserialize, Serialize};

/// Separates OR alternatives. There is no escape for a literal `|`.
pub const ALTERNATIVE_DELIMITER: char = '|';

/// Separates the parent folder from the leaf folder of an alternative.
pub const HIERARCHY_DELIMITER: char = '/';

/// Which part of a stored path a segment is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    /// The alternative had no `/`: compare against the whole stored path.
    Whole,
    /// Text before the first `/` of the stored path.
    Parent,
    /// Text after the first `/` of the stored path.
    Leaf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'s> {
    pub role: SegmentRole,
    pub text: &'s str,
}

/// Splits the raw query on every `|`.
///
/// Always yields `1 + count('|')` alternatives, empty ones included, so
/// `"|202/|vacation"` becomes `["", "202/", "vacation"]`.
pub fn split_alternatives(raw: &str) -> Vec<&str> {
    raw.split(ALTERNATIVE_DELIMITER).collect()
}

/// Splits one alternative on its first `/`.
///
/// `""` => []
/// `London` => [Whole("London")]
/// `2790/07` => [Parent("2790"), Leaf("07")]
/// `a/b/c` => [Parent("a"), Leaf("b/c")]
pub fn split_segments(alternative: &str) -> Vec<Segment<'_>> {
    if alternative.is_empty() {
        return vec![];
    }
    match alternative.split_once(HIERARCHY_DELIMITER) {
        Some((parent, leaf)) => vec![
            Segment {
                role: SegmentRole::Parent,
                text: parent,
            },
            Segment {
                role: SegmentRole::Leaf,
                text: leaf,
            },
        ],
        None => vec![Segment {
            role: SegmentRole::Whole,
            text: alternative,
        }],
    }
}
