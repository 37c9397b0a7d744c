/// The user facing wildcard, matching any (possibly empty) run of characters.
pub const USER_WILDCARD: char = '*';

/// Escape character used in every rendered LIKE pattern (`ESCAPE '\'`).
pub const LIKE_ESCAPE: char = '\\';

/// Role a character plays while a segment is compiled.
///
/// Class membership only depends on the character itself, never on its
/// neighbours or on its position inside the segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Literal,
    /// `*`
    UserWildcard,
    /// `%` and `_`, the wildcards of the storage pattern engine.
    SqlWildcard,
    /// `\`, the escape character of rendered patterns.
    EscapeChar,
    /// `'` and `"`
    Quote,
    /// `&`
    Connector,
    Whitespace,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        match ch {
            USER_WILDCARD => CharClass::UserWildcard,
            '%' | '_' => CharClass::SqlWildcard,
            LIKE_ESCAPE => CharClass::EscapeChar,
            '\'' | '"' => CharClass::Quote,
            '&' => CharClass::Connector,
            ch if ch.is_whitespace() => CharClass::Whitespace,
            _ => CharClass::Literal,
        }
    }

    /// Everything except `*` is data to match.
    pub fn is_literal_data(self) -> bool {
        !matches!(self, CharClass::UserWildcard)
    }
}

/// Pairs every character of `segment` with its class.
pub fn classify(segment: &str) -> impl Iterator<Item = (char, CharClass)> + '_ {
    segment.chars().map(|ch| (ch, CharClass::of(ch)))
}
