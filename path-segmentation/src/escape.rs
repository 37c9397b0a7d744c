use crate::{CharClass, LIKE_ESCAPE, classify};

/// Escapes `segment` for embedding in a LIKE pattern rendered with
/// `ESCAPE '\'`.
///
/// `%`, `_` and `\` get an escape prefix. Quotes, `&` and whitespace are plain
/// data for a bound pattern and are copied verbatim, never trimmed or
/// collapsed. `*` is left untouched; the compiler turns it into a positional
/// wildcard before anything is escaped.
pub fn escape(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len() + 2);
    push_escaped(&mut escaped, segment);
    escaped
}

pub(crate) fn push_escaped(buffer: &mut String, text: &str) {
    for (ch, class) in classify(text) {
        match class {
            CharClass::SqlWildcard | CharClass::EscapeChar => {
                buffer.push(LIKE_ESCAPE);
                buffer.push(ch);
            }
            CharClass::Quote
            | CharClass::Connector
            | CharClass::Whitespace
            | CharClass::UserWildcard
            | CharClass::Literal => buffer.push(ch),
        }
    }
}
