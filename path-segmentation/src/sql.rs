use crate::{CompiledAlternative, LIKE_ESCAPE, MatchSpec, SegmentRole};

/// SQL expressions for the three segment roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathColumns {
    pub whole: String,
    pub parent: String,
    pub leaf: String,
}

impl PathColumns {
    /// Derives parent/leaf from a single path column with SQLite string
    /// functions. Paths without a `/` yield NULL for both, which never LIKE
    /// anything.
    pub fn sqlite(column: &str) -> Self {
        let slash = format!("INSTR({column}, '/')");
        Self {
            whole: column.to_string(),
            parent: format!("CASE WHEN {slash} > 0 THEN SUBSTR({column}, 1, {slash} - 1) END"),
            leaf: format!("CASE WHEN {slash} > 0 THEN SUBSTR({column}, {slash} + 1) END"),
        }
    }

    fn expr(&self, role: SegmentRole) -> &str {
        match role {
            SegmentRole::Whole => &self.whole,
            SegmentRole::Parent => &self.parent,
            SegmentRole::Leaf => &self.leaf,
        }
    }
}

/// WHERE clause fragment with `?` placeholders and the patterns to bind, in
/// placeholder order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SqlPredicate {
    pub clause: String,
    pub params: Vec<String>,
}

impl SqlPredicate {
    /// `(<alt>) OR (<alt>) ...`, each alternative an AND of LIKE comparisons.
    pub fn for_alternatives(alternatives: &[CompiledAlternative], columns: &PathColumns) -> Self {
        let mut params = Vec::new();
        let clause = render(alternatives, columns, |spec| {
            params.push(spec.pattern.clone());
            "?".to_string()
        });
        Self { clause, params }
    }

    /// Same shape with every pattern embedded as a quoted literal, for logs and
    /// `--explain` output.
    pub fn inline(alternatives: &[CompiledAlternative], columns: &PathColumns) -> String {
        render(alternatives, columns, |spec| quote_literal(&spec.pattern))
    }
}

/// Wraps `text` in single quotes, doubling embedded single quotes.
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

const NEVER: &str = "0 = 1";

fn render(
    alternatives: &[CompiledAlternative],
    columns: &PathColumns,
    mut value: impl FnMut(&MatchSpec) -> String,
) -> String {
    if alternatives.is_empty() {
        return NEVER.to_string();
    }
    let escape = quote_literal(&LIKE_ESCAPE.to_string());
    alternatives
        .iter()
        .map(|alternative| {
            if alternative.never_matches() {
                return format!("({NEVER})");
            }
            let conjunction = alternative
                .segments
                .iter()
                .map(|spec| {
                    format!(
                        "{} LIKE {} ESCAPE {escape}",
                        columns.expr(spec.role),
                        value(spec)
                    )
                })
                .collect::<Vec<_>>()
                .join(" AND ");
            format!("({conjunction})")
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}
