use crate::{PathLookup, RowIdentity};
use anyhow::{Context, Result};
use hashbrown::HashSet;
use path_index::SearchOptions;
use path_segmentation::CompiledAlternative;
use search_cancel::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// De-duplicate by photo instead of by file.
    pub merged: bool,
    /// Stop issuing lookups once this many rows are collected.
    pub limit: Option<usize>,
}

/// Looks up every alternative in order and unions the rows, keeping the first
/// appearance of each identity.
///
/// Empty alternatives are skipped without asking the collaborator. Between
/// two lookups the token and the row limit are checked, so a search stops at
/// an alternative boundary and never returns a half merged alternative after
/// cancellation. Returns `Ok(None)` when cancelled.
pub fn merge_alternatives<L>(
    alternatives: &[CompiledAlternative],
    lookup: &L,
    search: SearchOptions,
    merge: MergeOptions,
    token: CancellationToken,
) -> Result<Option<Vec<L::Row>>>
where
    L: PathLookup + ?Sized,
{
    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    let limit_reached = |rows: &Vec<L::Row>| merge.limit.is_some_and(|limit| rows.len() >= limit);

    for (i, alternative) in alternatives.iter().enumerate() {
        if limit_reached(&rows) {
            debug!(
                skipped = alternatives.len() - i,
                "row limit reached, remaining alternatives skipped"
            );
            break;
        }
        if token.is_cancelled() {
            return Ok(None);
        }
        if alternative.never_matches() {
            continue;
        }
        let Some(found) = lookup
            .lookup(alternative, search, token)
            .with_context(|| format!("Path lookup failed for {:?}", alternative.source))?
        else {
            return Ok(None);
        };
        let found_len = found.len();
        for row in found {
            if limit_reached(&rows) {
                break;
            }
            if seen.insert(row.identity(merge.merged)) {
                rows.push(row);
            }
        }
        debug!(
            alternative = %alternative.source,
            found = found_len,
            total = rows.len(),
            "merged alternative"
        );
    }
    Ok(Some(rows))
}
