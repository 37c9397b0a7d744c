use anyhow::Result;
use path_index::{PathIndex, PathRecord, SearchOptions};
use path_segmentation::CompiledAlternative;
use search_cancel::CancellationToken;
use std::hash::Hash;

/// Identity used to de-duplicate rows across alternatives.
pub trait RowIdentity {
    type Id: Eq + Hash;

    /// With `merged` set, every file of a photo shares one identity.
    fn identity(&self, merged: bool) -> Self::Id;
}

/// Storage side of a path search: answers one compiled alternative at a time.
///
/// `Ok(None)` means the search was cancelled while the lookup ran.
pub trait PathLookup {
    type Row: RowIdentity;

    fn lookup(
        &self,
        alternative: &CompiledAlternative,
        options: SearchOptions,
        token: CancellationToken,
    ) -> Result<Option<Vec<Self::Row>>>;
}

impl RowIdentity for PathRecord {
    type Id = String;

    fn identity(&self, merged: bool) -> String {
        if merged {
            self.photo_uid.clone()
        } else {
            self.file_uid.clone()
        }
    }
}

impl PathLookup for PathIndex {
    type Row = PathRecord;

    fn lookup(
        &self,
        alternative: &CompiledAlternative,
        options: SearchOptions,
        token: CancellationToken,
    ) -> Result<Option<Vec<PathRecord>>> {
        PathIndex::lookup(self, alternative, options, token)
    }
}
