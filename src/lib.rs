//! Photo path search.
//!
//! A path filter arrives either as the dedicated path field of a
//! [`SearchForm`] or as a `path:"…"` clause inside its free text query. Both
//! feed the same compiler ([`compile_path_query`]); the compiled alternatives
//! are handed one at a time to a [`PathLookup`] collaborator and the results
//! are merged by row identity.
mod form;
mod lookup;
mod merge;
mod search;

pub use form::*;
pub use lookup::*;
pub use merge::*;
pub use search::*;

pub use path_index::{PathIndex, PathRecord, SearchOptions};
pub use path_segmentation::{
    CompiledAlternative, MatchMode, MatchSpec, PathColumns, SegmentRole, SqlPredicate,
    compile_path_query,
};
pub use search_cancel::CancellationToken;
pub use search_syntax::{ParseError, extract_path_clause};
