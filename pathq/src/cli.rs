use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
pub struct Cli {
    /// JSON array of `{photo_uid, file_uid, path}` records.
    #[clap(long)]
    pub index: PathBuf,
    /// Raw path filter, e.g. `London|2790/07`.
    #[clap(long, default_value = "")]
    pub path: String,
    /// Free text query, a `path:"…"` clause overrides `--path`.
    #[clap(long, default_value = "")]
    pub query: String,
    #[clap(long, default_value = "false")]
    /// Collapse the files of one photo into a single row.
    pub merged: bool,
    #[clap(long, default_value = "false")]
    pub case_insensitive: bool,
    #[clap(long)]
    pub limit: Option<usize>,
    #[clap(long, default_value = "false")]
    /// Print the compiled alternatives and the SQL predicate before searching.
    pub explain: bool,
    #[clap(long, default_value = "false")]
    pub json: bool,
}
