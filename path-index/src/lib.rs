mod index;
mod matcher;
mod record;

pub use index::*;
pub use matcher::*;
pub use record::*;
