//! Compiles path search expressions into per-segment match specifications.
//!
//! ```text
//! `2790/07`          => [Parent Exact("2790"), Leaf Exact("07")]
//! `2790*`            => [Whole Prefix("2790")]
//! `*2020/*vacation`  => [Parent Suffix("2020"), Leaf Suffix("vacation")]
//! `202*3/vac*ation`  => [Parent Substring("202", "3"), Leaf Substring("vac", "ation")]
//! `London|2790/07`   => two alternatives, evaluated independently
//! `|202/|vacation`   => ["", "202/", "vacation"], the empty one never matches
//! ```
mod classify;
mod compile;
mod escape;
mod split;
mod sql;

pub use classify::*;
pub use compile::*;
pub use escape::*;
pub use split::*;
pub use sql::*;
