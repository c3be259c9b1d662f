//! Check whether an IPv4 address belongs to GitHub's published IP ranges and, when it does, which
//! functional category (Hooks, Web, API, Git, Actions, ...) owns the range.
//!
//! The ranges come from the GitHub meta endpoint (`https://api.github.com/meta`). They are
//! requested once per [Classifier], on the first lookup, and are never cached to disk.
//!
//! ```no_run
//! let result = githubipranges::check("192.30.252.1")?;
//! match (result.category, result.matched_range) {
//!     (Some(category), Some(range)) => println!("GitHub {category} range {range}"),
//!     _ => println!("Not a GitHub address"),
//! }
//! # Ok::<(), githubipranges::Error>(())
//! ```
//!
//! Lookups have three outcomes: a member [CheckResult], a non-member [CheckResult], or an
//! [Error] that is either a [ValidationError] (the input is not a public IPv4 address) or a
//! [FetchError] (the ranges could not be retrieved).

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::categories::{Category, CATEGORIES};
pub use crate::core::check_result::CheckResult;
pub use crate::core::classifier::{Classifier, RangeSource};
pub use crate::core::client::{Client, ClientBuilder, DEFAULT_URL};
pub use crate::core::errors::{Error, FetchError, NonRoutable, Result, ValidationError};
pub use crate::core::json::parse as parse_json;
pub use crate::core::range_set::{CategoryRanges, RangeSet};
pub use crate::core::validator::validate;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ validates `raw` and classifies it against the GitHub IP Ranges
/// using a [Client] configured from the environment (see [ClientBuilder::new]).
pub fn check(raw: &str) -> Result<CheckResult> {
    Classifier::default().check(raw)
}
