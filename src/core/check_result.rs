use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Check Result
-------------------------------------------------------------------------------------------------*/

/// Outcome of checking a validated address against the GitHub IP Ranges. A non-member result is
/// a valid outcome, not an error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CheckResult {
    /// `true` when the address falls within one of the published ranges.
    pub is_member: bool,

    /// Name of the category owning the matched range, e.g. `"Hooks"`.
    pub category: Option<String>,

    /// The matched CIDR, exactly as published.
    pub matched_range: Option<String>,
}

impl CheckResult {
    pub fn member(category: &str, matched_range: &str) -> Self {
        Self {
            is_member: true,
            category: Some(category.to_string()),
            matched_range: Some(matched_range.to_string()),
        }
    }

    pub fn not_member() -> Self {
        Self::default()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
