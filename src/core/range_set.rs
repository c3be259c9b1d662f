use crate::core::check_result::CheckResult;
use ipnetwork::Ipv4Network;
use log::trace;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Category Ranges
-------------------------------------------------------------------------------------------------*/

/// The CIDR strings published for one functional category, in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CategoryRanges {
    pub name: String,
    pub ranges: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Range Set
-------------------------------------------------------------------------------------------------*/

/// An ordered sequence of categories and their CIDR ranges. Category order is match priority.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RangeSet {
    pub(crate) categories: Vec<CategoryRanges>,
}

impl RangeSet {
    /// Build a [RangeSet] from `(category name, CIDR strings)` pairs, keeping their order.
    ///
    /// ```
    /// let range_set = githubipranges::RangeSet::new([
    ///     ("Hooks", vec!["192.30.252.0/22"]),
    ///     ("API", vec!["140.82.112.0/20"]),
    /// ]);
    /// let result = range_set.classify("140.82.112.5".parse().unwrap());
    /// assert_eq!(result.category.as_deref(), Some("API"));
    /// ```
    pub fn new<I, N, R, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(|(name, ranges)| CategoryRanges {
                    name: name.into(),
                    ranges: ranges.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }

    pub fn categories(&self) -> &[CategoryRanges] {
        &self.categories
    }

    pub fn get_category(&self, name: &str) -> Option<&CategoryRanges> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Total number of CIDR strings across all categories, including any that do not parse.
    pub fn range_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.ranges.len())
            .sum()
    }

    /// Find the first category, in order, with a range containing `ip`.
    ///
    /// Entries that do not parse as IPv4 CIDR blocks (IPv6 blocks, bare addresses, garbage) are
    /// skipped; they never fail the lookup.
    pub fn classify(&self, ip: Ipv4Addr) -> CheckResult {
        for category in &self.categories {
            for cidr in &category.ranges {
                let Some(network) = parse_cidr(cidr) else {
                    trace!("Skipping unparsable {} range: {:?}", category.name, cidr);
                    continue;
                };

                if network.contains(ip) {
                    trace!("{} matched {} range {}", ip, category.name, cidr);
                    return CheckResult::member(&category.name, cidr);
                }
            }
        }

        CheckResult::not_member()
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

// Ipv4Network accepts a bare address as a /32; published ranges must carry a prefix length.
fn parse_cidr(cidr: &str) -> Option<Ipv4Network> {
    if !cidr.contains('/') {
        return None;
    }
    cidr.parse().ok()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
