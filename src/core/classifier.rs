use crate::core::check_result::CheckResult;
use crate::core::client::Client;
use crate::core::errors::{FetchError, Result};
use crate::core::range_set::RangeSet;
use crate::core::validator::validate;
use std::cell::OnceCell;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Range Source
-------------------------------------------------------------------------------------------------*/

/// Where a [Classifier] gets its [RangeSet] from.
pub trait RangeSource {
    fn get_ranges(&self) -> std::result::Result<RangeSet, FetchError>;
}

impl RangeSource for Client {
    fn get_ranges(&self) -> std::result::Result<RangeSet, FetchError> {
        Client::get_ranges(self)
    }
}

/// A pre-loaded [RangeSet] serves itself.
impl RangeSource for RangeSet {
    fn get_ranges(&self) -> std::result::Result<RangeSet, FetchError> {
        Ok(self.clone())
    }
}

/*-------------------------------------------------------------------------------------------------
  Classifier
-------------------------------------------------------------------------------------------------*/

/// Classifies addresses against the GitHub IP Ranges. The ranges are requested from the source on
/// the first lookup and reused for the lifetime of the classifier; a failed request is not cached,
/// so a later lookup tries again.
///
/// ```no_run
/// use githubipranges::{Classifier, ClientBuilder};
///
/// let client = ClientBuilder::new().url("https://api.github.com/meta").build();
/// let classifier = Classifier::new(client);
///
/// let result = classifier.check("192.30.252.1")?;
/// if result.is_member {
///     println!("{:?} ({:?})", result.category, result.matched_range);
/// }
/// # Ok::<(), githubipranges::Error>(())
/// ```
#[derive(Debug)]
pub struct Classifier<S: RangeSource = Client> {
    source: S,
    range_set: OnceCell<RangeSet>,
}

impl Default for Classifier<Client> {
    /// A classifier backed by a [Client] configured from the environment.
    fn default() -> Self {
        Classifier::new(Client::new())
    }
}

impl<S: RangeSource> Classifier<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            range_set: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate `raw` and classify the resulting address.
    pub fn check(&self, raw: &str) -> Result<CheckResult> {
        let ip = validate(raw)?;
        Ok(self.classify(ip)?)
    }

    /// Classify an already validated address.
    pub fn classify(&self, ip: Ipv4Addr) -> std::result::Result<CheckResult, FetchError> {
        Ok(self.range_set()?.classify(ip))
    }

    /// The memoized [RangeSet], requested from the source on first use.
    pub fn range_set(&self) -> std::result::Result<&RangeSet, FetchError> {
        if let Some(range_set) = self.range_set.get() {
            return Ok(range_set);
        }
        let range_set = self.source.get_ranges()?;
        Ok(self.range_set.get_or_init(|| range_set))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
