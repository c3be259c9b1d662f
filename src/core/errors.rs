use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Crate-level error. Separates defects in the caller's input ([ValidationError]) from failures
/// retrieving the GitHub IP Ranges ([FetchError]).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Validation Errors
--------------------------------------------------------------------------------------*/

/// Reasons an address string is rejected before any range lookup.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid IP address format")]
    Malformed,

    #[error("only IPv4 addresses are supported")]
    NotIpv4,

    #[error("IP address must be a public, routable address ({0} address)")]
    NotRoutable(NonRoutable),
}

/// The reserved block that made an address non-routable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NonRoutable {
    Private,
    Loopback,
    Unspecified,
    Multicast,
    Broadcast,
}

impl std::fmt::Display for NonRoutable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NonRoutable::Private => "private",
            NonRoutable::Loopback => "loopback",
            NonRoutable::Unspecified => "unspecified",
            NonRoutable::Multicast => "multicast",
            NonRoutable::Broadcast => "broadcast",
        };
        f.write_str(name)
    }
}

/*--------------------------------------------------------------------------------------
  Fetch Errors
--------------------------------------------------------------------------------------*/

/// Failures retrieving or decoding the GitHub IP Ranges.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, or an interrupted response body.
    #[error("failed to fetch GitHub meta: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub API returned status code {0}")]
    BadStatus(u16),

    #[error("failed to decode GitHub meta response: {0}")]
    Decode(#[source] serde_json::Error),
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error<E: std::fmt::Display>(error: &E) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_log::test;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::Malformed.to_string(),
            "invalid IP address format"
        );
        assert_eq!(
            ValidationError::NotIpv4.to_string(),
            "only IPv4 addresses are supported"
        );
        assert_eq!(
            ValidationError::NotRoutable(NonRoutable::Broadcast).to_string(),
            "IP address must be a public, routable address (broadcast address)"
        );
    }

    #[test]
    fn test_fetch_error_message() {
        assert_eq!(
            FetchError::BadStatus(500).to_string(),
            "GitHub API returned status code 500"
        );
    }

    #[test]
    fn test_error_conversions() {
        let error: Error = ValidationError::NotIpv4.into();
        assert!(matches!(error, Error::Validation(ValidationError::NotIpv4)));
        assert_eq!(error.to_string(), "only IPv4 addresses are supported");

        let error: Error = FetchError::BadStatus(404).into();
        assert!(matches!(error, Error::Fetch(FetchError::BadStatus(404))));
    }

    #[test]
    fn test_decode_error_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = FetchError::Decode(json_error);
        log_error(&error);
        assert!(error.source().is_some());
    }
}
