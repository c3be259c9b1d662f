use crate::core::errors::FetchError;
use crate::core::json;
use crate::core::range_set::RangeSet;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use std::env;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Constants
-------------------------------------------------------------------------------------------------*/

pub const DEFAULT_URL: &str = "https://api.github.com/meta";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration. The
/// [ClientBuilder] struct provides setters for each configuration value and a
/// [ClientBuilder::build] method to create a [Client] instance.
///
/// ```
/// let client = githubipranges::ClientBuilder::new()
///     .url("https://github-meta.example.com/meta")
///     .connect_timeout(2000) // 2 seconds
///     .timeout(10000) // 10 seconds
///     .build();
///
/// assert_eq!(client.url(), "https://github-meta.example.com/meta");
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables, use
/// the [ClientBuilder::default] method to create a new [ClientBuilder] instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    connect_timeout: u64,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = githubipranges::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://api.github.com/meta");
    /// assert_eq!(client.connect_timeout(), 5000);
    /// assert_eq!(client.timeout(), 30000);
    /// ```
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            connect_timeout: 5000, // 5 seconds
            timeout: 30000,        // 30 seconds
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `GHIPRANGES_URL`
    /// - `GHIPRANGES_CONNECT_TIMEOUT`
    /// - `GHIPRANGES_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("GHIPRANGES_URL", default.url),
            connect_timeout: get_env_var("GHIPRANGES_CONNECT_TIMEOUT", default.connect_timeout),
            timeout: get_env_var("GHIPRANGES_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the GitHub meta document; defaults to
    /// `https://api.github.com/meta`. Point this at a mirror or a local test
    /// server to avoid the public API.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the maximum time (in milliseconds) to wait for the connection to
    /// the meta endpoint to be established; defaults to `5000` milliseconds.
    pub fn connect_timeout(&mut self, connect_timeout: u64) -> &mut Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Set the maximum time (in milliseconds) for the whole request, from
    /// connecting until the response body has been read; defaults to `30000`
    /// milliseconds.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving the GitHub IP Ranges from the GitHub meta endpoint. Each call to
/// [Client::get_ranges] performs one HTTP GET; memoization is the job of the
/// [Classifier](crate::Classifier) that owns the client.
///
/// The [Client::new] method attempts to source configuration values from environment variables
/// when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables, use
/// the [Client::default] method to create a new [Client] instance.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    connect_timeout: u64,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    /// Create a new [Client] with default configuration values.
    ///
    /// ```
    /// let client = githubipranges::Client::default();
    ///
    /// assert_eq!(client.url(), "https://api.github.com/meta");
    /// assert_eq!(client.connect_timeout(), 5000);
    /// assert_eq!(client.timeout(), 30000);
    /// ```
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the URL of the GitHub meta document.
    /// Defaults to `https://api.github.com/meta`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the connect timeout in milliseconds. Defaults to 5000 milliseconds.
    pub fn connect_timeout(&self) -> u64 {
        self.connect_timeout
    }

    /// Get the overall request timeout in milliseconds. Defaults to 30000
    /// milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Get Ranges
    -------------------------------------------------------------------------*/

    /// Request the GitHub meta document and parse it into a [RangeSet].
    pub fn get_ranges(&self) -> Result<RangeSet, FetchError> {
        let json = self.get_json_from_url()?;
        let range_set = json::parse(&json)?;
        debug!(
            "Parsed {} ranges in {} categories",
            range_set.range_count(),
            range_set.categories().len()
        );
        Ok(range_set)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Get the GitHub meta JSON from the URL.
    fn get_json_from_url(&self) -> Result<String, FetchError> {
        debug!("Get GitHub IP Ranges from URL: GET {}", self.url);

        let response = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_millis(self.connect_timeout))
            .timeout(Duration::from_millis(self.timeout))
            .build()
            .and_then(|http_client| {
                http_client
                    .get(&self.url)
                    .header(ACCEPT, "application/json")
                    .send()
            })
            .map_err(FetchError::Transport)?;

        let status = response.status();
        debug!("Get GitHub IP Ranges from URL: {}", status);
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        response.text().map_err(FetchError::Transport)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
