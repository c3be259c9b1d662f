use clap::{Parser, ValueEnum};

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Check if an IP address is within GitHub's published IP ranges.",
    long_about = "Check if a given IP address is within GitHub's published IP ranges.\n\
                  The ranges are fetched from GitHub's /meta API endpoint. Only IPv4 addresses \
                  are supported at this time.\n\n\
                  Exit codes: 0 = GitHub address, 1 = not a GitHub address, 2 = error."
)]
pub struct Args {
    /// Silent mode - only use exit codes
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// GitHub meta endpoint URL [env: GHIPRANGES_URL]
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in milliseconds [env: GHIPRANGES_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// IPv4 address to check
    pub ip_address: String,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line of text
    Text,
    /// Table
    Table,
    /// JSON object
    Json,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
