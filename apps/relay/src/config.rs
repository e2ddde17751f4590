//! Command line and environment configuration for the relay

use clap::Parser;
use std::time::Duration;
use za_relay_common::RelayError;
use za_relay_common::constants::DEFAULT_PORT;

/// CLI arguments for the relay server
#[derive(Parser, Debug)]
#[command(name = "za-relay")]
#[command(about = "HTTP relay that performs base64-described requests for its callers", long_about = None)]
#[command(version)]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "ZA_RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ZA_RELAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Timeout in seconds for the whole outbound call (none by default)
    #[arg(long)]
    pub request_timeout: Option<u64>,

    /// Timeout in seconds for connecting to the target (none by default)
    #[arg(long)]
    pub connect_timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration for the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address (e.g., "0.0.0.0:45678")
    pub bind_address: String,

    /// Upper bound on the outbound call, unbounded when `None`
    pub request_timeout: Option<Duration>,

    /// Upper bound on connection setup to the target
    pub connect_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_PORT),
            request_timeout: None,
            connect_timeout: None,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            bind_address: format!("{}:{}", args.host, args.port),
            request_timeout: args.request_timeout.map(Duration::from_secs),
            connect_timeout: args.connect_timeout.map(Duration::from_secs),
        }
    }

    /// Build the outbound HTTP client shared by all requests
    ///
    /// Redirects are never followed so 3xx statuses reach the caller as-is.
    pub fn build_client(&self) -> Result<reqwest::Client, RelayError> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| RelayError::HttpError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let args = Args::parse_from(["za-relay"]);
        assert_eq!(args.port, 45678);
        assert!(!args.verbose);

        let config = Config::from_args(&args);
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address, "0.0.0.0:45678");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_config_from_args_with_timeouts() {
        let args = Args::parse_from([
            "za-relay",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--request-timeout",
            "30",
            "--connect-timeout",
            "5",
            "-v",
        ]);

        let config = Config::from_args(&args);
        assert!(args.verbose);
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_client() {
        let config = Config {
            request_timeout: Some(Duration::from_secs(1)),
            ..Config::default()
        };
        assert!(config.build_client().is_ok());
    }
}
