use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use url::Url;
use za_relay_common::constants::DEFAULT_RELAY_HOST;
use za_relay_common::{OutboundHeaders, RelayedResponse, RequestDescriptor};
use zar::RelayClient;

/// CLI arguments for the relay client
#[derive(Parser, Debug)]
#[command(name = "zar")]
#[command(about = "Send an HTTP request through a za relay", long_about = None)]
#[command(version)]
struct Args {
    /// Absolute URL of the target
    url: String,

    /// HTTP method for the target request
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Header for the target request, as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header_arg)]
    headers: Vec<(String, String)>,

    /// Relay address as host:port
    #[arg(short, long, env = "ZA_RELAY", default_value = DEFAULT_RELAY_HOST)]
    relay: String,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Split "Name: value" at the first colon, dropping whitespace before the value
fn parse_header_arg(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {:?}", raw));
    }

    Ok((name.to_string(), value.trim_start().to_string()))
}

fn build_descriptor(args: &Args) -> Result<RequestDescriptor> {
    let url = Url::parse(&args.url).with_context(|| format!("Invalid target URL {}", args.url))?;
    if url.cannot_be_a_base() {
        bail!("Target URL must be hierarchical: {}", args.url);
    }

    let headers: OutboundHeaders = args.headers.iter().cloned().collect();
    Ok(RequestDescriptor::new(
        args.method.to_uppercase(),
        args.url.clone(),
        headers,
    ))
}

fn render(response: &RelayedResponse) -> String {
    let mut out = format!("HTTP {}\n", response.status);
    for (name, value) in &response.headers {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    out.push('\n');
    out.push_str(&response.body);
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let descriptor = build_descriptor(&args)?;
    let client = RelayClient::new(args.relay.clone());

    info!(
        "{} {} via {}",
        descriptor.method(),
        descriptor.url(),
        client.endpoint()
    );

    let response = client
        .send(&descriptor)
        .await
        .with_context(|| format!("Relay request to {} failed", client.endpoint()))?;

    if response.is_server_error() {
        warn!("Server error {} for {}", response.status, descriptor.url());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render(&response));
    }

    Ok(())
}
