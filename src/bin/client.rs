//! Command-line client for the url-shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a long URL
//! cargo run --bin client -- shortened https://example.com/page
//!
//! # Resolve a short URL
//! cargo run --bin client -- original http://localhost/3f9a0c1b7e2d4a68
//!
//! # Talk to another server
//! cargo run --bin client -- --server http://127.0.0.1:8080 shortened https://example.com
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_SERVER` (optional): base URL of the service, default `http://0.0.0.0:5003`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::time::Duration;
use ureq::Agent;
use url::Url;

const HTTP_TIMEOUT_SECS: u64 = 5;

/// CLI client for url-shortener.
#[derive(Parser)]
#[command(name = "client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which kind of url to fetch
    method: Method,

    /// The url to send
    url: String,

    /// Base URL of the shortener service
    #[arg(long, env = "SHORTENER_SERVER", default_value = "http://0.0.0.0:5003")]
    server: String,
}

/// Endpoint to call.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Get the shortened url for a long url
    Shortened,
    /// Get the original url for a shortened url
    Original,
}

impl Method {
    fn path(self) -> &'static str {
        match self {
            Method::Shortened => "shortened/",
            Method::Original => "original/",
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let endpoint = build_endpoint(&cli.server, cli.method, &cli.url)?;
    let (status, message) = fetch(&endpoint)?;

    let status_text = if status == 200 {
        status.to_string().green().bold()
    } else {
        status.to_string().red().bold()
    };

    println!("Status: {}, message: {}", status_text, message);

    Ok(())
}

/// Builds `<server>/<method>/?url=<url>` with the url query-encoded.
fn build_endpoint(server: &str, method: Method, url: &str) -> Result<Url> {
    let base = Url::parse(server).with_context(|| format!("Invalid server url '{server}'"))?;

    let mut endpoint = base
        .join(method.path())
        .context("Failed to build endpoint url")?;
    endpoint.query_pairs_mut().append_pair("url", url.trim());

    Ok(endpoint)
}

/// Sends the request and returns the status code and body.
///
/// 404 responses carry the service's error message and are returned like
/// any other response.
fn fetch(endpoint: &Url) -> Result<(u16, String)> {
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .build()
        .into();

    let mut response = agent
        .get(endpoint.as_str())
        .call()
        .with_context(|| format!("Request to {endpoint} failed"))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .context("Failed to read response body")?;

    Ok((status, body))
}
