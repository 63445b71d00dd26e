use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use ouilookup_common::config::Config;
use ouilookup_common::error::LookupError;
use ouilookup_common::vendors::{LookupResult, Vendor, VendorRepository};

/// Body of a successful `GET /v2/macs/{mac}`. Only `company` is used.
#[derive(Debug, Deserialize)]
struct MacLookupResponse {
    company: Option<String>,
}

/// Resolves vendors through the maclookup.app REST API.
///
/// One [`Client`] is kept for the whole run so repeated lookups can reuse
/// the connection. Nothing is cached.
pub struct MacLookupApi {
    client: Client,
    cfg: Config,
}

impl MacLookupApi {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            client,
            cfg: cfg.clone(),
        })
    }
}

#[async_trait]
impl VendorRepository for MacLookupApi {
    async fn lookup(&self, mac: &str) -> Result<LookupResult, LookupError> {
        let start_time: Instant = Instant::now();
        let url: String = self.cfg.lookup_url(mac);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.into()))?;

        let status: StatusCode = response.status();
        debug!("{url} answered {status}");

        let company: Option<String> = if status == StatusCode::OK {
            let body: MacLookupResponse = response.json().await.map_err(|err| {
                if err.is_decode() {
                    LookupError::Decode(err.into())
                } else {
                    LookupError::Transport(err.into())
                }
            })?;
            body.company
        } else {
            None
        };

        Ok(LookupResult {
            mac: mac.to_string(),
            vendor: Vendor::from_status(status.as_u16(), company),
            elapsed: start_time.elapsed(),
        })
    }
}
