//! GlyCosmos format-converter HTTP client.
//!
//! Wraps the public glycanformatconverter endpoint that turns a condensed
//! IUPAC string into a `(GlyTouCan ID, WURCS)` pair. Either element of the
//! pair may be missing; that is a normal response, not an error.

use super::traits::{IupacConversion, IupacConverter};
use crate::error::{ConversionErrorKind, GlycanToolsError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// GlyCosmos client configuration.
#[derive(Debug, Clone)]
pub struct GlycosmosClientConfig {
    /// Base URL for the GlyCosmos API
    pub api_base: String,
    /// Converter version segment of the endpoint path
    pub converter_version: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for failed requests
    pub max_retries: u8,
}

impl Default for GlycosmosClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.glycosmos.org".to_string(),
            converter_version: "2.10.0".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

/// Response shape of the iupaccondensed2wurcs endpoint.
#[derive(Debug, Deserialize)]
struct ConverterResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "WURCS")]
    wurcs: Option<String>,
}

/// HTTP client for the GlyCosmos format converter.
pub struct GlycosmosClient {
    client: Client,
    config: GlycosmosClientConfig,
}

/// Helper to convert reqwest errors to conversion errors
fn network_error(msg: &str, err: &reqwest::Error) -> GlycanToolsError {
    GlycanToolsError::conversion(msg, ConversionErrorKind::NetworkError(err.to_string()))
}

impl GlycosmosClient {
    /// Create a new GlyCosmos client.
    pub fn new(config: GlycosmosClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, iupac: &str) -> String {
        format!(
            "{}/glycanformatconverter/{}/iupaccondensed2wurcs/{}",
            self.config.api_base, self.config.converter_version, iupac
        )
    }

    fn request_once(&self, url: &str) -> Result<IupacConversion> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error("Failed to send conversion request", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GlycanToolsError::conversion(
                "IUPAC to WURCS",
                ConversionErrorKind::ApiError(format!(
                    "converter returned status {}: {}",
                    status.as_u16(),
                    body
                )),
            ));
        }

        let parsed: ConverterResponse = response.json().map_err(|e| {
            GlycanToolsError::conversion(
                "parsing converter response",
                ConversionErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        Ok(IupacConversion {
            glytoucan: parsed.id,
            wurcs: parsed.wurcs,
        })
    }
}

impl IupacConverter for GlycosmosClient {
    fn iupac_to_wurcs(&self, iupac: &str) -> Result<IupacConversion> {
        let url = self.endpoint(iupac);
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(1 << (attempt - 1));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.request_once(&url) {
                Ok(conversion) => return Ok(conversion),
                Err(e) => {
                    tracing::debug!("Conversion attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            GlycanToolsError::conversion(
                "IUPAC to WURCS",
                ConversionErrorKind::ApiError("unknown error".to_string()),
            )
        }))
    }

    fn name(&self) -> &'static str {
        "GlyCosmos"
    }

    fn is_available(&self) -> bool {
        true
    }
}
