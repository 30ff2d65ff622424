// Hand-crafted async HTTP client for the Meraki Dashboard API (v1).
//
// Base path: /api/v1/
// Auth: Authorization: Bearer <key>

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, LINK, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::types::{
    DeviceResponse, ErrorResponse, NetworkResponse, OrganizationResponse, SwitchPortResponse,
    SwitchPortUpdate,
};
use crate::{Error, TransportConfig};

/// Public Dashboard endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Page size requested from paginated list endpoints (the Dashboard maximum).
const PER_PAGE: u32 = 1000;

/// Delay used when a 429 arrives without a usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Dashboard API.
///
/// Uses bearer-token authentication and communicates via JSON REST
/// endpoints under `/api/v1/`. Rate-limited requests are retried
/// transparently, honoring `Retry-After`.
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
    max_retries: u32,
}

impl DashboardClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `Authorization: Bearer <key>` as a sensitive default header.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret())).map_err(
                |e| Error::Authentication {
                    message: format!("invalid API key header value: {e}"),
                },
            )?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self {
            http,
            base_url,
            max_retries: transport.max_retries,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            max_retries: TransportConfig::default().max_retries,
        })
    }

    /// Override the 429 retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Ensure the base path ends in `/` so relative joins append to it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"organizations"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.send(|| self.http.get(url.clone())).await?;
        handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.send(|| self.http.put(url.clone()).json(body)).await?;
        handle_response(resp).await
    }

    /// Send a request, re-sending it while the Dashboard answers 429.
    async fn send(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let mut attempt = 0;
        loop {
            let resp = build().send().await?;
            if resp.status() != StatusCode::TOO_MANY_REQUESTS {
                return Ok(resp);
            }

            let wait = retry_after_secs(resp.headers());
            if attempt >= self.max_retries {
                return Err(Error::RateLimited {
                    retry_after_secs: wait,
                });
            }
            attempt += 1;
            warn!(
                attempt,
                max = self.max_retries,
                wait_secs = wait,
                "rate limited, retrying"
            );
            tokio::time::sleep(Duration::from_secs(wait)).await;
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Follow `Link: <…>; rel=next` headers and collect every page.
    async fn get_all_pages<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let mut url = self.url(path)?;
        url.query_pairs_mut()
            .append_pair("perPage", &PER_PAGE.to_string());

        let mut all = Vec::new();
        loop {
            debug!("GET {url}");
            let resp = self.send(|| self.http.get(url.clone())).await?;
            let next = next_page_link(resp.headers());
            let page: Vec<T> = handle_response(resp).await?;
            all.extend(page);

            match next {
                Some(next) if next != url => url = next,
                _ => break,
            }
        }

        Ok(all)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Organizations ────────────────────────────────────────────────

    pub async fn list_organizations(&self) -> Result<Vec<OrganizationResponse>, Error> {
        self.get("organizations").await
    }

    // ── Networks ─────────────────────────────────────────────────────

    /// All networks of an organization, every page.
    pub async fn list_organization_networks(
        &self,
        organization_id: &str,
    ) -> Result<Vec<NetworkResponse>, Error> {
        self.get_all_pages(&format!("organizations/{organization_id}/networks"))
            .await
    }

    // ── Devices ──────────────────────────────────────────────────────

    pub async fn list_network_devices(
        &self,
        network_id: &str,
    ) -> Result<Vec<DeviceResponse>, Error> {
        self.get(&format!("networks/{network_id}/devices")).await
    }

    // ── Switch ports ─────────────────────────────────────────────────

    pub async fn list_device_switch_ports(
        &self,
        serial: &str,
    ) -> Result<Vec<SwitchPortResponse>, Error> {
        self.get(&format!("devices/{serial}/switch/ports")).await
    }

    pub async fn update_device_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> Result<SwitchPortResponse, Error> {
        self.put(&format!("devices/{serial}/switch/ports/{port_id}"), update)
            .await
    }
}

// ── Response handling ────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
    if status == StatusCode::UNAUTHORIZED {
        return Error::InvalidApiKey;
    }

    let raw = resp.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorResponse>(&raw) {
        Ok(err) if !err.errors.is_empty() => err.errors.join("; "),
        _ if raw.is_empty() => status.to_string(),
        _ => raw,
    };

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

// ── Header parsing ───────────────────────────────────────────────────

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Extract the `rel=next` target from RFC 5988 `Link` headers.
fn next_page_link(headers: &HeaderMap) -> Option<Url> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .find_map(|entry| {
            let mut parts = entry.split(';');
            let target = parts.next()?.trim();
            let is_next = parts.any(|p| {
                let p = p.trim().replace('"', "");
                p.eq_ignore_ascii_case("rel=next")
            });
            if !is_next {
                return None;
            }
            let target = target.strip_prefix('<')?.strip_suffix('>')?;
            Url::parse(target).ok()
        })
}
