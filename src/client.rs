//! Client configuration, HTTP plumbing, and the authentication gate.

use crate::api::{Advertisements, Authorisation};
use crate::error::{Error, Result};
use crate::token::{FileStore, TokenStore};
use reqwest::blocking::ClientBuilder;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// Default service endpoint
pub const DEFAULT_API_URL: &str = "https://adposting.cloud.seek.com.au";

/// Create the default HTTP client for API requests
/// with settings for connection pooling and timeouts
pub fn create_http_client() -> reqwest::blocking::Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(Duration::from_secs(300)) // 5 minutes
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the ad posting client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ad posting service
    pub api_url: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// OAuth2 grant type
    pub grant_type: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Config {
    /// Create a configuration with the default endpoint and the
    /// client-credentials grant
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            grant_type: "client_credentials".to_string(),
            debug: false,
        }
    }

    /// Override the service endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the OAuth2 grant type
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Shorten an advertised token lifetime by a 300 second safety margin, so the
/// stored token expires before the service-side one does.
pub(crate) fn shortened_ttl(expires_in: u64) -> u64 {
    if expires_in > 300 {
        expires_in - 300
    } else {
        expires_in
    }
}

/// Ad posting API client.
///
/// Holds one blocking HTTP client and the injected token store. Every
/// operation except token retrieval itself passes through the authentication
/// gate, which reuses the stored token or performs a client-credentials grant
/// when none is usable. The check-then-fetch is not atomic across callers
/// sharing one store; concurrent misses fetch redundantly and the last write
/// wins.
pub struct Client {
    http: reqwest::blocking::Client,
    config: Config,
    store: Box<dyn TokenStore>,
}

impl Client {
    /// Create a client backed by the default file token store
    pub fn new(config: Config) -> Self {
        Client::with_store(config, FileStore::default())
    }

    /// Create a client with an injected token store
    pub fn with_store(config: Config, store: impl TokenStore + 'static) -> Self {
        Client {
            http: create_http_client(),
            config,
            store: Box::new(store),
        }
    }

    /// Replace the HTTP client, e.g. to change timeouts
    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        self.store.as_ref()
    }

    /// Token retrieval endpoint group
    pub fn authorisation(&self) -> Authorisation<'_> {
        Authorisation::new(self)
    }

    /// Advertisement endpoint group
    pub fn advertisements(&self) -> Advertisements<'_> {
        Advertisements::new(self)
    }

    /// The authentication gate: return a usable bearer token, fetching and
    /// storing a fresh one when the store has none.
    pub(crate) fn bearer_token(&self) -> Result<String> {
        if let Some(token) = self.store.get()? {
            return Ok(token);
        }
        let token = self.authorisation().retrieve_access_token()?;
        self.store
            .set(&token.access_token, shortened_ttl(token.expires_in))?;
        Ok(token.access_token)
    }

    /// Issue one HTTP request and decode the response body.
    ///
    /// The bearer credential is passed explicitly per call rather than held as
    /// client state. Non-2xx statuses are mapped to typed errors; statuses
    /// outside 400..=600 pass through with their body.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        content_type: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.api_url, path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(bearer) = bearer {
            request = request.header("Authorization", format!("Bearer {}", bearer));
        }
        if let Some(body) = body {
            request = request
                .header("Content-Type", content_type.unwrap_or("application/json"))
                .body(serde_json::to_vec(body)?);
        }

        let start = std::time::Instant::now();
        let response = request.send()?;
        let status = response.status().as_u16();
        let bytes = response.bytes()?;

        if self.config.debug {
            eprintln!(
                "[adposting] {} {} => {:?} (status: {})",
                method,
                path,
                start.elapsed(),
                status
            );
        }

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) => {
                    // Error statuses still map even when the body is not JSON
                    if let Some(err) = Error::from_status(status, &Value::Null) {
                        return Err(err);
                    }
                    return Err(Error::Json(e));
                }
            }
        };

        if let Some(err) = Error::from_status(status, &body) {
            return Err(err);
        }
        Ok(body)
    }
}
