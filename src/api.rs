//! Typed endpoint groups exposed by the client.
//!
//! Each group borrows the [`Client`] and maps one cluster of service routes;
//! there is no runtime name-to-endpoint dispatch.

use crate::advertisement::Advertisement;
use crate::client::Client;
use crate::error::{Error, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

/// Content type for advertisement create/update payloads
const ADVERTISEMENT_CONTENT_TYPE: &str =
    "application/vnd.seek.advertisement+json; version=1; charset=utf-8";

/// Content type for advertisement patch payloads
const ADVERTISEMENT_PATCH_CONTENT_TYPE: &str =
    "application/vnd.seek.advertisement-patch+json; version=1; charset=utf-8";

/// Access token issued by the OAuth2 token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Token retrieval endpoint group.
///
/// The only group that does not pass through the authentication gate.
pub struct Authorisation<'a> {
    client: &'a Client,
}

impl<'a> Authorisation<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Authorisation { client }
    }

    /// Perform a client-credentials grant against the token endpoint.
    ///
    /// Credentials travel as query parameters, which is what the service
    /// expects for this route.
    pub fn retrieve_access_token(&self) -> Result<AccessToken> {
        let config = self.client.config();
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &config.client_id)
            .append_pair("client_secret", &config.client_secret)
            .append_pair("grant_type", &config.grant_type)
            .finish();
        let path = format!("/auth/oauth2/token?{}", query);

        let body = self
            .client
            .request(Method::POST, &path, None, None, Some(&json!({})))?;
        serde_json::from_value(body).map_err(Error::Json)
    }
}

/// Advertisement endpoint group
pub struct Advertisements<'a> {
    client: &'a Client,
}

impl<'a> Advertisements<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Advertisements { client }
    }

    /// List advertisements, optionally narrowed to one advertiser.
    ///
    /// Returns the raw list payload; the service's list envelope is not part
    /// of the documented advertisement representation.
    pub fn list(&self, advertiser_id: Option<&str>) -> Result<Value> {
        let path = match advertiser_id {
            Some(advertiser_id) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("advertiserId", advertiser_id)
                    .finish();
                format!("/advertisement?{}", query)
            }
            None => "/advertisement".to_string(),
        };
        let bearer = self.client.bearer_token()?;
        self.client
            .request(Method::GET, &path, Some(&bearer), None, None)
    }

    /// Retrieve one advertisement by its server-assigned id
    pub fn retrieve(&self, id: &str) -> Result<Advertisement> {
        let bearer = self.client.bearer_token()?;
        let body = self.client.request(
            Method::GET,
            &format!("/advertisement/{}", id),
            Some(&bearer),
            None,
            None,
        )?;
        Advertisement::from_value(&body)
    }

    /// Post a new advertisement
    pub fn create(&self, advertisement: &Advertisement) -> Result<Advertisement> {
        let bearer = self.client.bearer_token()?;
        let body = self.client.request(
            Method::POST,
            "/advertisement",
            Some(&bearer),
            Some(ADVERTISEMENT_CONTENT_TYPE),
            Some(&advertisement.to_value()),
        )?;
        Advertisement::from_value(&body)
    }

    /// Replace an existing advertisement, keyed by its server-assigned id
    pub fn update(&self, advertisement: &Advertisement) -> Result<Advertisement> {
        let id = advertisement.id().ok_or_else(|| {
            Error::InvalidArgument(
                "Advertisement must have an id before it can be updated".to_string(),
            )
        })?;
        let bearer = self.client.bearer_token()?;
        let body = self.client.request(
            Method::PUT,
            &format!("/advertisement/{}", id),
            Some(&bearer),
            Some(ADVERTISEMENT_CONTENT_TYPE),
            Some(&advertisement.to_value()),
        )?;
        Advertisement::from_value(&body)
    }

    /// Expire an advertisement: a partial update replacing its state
    pub fn expire(&self, id: &str) -> Result<Advertisement> {
        let patch = json!([
            {
                "path": "state",
                "op": "replace",
                "value": "Expired",
            }
        ]);
        let bearer = self.client.bearer_token()?;
        let body = self.client.request(
            Method::PATCH,
            &format!("/advertisement/{}", id),
            Some(&bearer),
            Some(ADVERTISEMENT_PATCH_CONTENT_TYPE),
            Some(&patch),
        )?;
        Advertisement::from_value(&body)
    }
}
