//! Low-level HTTP client for the BrickSet API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use brickset_core::error::{ApiError, Error, TransportError};
use brickset_core::{ApiKey, ApiUrl};

/// Envelope fields present on every API response.
///
/// BrickSet reports most failures in-band: HTTP 200 with
/// `"status": "error"` and a message.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for BrickSet API requests.
///
/// The API key is a request parameter, not a header; `query` and
/// `procedure` append it to whatever the caller supplies.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    base: ApiUrl,
    api_key: ApiKey,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: ApiUrl, api_key: ApiKey) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("brickset/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base,
            api_key,
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Issue a GET request with query-string parameters.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn query<Q, R>(&self, endpoint: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(endpoint);
        debug!(endpoint, "API query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Issue a POST request with an urlencoded form body.
    #[instrument(skip(self, form), fields(base = %self.base))]
    pub async fn procedure<R>(
        &self,
        endpoint: &str,
        mut form: Vec<(&'static str, String)>,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(endpoint);
        debug!(endpoint, "API procedure");

        form.push(("apiKey", self.api_key.as_str().to_string()));

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Fetch raw bytes from an arbitrary URL (set imagery).
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, Error> {
        debug!(url, "downloading file");

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(ApiError::new(status.as_u16(), None)));
        }

        Ok(response.bytes().await.map_err(transport)?.to_vec())
    }

    /// Parse a response, surfacing HTTP failures and error envelopes.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if !status.is_success() {
            return Err(Error::Api(self.parse_error(status.as_u16(), response).await));
        }

        let body = response.text().await.map_err(transport)?;

        let envelope: StatusEnvelope = serde_json::from_str(&body)?;
        if envelope.status != "success" {
            return Err(Error::Api(ApiError::new(status.as_u16(), envelope.message)));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Parse an error response body, tolerating non-JSON payloads.
    async fn parse_error(&self, status: u16, response: reqwest::Response) -> ApiError {
        match response.json::<StatusEnvelope>().await {
            Ok(envelope) => ApiError::new(status, envelope.message),
            Err(_) => ApiError::new(status, None),
        }
    }
}

/// Classify a reqwest error into the library's transport variants.
fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
