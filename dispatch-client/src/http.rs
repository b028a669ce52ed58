//! HTTP client for the delivery API

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// Network HTTP client
///
/// Paths are given as segment lists and percent-encoded onto the base URL,
/// so ids never need escaping by the caller.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Build the request URL for a list of path segments and query pairs
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    /// GET and decode a JSON body. A body that does not decode is
    /// [`ClientError::Serialization`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = self.endpoint(segments, query)?;
        tracing::debug!(%url, "GET");
        let response = self.authorize(self.client.get(url)).send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body, ignoring the success payload
    pub async fn post<B: serde::Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<()> {
        let url = self.endpoint(segments, &[])?;
        tracing::debug!(%url, "POST");
        let response = self.authorize(self.client.post(url).json(body)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// DELETE, ignoring the success payload
    pub async fn delete(&self, segments: &[&str]) -> ClientResult<()> {
        let url = self.endpoint(segments, &[])?;
        tracing::debug!(%url, "DELETE");
        let response = self.authorize(self.client.delete(url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Turn a non-success status into [`ClientError::Api`], carrying the
    /// server's `{ error }` message when there is one.
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = ApiErrorBody::parse(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });
        Err(ClientError::Api { status, message })
    }
}
