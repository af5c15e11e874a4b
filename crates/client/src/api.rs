use examdesk_common::{BaseFilters, PaginatedResponse, SingleObjectResponse};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Thin JSON client over the admin REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    locale: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Config("API base URL is empty".to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            token: None,
            locale: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(locale) = &self.locale {
            builder = builder.header(header::ACCEPT_LANGUAGE, locale.as_str());
        }
        builder
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        debug!(path, "GET");
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// Fetches one page and checks it against the filters that requested it.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &BaseFilters,
    ) -> Result<PaginatedResponse<T>> {
        let page: PaginatedResponse<T> = self.get_json(path, &filters.query_pairs()).await?;
        page.validate(filters).inspect_err(|e| {
            warn!(path, error = %e, "Rejected page that violates pagination bounds.");
        })?;
        Ok(page)
    }

    pub async fn get_single<T: DeserializeOwned>(&self, path: &str) -> Result<SingleObjectResponse<T>> {
        self.get_json(path, &[]).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| ClientError::InvalidResponse(format!("unexpected body shape: {e}")));
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized(message));
        }
        Err(ClientError::Status { status, message })
    }
}
