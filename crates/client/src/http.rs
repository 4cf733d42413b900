//! `reqwest` implementation of [`ProductApi`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;
use serde::de::DeserializeOwned;

use stockroom_products::{Product, ProductDraft, ProductId};

use crate::api::ProductApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Characters `encodeURIComponent` leaves alone; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Products API client over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    products_url: Url,
}

impl HttpProductApi {
    /// Build a client for the API rooted at `api_url`; the collection lives at
    /// `{api_url}/products`.
    pub fn new(api_url: &str) -> Result<Self, ApiError> {
        let mut products_url =
            Url::parse(api_url).map_err(|e| ApiError::InvalidUrl(format!("{api_url}: {e}")))?;
        products_url.set_query(None);
        products_url.set_fragment(None);
        products_url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{api_url}: cannot be a base url")))?
            .pop_if_empty()
            .push("products");

        Ok(Self {
            client: reqwest::Client::new(),
            products_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url)
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }

    /// `{products}/{id}` with the id as one escaped path segment.
    fn item_url(&self, id: &ProductId) -> Result<Url, ApiError> {
        self.child_url(id.as_str())
    }

    fn search_url(&self, keyword: &str) -> Result<Url, ApiError> {
        let mut url = self.child_url("search")?;
        let encoded = utf8_percent_encode(keyword, URI_COMPONENT);
        url.set_query(Some(&format!("keyword={encoded}")));
        Ok(url)
    }

    fn child_url(&self, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.products_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.products_url.to_string()))?
            .push(segment);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %resp.url(), "products API rejected request");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(resp)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let resp = self.send(self.client.get(url)).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_json(self.products_url.clone()).await
    }

    async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, ApiError> {
        let url = self.search_url(keyword)?;
        self.fetch_json(url).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let url = self.item_url(id)?;
        self.fetch_json(url).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        tracing::debug!(url = %self.products_url, "POST");
        self.send(self.client.post(self.products_url.clone()).json(draft))
            .await
            .map(|_| ())
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PUT");
        self.send(self.client.put(url).json(draft)).await.map(|_| ())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE");
        self.send(self.client.delete(url)).await.map(|_| ())
    }
}
