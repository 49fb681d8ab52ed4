use crate::domain::ports::TokenSource;
use crate::utils::error::Result;
use reqwest::{Client, Method, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

/// The two client acquisition points: a bare client and one carrying the
/// session's bearer token.
#[derive(Clone)]
pub struct HttpClients {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl HttpClients {
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url, tokens))
    }

    pub fn with_client(client: Client, base_url: &str, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn public(&self) -> ApiClient {
        ApiClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer: None,
        }
    }

    pub async fn authenticated(&self) -> Result<ApiClient> {
        let token = self.tokens.bearer_token().await?;
        Ok(ApiClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer: Some(token),
        })
    }

    /// 依照 operation 宣告的需求取得對應的 client
    pub async fn provision(&self, requires_auth: bool) -> Result<ApiClient> {
        if requires_auth {
            self.authenticated().await
        } else {
            Ok(self.public())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match &self.bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
