use crate::utils::error::Result;
use async_trait::async_trait;

/// String key/value persistence (device storage on mobile, a JSON file on desktop).
pub trait KeyValueStore: Send + Sync {
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn remove_item(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Supplies the bearer credential for authenticated requests.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> Result<String>;
}
