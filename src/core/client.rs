use crate::adapters::connectivity::{ProbeConnectivity, StaticConnectivity};
use crate::adapters::http::HttpClients;
use crate::config::toml_config::{AppConfig, ConnectivityMode, DEFAULT_PROBE_TIMEOUT_MS};
use crate::core::boost::BoostApi;
use crate::core::business::BusinessApi;
use crate::core::gateway::{CallObserver, Gateway, TracingObserver};
use crate::core::member::MemberApi;
use crate::core::product::ProductApi;
use crate::core::session::SessionHandle;
use crate::domain::ports::{Connectivity, TokenSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use std::sync::Arc;
use std::time::Duration;

/// Entry point: one gateway shared by all resource families.
#[derive(Clone)]
pub struct FlexiAdsClient {
    gateway: Arc<Gateway>,
}

impl FlexiAdsClient {
    pub fn builder(base_url: impl Into<String>) -> FlexiAdsClientBuilder {
        FlexiAdsClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            connectivity: None,
            tokens: None,
            observer: None,
        }
    }

    pub fn from_config(config: &AppConfig, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let connectivity: Arc<dyn Connectivity> = match config.connectivity_mode() {
            ConnectivityMode::Online => Arc::new(StaticConnectivity::online()),
            ConnectivityMode::Offline => Arc::new(StaticConnectivity::offline()),
            ConnectivityMode::Probe => Arc::new(ProbeConnectivity::for_base_url(
                config.base_url(),
                config.probe_timeout(),
            )?),
        };

        let mut builder = Self::builder(config.base_url())
            .connectivity(connectivity)
            .token_source(tokens);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    pub fn boost(&self) -> BoostApi {
        BoostApi::new(self.gateway.clone())
    }

    pub fn business(&self) -> BusinessApi {
        BusinessApi::new(self.gateway.clone())
    }

    pub fn member(&self) -> MemberApi {
        MemberApi::new(self.gateway.clone())
    }

    pub fn product(&self) -> ProductApi {
        ProductApi::new(self.gateway.clone())
    }
}

pub struct FlexiAdsClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connectivity: Option<Arc<dyn Connectivity>>,
    tokens: Option<Arc<dyn TokenSource>>,
    observer: Option<Arc<dyn CallObserver>>,
}

impl FlexiAdsClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connectivity(mut self, connectivity: Arc<dyn Connectivity>) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<FlexiAdsClient> {
        validate_url("api.base_url", &self.base_url)?;

        let connectivity: Arc<dyn Connectivity> = match self.connectivity {
            Some(connectivity) => connectivity,
            None => Arc::new(ProbeConnectivity::for_base_url(
                &self.base_url,
                Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            )?),
        };
        // 沒有 session 時，需要授權的 operation 會在取得 client 時失敗
        let tokens: Arc<dyn TokenSource> = match self.tokens {
            Some(tokens) => tokens,
            None => Arc::new(SessionHandle::new()),
        };
        let observer: Arc<dyn CallObserver> = match self.observer {
            Some(observer) => observer,
            None => Arc::new(TracingObserver),
        };

        let clients = HttpClients::new(&self.base_url, self.timeout, tokens)?;
        tracing::debug!("FlexiAds client ready for {}", clients.base_url());

        Ok(FlexiAdsClient {
            gateway: Arc::new(Gateway::new(clients, connectivity, observer)),
        })
    }
}
