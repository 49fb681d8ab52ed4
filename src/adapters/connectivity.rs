use crate::domain::ports::Connectivity;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use url::Url;

/// Always answers the same way. `online()` for trusted networks and tests,
/// `offline()` to force every operation onto the no-network path.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity {
    connected: bool,
}

impl StaticConnectivity {
    pub fn online() -> Self {
        Self { connected: true }
    }

    pub fn offline() -> Self {
        Self { connected: false }
    }
}

#[async_trait]
impl Connectivity for StaticConnectivity {
    async fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Reachability check by opening a TCP connection to the API host.
#[derive(Debug, Clone)]
pub struct ProbeConnectivity {
    host: String,
    port: u16,
    timeout: Duration,
}

impl ProbeConnectivity {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    pub fn for_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| GatewayError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let host = url.host_str().ok_or_else(|| GatewayError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: "URL has no host".to_string(),
        })?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| GatewayError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL has no port and no known default".to_string(),
            })?;

        Ok(Self::new(host, port, timeout))
    }
}

#[async_trait]
impl Connectivity for ProbeConnectivity {
    async fn is_connected(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!("🔌 Connectivity probe to {}:{} failed: {}", self.host, self.port, e);
                false
            }
            Err(_) => {
                tracing::debug!(
                    "🔌 Connectivity probe to {}:{} timed out after {:?}",
                    self.host,
                    self.port,
                    self.timeout
                );
                false
            }
        }
    }
}
