//! Session scalars (token, userId, memberId, businessId) over a [`KeyValueStore`].
//!
//! Writes never fail from the caller's point of view: storage errors are
//! logged and dropped. Reads treat storage errors as "absent". The keys are
//! independent; nothing keeps them consistent with each other.

use crate::domain::model::LoginResponse;
use crate::domain::ports::{KeyValueStore, TokenSource};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const MEMBER_ID_KEY: &str = "memberId";
pub const BUSINESS_ID_KEY: &str = "businessId";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

fn payment_term_key(member_id: &str) -> String {
    format!("paymentTermCondition_{}", member_id)
}

fn remark_key(member_id: &str) -> String {
    format!("remark_{}", member_id)
}

/// Explicit session state, created at login and torn down at logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub member_id: Option<String>,
    pub business_id: Option<i64>,
}

impl SessionContext {
    pub fn from_login(response: LoginResponse) -> Result<Self> {
        let token = response.token.filter(|t| !t.is_empty());
        let (token, user) = match (token, response.user) {
            (Some(token), Some(user)) => (token, user),
            _ => {
                return Err(GatewayError::ValidationError {
                    message: "Invalid response from server.".to_string(),
                })
            }
        };

        Ok(Self {
            token: Some(token),
            user_id: Some(user.id),
            member_id: user.member_id,
            business_id: user.business_id,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    async fn save(&self, key: &str, value: &str) {
        match self.store.set_item(key, value).await {
            Ok(()) => tracing::debug!("💾 {} saved", key),
            Err(e) => tracing::error!("Error saving {}: {}", key, e),
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        match self.store.get_item(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Error getting {}: {}", key, e);
                None
            }
        }
    }

    async fn remove(&self, key: &str) -> bool {
        match self.store.remove_item(key).await {
            Ok(()) => {
                tracing::debug!("🗑️ {} removed", key);
                true
            }
            Err(e) => {
                tracing::error!("Error removing {}: {}", key, e);
                false
            }
        }
    }

    // remove 失敗就保留舊值；remove 後 save 失敗時 key 會是空的
    async fn replace(&self, key: &str, value: &str) {
        if !self.remove(key).await {
            return;
        }
        self.save(key, value).await;
        tracing::debug!("🔄 {} replaced", key);
    }

    async fn get_number(&self, key: &str) -> Option<i64> {
        let raw = self.get(key).await?;
        match raw.trim().parse() {
            Ok(number) => Some(number),
            Err(_) => {
                tracing::warn!("Stored {} is not a number: {:?}", key, raw);
                None
            }
        }
    }

    pub async fn save_token(&self, token: &str) {
        self.save(TOKEN_KEY, token).await
    }

    pub async fn get_token(&self) -> Option<String> {
        self.get(TOKEN_KEY).await
    }

    pub async fn remove_token(&self) {
        self.remove(TOKEN_KEY).await;
    }

    pub async fn replace_token(&self, token: &str) {
        self.replace(TOKEN_KEY, token).await
    }

    pub async fn save_user_id(&self, user_id: i64) {
        self.save(USER_ID_KEY, &user_id.to_string()).await
    }

    pub async fn get_user_id(&self) -> Option<i64> {
        self.get_number(USER_ID_KEY).await
    }

    pub async fn remove_user_id(&self) {
        self.remove(USER_ID_KEY).await;
    }

    pub async fn save_member_id(&self, member_id: &str) {
        self.save(MEMBER_ID_KEY, member_id).await
    }

    pub async fn get_member_id(&self) -> Option<String> {
        self.get(MEMBER_ID_KEY).await
    }

    pub async fn remove_member_id(&self) {
        self.remove(MEMBER_ID_KEY).await;
    }

    pub async fn replace_member_id(&self, member_id: &str) {
        self.replace(MEMBER_ID_KEY, member_id).await
    }

    pub async fn save_business_id(&self, business_id: i64) {
        self.save(BUSINESS_ID_KEY, &business_id.to_string()).await
    }

    pub async fn get_business_id(&self) -> Option<i64> {
        self.get_number(BUSINESS_ID_KEY).await
    }

    pub async fn remove_business_id(&self) {
        self.remove(BUSINESS_ID_KEY).await;
    }

    pub async fn is_logged_in(&self) -> bool {
        self.get(LOGGED_IN_KEY).await.as_deref() == Some("true")
    }

    pub async fn save_payment_term_condition(&self, member_id: &str, condition: &str) {
        self.save(&payment_term_key(member_id), condition).await
    }

    pub async fn get_payment_term_condition(&self, member_id: &str) -> Option<String> {
        self.get(&payment_term_key(member_id)).await
    }

    pub async fn remove_payment_term_condition(&self, member_id: &str) {
        self.remove(&payment_term_key(member_id)).await;
    }

    pub async fn save_remark(&self, member_id: &str, remark: &str) {
        self.save(&remark_key(member_id), remark).await
    }

    pub async fn get_remark(&self, member_id: &str) -> Option<String> {
        self.get(&remark_key(member_id)).await
    }

    pub async fn remove_remark(&self, member_id: &str) {
        self.remove(&remark_key(member_id)).await;
    }

    /// Login: each present field is saved on its own, then the logged-in flag.
    pub async fn establish(&self, session: &SessionContext) {
        if let Some(token) = &session.token {
            self.save_token(token).await;
        }
        if let Some(user_id) = session.user_id {
            self.save_user_id(user_id).await;
        }
        if let Some(member_id) = &session.member_id {
            self.save_member_id(member_id).await;
        }
        if let Some(business_id) = session.business_id {
            self.save_business_id(business_id).await;
        }
        self.save(LOGGED_IN_KEY, "true").await;
        tracing::info!("🔐 Session established for user {:?}", session.user_id);
    }

    pub async fn load(&self) -> SessionContext {
        SessionContext {
            token: self.get_token().await,
            user_id: self.get_user_id().await,
            member_id: self.get_member_id().await,
            business_id: self.get_business_id().await,
        }
    }

    pub async fn refresh_token(&self, token: &str) {
        self.replace_token(token).await
    }

    /// Logout.
    pub async fn clear(&self) {
        self.remove_token().await;
        self.remove_user_id().await;
        self.remove_member_id().await;
        self.remove_business_id().await;
        self.remove(LOGGED_IN_KEY).await;
        tracing::info!("👋 Session cleared");
    }
}

#[async_trait]
impl<S: KeyValueStore> TokenSource for SessionStore<S> {
    async fn bearer_token(&self) -> Result<String> {
        match self.store.get_item(TOKEN_KEY).await? {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(GatewayError::CredentialError {
                message: "no token in session store".to_string(),
            }),
        }
    }
}

/// In-memory session shared between the app and the gateway.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    current: Arc<RwLock<Option<SessionContext>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, session: SessionContext) {
        *self.current.write().await = Some(session);
    }

    pub async fn refresh_token(&self, token: impl Into<String>) -> Result<()> {
        let mut current = self.current.write().await;
        match current.as_mut() {
            Some(session) => {
                session.token = Some(token.into());
                Ok(())
            }
            None => Err(GatewayError::CredentialError {
                message: "cannot refresh token without an active session".to_string(),
            }),
        }
    }

    pub async fn end(&self) {
        *self.current.write().await = None;
    }

    pub async fn snapshot(&self) -> Option<SessionContext> {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl TokenSource for SessionHandle {
    async fn bearer_token(&self) -> Result<String> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|session| session.token.clone())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| GatewayError::CredentialError {
                message: "no active session".to_string(),
            })
    }
}
