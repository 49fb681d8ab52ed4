//! Business accounts. Propagate policy: remote error bodies come back as
//! [`GatewayError::RemoteError`].

use crate::core::gateway::{ApiOutcome, ApiRequest, FailureKind, Gateway, Operation, NO_NETWORK_MESSAGE};
use crate::domain::model::{
    AddMoreBusiness, AvatarUpload, BusinessRegistration, RegisterBusiness, UpdateBusiness,
};
use crate::utils::display::message_text;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub const REGISTER: Operation = Operation::public("Business Register API", Method::POST);
pub const DETAILS: Operation = Operation::public("Business Details API", Method::GET);
pub const ADD_MORE_ACCOUNT: Operation =
    Operation::authenticated("Business Add More Account API", Method::POST);
pub const UPDATE_AVATAR: Operation =
    Operation::authenticated("Update Business Avatar API", Method::PUT);
pub const UPDATE_DETAILS: Operation =
    Operation::authenticated("Update Business Details API", Method::PUT);
pub const ACCOUNT_CHOICE: Operation =
    Operation::authenticated("Business Account Choice API", Method::GET);
pub const AVATAR: Operation = Operation::authenticated("Business Avatar API", Method::GET);

fn required(value: &str, field: &str, message: &str) -> Result<()> {
    validate_non_empty_string(field, value).map_err(|_| GatewayError::ValidationError {
        message: message.to_string(),
    })
}

impl Validate for RegisterBusiness {
    fn validate(&self) -> Result<()> {
        required(&self.business_name, "businessName", "Business name is required")?;
        required(&self.tax_id, "taxId", "Tax ID is required")?;
        if self.user_id <= 0 {
            return Err(GatewayError::ValidationError {
                message: "Invalid userId".to_string(),
            });
        }
        required(&self.member_id, "memberId", "Invalid memberId")
    }
}

#[derive(Clone)]
pub struct BusinessApi {
    gateway: Arc<Gateway>,
}

impl BusinessApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    async fn call(&self, operation: &Operation, request: ApiRequest) -> Result<Value> {
        self.gateway.execute(operation, request).await.propagate()
    }

    pub async fn register(&self, data: &RegisterBusiness) -> Result<Value> {
        self.call(&REGISTER, ApiRequest::new("/businessacc/register").json(data))
            .await
    }

    pub async fn details(&self, member_id: &str) -> Result<Value> {
        self.call(
            &DETAILS,
            ApiRequest::new(format!("/businessacc/detail/{}", member_id)),
        )
        .await
    }

    pub async fn add_more_account(&self, data: &AddMoreBusiness) -> Result<Value> {
        self.call(
            &ADD_MORE_ACCOUNT,
            ApiRequest::new("/businessacc/AddMoreAcc").json(data),
        )
        .await
    }

    pub async fn update_avatar(&self, id: i64, upload: AvatarUpload) -> Result<Value> {
        self.call(
            &UPDATE_AVATAR,
            ApiRequest::new(format!("/businessacc/avatar/{}", id)).multipart(upload),
        )
        .await
    }

    pub async fn update_details(&self, member_id: &str, data: &UpdateBusiness) -> Result<Value> {
        self.call(
            &UPDATE_DETAILS,
            ApiRequest::new(format!("/businessacc/{}", member_id)).json(data),
        )
        .await
    }

    pub async fn accounts_for_user(&self, user_id: i64) -> Result<Value> {
        self.call(
            &ACCOUNT_CHOICE,
            ApiRequest::new(format!("/businessacc/userId/{}", user_id)),
        )
        .await
    }

    pub async fn avatar(&self, member_id: &str) -> Result<Value> {
        self.call(
            &AVATAR,
            ApiRequest::new(format!("/businessacc/avatar/{}", member_id)),
        )
        .await
    }

    /// Registration flow: validate locally, register, and fold every outcome
    /// into a [`BusinessRegistration`]. Invalid input issues no request.
    pub async fn register_business(&self, input: &RegisterBusiness) -> BusinessRegistration {
        if let Err(e) = input.validate() {
            tracing::warn!("⚠️ Business registration rejected: {}", e);
            return BusinessRegistration {
                success: false,
                data: None,
                message: Some(e.user_friendly_message()),
            };
        }

        let outcome = self
            .gateway
            .execute(
                &REGISTER,
                ApiRequest::new("/businessacc/register").json(input),
            )
            .await;

        if let ApiOutcome::Failure(failure) = &outcome {
            if failure.kind == FailureKind::Connectivity {
                return BusinessRegistration {
                    success: false,
                    data: None,
                    message: Some(NO_NETWORK_MESSAGE.to_string()),
                };
            }
        }

        match outcome.propagate() {
            Ok(data) => match data.get("error").and_then(message_text) {
                Some(error) => BusinessRegistration {
                    success: false,
                    message: Some(error),
                    data: None,
                },
                None => BusinessRegistration {
                    success: true,
                    data: Some(data),
                    message: None,
                },
            },
            Err(e) => BusinessRegistration {
                success: false,
                data: None,
                message: Some(e.user_friendly_message()),
            },
        }
    }
}
