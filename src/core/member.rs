use crate::core::gateway::{ApiRequest, Gateway, Operation};
use crate::domain::model::{AcceptInvitation, CreateMember, InviteMember};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub const CREATE_MEMBER: Operation = Operation::public("Create Member API", Method::POST);
pub const SOFT_DELETE_MEMBER: Operation =
    Operation::authenticated("Soft Delete Member API", Method::DELETE);
pub const MEMBERS_BY_BUSINESS: Operation =
    Operation::public("Get Members By BusinessId API", Method::GET);
pub const INVITE_MEMBER: Operation = Operation::authenticated("Invite Member API", Method::POST);
pub const ACCEPT_INVITATION: Operation =
    Operation::authenticated("Accept Invitation API", Method::POST);
pub const PENDING_INVITATIONS: Operation =
    Operation::authenticated("Get Pending Invitations API", Method::GET);

/// Members of a business and their invitations. Propagate policy.
#[derive(Clone)]
pub struct MemberApi {
    gateway: Arc<Gateway>,
}

impl MemberApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    async fn call(&self, operation: &Operation, request: ApiRequest) -> Result<Value> {
        self.gateway.execute(operation, request).await.propagate()
    }

    pub async fn create(&self, data: &CreateMember) -> Result<Value> {
        self.call(&CREATE_MEMBER, ApiRequest::new("/member/create").json(data))
            .await
    }

    pub async fn soft_delete(&self, unique_id: &str) -> Result<Value> {
        self.call(
            &SOFT_DELETE_MEMBER,
            ApiRequest::new(format!("/member/soft/{}", unique_id)),
        )
        .await
    }

    pub async fn list_by_business(&self, business_id: i64) -> Result<Value> {
        self.call(
            &MEMBERS_BY_BUSINESS,
            ApiRequest::new(format!("/member/business/{}", business_id)),
        )
        .await
    }

    pub async fn invite(&self, data: &InviteMember) -> Result<Value> {
        self.call(&INVITE_MEMBER, ApiRequest::new("/member/invite").json(data))
            .await
    }

    pub async fn accept_invitation(&self, data: &AcceptInvitation) -> Result<Value> {
        self.call(&ACCEPT_INVITATION, ApiRequest::new("/member/accept").json(data))
            .await
    }

    pub async fn pending_invitations(&self, user_id: i64) -> Result<Value> {
        self.call(
            &PENDING_INVITATIONS,
            ApiRequest::new(format!("/member/pending/{}", user_id)),
        )
        .await
    }
}
