//! Boost campaigns plus their results, spend logs and bid logs.
//! Swallow policy: failures come back as `{"message": ...}`.

use crate::core::gateway::{ApiRequest, Gateway, Operation};
use crate::domain::model::{
    BidLogInput, BidLogUpdate, BoostResultInput, CampaignStatus, CreateCampaign, SpendLogInput,
    SpendLogUpdate, UpdateCampaign,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub const CREATE_CAMPAIGN: Operation = Operation::authenticated("Create Boost Campaign", Method::POST);
pub const LIST_CAMPAIGNS: Operation = Operation::public("Get Boost Campaigns", Method::GET);
pub const GET_CAMPAIGN: Operation = Operation::public("Get Boost Campaign By ID", Method::GET);
pub const UPDATE_CAMPAIGN: Operation = Operation::authenticated("Update Boost Campaign", Method::PUT);
pub const DELETE_CAMPAIGN: Operation = Operation::authenticated("Delete Boost Campaign", Method::DELETE);

pub const CREATE_RESULT: Operation = Operation::authenticated("Create Boost Result", Method::POST);
pub const LIST_RESULTS: Operation = Operation::public("Get Boost Results", Method::GET);
pub const UPDATE_RESULT: Operation = Operation::authenticated("Update Boost Result", Method::PUT);
pub const DELETE_RESULT: Operation = Operation::authenticated("Delete Boost Result", Method::DELETE);

pub const CREATE_SPEND_LOG: Operation = Operation::authenticated("Create Spend Log", Method::POST);
pub const LIST_SPEND_LOGS: Operation = Operation::public("Get Spend Logs", Method::GET);
pub const UPDATE_SPEND_LOG: Operation = Operation::authenticated("Update Spend Log", Method::PUT);
pub const DELETE_SPEND_LOG: Operation = Operation::authenticated("Delete Spend Log", Method::DELETE);

pub const CREATE_BID_LOG: Operation = Operation::authenticated("Create Bid Log", Method::POST);
pub const LIST_BID_LOGS: Operation = Operation::public("Get Bid Logs", Method::GET);
pub const UPDATE_BID_LOG: Operation = Operation::authenticated("Update Bid Log", Method::PUT);
pub const DELETE_BID_LOG: Operation = Operation::authenticated("Delete Bid Log", Method::DELETE);

#[derive(Clone)]
pub struct BoostApi {
    gateway: Arc<Gateway>,
}

impl BoostApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    async fn call(&self, operation: &Operation, request: ApiRequest) -> Value {
        self.gateway
            .execute(operation, request)
            .await
            .swallow(operation)
    }

    // Campaigns

    pub async fn create_campaign(&self, data: &CreateCampaign) -> Value {
        self.call(&CREATE_CAMPAIGN, ApiRequest::new("/boost").json(data))
            .await
    }

    pub async fn list_campaigns(&self) -> Value {
        self.call(&LIST_CAMPAIGNS, ApiRequest::new("/boost")).await
    }

    pub async fn get_campaign(&self, id: i64) -> Value {
        self.call(&GET_CAMPAIGN, ApiRequest::new(format!("/boost/{}", id)))
            .await
    }

    pub async fn update_campaign(&self, id: i64, data: &UpdateCampaign) -> Value {
        self.call(
            &UPDATE_CAMPAIGN,
            ApiRequest::new(format!("/boost/{}", id)).json(data),
        )
        .await
    }

    pub async fn delete_campaign(&self, id: i64) -> Value {
        self.call(&DELETE_CAMPAIGN, ApiRequest::new(format!("/boost/{}", id)))
            .await
    }

    pub async fn pause_campaign(&self, id: i64) -> Value {
        self.update_campaign(id, &UpdateCampaign::status(CampaignStatus::Paused))
            .await
    }

    pub async fn resume_campaign(&self, id: i64) -> Value {
        self.update_campaign(id, &UpdateCampaign::status(CampaignStatus::Active))
            .await
    }

    // Results

    pub async fn create_result(&self, campaign_id: i64, data: &BoostResultInput) -> Value {
        self.call(
            &CREATE_RESULT,
            ApiRequest::new(format!("/boost/{}/result", campaign_id)).json(data),
        )
        .await
    }

    pub async fn list_results(&self, campaign_id: i64) -> Value {
        self.call(
            &LIST_RESULTS,
            ApiRequest::new(format!("/boost/{}/result", campaign_id)),
        )
        .await
    }

    pub async fn update_result(&self, result_id: i64, data: &BoostResultInput) -> Value {
        self.call(
            &UPDATE_RESULT,
            ApiRequest::new(format!("/boost/result/{}", result_id)).json(data),
        )
        .await
    }

    pub async fn delete_result(&self, result_id: i64) -> Value {
        self.call(
            &DELETE_RESULT,
            ApiRequest::new(format!("/boost/result/{}", result_id)),
        )
        .await
    }

    // Spend logs

    pub async fn create_spend_log(&self, campaign_id: i64, data: &SpendLogInput) -> Value {
        self.call(
            &CREATE_SPEND_LOG,
            ApiRequest::new(format!("/boost/{}/log/spend", campaign_id)).json(data),
        )
        .await
    }

    pub async fn list_spend_logs(&self, campaign_id: i64) -> Value {
        self.call(
            &LIST_SPEND_LOGS,
            ApiRequest::new(format!("/boost/{}/log/spend", campaign_id)),
        )
        .await
    }

    pub async fn update_spend_log(&self, spend_id: i64, data: &SpendLogUpdate) -> Value {
        self.call(
            &UPDATE_SPEND_LOG,
            ApiRequest::new(format!("/boost/log/spend/{}", spend_id)).json(data),
        )
        .await
    }

    pub async fn delete_spend_log(&self, spend_id: i64) -> Value {
        self.call(
            &DELETE_SPEND_LOG,
            ApiRequest::new(format!("/boost/log/spend/{}", spend_id)),
        )
        .await
    }

    // Bid logs

    pub async fn create_bid_log(&self, campaign_id: i64, data: &BidLogInput) -> Value {
        self.call(
            &CREATE_BID_LOG,
            ApiRequest::new(format!("/boost/{}/log/bid", campaign_id)).json(data),
        )
        .await
    }

    pub async fn list_bid_logs(&self, campaign_id: i64) -> Value {
        self.call(
            &LIST_BID_LOGS,
            ApiRequest::new(format!("/boost/{}/log/bid", campaign_id)),
        )
        .await
    }

    pub async fn update_bid_log(&self, bid_id: i64, data: &BidLogUpdate) -> Value {
        self.call(
            &UPDATE_BID_LOG,
            ApiRequest::new(format!("/boost/log/bid/{}", bid_id)).json(data),
        )
        .await
    }

    pub async fn delete_bid_log(&self, bid_id: i64) -> Value {
        self.call(
            &DELETE_BID_LOG,
            ApiRequest::new(format!("/boost/log/bid/{}", bid_id)),
        )
        .await
    }
}
