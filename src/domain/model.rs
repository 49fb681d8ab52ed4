use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------- Boost campaigns ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStrategy {
    Auto,
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub business_id: i64,
    pub product_id: i64,
    pub owner_id: String,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_cap: Option<f64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub bid_strategy: BidStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bid: Option<f64>,
}

/// Partial campaign update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<BidStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_cap: Option<f64>,
}

impl UpdateCampaign {
    pub fn status(status: CampaignStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostResultInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_spent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendLogInput {
    pub spend: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendLogUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidLogInput {
    pub bid_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidLogUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

// ---------- Business accounts ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessType {
    Office,
    Coach,
    Bank,
    Agency,
    Account,
    Orm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    #[serde(rename = "VAT")]
    Vat,
    #[serde(rename = "Non-VAT")]
    NonVat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Invoice,
    Receipt,
    Quotation,
    WithholdingTax,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBusiness {
    pub business_name: String,
    pub tax_id: String,
    pub business_type: BusinessType,
    pub tax_type: TaxType,
    pub user_id: i64,
    /// Member.uniqueId of the registering member
    pub member_id: String,
    #[serde(
        rename = "DocumentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<Vec<DocumentType>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMoreBusiness {
    pub business_name: String,
    pub tax_id: String,
    pub business_type: BusinessType,
    pub tax_type: TaxType,
    pub user_id: i64,
    #[serde(
        rename = "DocumentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<Vec<DocumentType>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusiness {
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    pub business_address: String,
    pub tax_id: String,
    pub business_type: BusinessType,
    pub tax_type: TaxType,
    pub vat: bool,
    #[serde(
        rename = "DocumentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<Vec<DocumentType>>,
}

/// Image sent as the `avatar` part of a multipart form.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Outcome of the business registration flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessRegistration {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ---------- Members ----------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    pub permission: String,
    pub role: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteMember {
    pub username: String,
    pub role: String,
    pub business_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitation {
    pub unique_id: String,
}

// ---------- Products ----------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    pub business_id: i64,
    pub category_id: i64,
    pub author_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ProductDetail>>,
}

// ---------- Session ----------

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub member_id: Option<String>,
    #[serde(default)]
    pub business_id: Option<i64>,
}

// memberId 在後端有時是數字、有時是字串
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_update_serializes_only_status() {
        let body = serde_json::to_value(UpdateCampaign::status(CampaignStatus::Paused)).unwrap();
        assert_eq!(body, json!({"status": "PAUSED"}));
    }

    #[test]
    fn test_register_business_wire_names() {
        let input = RegisterBusiness {
            business_name: "Acme".to_string(),
            tax_id: "0105555000000".to_string(),
            business_type: BusinessType::Agency,
            tax_type: TaxType::NonVat,
            user_id: 12,
            member_id: "M-77".to_string(),
            document_type: Some(vec![DocumentType::Invoice, DocumentType::WithholdingTax]),
        };

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({
                "businessName": "Acme",
                "taxId": "0105555000000",
                "businessType": "Agency",
                "taxType": "Non-VAT",
                "userId": 12,
                "memberId": "M-77",
                "DocumentType": ["Invoice", "WithholdingTax"]
            })
        );
    }

    #[test]
    fn test_create_product_omits_unset_optionals() {
        let input = CreateProduct {
            title: "Office for rent".to_string(),
            description: "Near BTS".to_string(),
            image: None,
            call_to_action: Some("Call now".to_string()),
            business_id: 3,
            category_id: 1,
            author_id: "u-1".to_string(),
            details: None,
        };

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["callToAction"], "Call now");
        assert!(body.get("image").is_none());
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_login_user_accepts_numeric_member_id() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "user": {"id": 4, "memberId": 91, "businessId": 7}
        }))
        .unwrap();

        let user = response.user.unwrap();
        assert_eq!(user.member_id.as_deref(), Some("91"));
        assert_eq!(user.business_id, Some(7));
    }
}
