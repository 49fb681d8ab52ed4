mod common;

use common::TEST_TOKEN;
use flexi_ads::core::{
    AcceptInvitation, AddMoreBusiness, AvatarUpload, BusinessType, CreateMember, DocumentType,
    InviteMember, RegisterBusiness, TaxType, UpdateBusiness,
};
use flexi_ads::GatewayError;
use httpmock::prelude::*;
use serde_json::json;

fn registration() -> RegisterBusiness {
    RegisterBusiness {
        business_name: "Acme Office".to_string(),
        tax_id: "0105555000000".to_string(),
        business_type: BusinessType::Office,
        tax_type: TaxType::Vat,
        user_id: 1,
        member_id: "M-1".to_string(),
        document_type: None,
    }
}

#[tokio::test]
async fn test_remote_error_body_is_propagated_verbatim() {
    let server = MockServer::start();
    let body = json!({"message": "Tax ID already registered", "field": "taxId"});
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/businessacc/register");
        then.status(409).json_body(body.clone());
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let result = business.register(&registration()).await;

    api_mock.assert();
    match result {
        Err(GatewayError::RemoteError { status, body: thrown }) => {
            assert_eq!(status, 409);
            assert_eq!(thrown, body);
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/businessacc/detail/M-1");
        then.status(503);
    });

    let business = common::anonymous_client(&server.base_url()).business();
    match business.details("M-1").await {
        Err(GatewayError::NetworkError { message }) => assert_eq!(message, "Network error"),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let base_url = common::unreachable_base_url().await;
    let members = common::client(&base_url).await.member();

    let result = members.pending_invitations(1).await;
    assert!(matches!(result, Err(GatewayError::NetworkError { .. })));
}

#[tokio::test]
async fn test_offline_resolves_with_sentinel() {
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.path_contains("/");
        then.status(200).json_body(json!({}));
    });

    let client = common::offline_client(&server.base_url()).await;
    let sentinel = json!({"message": "No Network Connection"});

    assert_eq!(client.business().details("M-1").await.unwrap(), sentinel);
    assert_eq!(client.business().accounts_for_user(1).await.unwrap(), sentinel);
    assert_eq!(client.member().list_by_business(5).await.unwrap(), sentinel);
    assert_eq!(client.member().soft_delete("M-9").await.unwrap(), sentinel);
    any_mock.assert_hits(0);
}

#[tokio::test]
async fn test_avatar_upload_is_multipart() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/businessacc/avatar/5")
            .header("Authorization", format!("Bearer {}", TEST_TOKEN))
            .header_exists("content-type")
            .body_contains("name=\"avatar\"")
            .body_contains("filename=\"logo.png\"");
        then.status(200).json_body(json!({"avatar": "https://cdn/logo.png"}));
    });

    let business = common::client(&server.base_url()).await.business();
    let result = business
        .update_avatar(
            5,
            AvatarUpload {
                file_name: "logo.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: b"PNGDATA".to_vec(),
            },
        )
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result["avatar"], "https://cdn/logo.png");
}

#[tokio::test]
async fn test_update_details_and_avatar_lookup() {
    let server = MockServer::start();
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/businessacc/M-1")
            .body_contains("\"businessAddress\":\"1 Main St\"")
            .body_contains("\"vat\":true");
        then.status(200).json_body(json!({"updated": true}));
    });
    let avatar_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/businessacc/avatar/M-1")
            .header("Authorization", format!("Bearer {}", TEST_TOKEN));
        then.status(200).json_body(json!({"url": "https://cdn/a.png"}));
    });

    let business = common::client(&server.base_url()).await.business();
    let update = UpdateBusiness {
        business_name: "Acme Office".to_string(),
        business_user_name: None,
        business_phone: None,
        business_address: "1 Main St".to_string(),
        tax_id: "0105555000000".to_string(),
        business_type: BusinessType::Office,
        tax_type: TaxType::Vat,
        vat: true,
        document_type: None,
    };

    assert_eq!(
        business.update_details("M-1", &update).await.unwrap(),
        json!({"updated": true})
    );
    assert_eq!(
        business.avatar("M-1").await.unwrap(),
        json!({"url": "https://cdn/a.png"})
    );
    update_mock.assert();
    avatar_mock.assert();
}

#[tokio::test]
async fn test_authenticated_business_call_without_session() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/businessacc/avatar/M-1");
        then.status(200).json_body(json!({}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let result = business.avatar("M-1").await;

    assert!(matches!(result, Err(GatewayError::NetworkError { .. })));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_register_business_rejects_invalid_input() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/businessacc/register");
        then.status(201).json_body(json!({}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let mut input = registration();
    input.tax_id = "  ".to_string();

    let outcome = business.register_business(&input).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Tax ID is required"));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_register_business_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .body_contains("\"taxType\":\"VAT\"");
        then.status(201).json_body(json!({"id": 5, "businessName": "Acme Office"}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let outcome = business.register_business(&registration()).await;

    api_mock.assert();
    assert!(outcome.success);
    assert_eq!(outcome.data.unwrap()["id"], 5);
    assert!(outcome.message.is_none());
}

#[tokio::test]
async fn test_register_business_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .body_contains("Duplicate");
        then.status(409).json_body(json!({"message": "Business already exists"}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .body_contains("Flagged");
        then.status(200).json_body(json!({"error": "Tax ID is blacklisted"}));
    });

    let business = common::anonymous_client(&server.base_url()).business();

    let mut duplicate = registration();
    duplicate.business_name = "Duplicate Co".to_string();
    let outcome = business.register_business(&duplicate).await;
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Business already exists"));

    let mut flagged = registration();
    flagged.business_name = "Flagged Co".to_string();
    let outcome = business.register_business(&flagged).await;
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Tax ID is blacklisted"));
    assert!(outcome.data.is_none());
}

#[tokio::test]
async fn test_register_business_null_error_is_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/businessacc/register");
        then.status(201).json_body(json!({"id": 5, "error": null}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let outcome = business.register_business(&registration()).await;

    api_mock.assert();
    assert!(outcome.success);
    assert_eq!(outcome.data, Some(json!({"id": 5, "error": null})));
    assert!(outcome.message.is_none());
}

#[tokio::test]
async fn test_register_business_falsy_error_values_are_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .body_contains("Empty");
        then.status(201).json_body(json!({"id": 6, "error": ""}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .body_contains("False");
        then.status(201).json_body(json!({"id": 7, "error": false}));
    });

    let business = common::anonymous_client(&server.base_url()).business();

    let mut empty = registration();
    empty.business_name = "Empty Co".to_string();
    assert!(business.register_business(&empty).await.success);

    let mut falsy = registration();
    falsy.business_name = "False Co".to_string();
    assert!(business.register_business(&falsy).await.success);
}

#[tokio::test]
async fn test_register_business_offline() {
    let server = MockServer::start();
    let business = common::offline_client(&server.base_url()).await.business();

    let outcome = business.register_business(&registration()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("No Network Connection"));
}

#[tokio::test]
async fn test_member_operations() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/member/create")
            .json_body(json!({"permission": "Full", "role": "Owner", "userId": 1}));
        then.status(201).json_body(json!({"uniqueId": "M-2"}));
    });
    let invite_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/member/invite")
            .header("Authorization", format!("Bearer {}", TEST_TOKEN))
            .json_body(json!({"username": "jane", "role": "Editor", "businessId": 5}));
        then.status(200).json_body(json!({"invited": true}));
    });
    let accept_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/member/accept")
            .json_body(json!({"uniqueId": "M-3"}));
        then.status(200).json_body(json!({"accepted": true}));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/member/soft/M-3");
        then.status(200).json_body(json!({"deleted": true}));
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/member/business/5");
        then.status(200).json_body(json!([{"uniqueId": "M-1"}]));
    });

    let members = common::client(&server.base_url()).await.member();

    let created = members
        .create(&CreateMember {
            permission: "Full".to_string(),
            role: "Owner".to_string(),
            user_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(created["uniqueId"], "M-2");

    members
        .invite(&InviteMember {
            username: "jane".to_string(),
            role: "Editor".to_string(),
            business_id: 5,
        })
        .await
        .unwrap();
    members
        .accept_invitation(&AcceptInvitation {
            unique_id: "M-3".to_string(),
        })
        .await
        .unwrap();
    members.soft_delete("M-3").await.unwrap();
    assert_eq!(
        members.list_by_business(5).await.unwrap(),
        json!([{"uniqueId": "M-1"}])
    );

    create_mock.assert();
    invite_mock.assert();
    accept_mock.assert();
    delete_mock.assert();
    list_mock.assert();
}

#[tokio::test]
async fn test_plain_register_returns_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/register")
            .json_body(json!({
                "businessName": "Acme Office",
                "taxId": "0105555000000",
                "businessType": "Office",
                "taxType": "VAT",
                "userId": 1,
                "memberId": "M-1"
            }));
        then.status(201).json_body(json!({"id": 5}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    assert_eq!(
        business.register(&registration()).await.unwrap(),
        json!({"id": 5})
    );
    api_mock.assert();
}

#[tokio::test]
async fn test_add_more_account() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/businessacc/AddMoreAcc")
            .header("Authorization", format!("Bearer {}", TEST_TOKEN))
            .json_body(json!({
                "businessName": "Acme Coaching",
                "taxId": "0105555000001",
                "businessType": "Coach",
                "taxType": "Non-VAT",
                "userId": 1,
                "DocumentType": ["Receipt"]
            }));
        then.status(201).json_body(json!({"id": 6}));
    });

    let business = common::client(&server.base_url()).await.business();
    let result = business
        .add_more_account(&AddMoreBusiness {
            business_name: "Acme Coaching".to_string(),
            tax_id: "0105555000001".to_string(),
            business_type: BusinessType::Coach,
            tax_type: TaxType::NonVat,
            user_id: 1,
            document_type: Some(vec![DocumentType::Receipt]),
        })
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result, json!({"id": 6}));
}

#[tokio::test]
async fn test_accounts_for_user() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/businessacc/userId/1")
            .header("Authorization", format!("Bearer {}", TEST_TOKEN));
        then.status(200).json_body(json!([{"id": 5}, {"id": 6}]));
    });

    let business = common::client(&server.base_url()).await.business();

    assert_eq!(
        business.accounts_for_user(1).await.unwrap(),
        json!([{"id": 5}, {"id": 6}])
    );
    api_mock.assert();
}

#[tokio::test]
async fn test_add_more_account_without_session_is_network_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/businessacc/AddMoreAcc");
        then.status(201).json_body(json!({}));
    });

    let business = common::anonymous_client(&server.base_url()).business();
    let result = business
        .add_more_account(&AddMoreBusiness {
            business_name: "Acme Coaching".to_string(),
            tax_id: "0105555000001".to_string(),
            business_type: BusinessType::Coach,
            tax_type: TaxType::NonVat,
            user_id: 1,
            document_type: None,
        })
        .await;

    assert!(matches!(result, Err(GatewayError::NetworkError { .. })));
    api_mock.assert_hits(0);
}
