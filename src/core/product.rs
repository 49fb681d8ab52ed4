use crate::core::gateway::{ApiRequest, Gateway, Operation};
use crate::domain::model::CreateProduct;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub const CREATE_PRODUCT: Operation = Operation::authenticated("Create Product API", Method::POST);
pub const GET_PRODUCT: Operation = Operation::public("Get Product By ID API", Method::GET);
pub const LIST_PRODUCTS: Operation =
    Operation::public("Get Product List by Business ID API", Method::GET);
pub const SEARCH_PRODUCTS: Operation =
    Operation::public("Search Product List by Business ID API", Method::GET);
pub const DELETE_PRODUCT: Operation = Operation::authenticated("Delete Product API", Method::DELETE);

/// Products of a business. Swallow policy.
#[derive(Clone)]
pub struct ProductApi {
    gateway: Arc<Gateway>,
}

impl ProductApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    async fn call(&self, operation: &Operation, request: ApiRequest) -> Value {
        self.gateway
            .execute(operation, request)
            .await
            .swallow(operation)
    }

    pub async fn create(&self, data: &CreateProduct) -> Value {
        self.call(&CREATE_PRODUCT, ApiRequest::new("/product/create").json(data))
            .await
    }

    pub async fn get(&self, product_id: i64) -> Value {
        self.call(&GET_PRODUCT, ApiRequest::new(format!("/product/{}", product_id)))
            .await
    }

    pub async fn list_by_business(&self, business_id: i64) -> Value {
        self.call(
            &LIST_PRODUCTS,
            ApiRequest::new(format!("/product/lists/{}", business_id)),
        )
        .await
    }

    /// Same path as [`ProductApi::list_by_business`] with a `q` query parameter.
    pub async fn search(&self, business_id: i64, q: &str) -> Value {
        self.call(
            &SEARCH_PRODUCTS,
            ApiRequest::new(format!("/product/lists/{}", business_id)).query("q", q),
        )
        .await
    }

    pub async fn delete(&self, product_id: i64) -> Value {
        self.call(
            &DELETE_PRODUCT,
            ApiRequest::new(format!("/product/{}", product_id)),
        )
        .await
    }
}
