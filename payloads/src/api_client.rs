use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    Category, CategoryId, Comment, CommentId, Order, OrderId, Product,
    ProductId, User, UserId, requests,
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the store backend.
///
/// Usable both from the browser (wasm) and from native test code; the
/// backend address is whatever the caller resolved from configuration.
#[derive(Clone)]
pub struct ApiClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl ApiClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl ApiClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, ClientError> {
        let response = self.get("comments").await?;
        ok_payload(response).await
    }

    pub async fn comment(
        &self,
        id: &CommentId,
    ) -> Result<Comment, ClientError> {
        let response = self.get(&format!("comment/{id}")).await?;
        ok_payload(response).await
    }

    pub async fn create_comment(
        &self,
        details: &requests::CreateComment,
    ) -> Result<Comment, ClientError> {
        let response = self.post("comments", details).await?;
        ok_payload(response).await
    }

    pub async fn delete_comment(
        &self,
        id: &CommentId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("comment/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, ClientError> {
        let response = self.get("orders").await?;
        ok_payload(response).await
    }

    pub async fn order(&self, id: &OrderId) -> Result<Order, ClientError> {
        let response = self.get(&format!("order/{id}")).await?;
        ok_payload(response).await
    }

    pub async fn create_order(
        &self,
        details: &requests::CreateOrder,
    ) -> Result<Order, ClientError> {
        let response = self.post("orders", details).await?;
        ok_payload(response).await
    }

    /// Replace an order's editable fields. The only resource with an
    /// update route.
    pub async fn update_order(
        &self,
        id: &OrderId,
        details: &requests::UpdateOrder,
    ) -> Result<Order, ClientError> {
        let response = self.put(&format!("order/{id}"), details).await?;
        ok_payload(response).await
    }

    pub async fn delete_order(
        &self,
        id: &OrderId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("order/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.get("users").await?;
        ok_payload(response).await
    }

    pub async fn user(&self, id: &UserId) -> Result<User, ClientError> {
        let response = self.get(&format!("user/{id}")).await?;
        ok_payload(response).await
    }

    pub async fn create_user(
        &self,
        details: &requests::CreateUser,
    ) -> Result<User, ClientError> {
        let response = self.post("users", details).await?;
        ok_payload(response).await
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<(), ClientError> {
        let response = self.delete(&format!("user/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.get("products").await?;
        ok_payload(response).await
    }

    pub async fn product(
        &self,
        id: &ProductId,
    ) -> Result<Product, ClientError> {
        let response = self.get(&format!("product/{id}")).await?;
        ok_payload(response).await
    }

    pub async fn create_product(
        &self,
        details: &requests::CreateProduct,
    ) -> Result<Product, ClientError> {
        let response = self.post("products", details).await?;
        ok_payload(response).await
    }

    pub async fn delete_product(
        &self,
        id: &ProductId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("product/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self.get("categories").await?;
        ok_payload(response).await
    }

    pub async fn category(
        &self,
        id: &CategoryId,
    ) -> Result<Category, ClientError> {
        let response = self.get(&format!("category/{id}")).await?;
        ok_payload(response).await
    }

    pub async fn create_category(
        &self,
        details: &requests::CreateCategory,
    ) -> Result<Category, ClientError> {
        let response = self.post("categories", details).await?;
        ok_payload(response).await
    }

    pub async fn delete_category(
        &self,
        id: &CategoryId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("category/{id}")).await?;
        ok_empty(response).await
    }
}

/// Wrapper the backend puts around every successful response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
}

/// Shape of backend error bodies. `message` is optional; some failures
/// (proxies, transport-level rejections) carry no structured body at all.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error("api error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The structured message from the error body, when the backend sent
    /// one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            ClientError::Network(_) => None,
        }
    }

    /// The response status, when the failure was an API error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(_) => None,
        }
    }
}

/// Deserialize the `payload` envelope of a successful response into the
/// desired type, or return an appropriate error.
pub async fn ok_payload<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }
    Ok(response.json::<Envelope<T>>().await?.payload)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }
    Ok(())
}

async fn api_error(
    status: StatusCode,
    response: reqwest::Response,
) -> ClientError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ClientError::Api { status, message }
}
