use derive_more::Display;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;

pub use api_client::{ApiClient, ClientError};

/// Backend-assigned identifier for a user. Opaque; the backend chooses the
/// format.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Backend-assigned identifier for a product.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct ProductId(pub String);

/// Backend-assigned identifier for a category.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// Backend-assigned identifier for a comment.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct CommentId(pub String);

/// Backend-assigned identifier for an order.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct OrderId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// "First Last", as shown in tables and select options.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub posted_at: Timestamp,
}

/// Lifecycle state of an order. Assigned `Pending` by the backend on
/// creation; changed only through order updates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

impl std::str::FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// One product position within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    /// Sum over lines of quantity times the product's price at creation
    /// time; computed by the backend.
    pub total_price: Decimal,
    pub placed_at: Timestamp,
}
