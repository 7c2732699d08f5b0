//! Seed data for UI development.
//!
//! Creates a small but realistic store catalog through the API client,
//! the same wire path the admin UI uses:
//! - a few users, categories, and products (one product uncategorized)
//! - comments long enough to exercise list truncation
//! - orders in several statuses, one moved along via an update

use anyhow::Result;
use jiff::Timestamp;
use payloads::{
    Category, Comment, Order, OrderLine, OrderStatus, Product, User, requests,
};
use rust_decimal::dec;

use crate::TestApp;

pub struct DevDataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub comments: Vec<Comment>,
    pub orders: Vec<Order>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("Creating users");
        let alice = app.client.create_user(&crate::alice_details()).await?;
        let bob = app.client.create_user(&crate::bob_details()).await?;
        let claire = app
            .client
            .create_user(&requests::CreateUser {
                first_name: "Claire".into(),
                last_name: "Fontaine".into(),
                email: "claire@example.com".into(),
            })
            .await?;

        tracing::info!("Creating catalog");
        let furniture = app
            .client
            .create_category(&requests::CreateCategory {
                name: "Furniture".into(),
            })
            .await?;
        let lighting = app
            .client
            .create_category(&requests::CreateCategory {
                name: "Lighting".into(),
            })
            .await?;
        let stationery = app
            .client
            .create_category(&requests::CreateCategory {
                name: "Stationery".into(),
            })
            .await?;

        let desk = app
            .client
            .create_product(&requests::CreateProduct {
                name: "Oak Desk".into(),
                price: dec!(249.99),
                category_id: Some(furniture.id.clone()),
            })
            .await?;
        let chair = app
            .client
            .create_product(&requests::CreateProduct {
                name: "Swivel Chair".into(),
                price: dec!(129.00),
                category_id: Some(furniture.id.clone()),
            })
            .await?;
        let lamp = app
            .client
            .create_product(&requests::CreateProduct {
                name: "Brass Desk Lamp".into(),
                price: dec!(34.50),
                category_id: Some(lighting.id.clone()),
            })
            .await?;
        let notebook = app
            .client
            .create_product(&requests::CreateProduct {
                name: "A5 Notebook".into(),
                price: dec!(4.20),
                category_id: Some(stationery.id.clone()),
            })
            .await?;
        let pen = app
            .client
            .create_product(&requests::CreateProduct {
                name: "Fountain Pen".into(),
                price: dec!(18.00),
                category_id: Some(stationery.id.clone()),
            })
            .await?;
        // No category: the products table shows "Unknown" for this one.
        let gift_card = app
            .client
            .create_product(&requests::CreateProduct {
                name: "Gift Card".into(),
                price: dec!(25.00),
                category_id: None,
            })
            .await?;

        tracing::info!("Creating comments");
        let comments = vec![
            app.client
                .create_comment(&comment_details(
                    &alice,
                    &desk,
                    "Sturdy desk, assembly took about twenty minutes",
                ))
                .await?,
            app.client
                .create_comment(&comment_details(
                    &bob,
                    &lamp,
                    "Warm light but the switch feels flimsy",
                ))
                .await?,
            app.client
                .create_comment(&comment_details(
                    &claire,
                    &pen,
                    "Writes beautifully straight out of the box",
                ))
                .await?,
            app.client
                .create_comment(&comment_details(
                    &alice,
                    &notebook,
                    "Paper is thick enough for fountain pen ink",
                ))
                .await?,
        ];

        tracing::info!("Creating orders");
        let shipped = app
            .client
            .create_order(&requests::CreateOrder {
                user_id: alice.id.clone(),
                lines: vec![
                    OrderLine {
                        product_id: desk.id.clone(),
                        quantity: 1,
                    },
                    OrderLine {
                        product_id: lamp.id.clone(),
                        quantity: 2,
                    },
                ],
            })
            .await?;
        // Move it along so every status shows up in the table.
        let shipped = app
            .client
            .update_order(
                &shipped.id,
                &requests::UpdateOrder {
                    user_id: shipped.user_id.clone(),
                    status: OrderStatus::Shipped,
                    lines: shipped.lines.clone(),
                },
            )
            .await?;

        let pending = app
            .client
            .create_order(&requests::CreateOrder {
                user_id: bob.id.clone(),
                lines: vec![
                    OrderLine {
                        product_id: notebook.id.clone(),
                        quantity: 3,
                    },
                    OrderLine {
                        product_id: pen.id.clone(),
                        quantity: 1,
                    },
                ],
            })
            .await?;

        let delivered = app
            .client
            .create_order(&requests::CreateOrder {
                user_id: claire.id.clone(),
                lines: vec![OrderLine {
                    product_id: chair.id.clone(),
                    quantity: 1,
                }],
            })
            .await?;
        let delivered = app
            .client
            .update_order(
                &delivered.id,
                &requests::UpdateOrder {
                    user_id: delivered.user_id.clone(),
                    status: OrderStatus::Delivered,
                    lines: delivered.lines.clone(),
                },
            )
            .await?;

        Ok(DevDataset {
            users: vec![alice, bob, claire],
            categories: vec![furniture, lighting, stationery],
            products: vec![desk, chair, lamp, notebook, pen, gift_card],
            comments,
            orders: vec![shipped, pending, delivered],
        })
    }

    /// Print a summary of the created data.
    pub fn print_summary(&self) {
        tracing::info!("Available data:");
        tracing::info!("   {} users", self.users.len());
        tracing::info!("   {} categories", self.categories.len());
        tracing::info!(
            "   {} products ({} without a category)",
            self.products.len(),
            self.products
                .iter()
                .filter(|product| product.category_id.is_none())
                .count()
        );
        tracing::info!("   {} comments", self.comments.len());
        for order in &self.orders {
            tracing::info!(
                "   order {} is {}, total {}",
                order.id,
                order.status,
                order.total_price
            );
        }
    }
}

fn comment_details(
    user: &User,
    product: &Product,
    text: &str,
) -> requests::CreateComment {
    requests::CreateComment {
        text: text.into(),
        user_id: user.id.clone(),
        product_id: product.id.clone(),
        posted_at: Timestamp::now(),
    }
}
