use admin_core::{OrdersApi, ResourceStore};
use payloads::{OrderId, OrderLine, OrderStatus, ProductId, requests};
use reqwest::StatusCode;
use rust_decimal::{Decimal, dec};
use test_helpers::{TestApp, assert_status_code, spawn_app};

fn order_store(app: &TestApp) -> ResourceStore<OrdersApi> {
    ResourceStore::new(OrdersApi {
        client: app.client.clone(),
    })
}

#[tokio::test]
async fn create_prices_lines_and_starts_pending() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let lamp = app.seed_product("Brass Desk Lamp", dec!(34.50));

    let mut store = order_store(&app);
    let order = store
        .create(&requests::CreateOrder {
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

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_price, dec!(318.99));
    assert_eq!(store.items(), [order]);
    Ok(())
}

#[tokio::test]
async fn an_order_with_no_lines_totals_zero() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");

    let mut store = order_store(&app);
    let order = store
        .create(&requests::CreateOrder {
            user_id: alice.id.clone(),
            lines: vec![],
        })
        .await?;

    assert_eq!(order.total_price, Decimal::ZERO);
    Ok(())
}

#[tokio::test]
async fn update_does_not_touch_the_list_until_reload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let order = app.seed_order(&alice, &[(&desk, 1)]);

    let mut store = order_store(&app);
    store.load().await;

    let updated = store
        .update(
            &order.id,
            &requests::UpdateOrder {
                user_id: alice.id.clone(),
                status: OrderStatus::Shipped,
                lines: order.lines.clone(),
            },
        )
        .await?;
    assert_eq!(updated.status, OrderStatus::Shipped);

    // The local list is stale until the caller reloads.
    assert_eq!(store.items()[0].status, OrderStatus::Pending);
    store.load().await;
    assert_eq!(store.items()[0].status, OrderStatus::Shipped);
    Ok(())
}

#[tokio::test]
async fn update_reprices_changed_lines() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let order = app.seed_order(&alice, &[(&desk, 1)]);

    let mut store = order_store(&app);
    let updated = store
        .update(
            &order.id,
            &requests::UpdateOrder {
                user_id: alice.id.clone(),
                status: order.status,
                lines: vec![OrderLine {
                    product_id: desk.id.clone(),
                    quantity: 3,
                }],
            },
        )
        .await?;

    assert_eq!(updated.total_price, dec!(749.97));
    assert_eq!(updated.placed_at, order.placed_at);
    Ok(())
}

#[tokio::test]
async fn updating_a_missing_order_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");

    let mut store = order_store(&app);
    let result = store
        .update(
            &OrderId("ghost".into()),
            &requests::UpdateOrder {
                user_id: alice.id.clone(),
                status: OrderStatus::Pending,
                lines: vec![],
            },
        )
        .await;

    assert_status_code(result, StatusCode::NOT_FOUND);
    assert_eq!(store.error(), Some("no order with id ghost"));
    Ok(())
}

#[tokio::test]
async fn create_with_unknown_product_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");

    let mut store = order_store(&app);
    let result = store
        .create(&requests::CreateOrder {
            user_id: alice.id.clone(),
            lines: vec![OrderLine {
                product_id: ProductId("ghost".into()),
                quantity: 1,
            }],
        })
        .await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(store.error(), Some("unknown product with id ghost"));
    assert!(app.db.read().unwrap().orders.is_empty());
    Ok(())
}
