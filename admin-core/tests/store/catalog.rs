use admin_core::{
    CategoriesApi, Pager, ProductsApi, ResourceStore, UsersApi, lookup,
};
use payloads::{CategoryId, requests};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{alice_details, assert_status_code, spawn_app};

#[tokio::test]
async fn user_create_then_delete_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut store = ResourceStore::new(UsersApi {
        client: app.client.clone(),
    });

    let alice = store.create(&alice_details()).await?;
    assert_eq!(alice.display_name(), "Alice Martin");

    store.load().await;
    assert_eq!(store.items(), [alice.clone()]);

    store.delete(&alice.id).await;
    assert!(store.items().is_empty());
    assert!(app.db.read().unwrap().users.is_empty());
    Ok(())
}

#[tokio::test]
async fn product_with_unknown_category_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut store = ResourceStore::new(ProductsApi {
        client: app.client.clone(),
    });

    let result = store
        .create(&requests::CreateProduct {
            name: "Gift Card".into(),
            price: dec!(25.00),
            category_id: Some(CategoryId("ghost".into())),
        })
        .await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(store.error(), Some("unknown category with id ghost"));
    Ok(())
}

#[tokio::test]
async fn deleting_a_category_leaves_products_showing_unknown()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    let lighting = app.seed_category("Lighting");
    let lamp = app.seed_product_in("Brass Desk Lamp", dec!(34.50), &lighting);

    let mut categories = ResourceStore::new(CategoriesApi {
        client: app.client.clone(),
    });
    categories.load().await;
    categories.delete(&lighting.id).await;
    assert!(categories.items().is_empty());

    let mut products = ResourceStore::new(ProductsApi {
        client: app.client.clone(),
    });
    products.load().await;

    // The product keeps its stale reference; display falls back.
    assert_eq!(products.items(), [lamp.clone()]);
    let shown = lookup::category_name(
        lamp.category_id.as_ref().unwrap(),
        categories.items(),
    );
    assert_eq!(shown, lookup::UNKNOWN);
    Ok(())
}

#[tokio::test]
async fn pager_follows_the_store_after_deletes() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for i in 0..7 {
        app.seed_user(&format!("User{i}"), "Test");
    }

    let mut store = ResourceStore::new(UsersApi {
        client: app.client.clone(),
    });
    store.load().await;

    let mut pager = Pager::new(1, 5);
    pager.set_page(2, store.items().len());
    assert_eq!(pager.slice(store.items()).len(), 2);

    // Deleting both rows on page two clamps the pager back to page one.
    let page_two: Vec<_> = pager
        .slice(store.items())
        .iter()
        .map(|user| user.id.clone())
        .collect();
    for id in &page_two {
        store.delete(id).await;
    }
    pager.reclamp(store.items().len());
    assert_eq!(pager.current_page(store.items().len()), 1);
    assert_eq!(pager.slice(store.items()).len(), 5);
    Ok(())
}
