use admin_core::{CommentsApi, ResourceStore};
use jiff::Timestamp;
use payloads::{CommentId, UserId, requests};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{TestApp, assert_status_code, spawn_app};

fn comment_store(app: &TestApp) -> ResourceStore<CommentsApi> {
    ResourceStore::new(CommentsApi {
        client: app.client.clone(),
    })
}

#[tokio::test]
async fn load_lists_seeded_comments() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let first = app.seed_comment("Sturdy and easy to assemble", &alice, &desk);
    let second = app.seed_comment("Arrived with a scratch", &alice, &desk);

    let mut store = comment_store(&app);
    store.load().await;

    assert_eq!(store.items(), [first, second]);
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
    Ok(())
}

#[tokio::test]
async fn create_appends_the_server_item() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));

    let mut store = comment_store(&app);
    store.load().await;

    let draft = requests::CreateComment {
        text: "Sturdy and easy to assemble".into(),
        user_id: alice.id.clone(),
        product_id: desk.id.clone(),
        posted_at: Timestamp::now(),
    };
    let created = store.create(&draft).await?;

    assert!(!created.id.0.is_empty());
    assert_eq!(store.items(), [created.clone()]);
    assert_eq!(app.db.read().unwrap().comments, vec![created]);
    Ok(())
}

#[tokio::test]
async fn create_with_unknown_user_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let desk = app.seed_product("Oak Desk", dec!(249.99));

    let mut store = comment_store(&app);
    let draft = requests::CreateComment {
        text: "Sturdy and easy to assemble".into(),
        user_id: UserId("ghost".into()),
        product_id: desk.id.clone(),
        posted_at: Timestamp::now(),
    };
    let result = store.create(&draft).await;

    // The server message wins over the generic fallback.
    assert_eq!(store.error(), Some("unknown user with id ghost"));
    assert!(store.items().is_empty());
    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn fetching_a_missing_comment_reports_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut store = comment_store(&app);
    store.fetch_selected(&CommentId("ghost".into())).await;

    assert_eq!(store.selected(), None);
    assert_eq!(store.error(), Some("no comment with id ghost"));
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_row_everywhere() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let first = app.seed_comment("Sturdy and easy to assemble", &alice, &desk);
    let second = app.seed_comment("Arrived with a scratch", &alice, &desk);

    let mut store = comment_store(&app);
    store.load().await;
    store.delete(&first.id).await;

    assert_eq!(store.items(), [second.clone()]);
    assert_eq!(store.error(), None);
    assert_eq!(app.db.read().unwrap().comments, vec![second]);
    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_comment_keeps_the_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.seed_user("Alice", "Martin");
    let desk = app.seed_product("Oak Desk", dec!(249.99));
    let kept = app.seed_comment("Sturdy and easy to assemble", &alice, &desk);

    let mut store = comment_store(&app);
    store.load().await;
    store.delete(&CommentId("ghost".into())).await;

    assert_eq!(store.items(), [kept]);
    assert_eq!(store.error(), Some("no comment with id ghost"));
    Ok(())
}

#[tokio::test]
async fn network_failure_shows_the_generic_message() -> anyhow::Result<()> {
    // Nothing listens here.
    let client = payloads::ApiClient {
        address: "http://127.0.0.1:9".into(),
        inner_client: reqwest::Client::new(),
    };
    let mut store = ResourceStore::new(CommentsApi { client });

    store.load().await;

    assert_eq!(store.error(), Some("Error fetching comments"));
    assert!(!store.is_loading());
    Ok(())
}
