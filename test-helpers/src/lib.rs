pub mod dataset;
pub mod server;
pub mod telemetry;

use jiff::Timestamp;
use payloads::{
    Category, CategoryId, Comment, CommentId, Order, OrderId, OrderLine,
    OrderStatus, Product, ProductId, User, UserId, requests,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use server::SharedDb;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::ApiClient,
    pub db: SharedDb,
}

/// Functions to populate test data.
///
/// Seeds write straight into the shared dataset, bypassing the API, so
/// error-path tests can arrange state the endpoints would reject.
impl TestApp {
    pub fn seed_user(&self, first_name: &str, last_name: &str) -> User {
        let user = User {
            id: UserId(Uuid::new_v4().to_string()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        };
        self.db.write().unwrap().users.push(user.clone());
        user
    }

    pub fn seed_category(&self, name: &str) -> Category {
        let category = Category {
            id: CategoryId(Uuid::new_v4().to_string()),
            name: name.into(),
        };
        self.db.write().unwrap().categories.push(category.clone());
        category
    }

    pub fn seed_product(&self, name: &str, price: Decimal) -> Product {
        let product = Product {
            id: ProductId(Uuid::new_v4().to_string()),
            name: name.into(),
            price,
            category_id: None,
        };
        self.db.write().unwrap().products.push(product.clone());
        product
    }

    pub fn seed_product_in(
        &self,
        name: &str,
        price: Decimal,
        category: &Category,
    ) -> Product {
        let product = Product {
            id: ProductId(Uuid::new_v4().to_string()),
            name: name.into(),
            price,
            category_id: Some(category.id.clone()),
        };
        self.db.write().unwrap().products.push(product.clone());
        product
    }

    pub fn seed_comment(
        &self,
        text: &str,
        user: &User,
        product: &Product,
    ) -> Comment {
        let comment = Comment {
            id: CommentId(Uuid::new_v4().to_string()),
            text: text.into(),
            user_id: user.id.clone(),
            product_id: product.id.clone(),
            posted_at: Timestamp::now(),
        };
        self.db.write().unwrap().comments.push(comment.clone());
        comment
    }

    /// Seed an order priced the same way the endpoints price one.
    pub fn seed_order(&self, user: &User, lines: &[(&Product, u32)]) -> Order {
        let lines: Vec<OrderLine> = lines
            .iter()
            .map(|(product, quantity)| OrderLine {
                product_id: product.id.clone(),
                quantity: *quantity,
            })
            .collect();
        let mut db = self.db.write().unwrap();
        let total_price = server::order_total(&lines, &db.products).unwrap();
        let order = Order {
            id: OrderId(Uuid::new_v4().to_string()),
            user_id: user.id.clone(),
            status: OrderStatus::Pending,
            lines,
            total_price,
            placed_at: Timestamp::now(),
        };
        db.orders.push(order.clone());
        order
    }
}

pub fn alice_details() -> requests::CreateUser {
    requests::CreateUser {
        first_name: "Alice".into(),
        last_name: "Martin".into(),
        email: "alice@example.com".into(),
    }
}

pub fn bob_details() -> requests::CreateUser {
    requests::CreateUser {
        first_name: "Bob".into(),
        last_name: "Dupont".into(),
        email: "bob@example.com".into(),
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let db = SharedDb::default();
    let mut config = server::Config {
        ip: "127.0.0.1".into(),
        port,
    };

    let server = server::build(&mut config, db.clone()).unwrap();
    tokio::spawn(server);

    let app = TestApp {
        port: config.port,
        client: payloads::ApiClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        db,
    };
    app.client
        .health_check()
        .await
        .expect("server did not come up");
    app
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::Api { status, .. }) => {
            assert_eq!(status, expected)
        }
        _ => panic!("Expected api error"),
    };
}

/// Seeded rows come back over the wire unchanged.
#[tokio::test]
async fn test_seeded_data_is_served() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let user = app.seed_user("Alice", "Martin");
    let users = app.client.users().await?;
    assert_eq!(users, vec![user]);
    Ok(())
}
