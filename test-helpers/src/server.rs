//! In-memory stand-in for the store backend.
//!
//! Implements the same wire contract the production API exposes: JSON
//! bodies under a `payload` envelope, camelCase fields, `message` error
//! bodies, singular item paths. State lives in a shared [`Db`] so tests
//! can seed and inspect it directly, bypassing the API.

use std::net::TcpListener;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::body::BoxBody;
use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::{
    App, HttpResponse, HttpServer, Responder, ResponseError, delete, get,
    post, put, web,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use payloads::api_client::Envelope;
use payloads::{
    Category, CategoryId, Comment, CommentId, Order, OrderId, OrderLine,
    OrderStatus, Product, ProductId, User, UserId, requests,
};

pub type SharedDb = std::sync::Arc<RwLock<Db>>;

/// The whole dataset. Handlers take the lock for the duration of one
/// request; nothing is held across an await.
#[derive(Debug, Default)]
pub struct Db {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub comments: Vec<Comment>,
    pub orders: Vec<Order>,
}

impl Db {
    fn require_user(&self, id: &UserId) -> Result<(), ApiError> {
        if self.users.iter().any(|user| &user.id == id) {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!("unknown user with id {id}")))
        }
    }

    fn require_product(&self, id: &ProductId) -> Result<(), ApiError> {
        if self.products.iter().any(|product| &product.id == id) {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "unknown product with id {id}"
            )))
        }
    }

    fn require_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        if self.categories.iter().any(|category| &category.id == id) {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "unknown category with id {id}"
            )))
        }
    }
}

/// Price an order: sum of quantity times unit price over the lines. Fails
/// on a line whose product is not in the dataset.
pub fn order_total(
    lines: &[OrderLine],
    products: &[Product],
) -> Result<Decimal, ApiError> {
    let mut total = Decimal::ZERO;
    for line in lines {
        let product = products
            .iter()
            .find(|product| product.id == line.product_id)
            .ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "unknown product with id {}",
                    line.product_id
                ))
            })?;
        total += product.price * Decimal::from(line.quantity);
    }
    Ok(total)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

/// Shape of error bodies: `{ "message": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: String,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = ErrorMessage {
            message: self.to_string(),
        };
        match self {
            ApiError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            ApiError::NotFound(_) => HttpResponse::NotFound().json(body),
        }
    }
}

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(list_comments)
        .service(create_comment)
        .service(get_comment)
        .service(delete_comment)
        .service(list_orders)
        .service(create_order)
        .service(get_order)
        .service(update_order)
        .service(delete_order)
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(delete_user)
        .service(list_products)
        .service(create_product)
        .service(get_product)
        .service(delete_product)
        .service(list_categories)
        .service(create_category)
        .service(get_category)
        .service(delete_category)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(db), ret)]
#[get("/comments")]
pub async fn list_comments(
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let db = db.read().unwrap();
    Ok(HttpResponse::Ok().json(Envelope {
        payload: db.comments.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[post("/comments")]
pub async fn create_comment(
    details: web::Json<requests::CreateComment>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let mut db = db.write().unwrap();
    db.require_user(&details.user_id)?;
    db.require_product(&details.product_id)?;
    let comment = Comment {
        id: CommentId(Uuid::new_v4().to_string()),
        text: details.text.clone(),
        user_id: details.user_id.clone(),
        product_id: details.product_id.clone(),
        posted_at: details.posted_at,
    };
    db.comments.push(comment.clone());
    Ok(HttpResponse::Ok().json(Envelope { payload: comment }))
}

#[tracing::instrument(skip(db), ret)]
#[get("/comment/{id}")]
pub async fn get_comment(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = CommentId(path.into_inner());
    let db = db.read().unwrap();
    let comment = db
        .comments
        .iter()
        .find(|comment| comment.id == id)
        .ok_or_else(|| {
            ApiError::NotFound(format!("no comment with id {id}"))
        })?;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: comment.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[delete("/comment/{id}")]
pub async fn delete_comment(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = CommentId(path.into_inner());
    let mut db = db.write().unwrap();
    let before = db.comments.len();
    db.comments.retain(|comment| comment.id != id);
    if db.comments.len() == before {
        return Err(ApiError::NotFound(format!("no comment with id {id}")));
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(db), ret)]
#[get("/orders")]
pub async fn list_orders(
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let db = db.read().unwrap();
    Ok(HttpResponse::Ok().json(Envelope {
        payload: db.orders.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[post("/orders")]
pub async fn create_order(
    details: web::Json<requests::CreateOrder>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let mut db = db.write().unwrap();
    db.require_user(&details.user_id)?;
    let total_price = order_total(&details.lines, &db.products)?;
    let order = Order {
        id: OrderId(Uuid::new_v4().to_string()),
        user_id: details.user_id.clone(),
        status: OrderStatus::Pending,
        lines: details.lines.clone(),
        total_price,
        placed_at: Timestamp::now(),
    };
    db.orders.push(order.clone());
    Ok(HttpResponse::Ok().json(Envelope { payload: order }))
}

#[tracing::instrument(skip(db), ret)]
#[get("/order/{id}")]
pub async fn get_order(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = OrderId(path.into_inner());
    let db = db.read().unwrap();
    let order = db
        .orders
        .iter()
        .find(|order| order.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("no order with id {id}")))?;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: order.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[put("/order/{id}")]
pub async fn update_order(
    path: web::Path<String>,
    details: web::Json<requests::UpdateOrder>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = OrderId(path.into_inner());
    let mut db = db.write().unwrap();
    db.require_user(&details.user_id)?;
    let total_price = order_total(&details.lines, &db.products)?;
    let order = db
        .orders
        .iter_mut()
        .find(|order| order.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("no order with id {id}")))?;
    order.user_id = details.user_id.clone();
    order.status = details.status;
    order.lines = details.lines.clone();
    order.total_price = total_price;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: order.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[delete("/order/{id}")]
pub async fn delete_order(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = OrderId(path.into_inner());
    let mut db = db.write().unwrap();
    let before = db.orders.len();
    db.orders.retain(|order| order.id != id);
    if db.orders.len() == before {
        return Err(ApiError::NotFound(format!("no order with id {id}")));
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(db), ret)]
#[get("/users")]
pub async fn list_users(
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let db = db.read().unwrap();
    Ok(HttpResponse::Ok().json(Envelope {
        payload: db.users.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[post("/users")]
pub async fn create_user(
    details: web::Json<requests::CreateUser>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let mut db = db.write().unwrap();
    let user = User {
        id: UserId(Uuid::new_v4().to_string()),
        first_name: details.first_name.clone(),
        last_name: details.last_name.clone(),
        email: details.email.clone(),
    };
    db.users.push(user.clone());
    Ok(HttpResponse::Ok().json(Envelope { payload: user }))
}

#[tracing::instrument(skip(db), ret)]
#[get("/user/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = UserId(path.into_inner());
    let db = db.read().unwrap();
    let user = db
        .users
        .iter()
        .find(|user| user.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("no user with id {id}")))?;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: user.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[delete("/user/{id}")]
pub async fn delete_user(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = UserId(path.into_inner());
    let mut db = db.write().unwrap();
    let before = db.users.len();
    db.users.retain(|user| user.id != id);
    if db.users.len() == before {
        return Err(ApiError::NotFound(format!("no user with id {id}")));
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(db), ret)]
#[get("/products")]
pub async fn list_products(
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let db = db.read().unwrap();
    Ok(HttpResponse::Ok().json(Envelope {
        payload: db.products.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[post("/products")]
pub async fn create_product(
    details: web::Json<requests::CreateProduct>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let mut db = db.write().unwrap();
    if let Some(category_id) = &details.category_id {
        db.require_category(category_id)?;
    }
    let product = Product {
        id: ProductId(Uuid::new_v4().to_string()),
        name: details.name.clone(),
        price: details.price,
        category_id: details.category_id.clone(),
    };
    db.products.push(product.clone());
    Ok(HttpResponse::Ok().json(Envelope { payload: product }))
}

#[tracing::instrument(skip(db), ret)]
#[get("/product/{id}")]
pub async fn get_product(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = ProductId(path.into_inner());
    let db = db.read().unwrap();
    let product = db
        .products
        .iter()
        .find(|product| product.id == id)
        .ok_or_else(|| {
            ApiError::NotFound(format!("no product with id {id}"))
        })?;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: product.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[delete("/product/{id}")]
pub async fn delete_product(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = ProductId(path.into_inner());
    let mut db = db.write().unwrap();
    let before = db.products.len();
    db.products.retain(|product| product.id != id);
    if db.products.len() == before {
        return Err(ApiError::NotFound(format!("no product with id {id}")));
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(db), ret)]
#[get("/categories")]
pub async fn list_categories(
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let db = db.read().unwrap();
    Ok(HttpResponse::Ok().json(Envelope {
        payload: db.categories.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[post("/categories")]
pub async fn create_category(
    details: web::Json<requests::CreateCategory>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let mut db = db.write().unwrap();
    let category = Category {
        id: CategoryId(Uuid::new_v4().to_string()),
        name: details.name.clone(),
    };
    db.categories.push(category.clone());
    Ok(HttpResponse::Ok().json(Envelope { payload: category }))
}

#[tracing::instrument(skip(db), ret)]
#[get("/category/{id}")]
pub async fn get_category(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = CategoryId(path.into_inner());
    let db = db.read().unwrap();
    let category = db
        .categories
        .iter()
        .find(|category| category.id == id)
        .ok_or_else(|| {
            ApiError::NotFound(format!("no category with id {id}"))
        })?;
    Ok(HttpResponse::Ok().json(Envelope {
        payload: category.clone(),
    }))
}

#[tracing::instrument(skip(db), ret)]
#[delete("/category/{id}")]
pub async fn delete_category(
    path: web::Path<String>,
    db: web::Data<RwLock<Db>>,
) -> Result<HttpResponse, ApiError> {
    let id = CategoryId(path.into_inner());
    let mut db = db.write().unwrap();
    let before = db.categories.len();
    db.categories.retain(|category| category.id != id);
    if db.categories.len() == before {
        return Err(ApiError::NotFound(format!("no category with id {id}")));
    }
    Ok(HttpResponse::Ok().finish())
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        use std::env::var;

        Config {
            ip: var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(4000),
        }
    }
}

/// Build the server, but do not await it.
///
/// Returns the port that the server has bound to by modifying the config.
/// CORS is wide open; this never serves anything but local development
/// and tests.
pub fn build(config: &mut Config, db: SharedDb) -> std::io::Result<Server> {
    let db = web::Data::from(db);

    // OS assigns the port if binding to 0
    let listener =
        TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .service(api_services())
            .app_data(db.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
