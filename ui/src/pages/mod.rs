pub mod categories;
pub mod comments;
pub mod home;
pub mod not_found;
pub mod orders;
pub mod products;
pub mod users;

pub use categories::CategoriesPage;
pub use comments::CommentsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use users::UsersPage;
