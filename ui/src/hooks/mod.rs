pub mod use_categories;
pub mod use_comments;
pub mod use_orders;
pub mod use_pagination;
pub mod use_products;
pub mod use_resource;
pub mod use_title;
pub mod use_users;

pub use use_categories::use_categories;
pub use use_comments::use_comments;
pub use use_orders::use_orders;
pub use use_pagination::{PaginationHandle, use_pagination};
pub use use_products::use_products;
pub use use_resource::{ResourceHandle, use_resource};
pub use use_title::use_title;
pub use use_users::use_users;
