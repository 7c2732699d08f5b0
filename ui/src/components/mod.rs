pub mod confirmation_modal;
pub mod error_banner;
pub mod layout;
pub mod loader;
pub mod modal;
pub mod pagination_controls;
pub mod timestamp_display;

pub use confirmation_modal::ConfirmationModal;
pub use error_banner::ErrorBanner;
pub use loader::Loader;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use timestamp_display::TimestampDisplay;
