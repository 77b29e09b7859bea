pub mod empty_state;
pub mod image_browser;
pub mod image_card;
pub mod image_preview_modal;
pub mod navbar;
pub mod pagination;
pub mod search_bar;

pub use empty_state::{empty_state, error_panel, loading_indicator};
pub use pagination::pagination;
pub use search_bar::{SearchBarConfig, search_bar};
