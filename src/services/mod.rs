pub mod api_client;
pub mod file_service;
pub mod logger_service;
pub mod preview_service;
