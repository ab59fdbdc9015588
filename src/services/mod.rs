pub mod platform;
pub mod api_client;
pub mod camera_service;

pub use platform::*;
pub use api_client::ApiClient;
pub use camera_service::WebCamera;
