pub mod admin;
pub mod edit;
pub mod health;
pub mod redirect;
pub mod types;
pub mod url_api;

pub use admin::{AdminService, admin_routes};
pub use edit::{EditService, edit_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use redirect::{RedirectService, redirect_routes};
pub use types::{ApiResponse, ErrorCode, HealthResponse, PostRoute};
pub use url_api::{UrlApiService, api_routes, links_routes};
