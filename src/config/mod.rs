mod r#impl;
mod structs;
pub mod validators;

pub use r#impl::{DEFAULT_CONFIG_PATH, ENV_PREFIX};
pub use structs::*;
pub use validators::validate_app_config;
