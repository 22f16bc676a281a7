pub mod ban_list;
pub mod dispatcher;
pub mod name;
pub mod resolver;
pub mod route_service;

pub use ban_list::{BanSet, is_banned_name};
pub use dispatcher::{Dispatch, EditDecision, dispatch, dispatch_edit, temporary_redirect};
pub use name::{ShortName, clean_name, decode_path, parse_name};
pub use resolver::{DEFAULT_LOOKUP_BUDGET, ResolveOutcome, resolve};
pub use route_service::{RouteService, RouteServiceError};
