pub mod route;

pub use route::Entity as RouteEntity;
