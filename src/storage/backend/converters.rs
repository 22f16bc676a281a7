use migration::entities::route;

use crate::storage::Route;

pub fn model_to_route(model: route::Model) -> Route {
    Route {
        name: model.name,
        url: model.url,
        created_at: model.created_at,
    }
}

pub fn route_to_active_model(route: &Route) -> route::ActiveModel {
    use sea_orm::ActiveValue::Set;

    route::ActiveModel {
        name: Set(route.name.clone()),
        url: Set(route.url.clone()),
        created_at: Set(route.created_at),
    }
}
