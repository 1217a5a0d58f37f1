use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AddressDoc {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// `state` is stored on create and ignored on update.
#[derive(ToSchema)]
pub struct AddressInputDoc {
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::address::create,
        crate::routes::address::list,
        crate::routes::address::get,
        crate::routes::address::update,
        crate::routes::address::delete,
        crate::routes::address::find_distance,
    ),
    components(
        schemas(
            HealthResponse,
            AddressDoc,
            AddressInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "address")
    )
)]
pub struct ApiDoc;
