use utoipa::OpenApi;

use crate::domain::catalog::{ActionFailure, HomePage, ProductForm, ProductFormValues, ProductsPage};
use crate::handlers::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::pages::home,
        crate::handlers::pages::list_products,
        crate::handlers::pages::create_product,
        crate::handlers::health::health,
    ),
    components(schemas(
        HomePage,
        ProductsPage,
        ProductForm,
        ProductFormValues,
        ActionFailure,
        HealthResponse
    )),
    tags(
        (name = "pages", description = "Page data and form actions"),
        (name = "health", description = "Liveness"),
    ),
    info(title = "Trolley inventory", version = "0.1.0")
)]
pub struct ApiDoc;
