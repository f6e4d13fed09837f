use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};

use crate::application::catalog_service::CatalogService;
use crate::domain::catalog::{
    ActionFailure, ActionOutcome, FailureKind, HomePage, ProductForm, ProductsPage,
};
use crate::domain::ports::StoreFactory;
use crate::errors::AppError;

/// GET /
///
/// Products, returned products and trolleys for the landing page. Always
/// answers 200; collections that could not be loaded are empty.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page data", body = HomePage),
    ),
    tag = "pages"
)]
pub async fn home<F: StoreFactory>(service: web::Data<CatalogService<F>>) -> HttpResponse {
    HttpResponse::Ok().json(service.load_home().await)
}

/// GET /productos
///
/// Product listing, ascending by id.
#[utoipa::path(
    get,
    path = "/productos",
    responses(
        (status = 200, description = "Product listing", body = ProductsPage),
        (status = 500, description = "Products could not be fetched"),
    ),
    tag = "pages"
)]
pub async fn list_products<F: StoreFactory>(
    service: web::Data<CatalogService<F>>,
) -> Result<HttpResponse, AppError> {
    let page = service.load_products().await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /productos
///
/// Creates a product from a form submission and redirects back to the
/// listing. Validation and write failures answer with the submitted values.
#[utoipa::path(
    post,
    path = "/productos",
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Product created, redirect to /productos"),
        (status = 400, description = "Name is missing", body = ActionFailure),
        (status = 500, description = "Store rejected the insert", body = ActionFailure),
    ),
    tag = "pages"
)]
pub async fn create_product<F: StoreFactory>(
    service: web::Data<CatalogService<F>>,
    form: web::Form<ProductForm>,
) -> Result<HttpResponse, AppError> {
    match service.create_product(form.into_inner()).await? {
        ActionOutcome::Redirect { location } => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()),
        ActionOutcome::Failure(failure) => {
            let status = match failure.kind {
                FailureKind::Validation => StatusCode::BAD_REQUEST,
                FailureKind::Write => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Ok(HttpResponse::build(status).json(failure))
        }
    }
}
