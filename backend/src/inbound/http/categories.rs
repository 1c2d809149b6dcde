//! Category HTTP handlers.
//!
//! ```text
//! GET  /api/categories
//! POST /api/categories
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};

use crate::domain::CategoryDraft;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{CategoryPayload, CategoryResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// List every category.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = [CategoryResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CategoryResponse>>> {
    let categories = state.categories.list().await?;
    Ok(web::Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Created category", body = CategoryResponse),
        (status = 400, description = "Invalid model", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryPayload>,
) -> ApiResult<HttpResponse> {
    let draft = CategoryDraft::new(payload.into_inner().name)?;
    let category = state.categories.add(draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/categories/{}", category.id)))
        .json(CategoryResponse::from(category)))
}
