use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::product::use_cases::compute_margins::ComputeMarginsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductMarginResponse;
use crate::api::tags::ApiTags;

pub struct AdminApi {
    compute_margins_use_case: Arc<dyn ComputeMarginsUseCase>,
}

impl AdminApi {
    pub fn new(compute_margins_use_case: Arc<dyn ComputeMarginsUseCase>) -> Self {
        Self {
            compute_margins_use_case,
        }
    }
}

/// Back-office reporting API
#[OpenApi]
impl AdminApi {
    /// Product margin report
    ///
    /// Returns sell price minus purchase price for every product.
    /// Fails with 404 when the catalog is empty.
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Admin")]
    async fn product_margins(&self) -> ProductMarginsResponse {
        match self.compute_margins_use_case.execute().await {
            Ok(margins) => {
                ProductMarginsResponse::Ok(Json(margins.into_iter().map(|m| m.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ProductMarginsResponse::NotFound(json),
                    _ => ProductMarginsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum ProductMarginsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductMarginResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
