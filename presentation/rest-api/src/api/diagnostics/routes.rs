use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::get_above_price::{
    GetProductsAbovePriceParams, GetProductsAbovePriceUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct DiagnosticsApi {
    above_price_use_case: Arc<dyn GetProductsAbovePriceUseCase>,
}

impl DiagnosticsApi {
    pub fn new(above_price_use_case: Arc<dyn GetProductsAbovePriceUseCase>) -> Self {
        Self {
            above_price_use_case,
        }
    }
}

#[OpenApi]
impl DiagnosticsApi {
    /// Products above a price
    ///
    /// Returns the products whose sell price is strictly greater than `price`.
    #[oai(path = "/test/products/:price", method = "get", tag = "ApiTags::Diagnostics")]
    async fn products_above_price(&self, price: Path<i32>) -> ProductsAbovePriceResponse {
        match self
            .above_price_use_case
            .execute(GetProductsAbovePriceParams { threshold: price.0 })
            .await
        {
            Ok(products) => {
                ProductsAbovePriceResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductsAbovePriceResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "products_above_price_bad_request")]
pub enum ProductsAbovePriceResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn products_above_price_bad_request(err: poem::Error) -> ProductsAbovePriceResponse {
    ProductsAbovePriceResponse::BadRequest(ErrorResponse::validation(&err))
}
