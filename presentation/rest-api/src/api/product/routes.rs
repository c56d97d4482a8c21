use std::sync::Arc;

use poem::http::Uri;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, ProductSummaryResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// `{collection path}/{id}`, used as the `Location` of a created product.
fn resource_location(collection: &Uri, id: i32) -> String {
    format!("{}/{}", collection.path().trim_end_matches('/'), id)
}

/// Product catalog API
///
/// Endpoints for listing, reading, creating, replacing, and deleting products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product sorted by name. Purchase prices are not included.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductSummaryResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns the full product, purchase price included.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i32>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Products with a sell price of zero are rejected. On success the
    /// `Location` header points at the new product.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        uri: &Uri,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            sell_price: body.0.sell_price,
            purchase_price: body.0.purchase_price,
        };

        match self.create_use_case.execute(params).await {
            Ok(Some(product)) => CreateProductResponse::Created(resource_location(uri, product.id)),
            Ok(None) => CreateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Stores the given product under its id, inserting it if the id is unknown.
    #[oai(path = "/products", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, body: Json<UpdateProductRequest>) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: body.0.id,
            name: body.0.name,
            sell_price: body.0.sell_price,
            purchase_price: body.0.purchase_price,
        };

        match self.update_use_case.execute(params).await {
            Ok(_) => UpdateProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProductResponse::InternalError(json)
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product if it exists. Deleting an unknown id succeeds.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i32>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductSummaryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_product_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_product_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(ErrorResponse::validation(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_product_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(#[oai(header = "Location")] String),
    /// The store accepted the request but persisted nothing
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_product_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(ErrorResponse::validation(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_product_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_product_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(ErrorResponse::validation(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_product_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_product_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(ErrorResponse::validation(&err))
}
