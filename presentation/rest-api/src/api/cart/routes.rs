use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get_all::GetAllCartsUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, RemoveCartItemResponse, UpdateCartItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
        }
    }
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// List all carts
    #[oai(path = "/carts", method = "get", tag = "ApiTags::Carts")]
    async fn list_carts(&self) -> ListCartsResponse {
        match self.get_all_use_case.execute().await {
            Ok(carts) => {
                ListCartsResponse::Ok(Json(carts.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCartsResponse::InternalError(json)
            }
        }
    }

    /// Create an empty cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, id: Path<i64>) -> CartResult {
        let result = self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id: id.0 })
            .await;
        CartResult::from_result(result)
    }

    /// Delete a cart
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(&self, id: Path<i64>) -> DeleteCartResponse {
        match self
            .delete_use_case
            .execute(DeleteCartParams { id: id.0 })
            .await
        {
            Ok(true) => DeleteCartResponse::NoContent,
            Ok(false) => DeleteCartResponse::NotFound(Json(ErrorResponse::new(
                "NotFoundError",
                "cart.not_found",
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Adding a product the cart already holds increases its quantity.
    #[oai(path = "/carts/:id/products", method = "post", tag = "ApiTags::Carts")]
    async fn add_product(&self, id: Path<i64>, body: Json<AddCartItemRequest>) -> CartResult {
        let params = AddProductToCartParams {
            cart_id: id.0,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };
        CartResult::from_result(self.add_product_use_case.execute(params).await)
    }

    /// Set the quantity of a line item
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn update_product_quantity(
        &self,
        id: Path<i64>,
        product_id: Path<i64>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartResult {
        let params = UpdateCartItemQuantityParams {
            cart_id: id.0,
            product_id: product_id.0,
            quantity: body.0.quantity,
        };
        CartResult::from_result(self.update_quantity_use_case.execute(params).await)
    }

    /// Remove a product from a cart
    ///
    /// Removing a product the cart does not hold leaves it unchanged and
    /// reports `removed: false`.
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_product(&self, id: Path<i64>, product_id: Path<i64>) -> RemoveProductResponse {
        let params = RemoveProductFromCartParams {
            cart_id: id.0,
            product_id: product_id.0,
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(outcome) => RemoveProductResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of every endpoint that returns the resulting cart.
#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_result(result: Result<Cart, CartError>) -> Self {
        match result {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartResult::BadRequest(json),
                    404 => CartResult::NotFound(json),
                    _ => CartResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<RemoveCartItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
