use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::get_all::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveFromCartParams, RemoveFromCartUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartLineResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_product_id};
use crate::api::message::MessageResponse;
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_use_case: Arc<dyn AddToCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_use_case: Arc<dyn AddToCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_use_case,
            remove_use_case,
        }
    }
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increases its quantity.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_to_cart(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddToCartParams {
            product_id: body.0.product_id.map(ProductId::new),
        };

        match self.add_use_case.execute(params).await {
            Ok(_) => AddToCartResponse::Created(MessageResponse::json(
                "Product added to cart successfully!",
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the cart
    ///
    /// Returns every cart line in the order it was first added.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_use_case.execute().await {
            Ok(lines) => {
                let cart: Vec<CartLineResponse> = lines.into_iter().map(|l| l.into()).collect();
                GetCartResponse::Ok(Json(CartResponse { cart }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Remove a product from the cart
    ///
    /// Drops the whole line regardless of its quantity.
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_from_cart(&self, id: Path<String>) -> RemoveFromCartResponse {
        let Ok(product_id) = id.0.parse::<ProductId>() else {
            return RemoveFromCartResponse::BadRequest(invalid_product_id());
        };

        match self
            .remove_use_case
            .execute(RemoveFromCartParams { product_id })
            .await
        {
            Ok(()) => {
                RemoveFromCartResponse::Ok(MessageResponse::json("Product removed from cart."))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFromCartResponse::NotFound(json),
                    _ => RemoveFromCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromCartResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
