//! Product route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use jurassic_core::{Price, ProductId};

use super::{Created, non_empty};
use crate::db::{CategoryRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Create product request body.
///
/// Every field is optional at the serde level so that a missing field
/// produces the endpoint's own 400 message rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    /// JSON number or numeric string.
    pub price: Option<Value>,
    pub description: Option<String>,
    /// Category name, resolved to an ID before insert.
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "availability_flag")]
    pub availability: Option<bool>,
}

/// Availability update request body.
///
/// An absent or `null` flag clears the column.
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    #[serde(default, deserialize_with = "availability_flag")]
    pub availability: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

/// Accept `true`/`false` as well as the `1`/`0` that tinyint-backed clients send.
fn availability_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlagRepr::Bool(flag)) => Ok(Some(flag)),
        Some(FlagRepr::Int(0)) => Ok(Some(false)),
        Some(FlagRepr::Int(1)) => Ok(Some(true)),
        Some(FlagRepr::Int(other)) => Err(de::Error::invalid_value(
            de::Unexpected::Signed(other),
            &"a boolean, 0, or 1",
        )),
    }
}

/// Availability update response body.
#[derive(Debug, Serialize)]
pub struct UpdateAvailabilityResponse {
    pub success: bool,
    pub message: &'static str,
}

/// List every product.
///
/// # Errors
///
/// Returns 500 if the store query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list()
        .await
        .map_err(AppError::store("Erro ao obter produtos"))?;

    Ok(Json(products))
}

/// Show a single product.
///
/// An ID that does not parse cannot match any row and answers 404 like any
/// other miss.
///
/// # Errors
///
/// Returns 404 if no product matches and 500 if the store query fails.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> Result<Json<Product>> {
    let not_found = || AppError::NotFound("Produto não encontrado".to_string());

    let Ok(id) = raw_id.parse::<ProductId>() else {
        tracing::debug!(id = %raw_id, "Unparseable product id");
        return Err(not_found());
    };

    ProductRepository::new(state.pool())
        .get_by_id(id)
        .await
        .map_err(AppError::store("Erro ao obter detalhes do produto"))?
        .map(Json)
        .ok_or_else(not_found)
}

/// Create a product.
///
/// Required fields are checked and the price parsed before the store is
/// touched. The category name is then resolved to an ID; an unknown name
/// answers 404 without inserting anything.
///
/// # Errors
///
/// Returns 400 for missing fields or a non-numeric price, 404 for an unknown
/// category, and 500 if either store statement fails.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> Result<Json<Created<ProductId>>> {
    let price = body
        .price
        .filter(|v| !v.is_null() && v.as_str() != Some(""));

    let (Some(name), Some(price), Some(description), Some(category)) = (
        non_empty(body.name),
        price,
        non_empty(body.description),
        non_empty(body.category),
    ) else {
        return Err(AppError::BadRequest(
            "Fields name, price, description, and category are required".to_string(),
        ));
    };

    let price = Price::from_json(&price)
        .map_err(|_| AppError::BadRequest("Fields price must be numbers".to_string()))?;

    let category_id = CategoryRepository::new(state.pool())
        .find_id_by_name(&category)
        .await
        .map_err(AppError::store("Error getting category ID"))?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    let product = NewProduct {
        name,
        price,
        description,
        image: non_empty(body.image),
        availability: body.availability,
        category_id,
    };

    let id = ProductRepository::new(state.pool())
        .create(&product)
        .await
        .map_err(AppError::store("Error inserting product"))?;

    tracing::info!(product_id = %id, category_id = %category_id, "Product inserted");

    Ok(Json(Created {
        id,
        message: "Product inserted successfully",
    }))
}

/// Set a product's availability flag.
///
/// There is no existence check: an unknown ID still answers 200. An ID that
/// does not parse is sent as `NULL` and so matches no row, the same way
/// `show` treats it as a miss.
///
/// # Errors
///
/// Returns 400 for a malformed body and 500 if the update fails.
pub async fn update_availability(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
    ApiJson(body): ApiJson<UpdateAvailabilityRequest>,
) -> Result<Json<UpdateAvailabilityResponse>> {
    let id = raw_id.parse::<ProductId>().ok();

    let affected = ProductRepository::new(state.pool())
        .set_availability(id, body.availability)
        .await
        .map_err(AppError::store("Erro ao atualizar disponibilidade"))?;

    if affected == 0 {
        tracing::debug!(id = %raw_id, "Availability update matched no product");
    }

    Ok(Json(UpdateAvailabilityResponse {
        success: true,
        message: "Disponibilidade atualizada com sucesso",
    }))
}
