//! Category route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use jurassic_core::CategoryId;

use super::{Created, non_empty};
use crate::db::CategoryRepository;
use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::Category;
use crate::state::AppState;

/// Create category request body.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// List every category.
///
/// # Errors
///
/// Returns 500 if the store query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool())
        .list()
        .await
        .map_err(AppError::store("Erro ao obter categorias"))?;

    Ok(Json(categories))
}

/// Create a category.
///
/// # Errors
///
/// Returns 400 if `name` is missing and 500 if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCategoryRequest>,
) -> Result<Json<Created<CategoryId>>> {
    let Some(name) = non_empty(body.name) else {
        return Err(AppError::BadRequest("Campo name é obrigatório".to_string()));
    };

    let id = CategoryRepository::new(state.pool())
        .create(&name)
        .await
        .map_err(AppError::store("Erro ao inserir categoria"))?;

    tracing::info!(category_id = %id, name = %name, "Category inserted");

    Ok(Json(Created {
        id,
        message: "Categoria inserida com sucesso",
    }))
}
