use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::db::countries as country_db;
use crate::error::ApiError;
use crate::models::countries::{CountryResponse, CreateCountry, UpdateCountry};
use crate::pagination::{self, PaginationQuery};
use crate::responses;
use crate::validation::validate_body;

/// GET /api/countries — list countries, newest first.
pub async fn list_countries(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::paginate(
        db.get_ref(),
        country_db::all_ordered(),
        &query,
        CountryResponse::from,
    )
    .await?;

    Ok(responses::success(page))
}

/// POST /api/countries — create a country.
pub async fn create_country(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateCountry = validate_body(body.into_inner())?;
    input.validate()?;
    let country = country_db::insert_country(db.get_ref(), input).await?;

    Ok(responses::created(CountryResponse::from(country)))
}

/// GET /api/countries/{id} — get a single country.
pub async fn get_country(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let country = country_db::get_country_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Country", id))?;

    Ok(responses::success(CountryResponse::from(country)))
}

/// PUT /api/countries/{id} — update a country.
pub async fn update_country(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateCountry = validate_body(body.into_inner())?;
    let updated = country_db::update_country(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Country", id))?;

    Ok(responses::success(CountryResponse::from(updated)))
}

/// DELETE /api/countries/{id} — delete a country.
pub async fn delete_country(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = country_db::delete_country(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("Country", id))
    }
}
