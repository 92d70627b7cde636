use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::db::cities as city_db;
use crate::db::countries as country_db;
use crate::error::ApiError;
use crate::models::cities::{CityResponse, CreateCity, UpdateCity};
use crate::pagination::{self, PaginationQuery};
use crate::responses;
use crate::validation::validate_body;

/// GET /api/cities — list cities, newest first.
pub async fn list_cities(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::paginate(
        db.get_ref(),
        city_db::all_ordered(),
        &query,
        CityResponse::from,
    )
    .await?;

    Ok(responses::success(page))
}

/// POST /api/cities — create a city.
pub async fn create_city(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input: CreateCity = validate_body(body.into_inner())?;

    if country_db::get_country_by_id(db.get_ref(), input.country)
        .await?
        .is_none()
    {
        return Err(ApiError::field(
            "country",
            format!("Invalid country id: {}", input.country),
        ));
    }

    let city = city_db::insert_city(db.get_ref(), input).await?;

    Ok(responses::created(CityResponse::from(city)))
}

/// GET /api/cities/{id} — get a single city.
pub async fn get_city(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let city = city_db::get_city_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("City", id))?;

    Ok(responses::success(CityResponse::from(city)))
}

/// PUT /api/cities/{id} — update a city.
pub async fn update_city(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input: UpdateCity = validate_body(body.into_inner())?;

    if let Some(country) = input.country {
        if country_db::get_country_by_id(db.get_ref(), country)
            .await?
            .is_none()
        {
            return Err(ApiError::field(
                "country",
                format!("Invalid country id: {country}"),
            ));
        }
    }

    let updated = city_db::update_city(db.get_ref(), id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("City", id))?;

    Ok(responses::success(CityResponse::from(updated)))
}

/// DELETE /api/cities/{id} — delete a city.
pub async fn delete_city(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = city_db::delete_city(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(responses::deleted("Successfully deleted"))
    } else {
        Err(ApiError::not_found("City", id))
    }
}
