use std::collections::{HashMap, HashSet};

use sea_orm::*;

use crate::error::ApiError;
use crate::filters;
use crate::models::PreSave;
use crate::models::jobs::{
    self, CategoryBrief, CityBrief, CreateJob, JobFilter, JobResponse, JobStatus,
    OptionalValueResponse, UserBrief,
};
use crate::models::{categories, cities, countries, job_optional_values, optional_fields, users};
use crate::pagination::{self, Page, PaginationQuery};

/// Build the owner-scoped, filtered job query.
///
/// Ordering (newest first) is established before any filter is applied and
/// preserved afterward. Filters are independent and AND-combined; an absent
/// or empty parameter is a no-op.
pub fn filtered_query(user_id: i32, filter: &JobFilter) -> Result<Select<jobs::Entity>, ApiError> {
    let mut query = jobs::Entity::find()
        .filter(jobs::Column::UserId.eq(user_id))
        .order_by_desc(jobs::Column::Id);

    if let Some(ref title) = filter.title {
        if !title.is_empty() {
            query = query.filter(filters::contains_ci(jobs::Column::Title, title));
        }
    }
    if let Some(ref category) = filter.category {
        if !category.is_empty() {
            query = query.filter(filters::any_of_ids(
                jobs::Column::CategoryId,
                "category",
                category,
            )?);
        }
    }
    if let Some(ref city) = filter.city {
        if !city.is_empty() {
            query = query.filter(filters::any_of_ids(jobs::Column::CityId, "city", city)?);
        }
    }

    Ok(query)
}

/// One page of the caller's jobs, each row resolved to its detail shape.
pub async fn list_jobs(
    db: &DatabaseConnection,
    user_id: i32,
    filter: &JobFilter,
    pagination: &PaginationQuery,
) -> Result<Page<JobResponse>, ApiError> {
    let query = filtered_query(user_id, filter)?;
    let mut page = pagination::paginate(db, query, pagination, |model| model).await?;
    let models = std::mem::take(&mut page.items);
    let items = to_responses(db, models).await?;
    Ok(page.with_items(items))
}

/// Insert a new job, along with any `additionally` optional-field values.
pub async fn insert_job(
    db: &DatabaseConnection,
    input: CreateJob,
    user_id: i32,
) -> Result<JobResponse, ApiError> {
    let CreateJob {
        title,
        category,
        city,
        description,
        contact_number,
        email,
        name,
        status,
        photo,
        is_vip,
        is_top,
        additionally,
    } = input;

    // Resolve foreign keys up front so bad ids surface as field errors, not
    // constraint violations.
    if categories::Entity::find_by_id(category).one(db).await?.is_none() {
        return Err(ApiError::field(
            "category",
            format!("Invalid category id: {category}"),
        ));
    }
    if cities::Entity::find_by_id(city).one(db).await?.is_none() {
        return Err(ApiError::field("city", format!("Invalid city id: {city}")));
    }

    let field_ids: Vec<i32> = additionally.iter().map(|v| v.optional_field).collect();
    if !field_ids.is_empty() {
        let known: HashSet<i32> = optional_fields::Entity::find()
            .filter(optional_fields::Column::Id.is_in(field_ids.clone()))
            .filter(optional_fields::Column::IsActive.eq(true))
            .all(db)
            .await?
            .into_iter()
            .map(|f| f.id)
            .collect();

        for id in &field_ids {
            if !known.contains(id) {
                return Err(ApiError::field(
                    "additionally",
                    format!("Unknown or inactive optional field: {id}"),
                ));
            }
        }
    }

    let mut new_job = jobs::ActiveModel {
        title: Set(title),
        category_id: Set(category),
        city_id: Set(city),
        description: Set(description),
        contact_number: Set(contact_number),
        email: Set(email),
        name: Set(name),
        user_id: Set(user_id),
        status: Set(status.unwrap_or(JobStatus::Published)),
        photo_url: Set(photo),
        is_vip: Set(is_vip),
        is_top: Set(is_top),
        ..Default::default()
    };
    new_job.pre_save(true);

    let job = new_job.insert(db).await?;

    if !additionally.is_empty() {
        let values: Vec<job_optional_values::ActiveModel> = additionally
            .into_iter()
            .map(|v| job_optional_values::ActiveModel {
                job_id: Set(job.id),
                optional_field_id: Set(v.optional_field),
                value: Set(v.value),
                image_url: Set(v.image),
                file_url: Set(v.file),
                ..Default::default()
            })
            .collect();

        job_optional_values::Entity::insert_many(values).exec(db).await?;
    }

    let mut responses = to_responses(db, vec![job]).await?;
    responses
        .pop()
        .ok_or_else(|| ApiError::Internal("Failed to load created job".to_string()))
}

/// Resolve job rows to their detail shape with batched `IN` lookups: one
/// query each for categories, cities, countries, users and optional values.
pub async fn to_responses(
    db: &DatabaseConnection,
    models: Vec<jobs::Model>,
) -> Result<Vec<JobResponse>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = models.iter().map(|m| m.category_id).collect();
    let city_ids: Vec<i32> = models.iter().map(|m| m.city_id).collect();
    let user_ids: Vec<i32> = models.iter().map(|m| m.user_id).collect();
    let job_ids: Vec<i32> = models.iter().map(|m| m.id).collect();

    let categories_by_id: HashMap<i32, categories::Model> = categories::Entity::find()
        .filter(categories::Column::Id.is_in(category_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let cities_by_id: HashMap<i32, cities::Model> = cities::Entity::find()
        .filter(cities::Column::Id.is_in(city_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let country_ids: Vec<i32> = cities_by_id.values().map(|c| c.country_id).collect();
    let countries_by_id: HashMap<i32, countries::Model> = countries::Entity::find()
        .filter(countries::Column::Id.is_in(country_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
        .filter(users::Column::Id.is_in(user_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let values: Vec<job_optional_values::Model> = job_optional_values::Entity::find()
        .filter(job_optional_values::Column::JobId.is_in(job_ids))
        .all(db)
        .await?;

    let field_ids: Vec<i32> = values.iter().map(|v| v.optional_field_id).collect();
    let fields_by_id: HashMap<i32, optional_fields::Model> = optional_fields::Entity::find()
        .filter(optional_fields::Column::Id.is_in(field_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|f| (f.id, f))
        .collect();

    let mut values_by_job: HashMap<i32, Vec<OptionalValueResponse>> = HashMap::new();
    for v in values {
        let name = fields_by_id
            .get(&v.optional_field_id)
            .map(|f| f.name.clone())
            .unwrap_or_default();
        values_by_job
            .entry(v.job_id)
            .or_default()
            .push(OptionalValueResponse {
                optional_field: v.optional_field_id,
                name,
                value: v.value,
                image: v.image_url,
                file: v.file_url,
            });
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let category = categories_by_id.get(&m.category_id).map(|c| CategoryBrief {
                id: c.id,
                name: c.name.clone(),
            });
            let city = cities_by_id.get(&m.city_id).map(|c| CityBrief {
                id: c.id,
                name: c.name.clone(),
                country: countries_by_id.get(&c.country_id).map(|n| n.name.clone()),
            });
            let user = users_by_id.get(&m.user_id).cloned().map(UserBrief::from);
            let additionally = values_by_job.remove(&m.id).unwrap_or_default();

            JobResponse {
                id: m.id,
                title: m.title,
                category,
                city,
                description: m.description,
                contact_number: m.contact_number,
                email: m.email,
                name: m.name,
                user,
                status: m.status,
                photo: m.photo_url,
                is_vip: m.is_vip,
                is_top: m.is_top,
                created_at: m.created_at,
                updated_at: m.updated_at,
                additionally,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QueryTrait;

    fn sql(query: Select<jobs::Entity>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn base_query_is_owner_scoped_and_ordered() {
        let filter = JobFilter {
            title: None,
            category: None,
            city: None,
        };
        let rendered = sql(filtered_query(7, &filter).unwrap());
        assert!(rendered.contains("\"user_id\" = 7"));
        assert!(rendered.contains("ORDER BY \"jobs\".\"id\" DESC"));
        assert!(!rendered.contains("LIKE"));
        assert!(!rendered.contains("IN ("));
    }

    #[test]
    fn present_filters_are_all_applied() {
        let filter = JobFilter {
            title: Some("plumber".to_string()),
            category: Some("1,2".to_string()),
            city: Some("3".to_string()),
        };
        let rendered = sql(filtered_query(7, &filter).unwrap());
        assert!(rendered.contains("%plumber%"));
        assert!(rendered.contains("\"category_id\" IN (1, 2)"));
        assert!(rendered.contains("\"city_id\" IN (3)"));
    }

    #[test]
    fn empty_parameters_are_no_ops() {
        let filter = JobFilter {
            title: Some(String::new()),
            category: Some(String::new()),
            city: None,
        };
        let rendered = sql(filtered_query(7, &filter).unwrap());
        assert!(!rendered.contains("LIKE"));
        assert!(!rendered.contains("IN ("));
    }

    #[test]
    fn malformed_city_list_is_a_bad_request() {
        let filter = JobFilter {
            title: None,
            category: None,
            city: Some("1,oops".to_string()),
        };
        assert!(filtered_query(7, &filter).is_err());
    }
}
