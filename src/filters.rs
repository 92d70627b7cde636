use sea_orm::ColumnTrait;
use sea_orm::ExprTrait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};

use crate::error::ApiError;
use crate::validation::parse_id_list;

/// Escape LIKE metacharacters so user input matches literally.
fn like_escape(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

/// Case-insensitive substring match: `LOWER(column) LIKE '%term%'`.
pub fn contains_ci<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", like_escape(&term.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}

/// Membership filter from a comma-separated id list: `column IN (ids)`.
///
/// `param` names the query parameter in the 400 raised for malformed tokens.
pub fn any_of_ids<C: ColumnTrait>(column: C, param: &str, raw: &str) -> Result<SimpleExpr, ApiError> {
    let ids = parse_id_list(param, raw)?;
    Ok(column.is_in(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    mod listings {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "listings")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub title: String,
            pub category_id: i32,
            pub city_id: i32,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn sql(query: sea_orm::Select<listings::Entity>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn contains_ci_lowercases_both_sides() {
        let rendered = sql(
            listings::Entity::find().filter(contains_ci(listings::Column::Title, "Plumber")),
        );
        assert!(rendered.contains("LOWER"));
        assert!(rendered.contains("%plumber%"));
    }

    #[test]
    fn contains_ci_escapes_like_metacharacters() {
        let rendered = sql(
            listings::Entity::find().filter(contains_ci(listings::Column::Title, "100%_done")),
        );
        assert!(rendered.contains("\\%"));
        assert!(rendered.contains("\\_"));
    }

    #[test]
    fn any_of_ids_builds_membership_filter() {
        let expr = any_of_ids(listings::Column::CityId, "city", "1,2,3").unwrap();
        let rendered = sql(listings::Entity::find().filter(expr));
        assert!(rendered.contains("IN (1, 2, 3)"));
    }

    #[test]
    fn any_of_ids_rejects_malformed_tokens() {
        let err = any_of_ids(listings::Column::CityId, "city", "1,abc").unwrap_err();
        match err {
            ApiError::BadRequest(v) => assert_eq!(v["city"], "Invalid integer value: 'abc'"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn composition_order_does_not_change_the_clauses() {
        let title_first = sql(
            listings::Entity::find()
                .filter(contains_ci(listings::Column::Title, "fix"))
                .filter(any_of_ids(listings::Column::CityId, "city", "1,2").unwrap()),
        );
        let city_first = sql(
            listings::Entity::find()
                .filter(any_of_ids(listings::Column::CityId, "city", "1,2").unwrap())
                .filter(contains_ci(listings::Column::Title, "fix")),
        );
        for clause in ["%fix%", "IN (1, 2)"] {
            assert!(title_first.contains(clause));
            assert!(city_first.contains(clause));
        }
    }
}
