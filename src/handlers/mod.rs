pub mod auth;
pub mod categories;
pub mod cities;
pub mod countries;
pub mod jobs;
pub mod reviews;
pub mod teams;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Account routes (register/login/google are public, profile is not) ──
    cfg.service(
        web::resource("/register").route(web::post().to(auth::register)),
    );
    cfg.service(web::resource("/login").route(web::post().to(auth::login)));
    cfg.service(web::resource("/google").route(web::post().to(auth::google)));
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(auth::get_profile))
            .route(web::put().to(auth::update_profile))
            .route(web::delete().to(auth::delete_profile)),
    );

    // ── Category routes ──
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .route(web::post().to(categories::create_category)),
    );
    cfg.service(
        web::resource("/categories/{id}")
            .route(web::get().to(categories::get_category))
            .route(web::put().to(categories::update_category))
            .route(web::delete().to(categories::delete_category)),
    );

    // ── Country routes ──
    cfg.service(
        web::resource("/countries")
            .route(web::get().to(countries::list_countries))
            .route(web::post().to(countries::create_country)),
    );
    cfg.service(
        web::resource("/countries/{id}")
            .route(web::get().to(countries::get_country))
            .route(web::put().to(countries::update_country))
            .route(web::delete().to(countries::delete_country)),
    );

    // ── City routes ──
    cfg.service(
        web::resource("/cities")
            .route(web::get().to(cities::list_cities))
            .route(web::post().to(cities::create_city)),
    );
    cfg.service(
        web::resource("/cities/{id}")
            .route(web::get().to(cities::get_city))
            .route(web::put().to(cities::update_city))
            .route(web::delete().to(cities::delete_city)),
    );

    // ── Job routes (all protected — require valid JWT) ──
    cfg.service(
        web::resource("/jobs")
            .route(web::get().to(jobs::list_jobs))
            .route(web::post().to(jobs::create_job)),
    );

    // ── Review routes (listing/creation scoped to the caller) ──
    cfg.service(
        web::resource("/reviews")
            .route(web::get().to(reviews::list_reviews))
            .route(web::post().to(reviews::create_review)),
    );
    cfg.service(
        web::resource("/reviews/{id}")
            .route(web::get().to(reviews::get_review))
            .route(web::put().to(reviews::update_review))
            .route(web::delete().to(reviews::delete_review)),
    );

    // ── Team role routes ──
    cfg.service(
        web::resource("/team-roles")
            .route(web::get().to(teams::list_team_roles))
            .route(web::post().to(teams::create_team_role)),
    );
    cfg.service(
        web::resource("/team-roles/{id}")
            .route(web::get().to(teams::get_team_role))
            .route(web::put().to(teams::update_team_role))
            .route(web::delete().to(teams::delete_team_role)),
    );

    // ── Team routes ──
    cfg.service(
        web::resource("/teams")
            .route(web::get().to(teams::list_teams))
            .route(web::post().to(teams::create_team)),
    );
    cfg.service(
        web::resource("/teams/{id}")
            .route(web::get().to(teams::get_team))
            .route(web::put().to(teams::update_team))
            .route(web::delete().to(teams::delete_team)),
    );
}
