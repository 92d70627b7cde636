use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use jobboard_backend::auth::google::GoogleVerifier;
use jobboard_backend::auth::middleware::JwtSecret;
use jobboard_backend::create_pool;
use jobboard_backend::error::ApiError;
use jobboard_backend::handlers;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    let db_data = web::Data::new(db);

    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_data = web::Data::new(JwtSecret(jwt_secret));

    let google_client_id = std::env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set");
    let google_data = web::Data::new(GoogleVerifier::new(&google_client_id));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Malformed bodies and query strings get the same envelope shape as
        // every other validation failure.
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
        let query_config = web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwt_data.clone())
            .app_data(google_data.clone())
            .app_data(json_config)
            .app_data(query_config)
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
