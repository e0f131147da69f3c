use actix_web::{App, HttpServer, middleware, web};

use hospital_cms::api::ApiClient;
use hospital_cms::auth::rate_limit::LoginThrottle;
use hospital_cms::config::AppConfig;
use hospital_cms::{handlers, routes, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().expect("Invalid configuration");
    let api = ApiClient::from_config(&config).expect("Failed to build backend client");

    let bind_addr = config.bind_addr.clone();
    let session_key = config.session_key.clone();
    let api = web::Data::new(api);
    let throttle = web::Data::new(LoginThrottle::new());
    let config = web::Data::new(config);

    log::info!("Backend API at {}", config.backend_url);
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(session_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(api.clone())
            .app_data(config.clone())
            .app_data(throttle.clone())
            .configure(routes)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
