use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_notes_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.warn_if_unconfigured();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;
    let state = web::Data::new(state);

    log::info!("starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
