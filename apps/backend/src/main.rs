use actix_web::{web, App, HttpServer};
use dalao_backend::config::app::AppConfig;
use dalao_backend::routes;
use dalao_backend::state::app_state::AppState;
use dalao_backend::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let bind_addr = config.bind_addr.clone();

    let data = web::Data::new(AppState::new(config));
    info!(addr = %bind_addr, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
