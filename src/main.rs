use std::sync::Arc;
use actix_web::{web::Data, App, HttpServer};
use actix_cors::Cors;
use order_list_view::api::{self, AppState};
use order_list_view::{HttpOrderSource, OrderSource, ViewerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ViewerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let source = match HttpOrderSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to build orders client: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("═══════════════════════════════════════");
    log::info!(" Starting Order List View...");
    log::info!("═══════════════════════════════════════");
    log::info!("   • Orders endpoint: {}", source.endpoint());
    log::info!("   • Page size:       {}", config.page_size);
    log::info!("   • Scroll mode:     {:?}", config.scroll_mode);
    log::info!("   • Sentinel margin: {}px", config.root_margin_px);
    log::info!("");
    log::info!(" Available endpoints:");
    log::info!("   GET  /          - Order list (infinite scroll)");
    log::info!("   GET  /snapshot  - First page, server rendered");
    log::info!("   GET  /health    - Health check");
    log::info!("   GET  /ws        - View session stream");
    log::info!("═══════════════════════════════════════");
    log::info!("  HTTP server on http://{}", config.address());
    log::info!("═══════════════════════════════════════");

    let address = config.address();
    let source: Arc<dyn OrderSource> = Arc::new(source);
    let state = Data::new(AppState::new(source, config));

    HttpServer::new(move || {

        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(address)?
    .run()
    .await
}
