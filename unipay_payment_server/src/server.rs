use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, web::ServiceConfig, App, HttpServer};
use log::*;
use unipay_tools::UnipayConfig;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{checkout, health, notify, return_get, return_post},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let srv = create_server_instance(config)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig) -> Result<Server, ServerError> {
    check_gateway_config(&config.unipay)?;
    if config.unipay.merchant_id.is_empty() {
        warn!("💻️ No merchant id is configured. The gateway will reject payment requests.");
    }
    let unipay = web::Data::new(config.unipay.clone());
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("upg::access_log"))
            .app_data(unipay.clone())
            .configure(configure_routes)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Registers every route. The caller must provide a `web::Data<UnipayConfig>`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(health).service(checkout).service(notify).service(return_post).service(return_get);
}

/// Application data and routes for a given gateway configuration. Used by the endpoint tests.
pub fn configure_with(config: UnipayConfig) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(config));
        configure_routes(cfg);
    }
}

/// Refuses configurations under which every production callback would be rejected.
fn check_gateway_config(config: &UnipayConfig) -> Result<(), ServerError> {
    if config.mode.is_production() && config.secret.is_empty() {
        return Err(ServerError::ConfigurationError(
            "The gateway is in production mode but UPG_UNIPAY_SECRET is not set".to_string(),
        ));
    }
    Ok(())
}
