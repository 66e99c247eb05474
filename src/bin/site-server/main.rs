use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use shawarma_site::catalog;

mod api;
mod config;
mod live;
mod pages;

/// Shared, read-only per-process settings. Everything mutable lives in a request or a stream.
#[derive(Debug, Default)]
pub(crate) struct SiteState {
    asset_base: String,
}

impl SiteState {
    fn new(config: &config::SiteConfig) -> Self {
        Self {
            asset_base: config.asset_base.trim_end_matches('/').to_string(),
        }
    }

    /// Local asset paths get the configured prefix; absolute URLs pass through.
    pub(crate) fn asset(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{url}", self.asset_base)
        } else {
            url.to_string()
        }
    }
}

pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(api::query_error))
        .app_data(web::PathConfig::default().error_handler(api::path_error))
        .service(pages::home)
        .service(pages::menu)
        .service(pages::founder)
        .service(api::menu)
        .service(api::popular)
        .service(api::categories)
        .service(api::outlets)
        .service(api::outlet)
        .service(api::all_reviews)
        .service(api::showcase)
        .service(live::showcase_stream)
        .default_service(web::to(pages::not_found));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::SiteConfig::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let state = web::Data::new(SiteState::new(&config));
    let cors_origin = config.cors_origin.clone();

    tracing::info!(
        "serving {} ({} menu items, {} outlets) on {}:{}",
        catalog::BRAND,
        catalog::MENU_ITEMS.len(),
        catalog::OUTLETS.len(),
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allowed_methods(vec!["GET"])
                    .max_age(3600),
            )
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("fail to bind {}:{}", config.host, config.port))?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_state() -> web::Data<SiteState> {
    web::Data::new(SiteState::default())
}
