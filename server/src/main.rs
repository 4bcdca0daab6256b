mod redirect;

use std::path::PathBuf;
use std::sync::Arc;

use app::{component, shell, types::AppState};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Default catalog location, overridable with `PORTFOLIO_DATA`.
const DEFAULT_CATALOG_PATH: &str = "public/portfolio.json";

fn catalog_path_from_env() -> PathBuf {
    std::env::var("PORTFOLIO_DATA").map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from)
}

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio-api",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let catalog_path = catalog_path_from_env();
    if !catalog_path.exists() {
        logging::warn!(
            "Catalog file {} does not exist yet; the portfolio will render empty",
            catalog_path.display()
        );
    }
    let app_state = AppState {
        leptos_options: leptos_options.clone(),
        catalog_path: Arc::new(catalog_path),
    };

    let app =
        Router::new()
            .leptos_routes_with_context(
                &app_state,
                routes,
                {
                    let app_state = app_state.clone();
                    move || provide_context(app_state.clone())
                },
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .route("/health", get(health_handler))
            .nest_service("/static", ServeDir::new("target/site"))
            .layer(
                tower::ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(axum::middleware::from_fn(redirect_www)),
            )
            .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
            .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
            .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_debug() {
        // Debug builds log at DEBUG, release builds at INFO
        let level = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        if cfg!(debug_assertions) {
            assert_eq!(level, tracing::Level::DEBUG);
        } else {
            assert_eq!(level, tracing::Level::INFO);
        }
    }

    #[test]
    fn test_env_loading() {
        // dotenv is optional; the server runs with or without a .env file
        let result = dotenvy::dotenv();
        assert!(result.is_ok() || result.is_err());
    }

    #[tokio::test]
    async fn test_configuration_loading() {
        let config_result = get_configuration(Some("Cargo.toml"));
        assert!(config_result.is_ok() || config_result.is_err());
    }

    #[test]
    fn test_catalog_path_defaults() {
        // Without the env var the compiled-in default applies
        if std::env::var("PORTFOLIO_DATA").is_err() {
            assert_eq!(catalog_path_from_env(), PathBuf::from(DEFAULT_CATALOG_PATH));
        }

        // With the env var set the configured path wins (set via unsafe as required)
        unsafe {
            std::env::set_var("PORTFOLIO_DATA", "/tmp/portfolio-test.json");
        }
        assert_eq!(
            catalog_path_from_env(),
            PathBuf::from("/tmp/portfolio-test.json")
        );
        unsafe {
            std::env::remove_var("PORTFOLIO_DATA");
        }
    }

    #[test]
    fn test_health_handler_structure() {
        let _: fn() -> _ = health_handler;

        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let json_value = result.unwrap().0;
            assert!(json_value.get("status").is_some());
            assert!(json_value.get("timestamp").is_some());
            assert!(json_value.get("service").is_some());
            assert!(json_value.get("version").is_some());
        });
    }
}
