//! Stockyard JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockyard_app::{auth::token::TokenSigner, context::AppContext};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod animals;
mod auth;
mod carts;
mod config;
mod extensions;
mod healthcheck;
mod orders;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Stockyard JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let tokens = TokenSigner::new(&config.auth.jwt_secret, config.auth.token_ttl_seconds);

    let app = match AppContext::from_database_url(&config.database.database_url, tokens).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("auth/register").post(auth::register::handler))
        .push(Router::with_path("auth/login").post(auth::login::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("auth/profile").get(auth::profile::handler))
                .push(
                    Router::with_path("animals")
                        .get(animals::index::handler)
                        .post(animals::create::handler)
                        .push(
                            Router::with_path("{animal}")
                                .get(animals::get::handler)
                                .put(animals::update::handler)
                                .delete(animals::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("cart")
                        .get(carts::index::handler)
                        .post(carts::create::handler)
                        .push(
                            Router::with_path("{item}")
                                .put(carts::update::handler)
                                .delete(carts::delete::handler),
                        ),
                )
                .push(Router::with_path("orders/mine").get(orders::mine::handler))
                .push(Router::with_path("orders/{order}/status").put(orders::status::handler))
                .push(Router::with_path("sales/mine").get(orders::sales::handler))
                .push(Router::with_path("checkout").post(orders::checkout::handler)),
        );

    let doc = OpenApi::new("Stockyard API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
