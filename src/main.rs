use anyhow::{Context, Result};
use sougi_core::application::{
    ports::{
        CacheStorePort, ClockPort, PlacesClientPort, RomanizerPort, TextGeneratorPort,
        TokenGeneratorPort,
    },
    services::{ApplicationServices, ServiceSettings},
};
use sougi_core::config::AppConfig;
use sougi_core::domain::region::RegionCatalog;
use sougi_core::infrastructure::{
    cache,
    google::{GeminiClient, GooglePlacesClient},
    logging::init_tracing,
    romanizer::HttpRomanizer,
    time::SystemClock,
    util::UuidTokenGenerator,
};
use sougi_core::presentation::http::{
    routes::build_router_with_options, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store: Arc<CacheStorePort> = cache::connect(config.redis_url())
        .await
        .context("cache store")?;
    let regions = Arc::new(RegionCatalog::builtin().context("region tables")?);

    if config.places_api_key().is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY not set; place endpoints will fail");
    }
    if config.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY not set; description endpoints will fail");
    }

    let places: Arc<PlacesClientPort> = Arc::new(GooglePlacesClient::new(
        config.places_base_url(),
        config.places_api_key().map(str::to_string),
    )?);
    let generator: Arc<TextGeneratorPort> = Arc::new(GeminiClient::new(
        config.gemini_base_url(),
        config.gemini_model(),
        config.gemini_api_key().map(str::to_string),
    )?);
    let romanizer: Option<Arc<RomanizerPort>> = match config.romanizer_url() {
        Some(url) => {
            let client: Arc<RomanizerPort> = Arc::new(HttpRomanizer::new(url)?);
            Some(client)
        }
        None => {
            tracing::info!("ROMANIZER_URL not set; slugs use the region and kana tables only");
            None
        }
    };
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let tokens: Arc<TokenGeneratorPort> = Arc::new(UuidTokenGenerator);

    let services = Arc::new(ApplicationServices::new(
        store,
        places,
        generator,
        romanizer,
        regions,
        clock,
        tokens,
        ServiceSettings {
            cache_ttl: config.cache_ttl(),
            ..ServiceSettings::default()
        },
    ));

    let state = HttpState::new(Arc::clone(&services), config.admin_api_key());
    if config.admin_api_key().is_none() {
        tracing::warn!("ADMIN_API_KEY not set; admin endpoints are disabled");
    }

    let app = build_router_with_options(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // The rate limiter keys on the peer address.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
