use std::net::SocketAddr;

use cep_server::brasilapi::BrasilApiConfig;
use cep_server::cache::CacheConfig;
use cep_server::lookup::LookupClient;
use cep_server::query::QueryConfig;
use cep_server::viacep::ViaCepConfig;
use cep_server::web::{AppState, create_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "cep_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Session cache for area codes lives as long as the process
    let lookup = LookupClient::live(
        ViaCepConfig::default(),
        BrasilApiConfig::default(),
        &CacheConfig::default(),
    )?;

    let state = AppState::new(lookup, QueryConfig::default());
    let app = create_router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("CEP & DDD lookup listening on http://{addr}");
    tracing::info!("API endpoints:");
    tracing::info!("  GET /health       - Health check");
    tracing::info!("  GET /cep          - Address by postal code (?cep=)");
    tracing::info!("  GET /endereco     - Postal codes by address (?uf=&cidade=&rua=)");
    tracing::info!("  GET /ddd/estado   - Area codes of a state (?uf=)");
    tracing::info!("  GET /ddd/cidade   - Area codes of a city (?uf=&cidade=)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
