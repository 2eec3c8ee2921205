//! Single binary web server for the Swiss tournament API.
//! Run with: cargo run --bin web
//! Env: HOST (default 0.0.0.0), PORT (default 8080), TOURNAMENT_DB (SQLite file; in-memory if unset).

use actix_web::{App, HttpServer};
use swiss_tournament::{
    api::{self, AppState},
    MemoryStore, ServerConfig, SqliteStore, TournamentError,
};

fn open_store(config: &ServerConfig) -> Result<AppState, TournamentError> {
    match &config.database {
        Some(path) => {
            log::info!("Using SQLite store at {}", path.display());
            let mut store = SqliteStore::open(path)?;
            store.create_schema()?;
            Ok(api::app_state(store))
        }
        None => {
            log::info!("TOURNAMENT_DB not set, using in-memory store");
            Ok(api::app_state(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let state = open_store(&config).map_err(|e| {
        log::error!("Could not open store: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
