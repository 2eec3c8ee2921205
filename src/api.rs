//! REST API over a shared store. JSON in, JSON out (CSV for the standings export).

use std::sync::Mutex;

use actix_web::{
    delete, get, post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

use crate::logic::{
    count_players, delete_matches, delete_players, player_standings, register_player,
    report_match, standings_csv, swiss_pairings,
};
use crate::models::{MatchResult, Player, PlayerId, TournamentError};
use crate::store::TournamentStore;

/// One store for the whole process. The mutex serializes callers.
pub type SharedStore = Mutex<Box<dyn TournamentStore + Send>>;

pub type AppState = Data<SharedStore>;

/// Wrap a store for use as actix app data.
pub fn app_state(store: impl TournamentStore + Send + 'static) -> AppState {
    let store: Box<dyn TournamentStore + Send> = Box::new(store);
    Data::new(Mutex::new(store))
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::NotFound(_) => HttpResponse::NotFound().json(body),
        TournamentError::EmptyPlayerName | TournamentError::SelfMatch(_) => {
            HttpResponse::BadRequest().json(body)
        }
        TournamentError::MatchesStillRecorded => HttpResponse::Conflict().json(body),
        TournamentError::StoreUnavailable(_) => {
            log::error!("{}", e);
            HttpResponse::ServiceUnavailable().json(body)
        }
        TournamentError::Export(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

macro_rules! lock_store {
    ($state:expr) => {
        match $state.lock() {
            Ok(guard) => guard,
            Err(_) => {
                return HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "lock error" }))
            }
        }
    };
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Register a player; responds with the assigned id.
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let mut store = lock_store!(state);
    match register_player(&mut **store, &body.name) {
        Ok(id) => HttpResponse::Created().json(Player::new(id, body.name.trim())),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let store = lock_store!(state);
    match count_players(&**store) {
        Ok(count) => HttpResponse::Ok().json(CountResponse { count }),
        Err(e) => error_response(&e),
    }
}

/// Remove every player (409 while matches are still recorded).
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    let mut store = lock_store!(state);
    match delete_players(&mut **store) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let mut store = lock_store!(state);
    match report_match(&mut **store, body.winner, body.loser) {
        Ok(()) => HttpResponse::Created().json(MatchResult::new(body.winner, body.loser)),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/matches")]
async fn api_delete_matches(state: AppState) -> HttpResponse {
    let mut store = lock_store!(state);
    match delete_matches(&mut **store) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let store = lock_store!(state);
    match player_standings(&**store) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let store = lock_store!(state);
    match player_standings(&**store).and_then(|s| standings_csv(&s)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Next-round pairings. An odd or too-small field yields an empty list, not an error.
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let store = lock_store!(state);
    match swiss_pairings(&**store) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(&e),
    }
}

/// Register every API route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_register_player)
        .service(api_count_players)
        .service(api_delete_players)
        .service(api_report_match)
        .service(api_delete_matches)
        .service(api_standings)
        .service(api_standings_csv)
        .service(api_pairings);
}
