//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, ADMIN_USER, ADMIN_PASSWORD, SESSION_SECRET, DEMO_DATA.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, NaiveDate, Utc};
use league_tracker_web::{
    compute_standings, create_match, current_tournament, generate_round_robin, recent_results,
    record_result, reset, seed_demo, set_champion, set_status, League, LeagueError, Match,
    MatchDay, MatchDayId, MatchId, TeamId, TeamStanding, Tournament, TournamentId,
    TournamentStatus,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// In-memory state: the whole league behind one lock. Each request is one
/// bounded read or write under it.
type AppState = Data<RwLock<League>>;

/// Operator credentials, read from env at startup.
struct AdminConfig {
    username: String,
    password: String,
}

/// Session key marking a logged-in operator.
const OPERATOR_SESSION_KEY: &str = "operator";

/// How many recent results the standings page shows.
const RECENT_RESULTS_LIMIT: usize = 5;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct TeamBody {
    name: String,
    #[serde(default)]
    logo_url: Option<String>,
    #[serde(default)]
    captain_name: Option<String>,
}

#[derive(Deserialize)]
struct MatchDayBody {
    day_number: u32,
    name: String,
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct CreateMatchBody {
    match_day_id: MatchDayId,
    team_a_id: TeamId,
    team_b_id: TeamId,
}

#[derive(Deserialize)]
struct WinnerBody {
    winner_id: TeamId,
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

#[derive(Deserialize)]
struct ChampionBody {
    champion_id: TeamId,
}

#[derive(Deserialize)]
struct GenerateFixturesBody {
    #[serde(default = "default_start_day")]
    start_day: u32,
}

fn default_start_day() -> u32 {
    1
}

/// Path segment: entity id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct IdPath {
    id: uuid::Uuid,
}

/// Team reference with its name resolved, for display.
#[derive(Serialize)]
struct TeamRef {
    id: TeamId,
    name: String,
}

#[derive(Serialize)]
struct MatchView {
    id: MatchId,
    match_day: MatchDayId,
    team_a: TeamRef,
    team_b: TeamRef,
    winner: Option<TeamRef>,
    played_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct TournamentView {
    id: TournamentId,
    name: String,
    status: TournamentStatus,
    champion: Option<TeamRef>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct StandingsResponse {
    tournament: TournamentView,
    standings: Vec<TeamStanding>,
    recent_matches: Vec<MatchView>,
}

#[derive(Serialize)]
struct ScheduleDayView {
    match_day: MatchDay,
    matches: Vec<MatchView>,
}

#[derive(Serialize)]
struct ScheduleResponse {
    tournament: TournamentView,
    match_days: Vec<ScheduleDayView>,
}

#[derive(Serialize)]
struct TeamsResponse {
    tournament: TournamentView,
    teams: Vec<TeamStanding>,
}

#[derive(Serialize)]
struct DashboardResponse {
    tournament: TournamentView,
    team_count: usize,
    match_day_count: usize,
    total_matches: usize,
    completed_matches: usize,
}

fn team_ref(league: &League, id: TeamId) -> TeamRef {
    TeamRef {
        id,
        name: league
            .get_team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

fn match_view(league: &League, m: &Match) -> MatchView {
    MatchView {
        id: m.id,
        match_day: m.match_day,
        team_a: team_ref(league, m.team_a),
        team_b: team_ref(league, m.team_b),
        winner: m.winner.map(|w| team_ref(league, w)),
        played_at: m.played_at,
    }
}

fn tournament_view(league: &League, t: &Tournament) -> TournamentView {
    TournamentView {
        id: t.id,
        name: t.name.clone(),
        status: t.status,
        champion: t.champion.map(|c| team_ref(league, c)),
        created_at: t.created_at,
        updated_at: t.updated_at,
    }
}

fn error_response(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

fn operator_logged_in(session: &Session) -> bool {
    session
        .get::<bool>(OPERATOR_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or(false)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Operator login required" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-tracker-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Standings page data: ranked table plus the latest decided results.
/// Recomputed from the current matches on every call.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = current_tournament(&mut g).clone();
    let teams = g.teams_by_name();
    let matches = g.matches_in_order();
    let standings = compute_standings(&teams, &matches);
    let recent_matches = recent_results(&matches, RECENT_RESULTS_LIMIT)
        .iter()
        .map(|m| match_view(&g, m))
        .collect();
    HttpResponse::Ok().json(StandingsResponse {
        tournament: tournament_view(&g, &tournament),
        standings,
        recent_matches,
    })
}

/// Schedule page data: match days in round order with their matches.
#[get("/api/schedule")]
async fn api_schedule(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = current_tournament(&mut g).clone();
    let match_days = g
        .match_days_in_order()
        .into_iter()
        .map(|day| {
            let matches = g
                .matches_for_day(day.id)
                .iter()
                .map(|m| match_view(&g, m))
                .collect();
            ScheduleDayView {
                match_day: day,
                matches,
            }
        })
        .collect();
    HttpResponse::Ok().json(ScheduleResponse {
        tournament: tournament_view(&g, &tournament),
        match_days,
    })
}

/// Teams page data: every team with its derived stats, name order.
#[get("/api/teams")]
async fn api_teams(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = current_tournament(&mut g).clone();
    let teams = g.teams_by_name();
    let matches = g.matches_in_order();
    let mut rows = compute_standings(&teams, &matches);
    rows.sort_by(|a, b| a.team.name.to_lowercase().cmp(&b.team.name.to_lowercase()));
    HttpResponse::Ok().json(TeamsResponse {
        tournament: tournament_view(&g, &tournament),
        teams: rows,
    })
}

/// Log an operator in. Credentials come from ADMIN_USER / ADMIN_PASSWORD.
#[post("/api/login")]
async fn api_login(
    config: Data<AdminConfig>,
    session: Session,
    body: Json<LoginBody>,
) -> HttpResponse {
    if body.username != config.username || body.password != config.password {
        return HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Invalid username or password" }));
    }
    if session.insert(OPERATOR_SESSION_KEY, true).is_err() {
        return HttpResponse::InternalServerError().body("session error");
    }
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

#[post("/api/logout")]
async fn api_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Whether the caller holds an operator session (for the front page).
#[get("/api/session")]
async fn api_session(session: Session) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "operator": operator_logged_in(&session) }))
}

/// Operator summary: counts plus the current tournament.
#[get("/api/dashboard")]
async fn api_dashboard(state: AppState, session: Session) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = current_tournament(&mut g).clone();
    let completed_matches = g.matches.iter().filter(|m| m.is_decided()).count();
    HttpResponse::Ok().json(DashboardResponse {
        tournament: tournament_view(&g, &tournament),
        team_count: g.teams.len(),
        match_day_count: g.match_days.len(),
        total_matches: g.matches.len(),
        completed_matches,
    })
}

#[post("/api/teams")]
async fn api_create_team(state: AppState, session: Session, body: Json<TeamBody>) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.add_team(&body.name, body.logo_url, body.captain_name) {
        Ok(id) => match g.get_team(id) {
            Some(team) => HttpResponse::Ok().json(team),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

#[put("/api/teams/{id}")]
async fn api_update_team(
    state: AppState,
    session: Session,
    path: Path<IdPath>,
    body: Json<TeamBody>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.update_team(path.id, &body.name, body.logo_url, body.captain_name) {
        Ok(()) => match g.get_team(path.id) {
            Some(team) => HttpResponse::Ok().json(team),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

/// Delete a team. Its matches go with it; a champion reference is cleared.
#[delete("/api/teams/{id}")]
async fn api_delete_team(state: AppState, session: Session, path: Path<IdPath>) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_team(path.id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

#[post("/api/match-days")]
async fn api_create_match_day(
    state: AppState,
    session: Session,
    body: Json<MatchDayBody>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_match_day(body.day_number, &body.name, body.date) {
        Ok(id) => match g.get_match_day(id) {
            Some(day) => HttpResponse::Ok().json(day),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

/// Delete a match day and every match scheduled in it.
#[delete("/api/match-days/{id}")]
async fn api_delete_match_day(
    state: AppState,
    session: Session,
    path: Path<IdPath>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_match_day(path.id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

#[post("/api/matches")]
async fn api_create_match(
    state: AppState,
    session: Session,
    body: Json<CreateMatchBody>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_match(&mut g, body.match_day_id, body.team_a_id, body.team_b_id) {
        Ok(id) => match g.get_match(id) {
            Some(m) => HttpResponse::Ok().json(match_view(&g, m)),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

#[delete("/api/matches/{id}")]
async fn api_delete_match(state: AppState, session: Session, path: Path<IdPath>) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_match(path.id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

/// Record a result. The winner must be one of the two teams in the match.
#[put("/api/matches/{id}/winner")]
async fn api_record_result(
    state: AppState,
    session: Session,
    path: Path<IdPath>,
    body: Json<WinnerBody>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match record_result(&mut g, path.id, body.winner_id) {
        Ok(()) => match g.get_match(path.id) {
            Some(m) => HttpResponse::Ok().json(match_view(&g, m)),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

/// Generate a full round-robin schedule starting at the given day number.
#[post("/api/fixtures/generate")]
async fn api_generate_fixtures(
    state: AppState,
    session: Session,
    body: Option<Json<GenerateFixturesBody>>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let start_day = body.map(|b| b.start_day).unwrap_or_else(default_start_day);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match generate_round_robin(&mut g, start_day) {
        Ok(days) => {
            log::info!("Generated {} round-robin match day(s)", days.len());
            HttpResponse::Ok().json(serde_json::json!({ "created_match_days": days.len() }))
        }
        Err(e) => error_response(&e),
    }
}

/// Set the tournament status (upcoming / in_progress / completed).
#[put("/api/tournament/status")]
async fn api_set_status(state: AppState, session: Session, body: Json<StatusBody>) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let current_id = current_tournament(&mut g).id;
    match set_status(&mut g, &body.status) {
        Ok(()) => match g.tournaments.iter().find(|t| t.id == current_id).cloned() {
            Some(t) => HttpResponse::Ok().json(tournament_view(&g, &t)),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

/// Crown a champion; the tournament completes as a side effect.
#[put("/api/tournament/champion")]
async fn api_set_champion(
    state: AppState,
    session: Session,
    body: Json<ChampionBody>,
) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let current_id = current_tournament(&mut g).id;
    match set_champion(&mut g, body.champion_id) {
        Ok(()) => match g.tournaments.iter().find(|t| t.id == current_id).cloned() {
            Some(t) => HttpResponse::Ok().json(tournament_view(&g, &t)),
            None => HttpResponse::InternalServerError().body("state error"),
        },
        Err(e) => error_response(&e),
    }
}

/// Wipe all results and return the tournament to upcoming. The front page
/// asks for confirmation before calling this.
#[post("/api/tournament/reset")]
async fn api_reset(state: AppState, session: Session) -> HttpResponse {
    if !operator_logged_in(&session) {
        return unauthorized();
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    reset(&mut g);
    log::info!("Tournament reset: all results cleared");
    let t = current_tournament(&mut g).clone();
    HttpResponse::Ok().json(tournament_view(&g, &t))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn session_secret() -> Key {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
        Ok(_) => {
            log::warn!("SESSION_SECRET must be at least 64 bytes; using a generated key");
            Key::generate()
        }
        Err(_) => Key::generate(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let admin_username = std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
    let admin_password = match std::env::var("ADMIN_PASSWORD") {
        Ok(p) => p,
        Err(_) => {
            log::warn!("ADMIN_PASSWORD not set; using the default demo password");
            "admin123".to_string()
        }
    };
    let config = Data::new(AdminConfig {
        username: admin_username,
        password: admin_password,
    });

    let mut league = League::new();
    if std::env::var("DEMO_DATA").as_deref() == Ok("1") && seed_demo(&mut league) {
        log::info!("Seeded demo league data");
    }
    let state = Data::new(RwLock::new(league));

    let session_key = session_secret();

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_standings)
            .service(api_schedule)
            .service(api_teams)
            .service(api_login)
            .service(api_logout)
            .service(api_session)
            .service(api_dashboard)
            .service(api_create_team)
            .service(api_update_team)
            .service(api_delete_team)
            .service(api_create_match_day)
            .service(api_delete_match_day)
            .service(api_create_match)
            .service(api_delete_match)
            .service(api_record_result)
            .service(api_generate_fixtures)
            .service(api_set_status)
            .service(api_set_champion)
            .service(api_reset)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
