//! Single binary web server: page shell from templates/, static from /static, page state via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT (see `ServerConfig`).
//!
//! Every browser session gets its own workspace (one state per page), found through a cookie
//! session. Workspaces idle for longer than SESSION_IDLE_HOURS are dropped.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use chess_arena_web::models::{PointsStep, RecordId};
use chess_arena_web::pages::{Leaderboard, PlayerDraftPatch, ProfileDraftPatch, RegistrationFields};
use chess_arena_web::{PageError, Route, Seed, ServerConfig, Workspace};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use std::time::Instant;
use uuid::Uuid;

/// Identifier stored in the session cookie.
type WorkspaceId = Uuid;

const WORKSPACE_KEY: &str = "workspace_id";

/// Per-session entry: page states + last activity time (for auto-cleanup).
struct WorkspaceEntry {
    workspace: Workspace,
    last_activity: Instant,
}

struct AppContext {
    seed: Seed,
    config: ServerConfig,
    workspaces: RwLock<HashMap<WorkspaceId, WorkspaceEntry>>,
}

type AppState = Data<AppContext>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Which leaderboard a request targets.
#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Board {
    Dashboard,
    Rankings,
}

#[derive(Deserialize)]
struct BoardPath {
    board: Board,
}

#[derive(Deserialize)]
struct BoardPlayerPath {
    board: Board,
    id: RecordId,
}

#[derive(Deserialize)]
struct RecordPath {
    id: RecordId,
}

#[derive(Deserialize)]
struct TabBody {
    tab: String,
}

#[derive(Deserialize)]
struct PointsBody {
    step: PointsStep,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct CompetitionsQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    status: String,
}

#[derive(Deserialize)]
struct SelectionBody {
    tournament: String,
}

#[derive(Deserialize)]
struct GameTypeBody {
    game_type: String,
}

#[derive(Deserialize)]
struct TimeControlBody {
    time_control: String,
}

#[derive(Deserialize)]
struct RatingRangeBody {
    low: u32,
    high: u32,
}

/// Id of this session's workspace, minted on first use.
fn workspace_id(session: &Session) -> Result<WorkspaceId, actix_web::Error> {
    if let Some(id) = session.get::<WorkspaceId>(WORKSPACE_KEY)? {
        return Ok(id);
    }
    let id = Uuid::new_v4();
    session.insert(WORKSPACE_KEY, id)?;
    Ok(id)
}

fn error_response(err: &PageError) -> HttpResponse {
    match err {
        PageError::Validation(violations) => HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": err.to_string(),
            "violations": violations,
        })),
        PageError::RecordNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": err.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() })),
    }
}

/// Run `action` against this session's workspace (creating it if needed) and answer with its result.
fn with_workspace<T, F>(state: &AppState, session: &Session, action: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&mut Workspace) -> Result<T, PageError>,
{
    let id = match workspace_id(session) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Session error: {}", e);
            return HttpResponse::InternalServerError().body("session error");
        }
    };
    let mut g = match state.workspaces.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert_with(|| {
        log::info!("Created workspace {}", id);
        WorkspaceEntry {
            workspace: Workspace::new(&state.seed, state.config.search),
            last_activity: Instant::now(),
        }
    });
    entry.last_activity = Instant::now();
    match action(&mut entry.workspace) {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => error_response(&e),
    }
}

fn board_mut(ws: &mut Workspace, board: Board) -> &mut Leaderboard {
    match board {
        Board::Dashboard => &mut ws.dashboard.leaderboard,
        Board::Rankings => &mut ws.rankings.leaderboard,
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-arena-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

// ---- Dashboard and rankings ----

#[get("/api/dashboard")]
async fn api_dashboard(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.dashboard.view()))
}

#[put("/api/dashboard/tab")]
async fn api_dashboard_tab(state: AppState, session: Session, body: Json<TabBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.dashboard.select_tab(&body.tab)?;
        Ok(ws.dashboard.view())
    })
}

#[get("/api/rankings")]
async fn api_rankings(state: AppState, session: Session, query: Query<SearchQuery>) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.rankings.view(&query.q)))
}

/// Open the inline editor on one player of a board. Mutating board routes answer with the
/// board filtered by `?q=`, so an active search survives the round trip.
#[post("/api/boards/{board}/players/{id}/edit")]
async fn api_board_begin_edit(
    state: AppState,
    session: Session,
    path: Path<BoardPlayerPath>,
    query: Query<SearchQuery>,
) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        let board = board_mut(ws, path.board);
        board.begin_edit(path.id)?;
        Ok(board.view(&query.q))
    })
}

#[put("/api/boards/{board}/edit")]
async fn api_board_update_draft(
    state: AppState,
    session: Session,
    path: Path<BoardPath>,
    body: Json<PlayerDraftPatch>,
) -> HttpResponse {
    let patch = body.into_inner();
    with_workspace(&state, &session, |ws| {
        let board = board_mut(ws, path.board);
        board.update_draft(patch)?;
        Ok(board.edit_session().clone())
    })
}

#[post("/api/boards/{board}/edit/commit")]
async fn api_board_commit(
    state: AppState,
    session: Session,
    path: Path<BoardPath>,
    query: Query<SearchQuery>,
) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        let board = board_mut(ws, path.board);
        board.commit_edit()?;
        Ok(board.view(&query.q))
    })
}

#[post("/api/boards/{board}/edit/cancel")]
async fn api_board_cancel(
    state: AppState,
    session: Session,
    path: Path<BoardPath>,
    query: Query<SearchQuery>,
) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        let board = board_mut(ws, path.board);
        board.cancel_edit();
        Ok(board.view(&query.q))
    })
}

#[post("/api/boards/{board}/players/{id}/points")]
async fn api_board_points(
    state: AppState,
    session: Session,
    path: Path<BoardPlayerPath>,
    query: Query<SearchQuery>,
    body: Json<PointsBody>,
) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        let board = board_mut(ws, path.board);
        board.change_points(path.id, body.step)?;
        Ok(board.view(&query.q))
    })
}

// ---- Competitions ----

#[get("/api/competitions")]
async fn api_competitions(state: AppState, session: Session, query: Query<CompetitionsQuery>) -> HttpResponse {
    with_workspace(&state, &session, |ws| ws.competitions.view(&query.q, &query.status))
}

// ---- Join tournament ----

#[get("/api/join")]
async fn api_join(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.join.view()))
}

#[put("/api/join/selection")]
async fn api_join_select(state: AppState, session: Session, body: Json<SelectionBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.join.select(&body.tournament)?;
        Ok(ws.join.view())
    })
}

#[put("/api/join/fields")]
async fn api_join_fields(state: AppState, session: Session, body: Json<RegistrationFields>) -> HttpResponse {
    let update = body.into_inner();
    with_workspace(&state, &session, |ws| {
        ws.join.set_fields(update)?;
        Ok(ws.join.view())
    })
}

#[post("/api/join/submit")]
async fn api_join_submit(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.join.submit()?;
        Ok(ws.join.view())
    })
}

// ---- Profile ----

#[get("/api/profile")]
async fn api_profile(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.profile.view()))
}

#[put("/api/profile/tab")]
async fn api_profile_tab(state: AppState, session: Session, body: Json<TabBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.profile.select_tab(&body.tab)?;
        Ok(ws.profile.view())
    })
}

#[post("/api/profile/edit")]
async fn api_profile_begin_edit(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.profile.begin_edit();
        Ok(ws.profile.view())
    })
}

#[put("/api/profile/edit")]
async fn api_profile_update_draft(state: AppState, session: Session, body: Json<ProfileDraftPatch>) -> HttpResponse {
    let patch = body.into_inner();
    with_workspace(&state, &session, |ws| {
        ws.profile.update_draft(patch)?;
        Ok(ws.profile.view())
    })
}

#[post("/api/profile/edit/commit")]
async fn api_profile_commit(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.profile.commit_edit()?;
        Ok(ws.profile.view())
    })
}

#[post("/api/profile/edit/cancel")]
async fn api_profile_cancel(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.profile.cancel_edit();
        Ok(ws.profile.view())
    })
}

// ---- Schedule match ----

#[get("/api/schedule")]
async fn api_schedule(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.schedule.view()))
}

#[put("/api/schedule/fields")]
async fn api_schedule_fields(
    state: AppState,
    session: Session,
    body: Json<BTreeMap<String, String>>,
) -> HttpResponse {
    let fields = body.into_inner();
    with_workspace(&state, &session, |ws| {
        ws.schedule.set_fields(fields)?;
        Ok(ws.schedule.view())
    })
}

#[post("/api/schedule/submit")]
async fn api_schedule_submit(state: AppState, session: Session) -> HttpResponse {
    let today = chrono::Local::now().date_naive();
    with_workspace(&state, &session, |ws| {
        ws.schedule.submit(today)?;
        Ok(ws.schedule.view())
    })
}

#[delete("/api/schedule/matches/{id}")]
async fn api_schedule_delete(state: AppState, session: Session, path: Path<RecordPath>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.schedule.delete(path.id)?;
        Ok(ws.schedule.view())
    })
}

// ---- Start playing ----

#[get("/api/play")]
async fn api_play(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| Ok(ws.play.view()))
}

#[put("/api/play/game-type")]
async fn api_play_game_type(state: AppState, session: Session, body: Json<GameTypeBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.select_game_type(&body.game_type)?;
        Ok(ws.play.view())
    })
}

#[put("/api/play/time-control")]
async fn api_play_time_control(state: AppState, session: Session, body: Json<TimeControlBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.select_time_control(&body.time_control)?;
        Ok(ws.play.view())
    })
}

#[put("/api/play/rating-range")]
async fn api_play_rating_range(state: AppState, session: Session, body: Json<RatingRangeBody>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.set_rating_range(body.low, body.high);
        Ok(ws.play.view())
    })
}

#[post("/api/play/search")]
async fn api_play_search(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.start_search()?;
        Ok(ws.play.view())
    })
}

#[post("/api/play/quick-match")]
async fn api_play_quick_match(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.quick_match();
        Ok(ws.play.view())
    })
}

#[post("/api/play/search/cancel")]
async fn api_play_cancel(state: AppState, session: Session) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.cancel_search();
        Ok(ws.play.view())
    })
}

#[post("/api/play/challenge/{id}")]
async fn api_play_challenge(state: AppState, session: Session, path: Path<RecordPath>) -> HttpResponse {
    with_workspace(&state, &session, |ws| {
        ws.play.challenge(path.id)?;
        Ok(ws.play.view())
    })
}

/// Page shell for every known route; not-found page (404) for the rest.
async fn serve_page(req: HttpRequest) -> HttpResponse {
    if req.path().starts_with("/api/") {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such endpoint" }));
    }
    match Route::from_path(req.path()) {
        Route::NotFound => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(include_str!("../../templates/not_found.html")),
        _ => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(include_str!("../../templates/index.html")),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let seed = Seed::load().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppContext {
        seed,
        config: config.clone(),
        workspaces: RwLock::new(HashMap::new()),
    });

    // Background task: drop workspaces idle for longer than the configured limit
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(state_cleanup.config.cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.workspaces.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let idle_limit = state_cleanup.config.session_idle;
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < idle_limit);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} idle workspace(s)", removed);
            }
        }
    });

    // Workspaces do not outlive the process, so neither need the cookies that point at them.
    let key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .service(api_health)
            .service(favicon)
            .service(api_dashboard)
            .service(api_dashboard_tab)
            .service(api_rankings)
            .service(api_board_begin_edit)
            .service(api_board_update_draft)
            .service(api_board_commit)
            .service(api_board_cancel)
            .service(api_board_points)
            .service(api_competitions)
            .service(api_join)
            .service(api_join_select)
            .service(api_join_fields)
            .service(api_join_submit)
            .service(api_profile)
            .service(api_profile_tab)
            .service(api_profile_begin_edit)
            .service(api_profile_update_draft)
            .service(api_profile_commit)
            .service(api_profile_cancel)
            .service(api_schedule)
            .service(api_schedule_fields)
            .service(api_schedule_submit)
            .service(api_schedule_delete)
            .service(api_play)
            .service(api_play_game_type)
            .service(api_play_time_control)
            .service(api_play_rating_range)
            .service(api_play_search)
            .service(api_play_quick_match)
            .service(api_play_cancel)
            .service(api_play_challenge)
            .service(Files::new("/static", "static"))
            .default_service(actix_web::web::to(serve_page))
    })
    .bind(bind)?
    .run()
    .await
}
