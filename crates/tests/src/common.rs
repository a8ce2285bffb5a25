use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use client::api::{JOBS_PATH, LOGIN_PATH, LOGOUT_PATH, ME_PATH, USERS_PATH};
use client::HttpApi;
use serde_json::{json, Value};
use shared_types::ApiConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

pub const SESSION_COOKIE: &str = "session";

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const MANAGER_EMAIL: &str = "manager@example.com";
pub const MANAGER_PASSWORD: &str = "manager123";
pub const WORKER_EMAIL: &str = "worker@example.com";
pub const WORKER_PASSWORD: &str = "worker123";

struct Account {
    email: String,
    password: String,
    user: Value,
}

#[derive(Default)]
struct Backend {
    accounts: Vec<Account>,
    /// Session token -> index into `accounts`.
    sessions: HashMap<String, usize>,
    next_token: u64,
    calls: Vec<String>,
    users: Vec<Value>,
    jobs: Vec<Value>,
    /// Canned replies keyed by request path, checked before normal handling.
    overrides: HashMap<&'static str, (StatusCode, Value)>,
}

impl Backend {
    fn add_account(&mut self, email: &str, password: &str, user: Value) {
        self.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            user,
        });
    }

    fn session_user(&self, headers: &HeaderMap) -> Option<Value> {
        let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
        let token = cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then_some(value)
        })?;
        let index = self.sessions.get(token)?;
        Some(self.accounts[*index].user.clone())
    }

    /// Record the call and return the canned reply for `path`, if any.
    fn enter(&mut self, method: &str, path: &'static str) -> Option<Response> {
        self.calls.push(format!("{method} {path}"));
        self.overrides
            .get(path)
            .cloned()
            .map(|(status, body)| (status, Json(body)).into_response())
    }
}

/// In-process stand-in for the admin API: cookie sessions, role checks, and
/// a log of every request it saw.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Backend>>,
}

impl MockBackend {
    /// Backend with one admin, one manager and one worker.
    pub fn seeded() -> Self {
        let backend = MockBackend::default();
        {
            let mut state = backend.lock();
            state.add_account(
                ADMIN_EMAIL,
                ADMIN_PASSWORD,
                json!({
                    "id": 1, "first_name": "Admin", "last_name": "User",
                    "email": ADMIN_EMAIL, "role": "admin", "branch_id": null,
                    "created_at": "2024-01-01T09:00:00Z"
                }),
            );
            state.add_account(
                MANAGER_EMAIL,
                MANAGER_PASSWORD,
                json!({
                    "id": 2, "first_name": "Mary", "last_name": "Jones",
                    "email": MANAGER_EMAIL, "role": "manager", "branch_id": 1
                }),
            );
            state.add_account(
                WORKER_EMAIL,
                WORKER_PASSWORD,
                json!({
                    "id": 3, "first_name": "Will", "last_name": "Smith",
                    "email": WORKER_EMAIL, "role": "worker", "branch_id": 2
                }),
            );
        }
        backend
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.inner.lock().unwrap()
    }

    /// Answer every request to `path` with `status` and `body`.
    pub fn reply(&self, path: &'static str, status: StatusCode, body: Value) {
        self.lock().overrides.insert(path, (status, body));
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.ends_with(path))
            .count()
    }

    /// Bodies received by `POST /api/users`, in order.
    pub fn created_users(&self) -> Vec<Value> {
        self.lock().users.clone()
    }

    /// Bodies received by `POST /api/jobs`, in order.
    pub fn created_jobs(&self) -> Vec<Value> {
        self.lock().jobs.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(ME_PATH, get(me))
            .route(LOGIN_PATH, post(login))
            .route(LOGOUT_PATH, post(logout))
            .route(USERS_PATH, post(create_user))
            .route(JOBS_PATH, post(create_job))
            .with_state(self.clone())
    }

    /// Serve on an ephemeral port and return a fresh client pointed at it.
    pub async fn start(&self) -> (String, HttpApi) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let router = self.router();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let api = HttpApi::new(ApiConfig::new(base_url.clone()));
        (base_url, api)
    }
}

/// Seeded backend plus a client for it.
pub async fn test_backend() -> (MockBackend, HttpApi) {
    let backend = MockBackend::seeded();
    let (_, api) = backend.start().await;
    (backend, api)
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_api() -> HttpApi {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    HttpApi::new(ApiConfig::new(format!("http://{addr}")))
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn me(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    let mut state = backend.lock();
    if let Some(reply) = state.enter("GET", ME_PATH) {
        return reply;
    }
    match state.session_user(&headers) {
        Some(user) => Json(json!({ "user": user })).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Not authenticated"),
    }
}

async fn login(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.lock();
    if let Some(reply) = state.enter("POST", LOGIN_PATH) {
        return reply;
    }

    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Email and password are required");
    }

    let Some(index) = state
        .accounts
        .iter()
        .position(|a| a.email == email && a.password == password)
    else {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };

    state.next_token += 1;
    let token = format!("token-{}", state.next_token);
    state.sessions.insert(token.clone(), index);
    let user = state.accounts[index].user.clone();

    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly"),
        )],
        Json(json!({ "user": user })),
    )
        .into_response()
}

async fn logout(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    let mut state = backend.lock();
    if let Some(reply) = state.enter("POST", LOGOUT_PATH) {
        return reply;
    }

    let token = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| value.to_string())
            })
        });
    if let Some(token) = token {
        state.sessions.remove(&token);
    }

    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"),
        )],
        Json(json!({ "message": "Logged out" })),
    )
        .into_response()
}

async fn create_user(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.lock();
    if let Some(reply) = state.enter("POST", USERS_PATH) {
        return reply;
    }

    let Some(caller) = state.session_user(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    };
    if caller["role"] != "admin" {
        return error(StatusCode::FORBIDDEN, "Forbidden");
    }

    let email = body["email"].as_str().unwrap_or_default().to_string();
    if state.accounts.iter().any(|a| a.email == email) {
        return error(StatusCode::BAD_REQUEST, "Email already exists");
    }

    let id = state.accounts.len() + 1;
    let password = body["password_hash"].as_str().unwrap_or_default().to_string();
    let user = json!({
        "id": id,
        "first_name": body["first_name"],
        "last_name": body["last_name"],
        "email": email,
        "role": body["role"],
        "branch_id": body["branch_id"],
    });
    state.add_account(&email, &password, user);
    state.users.push(body);

    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}

async fn create_job(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.lock();
    if let Some(reply) = state.enter("POST", JOBS_PATH) {
        return reply;
    }

    let Some(caller) = state.session_user(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    };
    if caller["role"] != "admin" && caller["role"] != "manager" {
        return error(StatusCode::FORBIDDEN, "Forbidden");
    }

    state.jobs.push(body);
    let id = state.jobs.len();
    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}
