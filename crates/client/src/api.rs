use reqwest::{RequestBuilder, Response};
use shared_types::{
    ApiConfig, CreateJobRequest, CreateUserRequest, ErrorBody, LoginRequest, RequestError,
    SessionResponse, User,
};

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const USERS_PATH: &str = "/api/users";
pub const JOBS_PATH: &str = "/api/jobs";

pub type ApiResult<T> = Result<T, RequestError>;

/// The remote admin API.
///
/// Futures are not required to be `Send`: in the browser they wrap `fetch`.
#[allow(async_fn_in_trait)]
pub trait Api {
    /// `GET /api/auth/me` returns the user behind the current session.
    async fn current_user(&self) -> ApiResult<User>;
    /// `POST /api/auth/login` starts a session on success.
    async fn login(&self, request: &LoginRequest) -> ApiResult<()>;
    /// `POST /api/auth/logout` ends the current session.
    async fn logout(&self) -> ApiResult<()>;
    /// `POST /api/users`.
    async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<()>;
    /// `POST /api/jobs`.
    async fn create_job(&self, request: &CreateJobRequest) -> ApiResult<()>;
}

/// reqwest-backed [`Api`]. Every request carries the session cookie.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: build_client(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.get(self.config.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.post(self.config.url(path)))
    }
}

impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build cookie-aware HTTP client, falling back to default");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Browser fetches only send the session cookie cross-origin in `include` mode.
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Send a request and split the response into ok / server error / transport
/// error. Non-ok bodies are read for an `error` field.
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| RequestError::transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    Err(RequestError::server(status.as_u16(), message))
}

impl Api for HttpApi {
    #[tracing::instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn current_user(&self) -> ApiResult<User> {
        let response = send(self.get(ME_PATH)).await?;
        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| RequestError::transport(format!("invalid session body: {e}")))?;
        Ok(session.user)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        send(self.post(LOGIN_PATH).json(request)).await.map(|_| ())
    }

    #[tracing::instrument(skip(self))]
    async fn logout(&self) -> ApiResult<()> {
        send(self.post(LOGOUT_PATH)).await.map(|_| ())
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email, role = request.role.as_str()))]
    async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<()> {
        send(self.post(USERS_PATH).json(request)).await.map(|_| ())
    }

    #[tracing::instrument(skip(self, request), fields(title = %request.title))]
    async fn create_job(&self, request: &CreateJobRequest) -> ApiResult<()> {
        send(self.post(JOBS_PATH).json(request)).await.map(|_| ())
    }
}
