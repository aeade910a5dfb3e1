//! # gateway: reqwest implementation of the persistence contract
//!
//! [`HttpGateway`] talks to the Resume Studio REST backend. It decodes the
//! `{success, data}` envelope, maps HTTP failures onto the [`ApiError`]
//! taxonomy and attaches the bearer token from the explicit
//! [`SessionContext`]. A 401 is returned as `ApiError::SessionExpired`; the
//! gateway itself never redirects or tears the session down.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::contract::{
    ApiEnvelope, ApiError, ApiErrorBody, AuthSession, Credentials, NewResume, Registration,
    Resume, ResumeGateway, ResumePatch, Template, User,
};
use crate::session::SessionContext;

pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl HttpGateway {
    /// Builds a gateway bound to one session. The base url is the API root,
    /// e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        let base_url = base_url.into();
        debug!(base_url = %base_url, "gateway constructed");
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// Exchanges credentials for a session. Unauthenticated.
    pub async fn login(
        base_url: &str,
        creds: &Credentials<'_>,
    ) -> Result<SessionContext, ApiError> {
        let http = reqwest::Client::new();
        info!(email = %creds.email, "logging in");
        let resp = http
            .post(format!("{base_url}/auth/login"))
            .json(creds)
            .send()
            .await
            .map_err(transport)?;
        let auth: AuthSession = decode(resp).await?;
        Ok(SessionContext::new(auth))
    }

    /// Creates an account and returns the fresh session. Unauthenticated.
    pub async fn register(
        base_url: &str,
        reg: &Registration<'_>,
    ) -> Result<SessionContext, ApiError> {
        let http = reqwest::Client::new();
        info!(email = %reg.email, "registering account");
        let resp = http
            .post(format!("{base_url}/auth/register"))
            .json(reg)
            .send()
            .await
            .map_err(transport)?;
        let auth: AuthSession = decode(resp).await?;
        Ok(SessionContext::new(auth))
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Explicit teardown; consumes the gateway so no further calls compile.
    pub fn sign_out(self) {
        self.session.teardown();
    }

    /// `GET /auth/me`, the user attached to the current token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(self.session.token())
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(self.session.token())
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let resp = self
            .http
            .put(self.url(path))
            .bearer_auth(self.session.token())
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let resp = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.session.token())
            .send()
            .await
            .map_err(transport)?;
        // The delete payload carries no entity worth keeping.
        decode::<serde_json::Value>(resp).await.map(|_| ())
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Unwraps the `{success, data}` envelope or maps the failure body onto the
/// error taxonomy.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        let envelope: ApiEnvelope<T> = resp.json().await.map_err(transport)?;
        return Ok(envelope.data);
    }

    if status == StatusCode::UNAUTHORIZED {
        warn!("request rejected with 401");
        return Err(ApiError::SessionExpired);
    }

    let (code, message) = match resp.json::<ApiErrorBody>().await {
        Ok(body) => (body.error.code, body.error.message),
        Err(e) => {
            warn!(error = %e, status = %status, "failure body was not the expected envelope");
            (status.to_string(), "request failed".to_string())
        }
    };

    Err(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::Validation(message)
        }
        _ => ApiError::Api { code, message },
    })
}

#[async_trait::async_trait]
impl ResumeGateway for HttpGateway {
    async fn list_resumes(&self) -> Result<Vec<Resume>, ApiError> {
        self.get("/resumes").await
    }

    async fn get_resume(&self, id: i64) -> Result<Resume, ApiError> {
        self.get(&format!("/resumes/{id}")).await
    }

    async fn create_resume<'a>(&self, req: NewResume<'a>) -> Result<Resume, ApiError> {
        info!(title = %req.title, template = %req.template_id, "creating resume");
        self.post("/resumes", &req).await
    }

    async fn update_resume<'a>(
        &self,
        id: i64,
        patch: ResumePatch<'a>,
    ) -> Result<Resume, ApiError> {
        info!(id, "updating resume");
        self.put(&format!("/resumes/{id}"), &patch).await
    }

    async fn delete_resume(&self, id: i64) -> Result<(), ApiError> {
        info!(id, "deleting resume");
        self.delete(&format!("/resumes/{id}")).await
    }

    async fn duplicate_resume<'a>(
        &self,
        id: i64,
        title: Option<&'a str>,
    ) -> Result<Resume, ApiError> {
        info!(id, ?title, "duplicating resume");
        self.post(
            &format!("/resumes/{id}/duplicate"),
            &serde_json::json!({ "title": title }),
        )
        .await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.get("/templates").await
    }

    async fn get_template<'a>(&self, id: &'a str) -> Result<Template, ApiError> {
        self.get(&format!("/templates/{id}")).await
    }
}
