//! REST API helpers for the job board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced
//! against a timeout.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to exactly one of: the decoded value, or an
//! [`ApiError`] that the calling view renders. Nothing retries on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Job, JobDraft};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::util::token_store::TokenStore;

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_BASE: &str = "https://job-hunt-backend-production.up.railway.app";

#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Backend origin, overridable at build time with `JOBBOARD_API_BASE`.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("JOBBOARD_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(id: &str) -> String {
    endpoint(&format!("/api/jobs/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Client errors on the login endpoint all mean "bad credentials".
#[cfg(any(test, feature = "hydrate"))]
fn login_failure(err: ApiError) -> ApiError {
    match err {
        ApiError::Server { status: 400..=499, .. } => ApiError::InvalidCredentials,
        other => other,
    }
}

/// Read the stored credential for a session-only call.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when nothing is stored.
pub fn require_token(store: &impl TokenStore) -> Result<String, ApiError> {
    store.get().ok_or(ApiError::MissingToken)
}

#[cfg(feature = "hydrate")]
fn build_failed(err: gloo_net::Error) -> ApiError {
    ApiError::Request(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let response = Box::pin(request.send());
    let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(response, deadline).await {
        Either::Left((Ok(resp), _)) => {
            if resp.ok() {
                return Ok(resp);
            }
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_response(resp.status(), &resp.status_text(), &body))
        }
        Either::Left((Err(e), _)) => {
            leptos::logging::warn!("request failed without response: {e}");
            Err(ApiError::Network)
        }
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] when the backend rejects the
/// login, or a transport error.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&endpoint("/api/auth/login"))
            .json(&LoginRequest { email, password })
            .map_err(build_failed)?;
        let resp = send(request).await.map_err(login_failure)?;
        let body: LoginResponse = decode(resp).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&endpoint("/api/auth/register"))
            .json(&RegisterRequest { name, email, password })
            .map_err(build_failed)?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every posting from `GET /api/jobs/all-jobs`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_all_jobs() -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&endpoint("/api/jobs/all-jobs"))
            .header("Content-Type", "application/json")
            .build()
            .map_err(build_failed)?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one posting from `GET /api/jobs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_job(id: &str) -> Result<Job, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&job_endpoint(id))
            .build()
            .map_err(build_failed)?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's postings from `GET /api/jobs/my-jobs`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_my_jobs(token: &str) -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&endpoint("/api/jobs/my-jobs"))
            .header("Authorization", &bearer(token))
            .build()
            .map_err(build_failed)?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Publish a new posting via `POST /api/jobs/create`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn create_job(token: &str, draft: &JobDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&endpoint("/api/jobs/create"))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(build_failed)?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Unavailable)
    }
}

/// Replace a posting via `PUT /api/jobs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn update_job(token: &str, id: &str, draft: &JobDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::put(&job_endpoint(id))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(build_failed)?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Remove a posting via `DELETE /api/jobs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn delete_job(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::delete(&job_endpoint(id))
            .header("Authorization", &bearer(token))
            .build()
            .map_err(build_failed)?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}
