//! Axum extractors for session authentication

use axum::extract::{FromRef, FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use solara_store_core::{AuthError, Session};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters carrying the session token
#[derive(Debug, Deserialize)]
struct TokenParams {
    token: Option<String>,
}

/// Validated session extracted from the `token` query parameter
///
/// Protected handlers take this as an argument; requests without a token are
/// rejected with 400 and requests with an unknown token with 401, before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let app_state = AppState::from_ref(state);
            let token = extract_token(parts)?;

            let session = app_state.store.authorize(token.as_deref()).map_err(|err| {
                tracing::debug!(error = ?err, "session validation failed");
                err
            })?;

            Ok(CurrentSession(session))
        })
    }
}

/// Pull the `token` query parameter, if present
fn extract_token(parts: &Parts) -> Result<Option<String>, AuthError> {
    let params = Query::<TokenParams>::try_from_uri(&parts.uri)
        .map_err(|_| AuthError::MissingToken)?;
    Ok(params.0.token)
}
