// src/handlers/linkedin.rs

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use url::Url;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::linkedin::{CallbackQuery, LinkedInUser, ShareRequest, TokenResponse, UgcPost},
    state::AppState,
};

/// OAuth scope requested on login: identity claims plus posting permission.
const OAUTH_SCOPE: &str = "openid profile email w_member_social";

/// Redirects the browser to the provider's authorization page.
///
/// Every redirect carries a freshly generated CSRF state; the callback
/// must present it back before any token exchange happens.
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let csrf_state = Uuid::new_v4().to_string();
    state.store_oauth_state(&csrf_state);

    let mut auth_url = Url::parse(&format!(
        "{}/oauth/v2/authorization",
        state.config.oauth_base_url
    ))?;

    auth_url
        .query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &state.config.linkedin_client_id)
        .append_pair("redirect_uri", &state.config.linkedin_redirect_uri)
        .append_pair("scope", OAUTH_SCOPE)
        .append_pair("state", &csrf_state);

    tracing::info!("LinkedIn login initiated");

    Ok((StatusCode::FOUND, [(header::LOCATION, auth_url.to_string())]))
}

/// Exchanges the authorization code for an access token and relays it.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackQuery>,
) -> Result<impl IntoResponse, AppError> {
    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::BadRequest("Authorization code is missing.".to_string()))?;

    let csrf_state = params.state.unwrap_or_default();
    if !state.consume_oauth_state(&csrf_state) {
        tracing::warn!("OAuth callback rejected: invalid CSRF state");
        return Err(AppError::BadRequest("Invalid state parameter.".to_string()));
    }

    let token_url = format!("{}/oauth/v2/accessToken", state.config.oauth_base_url);
    let response = state
        .http_client
        .post(&token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", state.config.linkedin_redirect_uri.as_str()),
            ("client_id", state.config.linkedin_client_id.as_str()),
            ("client_secret", state.config.linkedin_client_secret.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Token exchange failed ({}): {}", status, body);
        return Err(AppError::Upstream(
            status,
            "Failed to exchange authorization code.".to_string(),
        ));
    }

    let token: TokenResponse = response.json().await?;

    tracing::info!("LinkedIn token exchange completed");

    Ok(Json(token))
}

/// Publishes the quiz result message to the member's LinkedIn feed.
///
/// The author URN is derived from a live identity lookup with the caller's
/// own bearer token; the service holds no provider credentials of its own.
pub async fn share(
    State(state): State<AppState>,
    Json(payload): Json<ShareRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let (access_token, message) = match (&payload.access_token, &payload.message) {
        (Some(token), Some(message)) if !token.trim().is_empty() && !message.trim().is_empty() => {
            (token, message)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Access token and message are required.".to_string(),
            ));
        }
    };

    let me_url = format!("{}/v2/me", state.config.api_base_url);
    let user_response = state
        .http_client
        .get(&me_url)
        .bearer_auth(access_token)
        .send()
        .await?;

    if !user_response.status().is_success() {
        let status = user_response.status().as_u16();
        let body = user_response.text().await.unwrap_or_default();
        tracing::error!("LinkedIn identity fetch failed ({}): {}", status, body);
        return Err(AppError::Upstream(
            status,
            "Failed to fetch LinkedIn user information.".to_string(),
        ));
    }

    let linkedin_user: LinkedInUser = user_response.json().await.map_err(|_| {
        AppError::InternalServerError("Invalid LinkedIn user information.".to_string())
    })?;

    if linkedin_user.id.is_empty() {
        return Err(AppError::InternalServerError(
            "Invalid LinkedIn user information.".to_string(),
        ));
    }

    let post = UgcPost::text_share(&linkedin_user.id, message);

    let posts_url = format!("{}/v2/ugcPosts", state.config.api_base_url);
    let publish_response = state
        .http_client
        .post(&posts_url)
        .bearer_auth(access_token)
        .json(&post)
        .send()
        .await?;

    if !publish_response.status().is_success() {
        let status = publish_response.status().as_u16();
        let body = publish_response.text().await.unwrap_or_default();
        tracing::error!("LinkedIn share failed ({}): {}", status, body);
        return Err(AppError::Upstream(
            status,
            "Failed to share on LinkedIn.".to_string(),
        ));
    }

    tracing::info!("Shared quiz result on LinkedIn");

    Ok(Json(serde_json::json!({
        "message": "Successfully shared on LinkedIn!",
    })))
}
